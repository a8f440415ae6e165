//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `redirect_verifier` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading the mapping list from a file or stdin
//! - Writing the results file and the exit code
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;

use redirect_verifier::config::Opt;
use redirect_verifier::export::{default_export_filename, write_export_file};
use redirect_verifier::initialization::init_logger_with;
use redirect_verifier::{
    evaluate_exit_code, print_summary, read_mappings, should_export, Config, HttpFetcher,
    VerificationEngine, EXIT_FAILURE,
};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(opt, config).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("redirect_verifier error: {:#}", e);
            process::exit(EXIT_FAILURE);
        }
    }
}

async fn run(opt: Opt, config: Config) -> Result<i32> {
    config
        .validate()
        .context("Configuration validation failed")?;

    let input = read_mappings(&opt.file).await?;
    let fetcher = HttpFetcher::new(&config).context("Failed to initialize HTTP client")?;
    let engine = Arc::new(VerificationEngine::new(fetcher, &config));
    engine.set_input(input);

    // Ctrl-C resets the session, which stops the run at its next suspension point
    let interrupt = {
        let engine = Arc::clone(&engine);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, stopping");
                engine.reset();
            }
        })
    };

    let result = engine.run().await;
    interrupt.abort();

    let summary = match &result {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("{e}");
            return Ok(evaluate_exit_code(&result, opt.fail_on_mismatch));
        }
    };

    if !should_export(summary) {
        println!("No mappings found in {}", opt.file.display());
        return Ok(evaluate_exit_code(&result, opt.fail_on_mismatch));
    }

    let records = engine.store().records();
    print_summary(summary, &records);

    let output = opt.output.clone().unwrap_or_else(|| {
        PathBuf::from(default_export_filename(
            opt.format,
            chrono::Local::now().date_naive(),
        ))
    });
    let exported = write_export_file(&output, opt.format, &records, &engine.domains())?;
    println!("Results for {} mapping(s) saved in {}", exported, output.display());

    Ok(evaluate_exit_code(&result, opt.fail_on_mismatch))
}
