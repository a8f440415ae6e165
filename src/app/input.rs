//! Reading the mapping list.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use tokio::io::{AsyncRead, AsyncReadExt};

/// True for the `-` path, which stands for stdin.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Reads the raw mapping text from `path`, or from stdin for `-`.
///
/// # Errors
///
/// Returns an error naming the file if it cannot be read or is not UTF-8.
pub async fn read_mappings(path: &Path) -> Result<String> {
    if is_stdin(path) {
        info!("Reading mappings from stdin");
        return read_mappings_from(tokio::io::stdin())
            .await
            .context("Failed to read mappings from stdin");
    }
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read mapping file: {}", path.display()))
}

/// Reads the raw mapping text from any async reader.
pub async fn read_mappings_from<R: AsyncRead + Unpin>(mut reader: R) -> Result<String> {
    let mut input = String::new();
    reader.read_to_string(&mut input).await?;
    Ok(input)
}
