// Shared test helpers: a scripted fetcher and config builders.
//
// The stub answers from a table keyed by requested URL and records every call,
// so engine tests run without a network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use redirect_verifier::{
    BaseDomains, Config, FetchError, FetchErrorKind, FetchOutcome, Fetcher, LogFormat, LogLevel,
};

/// Fetcher that replays scripted answers.
#[allow(dead_code)] // Not every test file drives the engine
#[derive(Clone, Default)]
pub struct StubFetcher {
    answers: Arc<Mutex<HashMap<String, Result<FetchOutcome, FetchError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
    delay: Duration,
}

#[allow(dead_code)] // Not every test file uses every helper
impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every fetch waits `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// `url` lands on `final_url`.
    pub fn lands(self, url: &str, final_url: &str) -> Self {
        self.answers.lock().unwrap().insert(
            url.to_string(),
            Ok(FetchOutcome {
                final_url: final_url.to_string(),
                status: Some(200),
                chain: vec![url.to_string(), final_url.to_string()],
            }),
        );
        self
    }

    /// `url` fails with `kind`.
    pub fn fails(self, url: &str, kind: FetchErrorKind) -> Self {
        self.answers
            .lock()
            .unwrap()
            .insert(url.to_string(), Err(FetchError::new(kind, "scripted failure")));
        self
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutcome, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let answer = self.answers.lock().unwrap().get(url).cloned();
        answer.unwrap_or_else(|| Err(FetchError::new(FetchErrorKind::Connect, "no answer scripted")))
    }
}

/// Config with the given base domains and no pacing.
#[allow(dead_code)]
pub fn test_config(source: Option<&str>, target: Option<&str>) -> Config {
    Config {
        domains: BaseDomains::new(source, target),
        pacing_delay_ms: 0,
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        user_agent: "redirect_verifier_test/1.0".to_string(),
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        ..Default::default()
    }
}
