//! Fetching: request a source URL, follow its redirects, report where it landed.
//!
//! The engine only depends on the [`Fetcher`] trait. [`HttpFetcher`] is the
//! production implementation on top of `reqwest`.

mod redirects;
mod request;

use std::future::Future;
use std::sync::Arc;

pub use redirects::resolve_redirect_chain;

use crate::config::Config;
use crate::error_handling::{FetchError, InitializationError};
use crate::initialization::init_redirect_client;

/// What a successful fetch observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// URL of the last response in the chain
    pub final_url: String,
    /// Status code of the last response, if the fetcher knows it
    pub status: Option<u16>,
    /// Every URL requested, starting with the source URL
    pub chain: Vec<String>,
}

impl FetchOutcome {
    /// An outcome that only knows the landed URL.
    pub fn landed(final_url: impl Into<String>) -> Self {
        Self {
            final_url: final_url.into(),
            status: None,
            chain: Vec::new(),
        }
    }
}

/// Performs a GET that follows redirects and reports the landed URL.
///
/// A failure only affects the record being checked; the engine turns it into
/// an `error` status and moves on.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchOutcome, FetchError>> + Send;
}

/// `Fetcher` backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
    max_hops: usize,
}

impl HttpFetcher {
    /// Builds a fetcher from the run configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let client = init_redirect_client(config)?;
        Ok(Self::with_client(client, config.max_redirects))
    }

    pub fn with_client(client: Arc<reqwest::Client>, max_hops: usize) -> Self {
        Self { client, max_hops }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutcome, FetchError> {
        resolve_redirect_chain(url, self.max_hops, &self.client).await
    }
}
