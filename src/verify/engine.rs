//! The sequential verification loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::{Duration, Instant};

use log::{debug, info};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use super::check::check_record;
use super::store::{Progress, ResultStore, StoreSnapshot};
use crate::app::log_record;
use crate::config::{BaseDomains, Config};
use crate::error_handling::RunError;
use crate::fetch::Fetcher;
use crate::mapping::{parse_mappings, MappingRecord, MappingStatus};

/// Called after each checked record has been published to the store.
pub type RecordCallback = Option<Arc<dyn Fn(&MappingRecord, Progress) + Send + Sync>>;

/// Counts for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    /// Number of records checked
    pub total: usize,
    pub success: usize,
    pub mismatch: usize,
    pub error: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl RunSummary {
    fn from_snapshot(snapshot: &StoreSnapshot, elapsed: Duration) -> Self {
        Self {
            total: snapshot.records.len(),
            success: snapshot.count(MappingStatus::Success),
            mismatch: snapshot.count(MappingStatus::Mismatch),
            error: snapshot.count(MappingStatus::Error),
            elapsed_seconds: elapsed.as_secs_f64(),
        }
    }

    /// True when every checked record redirected correctly.
    pub fn all_successful(&self) -> bool {
        self.success == self.total
    }
}

/// Clears the running flag when a run ends, however it ends.
struct RunGuard<'a>(&'a AtomicBool);

impl<'a> RunGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, RunError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| RunGuard(flag))
            .map_err(|_| RunError::AlreadyRunning)
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Verification session: raw input, base domains, and the result store they
/// produce.
///
/// Records are checked one at a time, in input order, with a pacing delay in
/// between. Each result is published to the store as soon as it is known.
///
/// # Example
///
/// ```no_run
/// use redirect_verifier::{BaseDomains, Config, HttpFetcher, VerificationEngine};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     domains: BaseDomains::new(Some("https://old.example"), Some("https://new.example")),
///     ..Default::default()
/// };
/// let engine = VerificationEngine::new(HttpFetcher::new(&config)?, &config);
/// engine.set_input("/about, /company/about\n/blog -> /news");
/// let summary = engine.run().await?;
/// println!("{} of {} redirect correctly", summary.success, summary.total);
/// # Ok(())
/// # }
/// ```
pub struct VerificationEngine<F: Fetcher> {
    fetcher: F,
    store: ResultStore,
    input: RwLock<String>,
    domains: RwLock<BaseDomains>,
    pacing_delay: Duration,
    running: AtomicBool,
    cancel: Mutex<CancellationToken>,
    on_record: RecordCallback,
}

impl<F: Fetcher> VerificationEngine<F> {
    pub fn new(fetcher: F, config: &Config) -> Self {
        Self {
            fetcher,
            store: ResultStore::new(),
            input: RwLock::new(String::new()),
            domains: RwLock::new(config.domains.clone()),
            pacing_delay: config.pacing_delay(),
            running: AtomicBool::new(false),
            cancel: Mutex::new(CancellationToken::new()),
            on_record: None,
        }
    }

    pub fn with_record_callback(
        mut self,
        callback: Arc<dyn Fn(&MappingRecord, Progress) + Send + Sync>,
    ) -> Self {
        self.on_record = Some(callback);
        self
    }

    /// Replaces the raw mapping text. Existing records are kept until the
    /// next `parse` or `reset`.
    pub fn set_input(&self, text: impl Into<String>) {
        *self.input.write().unwrap_or_else(PoisonError::into_inner) = text.into();
    }

    pub fn input(&self) -> String {
        self.input
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Sets both base domains. Takes effect at the start of the next run.
    pub fn set_domains(&self, domains: BaseDomains) {
        *self.domains.write().unwrap_or_else(PoisonError::into_inner) = domains;
    }

    pub fn set_source_domain(&self, domain: Option<&str>) {
        let mut domains = self.domains();
        domains.source = BaseDomains::new(domain, None).source;
        self.set_domains(domains);
    }

    pub fn set_target_domain(&self, domain: Option<&str>) {
        let mut domains = self.domains();
        domains.target = BaseDomains::new(None, domain).target;
        self.set_domains(domains);
    }

    pub fn domains(&self) -> BaseDomains {
        self.domains
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Read handle on the result store, for display and export.
    pub fn store(&self) -> ResultStore {
        self.store.clone()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.store.snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Parses the current input into fresh pending records, discarding any
    /// previous results.
    ///
    /// # Errors
    ///
    /// Returns `RunError::AlreadyRunning` while a run owns the store.
    pub fn parse(&self) -> Result<usize, RunError> {
        let _guard = RunGuard::acquire(&self.running)?;
        let _session = self.lock_session();
        Ok(self.parse_into_store())
    }

    fn parse_into_store(&self) -> usize {
        let records = parse_mappings(&self.input());
        let count = records.len();
        debug!("Parsed {} mapping(s)", count);
        self.store.replace(records);
        count
    }

    /// Discards records, input, progress and base domains, and stops a run in
    /// progress at its next suspension point.
    ///
    /// Holds the session lock throughout, so a run starting concurrently sees
    /// either the whole session or none of it.
    pub fn reset(&self) {
        let mut cancel = self.lock_session();
        cancel.cancel();
        *cancel = CancellationToken::new();
        self.set_input(String::new());
        self.set_domains(BaseDomains::default());
        self.store.clear();
        drop(cancel);
        info!("Session reset");
    }

    // The cancellation slot doubles as the session lock: `reset` and the
    // setup phase of `run` and `parse` hold it.
    fn lock_session(&self) -> MutexGuard<'_, CancellationToken> {
        self.cancel.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Checks every record, in order.
    ///
    /// Parses the input first when the store is empty; if that still yields
    /// nothing the call is a no-op and no request is made. All records are put
    /// back to `pending` and the base domains are read once, so a rerun after
    /// a configuration change resolves everything again.
    ///
    /// # Errors
    ///
    /// - `RunError::AlreadyRunning` if another run is active
    /// - `RunError::Cancelled` if `reset` was called during the run
    pub async fn run(&self) -> Result<RunSummary, RunError> {
        let _guard = RunGuard::acquire(&self.running)?;
        let start = Instant::now();

        let (cancel, domains, total) = {
            let session = self.lock_session();
            if self.store.is_empty() && self.parse_into_store() == 0 {
                debug!("Nothing to verify");
                return Ok(RunSummary::default());
            }
            (session.clone(), self.domains(), self.store.reset_for_run())
        };
        info!("Verifying {} redirect mapping(s)", total);

        for index in 0..total {
            if cancel.is_cancelled() {
                return Err(RunError::Cancelled {
                    checked: index,
                    total,
                });
            }
            self.store.set_progress(index + 1, total);

            let Some(mut record) = self.store.record(index) else {
                return Err(RunError::Cancelled {
                    checked: index,
                    total,
                });
            };

            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    return Err(RunError::Cancelled { checked: index, total });
                }
                _ = check_record(&self.fetcher, &mut record, &domains) => {}
            }

            let progress = Progress {
                current: index + 1,
                total,
            };
            log_record(&record, progress);
            if !self.store.publish(index, record.clone()) {
                return Err(RunError::Cancelled {
                    checked: index,
                    total,
                });
            }
            if let Some(callback) = &self.on_record {
                callback(&record, progress);
            }

            if index + 1 < total && !self.pacing_delay.is_zero() {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        return Err(RunError::Cancelled { checked: index + 1, total });
                    }
                    _ = tokio::time::sleep(self.pacing_delay) => {}
                }
            }
        }

        Ok(RunSummary::from_snapshot(
            &self.store.snapshot(),
            start.elapsed(),
        ))
    }
}
