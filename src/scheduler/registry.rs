use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc, Mutex, PoisonError,
};

use tracing::debug;

use super::{ImmediateScheduler, Scheduler, SchedulerRef, WorkerScheduler};
use crate::{config::SchedulerConfig, error::SchedulerError};

/// Factory for the schedulers pipelines are composed with.
///
/// Holds at most one live shared worker. Cloning a `Schedulers` shares that
/// state, so pipelines built from any clone reuse the same shared worker.
#[derive(Clone, Default)]
pub struct Schedulers(Arc<Registry>);

#[derive(Default)]
struct Registry {
  config: SchedulerConfig,
  sequence: AtomicUsize,
  shared: Mutex<Option<Arc<WorkerScheduler>>>,
}

impl Schedulers {
  pub fn new(config: SchedulerConfig) -> Self {
    Schedulers(Arc::new(Registry { config, ..Default::default() }))
  }

  pub fn config(&self) -> &SchedulerConfig { &self.0.config }

  /// A scheduler that runs work inline on the calling thread.
  pub fn immediate(&self) -> SchedulerRef { Arc::new(ImmediateScheduler::default()) }

  /// A brand-new worker on its own thread, never handed out again.
  pub fn new_worker(&self) -> Result<SchedulerRef, SchedulerError> {
    let worker: SchedulerRef = Arc::new(self.spawn(&self.0.config.worker_name_prefix)?);
    Ok(worker)
  }

  /// The reusable worker.
  ///
  /// Returns the held worker while it is live. Once it has been finished the
  /// next call replaces it with a fresh one.
  pub fn shared_worker(&self) -> Result<SchedulerRef, SchedulerError> {
    let mut shared = self.0.shared.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(worker) = shared.as_ref() {
      if !worker.is_finished() {
        let live: SchedulerRef = worker.clone();
        return Ok(live);
      }
      debug!(scheduler = %worker.name(), "replacing finished shared worker");
    }
    let worker = Arc::new(self.spawn(&self.0.config.shared_worker_name_prefix)?);
    *shared = Some(worker.clone());
    let fresh: SchedulerRef = worker;
    Ok(fresh)
  }

  fn spawn(&self, prefix: &str) -> Result<WorkerScheduler, SchedulerError> {
    let seq = self.0.sequence.fetch_add(1, Ordering::Relaxed);
    WorkerScheduler::new(format!("{prefix}-{seq}"))
  }
}
