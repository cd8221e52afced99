use std::{
  panic::AssertUnwindSafe,
  sync::{
    atomic::{AtomicBool, Ordering},
    Mutex, PoisonError,
  },
};

use futures::{executor::ThreadPool, future, FutureExt};
use tracing::{debug, error};

use super::{Scheduler, Task};
use crate::error::{panic_message, SchedulerError};

/// A scheduler backed by one dedicated background thread.
///
/// Tasks run in submission order. `finish` releases the thread: tasks that
/// were already accepted still drain, then the thread exits. Tasks scheduled
/// after `finish` are refused.
///
/// A panicking task is logged and discarded; the thread keeps draining the
/// queue behind it.
pub struct WorkerScheduler {
  name: String,
  pool: Mutex<Option<ThreadPool>>,
  finished: AtomicBool,
}

impl WorkerScheduler {
  /// Spawn a worker whose thread name starts with `name`.
  pub fn new(name: impl Into<String>) -> Result<Self, SchedulerError> {
    let name = name.into();
    let pool = ThreadPool::builder()
      .pool_size(1)
      .name_prefix(format!("{name}-"))
      .create()
      .map_err(|source| SchedulerError::Spawn { name: name.clone(), source })?;
    debug!(scheduler = %name, "worker started");
    Ok(WorkerScheduler { name, pool: Mutex::new(Some(pool)), finished: AtomicBool::new(false) })
  }
}

impl Scheduler for WorkerScheduler {
  fn schedule(&self, task: Task) -> Result<(), SchedulerError> {
    let pool = self.pool.lock().unwrap_or_else(PoisonError::into_inner);
    match pool.as_ref() {
      Some(pool) => {
        let name = self.name.clone();
        let guarded = AssertUnwindSafe(future::lazy(move |_| task())).catch_unwind().map(move |res| {
          if let Err(payload) = res {
            error!(scheduler = %name, panic = %panic_message(&*payload), "task panicked");
          }
        });
        pool.spawn_ok(guarded);
        Ok(())
      }
      None => Err(SchedulerError::Finished { name: self.name.clone() }),
    }
  }

  fn finish(&self) {
    let mut slot = self.pool.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(pool) = slot.take() {
      self.finished.store(true, Ordering::Release);
      drop(slot);
      // Queued tasks hold pool handles; the thread exits once they have run.
      drop(pool);
      debug!(scheduler = %self.name, "worker finished");
    }
  }

  fn is_finished(&self) -> bool { self.finished.load(Ordering::Acquire) }

  fn name(&self) -> &str { &self.name }
}

impl std::fmt::Debug for WorkerScheduler {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WorkerScheduler")
      .field("name", &self.name)
      .field("is_finished", &self.is_finished())
      .finish()
  }
}
