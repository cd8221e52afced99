use std::sync::atomic::{AtomicBool, Ordering};

use super::{Scheduler, Task};
use crate::error::SchedulerError;

/// Runs every task inline on the calling thread.
///
/// It owns no resource, so `finish` only records the call; work scheduled
/// afterwards still runs inline.
#[derive(Debug, Default)]
pub struct ImmediateScheduler {
  finished: AtomicBool,
}

impl Scheduler for ImmediateScheduler {
  #[inline]
  fn schedule(&self, task: Task) -> Result<(), SchedulerError> {
    task();
    Ok(())
  }

  fn finish(&self) { self.finished.store(true, Ordering::Release); }

  fn is_finished(&self) -> bool { self.finished.load(Ordering::Acquire) }

  fn name(&self) -> &str { "immediate" }
}

#[cfg(test)]
mod test {
  use std::{
    sync::{Arc, Mutex},
    thread,
  };

  use super::*;

  #[rxlite_macro::test]
  fn runs_inline() {
    let scheduler = ImmediateScheduler::default();
    let ran_on = Arc::new(Mutex::new(None));
    let c_ran_on = ran_on.clone();
    scheduler
      .schedule(Box::new(move || *c_ran_on.lock().unwrap() = Some(thread::current().id())))
      .unwrap();
    assert_eq!(*ran_on.lock().unwrap(), Some(thread::current().id()));
  }

  #[rxlite_macro::test]
  fn finish_is_idempotent() {
    let scheduler = ImmediateScheduler::default();
    assert!(!scheduler.is_finished());
    scheduler.finish();
    scheduler.finish();
    assert!(scheduler.is_finished());
    assert!(scheduler.schedule(Box::new(|| {})).is_ok());
  }
}
