//! Execution contexts.
//!
//! A [`Scheduler`] runs units of work and is shut down exactly once through
//! [`Scheduler::finish`]. Pipelines hold schedulers by reference
//! ([`SchedulerRef`]) and finish every scheduler they touched when their
//! terminal event is delivered.
use std::sync::Arc;

use crate::error::SchedulerError;

mod immediate;
mod registry;
mod worker;

pub use immediate::ImmediateScheduler;
pub use registry::Schedulers;
pub use worker::WorkerScheduler;

/// A unit of work handed to a scheduler.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Shared handle to a scheduler. Every stage composed with the same scheduler
/// holds a clone of the same handle.
pub type SchedulerRef = Arc<dyn Scheduler>;

/// A Scheduler is an object to order tasks and run them on its execution
/// context.
pub trait Scheduler: Send + Sync {
  /// Hand `task` to the execution context.
  ///
  /// Work accepted before `finish` completes is guaranteed to run. After
  /// `finish` the scheduler may refuse the task with
  /// [`SchedulerError::Finished`]; the task is dropped in that case.
  fn schedule(&self, task: Task) -> Result<(), SchedulerError>;

  /// Release the execution context. Idempotent and safe to call from the
  /// scheduler's own worker thread.
  fn finish(&self);

  /// Whether `finish` has completed.
  fn is_finished(&self) -> bool;

  /// Name used in logs and worker thread names.
  fn name(&self) -> &str;
}

/// Two handles refer to the same scheduler instance.
#[inline]
pub fn same_scheduler(a: &SchedulerRef, b: &SchedulerRef) -> bool {
  std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
