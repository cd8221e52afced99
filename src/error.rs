//! Error types.
//!
//! The pipeline itself is generic over its error type and never inspects it;
//! these are the failures raised by the scheduling layer and the job helpers.
use std::any::Any;

use thiserror::Error;

/// Failure raised by a [`Scheduler`](crate::scheduler::Scheduler).
#[derive(Debug, Error)]
pub enum SchedulerError {
  /// Work was handed to a scheduler after `finish` completed. The work has
  /// been dropped.
  #[error("scheduler `{name}` is finished and no longer accepts work")]
  Finished { name: String },

  /// The background worker thread could not be started.
  #[error("failed to spawn worker thread for scheduler `{name}`")]
  Spawn {
    name: String,
    #[source]
    source: std::io::Error,
  },
}

/// Failure reported through a job's `on_error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobError {
  /// The job body panicked; the payload message is kept when it is a string.
  #[error("job panicked: {0}")]
  Panicked(String),

  #[error("network request failed: {0}")]
  Network(String),

  #[error("storage operation failed: {0}")]
  Storage(String),
}

/// The message of a caught panic, when its payload is a string.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
  if let Some(msg) = payload.downcast_ref::<&str>() {
    (*msg).to_owned()
  } else if let Some(msg) = payload.downcast_ref::<String>() {
    msg.clone()
  } else {
    "non-string panic payload".to_owned()
  }
}
