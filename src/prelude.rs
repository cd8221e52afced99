//! Prelude module for convenient imports

pub use crate::{
  config::SchedulerConfig,
  error::SchedulerError,
  lifecycle::SchedulerSet,
  observable::{self, Observable, ObservableExt},
  observer::{Emitter, Observer},
  ops::complete_status::CompleteStatus,
  scheduler::{Scheduler, SchedulerRef, Schedulers},
};
