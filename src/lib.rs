//! # rxlite: a minimal Reactive Extensions engine
//!
//! An [`Observable`] is a chain of stages ending in a source emitter. Values
//! flow to an [`Observer`] through `next`, followed by exactly one terminal
//! `complete` or `error`. Scheduling stages move work onto
//! [`Scheduler`]s, and every scheduler a pipeline touched is finished when the
//! pipeline's terminal event is delivered.
//!
//! ## Quick Start
//!
//! ```rust
//! use rxlite::prelude::*;
//!
//! observable::from_iter(0..10)
//!   .map(|v| v * 2)
//!   .subscribe(|v| println!("Value: {}", v));
//! ```
//!
//! ## Switching threads
//!
//! ```rust
//! use rxlite::prelude::*;
//!
//! let schedulers = Schedulers::default();
//! let (pipeline, status) = observable::from_iter(vec!["a", "b"])
//!   .subscribe_on(schedulers.new_worker().unwrap())
//!   .observe_on(schedulers.shared_worker().unwrap())
//!   .complete_status();
//! pipeline.subscribe(|v| println!("{v}"));
//! CompleteStatus::wait_for_end(status);
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ObservableExt`] | Operators and terminal subscription |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` events |
//! | [`Scheduler`] | Execution context finished exactly once |
//! | [`Schedulers`] | Factory for immediate, fresh and shared workers |
//! | [`job::AsyncJob`] | Single-value job with a success/error callback |
//!
//! [`Observable`]: observable::Observable
//! [`ObservableExt`]: observable::ObservableExt
//! [`Observer`]: observer::Observer
//! [`Scheduler`]: scheduler::Scheduler
//! [`Schedulers`]: scheduler::Schedulers
#[cfg(test)]
#[macro_use]
extern crate bencher;

pub mod config;
pub mod error;
pub mod job;
pub mod lifecycle;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod rc;
pub mod scheduler;
pub mod type_hint;

pub use prelude::*;
