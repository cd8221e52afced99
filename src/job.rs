//! Single-value asynchronous jobs.
//!
//! A job produces exactly one outcome, a value or a failure, and reports it
//! through a [`Callback`]. Jobs compose the same way observables do: each
//! combinator wraps the upstream job and relays its outcome.
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::{
  error::{panic_message, JobError},
  type_hint::TypeHint,
};

/// Receives the single outcome of a job.
pub trait Callback<T, E> {
  fn on_success(self, value: T);
  fn on_error(self, err: E);
}

/// Callback built from a pair of closures.
#[derive(Clone)]
pub struct FnCallback<S, F> {
  success: S,
  failure: F,
}

/// Build a [`Callback`] from a success and a failure handler.
pub fn callback<T, E, S, F>(success: S, failure: F) -> FnCallback<S, F>
where
  S: FnOnce(T),
  F: FnOnce(E),
{
  FnCallback { success, failure }
}

impl<T, E, S, F> Callback<T, E> for FnCallback<S, F>
where
  S: FnOnce(T),
  F: FnOnce(E),
{
  #[inline]
  fn on_success(self, value: T) { (self.success)(value) }

  #[inline]
  fn on_error(self, err: E) { (self.failure)(err) }
}

pub trait AsyncJob<T, E>: Sized {
  /// Run the job, reporting its outcome to `callback`.
  fn start<C>(self, callback: C)
  where
    C: Callback<T, E>;

  /// Transform the successful value. Failures pass through unchanged.
  #[inline]
  fn map<R, F>(self, f: F) -> MapJob<Self, F, T>
  where
    F: FnOnce(T) -> R,
  {
    MapJob { job: self, func: f, _hint: TypeHint::new() }
  }

  /// Start the job returned by `f` with the successful value. A failure of
  /// either job is reported to the final callback.
  #[inline]
  fn and_then<R, J, F>(self, f: F) -> AndThenJob<Self, F, T>
  where
    F: FnOnce(T) -> J,
    J: AsyncJob<R, E>,
  {
    AndThenJob { job: self, func: f, _hint: TypeHint::new() }
  }
}

// ==================== from_fn ====================

/// A job whose body is a plain function.
///
/// A panic inside the body is caught and reported as
/// [`JobError::Panicked`]; the callback itself is not guarded.
pub fn from_fn<T, E, F>(f: F) -> FnJob<F>
where
  F: FnOnce() -> Result<T, E>,
  E: From<JobError>,
{
  FnJob(f)
}

#[derive(Clone)]
pub struct FnJob<F>(F);

impl<T, E, F> AsyncJob<T, E> for FnJob<F>
where
  F: FnOnce() -> Result<T, E>,
  E: From<JobError>,
{
  fn start<C>(self, callback: C)
  where
    C: Callback<T, E>,
  {
    match catch_unwind(AssertUnwindSafe(self.0)) {
      Ok(Ok(value)) => callback.on_success(value),
      Ok(Err(err)) => callback.on_error(err),
      Err(payload) => callback.on_error(JobError::Panicked(panic_message(&*payload)).into()),
    }
  }
}

// ==================== map ====================

pub struct MapJob<J, F, T> {
  job: J,
  func: F,
  _hint: TypeHint<T>,
}

impl<T, R, E, J, F> AsyncJob<R, E> for MapJob<J, F, T>
where
  J: AsyncJob<T, E>,
  F: FnOnce(T) -> R,
{
  fn start<C>(self, callback: C)
  where
    C: Callback<R, E>,
  {
    self.job.start(MapCallback { callback, func: self.func })
  }
}

pub struct MapCallback<C, F> {
  callback: C,
  func: F,
}

impl<T, R, E, C, F> Callback<T, E> for MapCallback<C, F>
where
  C: Callback<R, E>,
  F: FnOnce(T) -> R,
{
  fn on_success(self, value: T) { self.callback.on_success((self.func)(value)) }

  fn on_error(self, err: E) { self.callback.on_error(err) }
}

// ==================== and_then ====================

pub struct AndThenJob<J, F, T> {
  job: J,
  func: F,
  _hint: TypeHint<T>,
}

impl<T, R, E, J, J2, F> AsyncJob<R, E> for AndThenJob<J, F, T>
where
  J: AsyncJob<T, E>,
  F: FnOnce(T) -> J2,
  J2: AsyncJob<R, E>,
{
  fn start<C>(self, callback: C)
  where
    C: Callback<R, E>,
  {
    self.job.start(AndThenCallback { callback, func: self.func, _hint: TypeHint::<R>::new() })
  }
}

pub struct AndThenCallback<C, F, R> {
  callback: C,
  func: F,
  _hint: TypeHint<R>,
}

impl<T, R, E, C, F, J2> Callback<T, E> for AndThenCallback<C, F, R>
where
  C: Callback<R, E>,
  F: FnOnce(T) -> J2,
  J2: AsyncJob<R, E>,
{
  fn on_success(self, value: T) { (self.func)(value).start(self.callback) }

  fn on_error(self, err: E) { self.callback.on_error(err) }
}
