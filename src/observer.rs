//! Observer trait and implementations
//!
//! The Observer trait defines the consumer of data in the reactive pattern.
//! It provides three methods: next (for values), error (for errors), and
//! complete (for stream completion).

// ============================================================================
// Observer Trait
// ============================================================================

/// Observer trait: The consumer of data in reactive programming
///
/// An Observer receives values, errors, and completion notifications from
/// an Observable. `next` may be called any number of times, strictly before
/// exactly one of `error` or `complete`.
pub trait Observer<Item, Err> {
  /// Receive the next value from the observable
  fn next(&mut self, value: Item);

  /// Handle an error from the observable
  ///
  /// This consumes the observer, as no more values can be emitted after an
  /// error
  fn error(self, err: Err);

  /// Handle completion of the observable
  ///
  /// This consumes the observer, as no more values can be emitted after
  /// completion
  fn complete(self);
}

// ============================================================================
// Emitter Trait
// ============================================================================

/// A trait for emitting items to an Observer via mutable reference.
///
/// This is what a [`create`](crate::observable::create) emitter receives.
/// Taking `&mut self` for the terminal methods lets the emitter be passed as
/// `&mut dyn Emitter`, so the emitter function never sees the concrete type of
/// the downstream observer chain. Events sent after a terminal event are
/// ignored.
pub trait Emitter<Item, Err> {
  fn next(&mut self, value: Item);
  fn error(&mut self, err: Err);
  fn complete(&mut self);
}

// ============================================================================
// Closure adapters
// ============================================================================

/// Closure observer built by `subscribe`.
///
/// The closure becomes the `next` handler; errors and completion are
/// absorbed by empty handlers.
#[derive(Clone)]
pub struct FnMutObserver<F>(pub F);

impl<F, Item, Err> Observer<Item, Err> for FnMutObserver<F>
where
  F: FnMut(Item),
{
  #[inline]
  fn next(&mut self, v: Item) { (self.0)(v); }

  #[inline]
  fn error(self, _err: Err) {}

  #[inline]
  fn complete(self) {}
}

/// Closure observer built by `subscribe_err`; completion is ignored.
#[derive(Clone)]
pub struct ObserverErr<N, E> {
  next: N,
  error: E,
}

impl<N, E> ObserverErr<N, E> {
  #[inline(always)]
  pub fn new(next: N, error: E) -> Self { ObserverErr { next, error } }
}

impl<Item, Err, N, E> Observer<Item, Err> for ObserverErr<N, E>
where
  N: FnMut(Item),
  E: FnOnce(Err),
{
  #[inline(always)]
  fn next(&mut self, value: Item) { (self.next)(value); }

  #[inline(always)]
  fn error(self, err: Err) { (self.error)(err); }

  #[inline(always)]
  fn complete(self) {}
}

/// Closure observer built by `subscribe_all`.
#[derive(Clone)]
pub struct ObserverAll<N, E, C> {
  next: N,
  error: E,
  complete: C,
}

impl<N, E, C> ObserverAll<N, E, C> {
  #[inline(always)]
  pub fn new(next: N, error: E, complete: C) -> Self { ObserverAll { next, error, complete } }
}

impl<Item, Err, N, E, C> Observer<Item, Err> for ObserverAll<N, E, C>
where
  N: FnMut(Item),
  E: FnOnce(Err),
  C: FnOnce(),
{
  #[inline(always)]
  fn next(&mut self, value: Item) { (self.next)(value); }

  #[inline(always)]
  fn error(self, err: Err) { (self.error)(err); }

  #[inline(always)]
  fn complete(self) { (self.complete)(); }
}

// ============================================================================
// Option observer
// ============================================================================

/// Option observer - None ignores all events, Some delegates to inner
impl<O, Item, Err> Observer<Item, Err> for Option<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if let Some(inner) = self {
      inner.next(value);
    }
  }

  fn error(self, err: Err) {
    if let Some(inner) = self {
      inner.error(err);
    }
  }

  fn complete(self) {
    if let Some(inner) = self {
      inner.complete();
    }
  }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod test {
  use super::*;

  struct TestObserver {
    values: Vec<i32>,
  }

  impl Observer<i32, ()> for TestObserver {
    fn next(&mut self, value: i32) { self.values.push(value); }

    fn error(self, _: ()) {}

    fn complete(self) {}
  }

  #[rxlite_macro::test]
  fn observer_trait() {
    let mut obs = TestObserver { values: vec![] };
    obs.next(1);
    obs.next(2);
    assert_eq!(obs.values, vec![1, 2]);
  }

  #[rxlite_macro::test]
  fn closure_as_observer() {
    let mut count = 0;
    let mut closure_obs = FnMutObserver(|v: i32| count += v);

    Observer::<_, ()>::next(&mut closure_obs, 10);
    Observer::<_, ()>::next(&mut closure_obs, 20);
    Observer::<i32, ()>::error(closure_obs, ());
    assert_eq!(count, 30);
  }

  #[rxlite_macro::test]
  fn all_handlers_fire() {
    let mut nexts = vec![];
    let mut completed = false;
    let mut obs = ObserverAll::new(|v: i32| nexts.push(v), |_: &str| {}, || completed = true);
    obs.next(1);
    obs.complete();
    assert_eq!(nexts, vec![1]);
    assert!(completed);
  }

  #[rxlite_macro::test]
  fn none_ignores_events() {
    let mut obs: Option<TestObserver> = None;
    obs.next(1);
    obs.complete();
  }
}
