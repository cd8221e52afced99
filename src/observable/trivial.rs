use std::convert::Infallible;

use crate::{
  lifecycle::SchedulerSet,
  observable::{Observable, ObservableExt},
  observer::Observer,
  type_hint::TypeHint,
};

/// Creates an observable that emits no items, just terminates with an error.
pub fn throw_err<Item, Err>(err: Err) -> ThrowErr<Item, Err> {
  ThrowErr { err, schedulers: SchedulerSet::default(), _hint: TypeHint::new() }
}

pub struct ThrowErr<Item, Err> {
  err: Err,
  schedulers: SchedulerSet,
  _hint: TypeHint<Item>,
}

impl<Item, Err: Clone> Clone for ThrowErr<Item, Err> {
  fn clone(&self) -> Self {
    ThrowErr { err: self.err.clone(), schedulers: self.schedulers.clone(), _hint: TypeHint::new() }
  }
}

impl<Item, Err, O> Observable<Item, Err, O> for ThrowErr<Item, Err>
where
  O: Observer<Item, Err>,
{
  fn actual_subscribe(self, observer: O) { observer.error(self.err); }
}

impl<Item, Err> ObservableExt<Item, Err> for ThrowErr<Item, Err> {
  #[inline]
  fn scheduler_set(&self) -> &SchedulerSet { &self.schedulers }
}

/// Creates an observable that produces no values.
///
/// Completes immediately. Never emits an error.
pub fn empty<Item>() -> Empty<Item> {
  Empty { schedulers: SchedulerSet::default(), _hint: TypeHint::new() }
}

pub struct Empty<Item> {
  schedulers: SchedulerSet,
  _hint: TypeHint<Item>,
}

impl<Item> Clone for Empty<Item> {
  fn clone(&self) -> Self { Empty { schedulers: self.schedulers.clone(), _hint: TypeHint::new() } }
}

impl<Item, O> Observable<Item, Infallible, O> for Empty<Item>
where
  O: Observer<Item, Infallible>,
{
  fn actual_subscribe(self, observer: O) { observer.complete(); }
}

impl<Item> ObservableExt<Item, Infallible> for Empty<Item> {
  #[inline]
  fn scheduler_set(&self) -> &SchedulerSet { &self.schedulers }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[rxlite_macro::test]
  fn throw_only_errors() {
    let mut values = 0;
    let mut completed = false;
    let mut error = None;
    observable::throw_err::<i32, _>("boom").subscribe_all(
      |_| values += 1,
      |e| error = Some(e),
      || completed = true,
    );
    assert_eq!(values, 0);
    assert!(!completed);
    assert_eq!(error, Some("boom"));
  }

  #[rxlite_macro::test]
  fn empty_only_completes() {
    let mut values = 0;
    let mut completed = false;
    observable::empty::<i32>().subscribe_all(|_| values += 1, |_| {}, || completed = true);
    assert_eq!(values, 0);
    assert!(completed);
  }
}
