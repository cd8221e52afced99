use std::convert::Infallible;

use crate::{
  lifecycle::SchedulerSet,
  observable::{Observable, ObservableExt},
  observer::Observer,
};

/// Creates an observable that produces values from an iterator.
///
/// Emits every element in iteration order, then completes. Never emits an
/// error. Each subscription of a clone iterates its own copy of `iter`.
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::from_iter(vec![0, 1, 2, 3])
///   .subscribe(|v| println!("{},", v));
/// ```
pub fn from_iter<Iter>(iter: Iter) -> FromIter<Iter>
where
  Iter: IntoIterator,
{
  FromIter { iter, schedulers: SchedulerSet::default() }
}

#[derive(Clone)]
pub struct FromIter<Iter> {
  iter: Iter,
  schedulers: SchedulerSet,
}

impl<O, Iter> Observable<Iter::Item, Infallible, O> for FromIter<Iter>
where
  Iter: IntoIterator,
  O: Observer<Iter::Item, Infallible>,
{
  fn actual_subscribe(self, mut observer: O) {
    self.iter.into_iter().for_each(|v| observer.next(v));
    observer.complete();
  }
}

impl<Iter> ObservableExt<Iter::Item, Infallible> for FromIter<Iter>
where
  Iter: IntoIterator,
{
  #[inline]
  fn scheduler_set(&self) -> &SchedulerSet { &self.schedulers }
}
