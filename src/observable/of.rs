use std::convert::Infallible;

use crate::{
  lifecycle::SchedulerSet,
  observable::{Observable, ObservableExt},
  observer::Observer,
};

/// Creates an observable producing a single value.
///
/// Completes immediately after emitting the value given. Never emits an error.
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::of(123).subscribe(|v| println!("{},", v));
/// ```
pub fn of<Item>(v: Item) -> Of<Item> { Of { value: v, schedulers: SchedulerSet::default() } }

#[derive(Clone)]
pub struct Of<Item> {
  value: Item,
  schedulers: SchedulerSet,
}

impl<Item, O> Observable<Item, Infallible, O> for Of<Item>
where
  O: Observer<Item, Infallible>,
{
  fn actual_subscribe(self, mut observer: O) {
    observer.next(self.value);
    observer.complete();
  }
}

impl<Item> ObservableExt<Item, Infallible> for Of<Item> {
  #[inline]
  fn scheduler_set(&self) -> &SchedulerSet { &self.schedulers }
}
