use crate::{
  lifecycle::SchedulerSet,
  observable::{Observable, ObservableExt},
  observer::{Emitter, Observer},
  type_hint::TypeHint,
};

/// Creates an observable from an emitter function.
///
/// The function receives an [`Emitter`] each time the observable is
/// subscribed and is responsible for sending the events. It runs on the
/// subscribing thread, or on the scheduler of a downstream `subscribe_on`.
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::create(|emitter: &mut dyn Emitter<i32, ()>| {
///   emitter.next(1);
///   emitter.next(2);
///   emitter.complete();
/// })
/// .subscribe(|v| println!("{}", v));
/// ```
pub fn create<F, Item, Err>(f: F) -> Create<F, Item, Err>
where
  F: FnOnce(&mut dyn Emitter<Item, Err>),
{
  Create { f, schedulers: SchedulerSet::default(), _hint: TypeHint::new() }
}

/// Observable created from a function.
pub struct Create<F, Item, Err> {
  f: F,
  schedulers: SchedulerSet,
  _hint: TypeHint<(Item, Err)>,
}

impl<F: Clone, Item, Err> Clone for Create<F, Item, Err> {
  fn clone(&self) -> Self {
    Create { f: self.f.clone(), schedulers: self.schedulers.clone(), _hint: TypeHint::new() }
  }
}

/// Wrapper to implement Emitter for Option<O>
struct CreateEmitter<O>(Option<O>);

impl<O, Item, Err> Emitter<Item, Err> for CreateEmitter<O>
where
  O: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, value: Item) {
    if let Some(observer) = &mut self.0 {
      observer.next(value);
    }
  }

  #[inline]
  fn error(&mut self, err: Err) {
    if let Some(observer) = self.0.take() {
      observer.error(err);
    }
  }

  #[inline]
  fn complete(&mut self) {
    if let Some(observer) = self.0.take() {
      observer.complete();
    }
  }
}

impl<F, Item, Err, O> Observable<Item, Err, O> for Create<F, Item, Err>
where
  O: Observer<Item, Err>,
  F: FnOnce(&mut dyn Emitter<Item, Err>),
{
  fn actual_subscribe(self, observer: O) {
    let mut emitter = CreateEmitter(Some(observer));
    (self.f)(&mut emitter);
  }
}

impl<F, Item, Err> ObservableExt<Item, Err> for Create<F, Item, Err> {
  #[inline]
  fn scheduler_set(&self) -> &SchedulerSet { &self.schedulers }
}
