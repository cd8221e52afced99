use tracing::warn;

use crate::{
  lifecycle::SchedulerSet,
  observable::{Observable, ObservableExt},
  observer::Observer,
  rc::MutArc,
  scheduler::{SchedulerRef, Task},
};

/// Re-dispatches every event onto `scheduler` before it reaches the
/// downstream observer.
#[derive(Clone)]
pub struct ObserveOnOp<S> {
  source: S,
  scheduler: SchedulerRef,
}

impl<S> ObserveOnOp<S> {
  #[inline]
  pub(crate) fn new(source: S, scheduler: SchedulerRef) -> Self { ObserveOnOp { source, scheduler } }
}

impl<Item, Err, O, S> Observable<Item, Err, O> for ObserveOnOp<S>
where
  O: Observer<Item, Err> + Send + 'static,
  S: Observable<Item, Err, ObserveOnObserver<O>>,
  Item: Send + 'static,
  Err: Send + 'static,
{
  fn actual_subscribe(self, observer: O) {
    let ObserveOnOp { source, scheduler } = self;
    source.actual_subscribe(ObserveOnObserver { observer: MutArc::own(Some(observer)), scheduler })
  }
}

impl<Item, Err, S> ObservableExt<Item, Err> for ObserveOnOp<S>
where
  S: ObservableExt<Item, Err>,
{
  #[inline]
  fn scheduler_set(&self) -> &SchedulerSet { self.source.scheduler_set() }
}

pub struct ObserveOnObserver<O> {
  observer: MutArc<Option<O>>,
  scheduler: SchedulerRef,
}

impl<O> ObserveOnObserver<O> {
  fn dispatch(&self, task: Task) {
    if let Err(err) = self.scheduler.schedule(task) {
      warn!(scheduler = %self.scheduler.name(), %err, "event dropped");
    }
  }
}

impl<Item, Err, O> Observer<Item, Err> for ObserveOnObserver<O>
where
  O: Observer<Item, Err> + Send + 'static,
  Item: Send + 'static,
  Err: Send + 'static,
{
  fn next(&mut self, value: Item) {
    let mut observer = self.observer.clone();
    self.dispatch(Box::new(move || Observer::<Item, Err>::next(&mut observer, value)));
  }

  fn error(self, err: Err) {
    let observer = self.observer.clone();
    self.dispatch(Box::new(move || Observer::<Item, Err>::error(observer, err)));
  }

  fn complete(self) {
    let observer = self.observer.clone();
    self.dispatch(Box::new(move || Observer::<Item, Err>::complete(observer)));
  }
}

#[cfg(test)]
mod test {
  use std::{
    sync::{Arc, Mutex},
    thread,
  };

  use crate::prelude::*;

  fn thread_name() -> String { thread::current().name().unwrap_or_default().to_owned() }

  #[rxlite_macro::test(timeout_ms = 10000)]
  fn switch_thread() {
    let worker = Schedulers::default().new_worker().unwrap();
    let observed = Arc::new(Mutex::new(vec![]));
    let c_observed = observed.clone();

    let (o, status) = observable::from_iter(0..10).observe_on(worker.clone()).complete_status();
    o.subscribe(move |v| c_observed.lock().unwrap().push((v, thread_name())));

    CompleteStatus::wait_for_end(status);
    let observed = observed.lock().unwrap();
    assert_eq!(observed.iter().map(|(v, _)| *v).collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
    assert!(observed.iter().all(|(_, name)| name.starts_with(worker.name())));
    assert!(worker.is_finished());
  }

  #[rxlite_macro::test(timeout_ms = 10000)]
  fn hops_in_declared_order() {
    let schedulers = Schedulers::default();
    let first = schedulers.new_worker().unwrap();
    let second = schedulers.new_worker().unwrap();
    let hops = Arc::new(Mutex::new(vec![]));
    let c_hops = hops.clone();
    let d_hops = hops.clone();

    let (o, status) = observable::of(7)
      .observe_on(first.clone())
      .tap(move |_| c_hops.lock().unwrap().push(thread_name()))
      .observe_on(second.clone())
      .complete_status();
    o.subscribe(move |_| d_hops.lock().unwrap().push(thread_name()));

    CompleteStatus::wait_for_end(status);
    let hops = hops.lock().unwrap();
    assert_eq!(hops.len(), 2);
    assert!(hops[0].starts_with(first.name()));
    assert!(hops[1].starts_with(second.name()));
  }

  #[rxlite_macro::test(timeout_ms = 10000)]
  fn error_delivered_on_scheduler() {
    let worker = Schedulers::default().new_worker().unwrap();
    let error_thread = Arc::new(Mutex::new(None));
    let c_error_thread = error_thread.clone();

    let (o, status) =
      observable::throw_err::<i32, _>("late").observe_on(worker.clone()).complete_status();
    o.subscribe_err(|_| {}, move |e| *c_error_thread.lock().unwrap() = Some((e, thread_name())));

    CompleteStatus::wait_for_end(status.clone());
    assert!(status.error_occur());
    let (err, name) = error_thread.lock().unwrap().clone().unwrap();
    assert_eq!(err, "late");
    assert!(name.starts_with(worker.name()));
    assert!(worker.is_finished());
  }

  #[rxlite_macro::test]
  fn immediate_keeps_delivery_synchronous() {
    let values = Arc::new(Mutex::new(vec![]));
    let c_values = values.clone();
    observable::from_iter(1..4)
      .observe_on(Schedulers::default().immediate())
      .subscribe(move |v| c_values.lock().unwrap().push(v));
    assert_eq!(*values.lock().unwrap(), vec![1, 2, 3]);
  }
}
