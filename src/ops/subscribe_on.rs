use tracing::warn;

use crate::{
  lifecycle::SchedulerSet,
  observable::{Observable, ObservableExt},
  observer::Observer,
  scheduler::{SchedulerRef, Task},
};

/// Runs the subscription of its source as a task on `scheduler`.
///
/// With nested `subscribe_on` stages the one closest to the source decides
/// where the source emitter itself runs.
#[derive(Clone)]
pub struct SubscribeOnOp<S> {
  source: S,
  scheduler: SchedulerRef,
}

impl<S> SubscribeOnOp<S> {
  #[inline]
  pub(crate) fn new(source: S, scheduler: SchedulerRef) -> Self { SubscribeOnOp { source, scheduler } }
}

impl<Item, Err, O, S> Observable<Item, Err, O> for SubscribeOnOp<S>
where
  O: Observer<Item, Err> + Send + 'static,
  S: Observable<Item, Err, O> + Send + 'static,
{
  fn actual_subscribe(self, observer: O) {
    let SubscribeOnOp { source, scheduler } = self;
    let task: Task = Box::new(move || source.actual_subscribe(observer));
    if let Err(err) = scheduler.schedule(task) {
      warn!(scheduler = %scheduler.name(), %err, "source subscription dropped");
    }
  }
}

impl<Item, Err, S> ObservableExt<Item, Err> for SubscribeOnOp<S>
where
  S: ObservableExt<Item, Err>,
{
  #[inline]
  fn scheduler_set(&self) -> &SchedulerSet { self.source.scheduler_set() }
}
