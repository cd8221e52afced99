use std::{
  pin::Pin,
  sync::{
    atomic::{AtomicI8, Ordering},
    Arc,
  },
  task::{Context, Poll},
};

use futures::{executor::block_on, task::AtomicWaker, Future};

use crate::{
  lifecycle::SchedulerSet,
  observable::{Observable, ObservableExt},
  observer::Observer,
};

/// Records whether a terminal event has passed a point of the pipeline.
///
/// Schedulers are finished by the outermost relay before the status is
/// updated. When `complete_status` is the last stage of the pipeline, every
/// scheduler reports `is_finished` once `wait_for_end` returns. With an
/// `observe_on` after it, the status only records that the terminal event
/// was handed to that scheduler, not that it was delivered.
#[derive(Default)]
pub struct CompleteStatus {
  flag: AtomicI8,
  waker: AtomicWaker,
}

pub struct StatusOp<S> {
  source: S,
  status: Arc<CompleteStatus>,
}

impl<S> StatusOp<S> {
  pub(crate) fn new(source: S) -> (Self, Arc<CompleteStatus>) {
    let status = Arc::new(CompleteStatus::default());
    (StatusOp { source, status: status.clone() }, status)
  }
}

impl<S, Item, Err, O> Observable<Item, Err, O> for StatusOp<S>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, StatusObserver<O>>,
{
  fn actual_subscribe(self, observer: O) {
    let StatusOp { source, status } = self;
    source.actual_subscribe(StatusObserver { observer, status })
  }
}

impl<S, Item, Err> ObservableExt<Item, Err> for StatusOp<S>
where
  S: ObservableExt<Item, Err>,
{
  #[inline]
  fn scheduler_set(&self) -> &SchedulerSet { self.source.scheduler_set() }
}

pub struct StatusObserver<O> {
  observer: O,
  status: Arc<CompleteStatus>,
}

impl<Item, Err, O> Observer<Item, Err> for StatusObserver<O>
where
  O: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, value: Item) { self.observer.next(value) }

  fn error(self, err: Err) {
    self.observer.error(err);
    self.status.flag.store(-1, Ordering::Release);
    self.status.waker.wake();
  }

  fn complete(self) {
    self.observer.complete();
    self.status.flag.store(1, Ordering::Release);
    self.status.waker.wake();
  }
}

impl CompleteStatus {
  /// return true if the observable completed or emit an error.
  pub fn is_closed(&self) -> bool { self.flag.load(Ordering::Acquire) != 0 }

  /// return true if the observable completed.
  pub fn is_completed(&self) -> bool { self.flag.load(Ordering::Acquire) > 0 }

  /// return true if the observable emit an error.
  pub fn error_occur(&self) -> bool { self.flag.load(Ordering::Acquire) < 0 }

  /// Wait until the observable complete or an error occur.
  pub fn wait_for_end(this: Arc<Self>) { block_on(StatusFuture(this)); }
}

struct StatusFuture(Arc<CompleteStatus>);

impl Future for StatusFuture {
  type Output = ();

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    // Register before checking so a wake between the two is not lost.
    self.0.waker.register(cx.waker());
    if self.0.is_closed() {
      Poll::Ready(())
    } else {
      Poll::Pending
    }
  }
}

#[cfg(test)]
mod test {
  use std::{thread, time::Duration};

  use crate::prelude::*;

  #[rxlite_macro::test]
  fn synchronous_completion() {
    let (o, status) = observable::of(1).complete_status();
    assert!(!status.is_closed());
    o.subscribe(|_| {});
    assert!(status.is_completed());
    assert!(!status.error_occur());
  }

  #[rxlite_macro::test]
  fn synchronous_error() {
    let (o, status) = observable::throw_err::<(), _>(()).complete_status();
    o.subscribe(|_| {});
    assert!(status.is_closed());
    assert!(status.error_occur());
  }

  #[rxlite_macro::test(timeout_ms = 10000)]
  fn wait_for_end_blocks_until_terminal() {
    let (o, status) = observable::create(|emitter: &mut dyn Emitter<(), ()>| {
      thread::sleep(Duration::from_millis(20));
      emitter.complete();
    })
    .complete_status();
    let handle = thread::spawn(move || o.subscribe(|_| {}));
    CompleteStatus::wait_for_end(status.clone());
    assert!(status.is_completed());
    handle.join().unwrap();
  }
}
