//! Observable traits and sources.
//!
//! A pipeline is a chain of plain structs: a source (`create`, `from_iter`,
//! ...) wrapped by operator stages (`map`, `subscribe_on`, `observe_on`, ...).
//! Building a stage consumes the previous one and returns a new value; the
//! only state shared along the chain is the [`SchedulerSet`].
//!
//! Subscribing runs the chain: each stage wraps the downstream observer in
//! its own relay and subscribes its source with it, until the source emitter
//! runs (or a `subscribe_on` stage defers it onto a scheduler).
use std::sync::Arc;

use crate::{
  lifecycle::{LifecycleObserver, SchedulerSet},
  observer::{FnMutObserver, Observer, ObserverAll, ObserverErr},
  ops::{
    complete_status::{CompleteStatus, StatusOp},
    map::MapOp,
    observe_on::ObserveOnOp,
    subscribe_on::SubscribeOnOp,
    tap::TapOp,
  },
  scheduler::SchedulerRef,
};

mod create;
mod from_iter;
mod of;
mod trivial;

pub use create::{create, Create};
pub use from_iter::{from_iter, from_iter as just, FromIter};
pub use of::{of, Of};
pub use trivial::{empty, throw_err, Empty, ThrowErr};

/// Raw subscription wiring of one stage.
///
/// `actual_subscribe` connects `observer` to this stage and runs the chain
/// upstream of it. It does no scheduler bookkeeping; callers use the
/// terminal methods of [`ObservableExt`] instead.
pub trait Observable<Item, Err, O> {
  fn actual_subscribe(self, observer: O);
}

/// Combinators and terminal subscription for every pipeline stage.
pub trait ObservableExt<Item, Err>: Sized {
  /// The scheduler set shared by this stage and everything it derives from.
  fn scheduler_set(&self) -> &SchedulerSet;

  /// Creates a new stream which calls a closure on each element and uses
  /// its return as the value.
  ///
  /// A panic inside `f` is not turned into an `error` event; it unwinds the
  /// thread that is running the stage.
  #[inline]
  fn map<B, F>(self, f: F) -> MapOp<Self, F, Item>
  where
    F: FnMut(Item) -> B,
  {
    MapOp::new(self, f)
  }

  /// Invoke `f` with a reference to every value before passing it on.
  #[inline]
  fn tap<F>(self, f: F) -> TapOp<Self, F>
  where
    F: FnMut(&Item),
  {
    TapOp::new(self, f)
  }

  /// Run the source emission (everything upstream of this stage) on
  /// `scheduler` instead of the subscribing thread.
  fn subscribe_on(self, scheduler: SchedulerRef) -> SubscribeOnOp<Self> {
    self.scheduler_set().register(&scheduler);
    SubscribeOnOp::new(self, scheduler)
  }

  /// Deliver every event to the stages downstream of this one on
  /// `scheduler`, one scheduled task per event.
  fn observe_on(self, scheduler: SchedulerRef) -> ObserveOnOp<Self> {
    self.scheduler_set().register(&scheduler);
    ObserveOnOp::new(self, scheduler)
  }

  /// Attach a [`CompleteStatus`] that records when the terminal event passes
  /// this stage.
  fn complete_status(self) -> (StatusOp<Self>, Arc<CompleteStatus>) { StatusOp::new(self) }

  /// Subscribe `observer` and run the pipeline.
  ///
  /// Returns once the outermost emitter call returns, which is before any
  /// event is delivered if a scheduling stage deferred the work. After the
  /// terminal event reaches `observer`, every scheduler registered in this
  /// pipeline is finished.
  fn start<O>(self, observer: O)
  where
    O: Observer<Item, Err>,
    Self: Observable<Item, Err, LifecycleObserver<O>>,
  {
    let schedulers = self.scheduler_set().clone();
    self.actual_subscribe(LifecycleObserver::new(observer, schedulers));
  }

  /// Subscribe with a `next` handler; errors and completion are absorbed.
  #[inline]
  fn subscribe<N>(self, next: N)
  where
    N: FnMut(Item),
    Self: Observable<Item, Err, LifecycleObserver<FnMutObserver<N>>>,
  {
    self.start(FnMutObserver(next))
  }

  /// Subscribe with `next` and `error` handlers; completion is ignored.
  #[inline]
  fn subscribe_err<N, E>(self, next: N, error: E)
  where
    N: FnMut(Item),
    E: FnOnce(Err),
    Self: Observable<Item, Err, LifecycleObserver<ObserverErr<N, E>>>,
  {
    self.start(ObserverErr::new(next, error))
  }

  /// Subscribe with a handler for each of the three events.
  #[inline]
  fn subscribe_all<N, E, C>(self, next: N, error: E, complete: C)
  where
    N: FnMut(Item),
    E: FnOnce(Err),
    C: FnOnce(),
    Self: Observable<Item, Err, LifecycleObserver<ObserverAll<N, E, C>>>,
  {
    self.start(ObserverAll::new(next, error, complete))
  }
}
