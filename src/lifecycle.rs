//! Scheduler lifecycle tracking.
//!
//! Every `subscribe_on`/`observe_on` stage registers its scheduler into the
//! pipeline's [`SchedulerSet`]. The terminal subscribe wraps the caller's
//! observer in a [`LifecycleObserver`], which finishes every registered
//! scheduler once the terminal event has been forwarded.
use std::sync::{Arc, Mutex, PoisonError};

use smallvec::SmallVec;
use tracing::trace;

use crate::{
  observer::Observer,
  scheduler::{same_scheduler, SchedulerRef},
};

type Entries = SmallVec<[SchedulerRef; 2]>;

/// The schedulers referenced anywhere in one pipeline's ancestry.
///
/// Clones share one collection: every stage derived from a source holds the
/// same set, which grows as scheduling stages are composed. A scheduler is
/// recorded once no matter how many stages use it.
#[derive(Clone, Default)]
pub struct SchedulerSet(Arc<Mutex<Entries>>);

impl SchedulerSet {
  /// Record `scheduler`; a no-op if this instance is already present.
  pub fn register(&self, scheduler: &SchedulerRef) {
    let mut entries = self.lock();
    if !entries.iter().any(|s| same_scheduler(s, scheduler)) {
      entries.push(scheduler.clone());
    }
  }

  pub fn len(&self) -> usize { self.lock().len() }

  pub fn is_empty(&self) -> bool { self.lock().is_empty() }

  pub fn contains(&self, scheduler: &SchedulerRef) -> bool {
    self.lock().iter().any(|s| same_scheduler(s, scheduler))
  }

  /// The registered schedulers, in registration order.
  pub fn snapshot(&self) -> Vec<SchedulerRef> { self.lock().iter().cloned().collect() }

  /// Finish every registered scheduler.
  ///
  /// The set itself is left intact; `finish` is idempotent, so finishing a
  /// scheduler that an earlier subscription already finished is harmless.
  pub fn finish_all(&self) {
    // Finish outside the lock.
    for scheduler in self.snapshot() {
      trace!(scheduler = %scheduler.name(), "finishing scheduler at terminal event");
      scheduler.finish();
    }
  }

  fn lock(&self) -> std::sync::MutexGuard<'_, Entries> {
    self.0.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl std::fmt::Debug for SchedulerSet {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_list().entries(self.snapshot().iter().map(|s| s.name().to_owned())).finish()
  }
}

/// Outermost relay of a subscription.
///
/// Forwards every event unchanged; after forwarding the terminal event it
/// finishes the pipeline's schedulers. `next` never triggers cleanup.
pub struct LifecycleObserver<O> {
  observer: O,
  schedulers: SchedulerSet,
}

impl<O> LifecycleObserver<O> {
  pub fn new(observer: O, schedulers: SchedulerSet) -> Self {
    LifecycleObserver { observer, schedulers }
  }
}

impl<Item, Err, O> Observer<Item, Err> for LifecycleObserver<O>
where
  O: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, value: Item) { self.observer.next(value); }

  fn error(self, err: Err) {
    self.observer.error(err);
    self.schedulers.finish_all();
  }

  fn complete(self) {
    self.observer.complete();
    self.schedulers.finish_all();
  }
}

#[cfg(test)]
mod test {
  use std::sync::atomic::{AtomicUsize, Ordering};

  use super::*;
  use crate::{
    error::SchedulerError,
    observer::FnMutObserver,
    scheduler::{ImmediateScheduler, Scheduler, Task},
  };

  #[derive(Default)]
  struct CountingScheduler {
    finishes: AtomicUsize,
  }

  impl Scheduler for CountingScheduler {
    fn schedule(&self, task: Task) -> Result<(), SchedulerError> {
      task();
      Ok(())
    }

    fn finish(&self) { self.finishes.fetch_add(1, Ordering::SeqCst); }

    fn is_finished(&self) -> bool { self.finishes.load(Ordering::SeqCst) > 0 }

    fn name(&self) -> &str { "counting" }
  }

  #[rxlite_macro::test]
  fn register_dedups_by_identity() {
    let set = SchedulerSet::default();
    let a: SchedulerRef = Arc::new(ImmediateScheduler::default());
    let b: SchedulerRef = Arc::new(ImmediateScheduler::default());
    set.register(&a);
    set.register(&a.clone());
    set.register(&b);
    assert_eq!(set.len(), 2);
    assert!(set.contains(&a));
    assert!(set.clone().contains(&b));
  }

  #[rxlite_macro::test]
  fn clones_share_registrations() {
    let set = SchedulerSet::default();
    let derived = set.clone();
    derived.register(&(Arc::new(ImmediateScheduler::default()) as SchedulerRef));
    assert_eq!(set.len(), 1);
  }

  #[rxlite_macro::test]
  fn next_never_finishes() {
    let counting = Arc::new(CountingScheduler::default());
    let set = SchedulerSet::default();
    set.register(&(counting.clone() as SchedulerRef));

    let mut seen = vec![];
    let mut observer = LifecycleObserver::new(FnMutObserver(|v: i32| seen.push(v)), set);
    Observer::<i32, ()>::next(&mut observer, 1);
    Observer::<i32, ()>::next(&mut observer, 2);
    assert_eq!(counting.finishes.load(Ordering::SeqCst), 0);

    Observer::<i32, ()>::complete(observer);
    assert_eq!(counting.finishes.load(Ordering::SeqCst), 1);
    assert_eq!(seen, vec![1, 2]);
  }

  #[rxlite_macro::test]
  fn error_finishes_after_forwarding() {
    let counting = Arc::new(CountingScheduler::default());
    let set = SchedulerSet::default();
    set.register(&(counting.clone() as SchedulerRef));

    let c_counting = counting.clone();
    let mut finished_before_handler = None;
    let observer = LifecycleObserver::new(
      crate::observer::ObserverErr::new(
        |_: i32| {},
        |_: &str| finished_before_handler = Some(c_counting.is_finished()),
      ),
      set,
    );
    Observer::<i32, &str>::error(observer, "boom");
    assert_eq!(finished_before_handler, Some(false));
    assert!(counting.is_finished());
  }
}
