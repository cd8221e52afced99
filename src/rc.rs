use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::observer::Observer;

pub trait RcDeref {
  type Target<'a>
  where
    Self: 'a;
  #[allow(clippy::needless_lifetimes)]
  fn rc_deref<'a>(&'a self) -> Self::Target<'a>;
}

pub trait RcDerefMut {
  type Target<'a>
  where
    Self: 'a;
  #[allow(clippy::needless_lifetimes)]
  fn rc_deref_mut<'a>(&'a self) -> Self::Target<'a>;
}

/// Shared, lock-guarded cell used when one downstream observer must be
/// reachable from several scheduled units of work.
///
/// A poisoned lock is recovered rather than propagated: a panicking observer
/// must not stop later events (and scheduler teardown) from being delivered.
#[derive(Default)]
pub struct MutArc<T>(Arc<Mutex<T>>);

impl<T> MutArc<T> {
  pub fn own(t: T) -> Self { Self(Arc::new(Mutex::new(t))) }
}

impl<T> RcDeref for MutArc<T> {
  type Target<'a>
    = MutexGuard<'a, T>
  where
    Self: 'a;

  #[inline]
  #[allow(clippy::needless_lifetimes)]
  fn rc_deref<'a>(&'a self) -> Self::Target<'a> {
    self.0.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl<T> RcDerefMut for MutArc<T> {
  type Target<'a>
    = MutexGuard<'a, T>
  where
    Self: 'a;

  #[inline]
  #[allow(clippy::needless_lifetimes)]
  fn rc_deref_mut<'a>(&'a self) -> Self::Target<'a> {
    self.0.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl<T> Clone for MutArc<T> {
  #[inline]
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

/// Terminal events `take()` the inner observer, so whichever clone delivers
/// the terminal event first consumes it and later events are ignored.
impl<O, Item, Err> Observer<Item, Err> for MutArc<Option<O>>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) { Observer::<Item, Err>::next(&mut *self.rc_deref_mut(), value); }

  fn error(self, err: Err) {
    let inner = self.rc_deref_mut().take();
    if let Some(inner) = inner {
      inner.error(err);
    }
  }

  fn complete(self) {
    let inner = self.rc_deref_mut().take();
    if let Some(inner) = inner {
      inner.complete();
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[rxlite_macro::test]
  fn clones_share_one_value() {
    let a = MutArc::own(1);
    let b = a.clone();
    *b.rc_deref_mut() += 1;
    assert_eq!(*a.rc_deref(), 2);
  }

  #[rxlite_macro::test]
  fn poisoned_lock_is_recovered() {
    let cell = MutArc::own(vec![1]);
    let c_cell = cell.clone();
    let _ = std::thread::spawn(move || {
      let _guard = c_cell.rc_deref_mut();
      panic!("poison the lock");
    })
    .join();
    cell.rc_deref_mut().push(2);
    assert_eq!(*cell.rc_deref(), vec![1, 2]);
  }
}
