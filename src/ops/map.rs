use crate::{
  lifecycle::SchedulerSet,
  observable::{Observable, ObservableExt},
  observer::Observer,
  type_hint::TypeHint,
};

pub struct MapOp<S, F, Item> {
  source: S,
  func: F,
  _hint: TypeHint<Item>,
}

impl<S, F, Item> MapOp<S, F, Item> {
  #[inline]
  pub(crate) fn new(source: S, func: F) -> Self { MapOp { source, func, _hint: TypeHint::new() } }
}

impl<S: Clone, F: Clone, Item> Clone for MapOp<S, F, Item> {
  fn clone(&self) -> Self { MapOp::new(self.source.clone(), self.func.clone()) }
}

impl<Item, B, Err, O, S, F> Observable<B, Err, O> for MapOp<S, F, Item>
where
  O: Observer<B, Err>,
  S: Observable<Item, Err, MapObserver<O, F>>,
  F: FnMut(Item) -> B,
{
  fn actual_subscribe(self, observer: O) {
    let MapOp { source, func, .. } = self;
    source.actual_subscribe(MapObserver { observer, func })
  }
}

impl<Item, B, Err, S, F> ObservableExt<B, Err> for MapOp<S, F, Item>
where
  S: ObservableExt<Item, Err>,
  F: FnMut(Item) -> B,
{
  #[inline]
  fn scheduler_set(&self) -> &SchedulerSet { self.source.scheduler_set() }
}

pub struct MapObserver<O, F> {
  observer: O,
  func: F,
}

impl<Item, B, Err, O, F> Observer<Item, Err> for MapObserver<O, F>
where
  O: Observer<B, Err>,
  F: FnMut(Item) -> B,
{
  #[inline]
  fn next(&mut self, value: Item) { self.observer.next((self.func)(value)) }

  #[inline]
  fn error(self, err: Err) { self.observer.error(err) }

  #[inline]
  fn complete(self) { self.observer.complete() }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[rxlite_macro::test]
  fn primitive_type() {
    let mut i = 0;
    observable::from_iter(100..101).map(|v| v * 2).subscribe(|v| i += v);
    assert_eq!(i, 200);
  }

  #[rxlite_macro::test]
  fn element_for_element_in_order() {
    let source = vec![3, 1, 4, 1, 5, 9, 2, 6];
    let mut mapped = vec![];
    observable::from_iter(source.clone()).map(|v| v * 10).subscribe(|v| mapped.push(v));
    assert_eq!(mapped, source.iter().map(|v| v * 10).collect::<Vec<_>>());
  }

  #[rxlite_macro::test]
  fn map_types_mixed() {
    let mut s = String::new();
    observable::create(|emitter: &mut dyn Emitter<i32, ()>| {
      emitter.next(1);
      emitter.next(2);
      emitter.next(3);
      emitter.complete();
    })
    .map(|v| v.to_string())
    .subscribe(|v: String| s.push_str(&v));
    assert_eq!(s, "123");
  }

  #[rxlite_macro::test]
  fn error_forwarded_unchanged() {
    let mut error = None;
    observable::throw_err::<i32, _>("bad")
      .map(|v| v + 1)
      .subscribe_err(|_| {}, |e| error = Some(e));
    assert_eq!(error, Some("bad"));
  }

  #[rxlite_macro::test]
  fn shares_source_scheduler_set() {
    let source = observable::of(1);
    let set = source.scheduler_set().clone();
    let mapped = source.map(|v| v + 1).subscribe_on(Schedulers::default().immediate());
    assert_eq!(set.len(), 1);
    assert_eq!(mapped.scheduler_set().len(), 1);
  }

  #[rxlite_macro::test]
  #[should_panic(expected = "transform fault")]
  fn transform_panic_is_not_caught() {
    observable::of(1).map(|_: i32| -> i32 { panic!("transform fault") }).subscribe(|_| {});
  }

  #[rxlite_macro::test]
  fn bench() { do_bench(); }

  benchmark_group!(do_bench, bench_map);

  fn bench_map(b: &mut bencher::Bencher) { b.iter(primitive_type); }
}
