//! Walks through the three canonical pipelines: a synchronous map, a source
//! moved onto one worker with delivery on another, and an error that tears
//! the workers down.
//!
//! Run with `RUST_LOG=rxlite=debug cargo run --example basic` to watch the
//! workers start and finish.
use std::thread;

use rxlite::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn thread_name() -> String { thread::current().name().unwrap_or("main").to_owned() }

fn main() -> Result<(), SchedulerError> {
  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(EnvFilter::from_default_env())
    .init();

  println!("-- immediate --");
  observable::create(|emitter: &mut dyn Emitter<i32, String>| {
    emitter.next(1);
    emitter.next(2);
    emitter.next(3);
    emitter.complete();
  })
  .map(|v| v.to_string())
  .subscribe_all(
    |v| println!("next {v:?} on {}", thread_name()),
    |e| println!("error {e}"),
    || println!("complete on {}", thread_name()),
  );

  let schedulers = Schedulers::default();

  println!("-- switching threads --");
  let worker = schedulers.new_worker()?;
  let worker2 = schedulers.new_worker()?;
  let (pipeline, status) = observable::create(|emitter: &mut dyn Emitter<i32, String>| {
    println!("emitting on {}", thread_name());
    emitter.next(1);
    emitter.complete();
  })
  .subscribe_on(worker.clone())
  .observe_on(worker2.clone())
  .complete_status();
  pipeline.subscribe_all(
    |v| println!("next {v} on {}", thread_name()),
    |e| println!("error {e}"),
    || println!("complete on {}", thread_name()),
  );
  CompleteStatus::wait_for_end(status);
  for scheduler in [&worker, &worker2] {
    println!("{} finished: {}", scheduler.name(), scheduler.is_finished());
  }

  println!("-- error --");
  let shared = schedulers.shared_worker()?;
  let (pipeline, status) =
    observable::create(|emitter: &mut dyn Emitter<i32, String>| emitter.error("F".to_owned()))
      .subscribe_on(schedulers.new_worker()?)
      .map(|v| v * 10)
      .observe_on(shared.clone())
      .complete_status();
  pipeline.subscribe_err(
    |v| println!("next {v}"),
    |e| println!("error {e:?} on {}", thread_name()),
  );
  CompleteStatus::wait_for_end(status);
  println!("{} finished: {}", shared.name(), shared.is_finished());
  Ok(())
}
