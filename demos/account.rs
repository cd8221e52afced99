//! Chains two dependent jobs: fetch a list of rows, then store how many
//! came back.
use rxlite::{
  error::JobError,
  job::{self, AsyncJob},
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn http_get_data(param: &str) -> impl AsyncJob<Vec<String>, JobError> {
  let param = param.to_owned();
  job::from_fn(move || {
    if param.is_empty() {
      return Err(JobError::Network("empty query".to_owned()));
    }
    info!(%param, "fetching");
    Ok(vec![format!("{param}-a"), format!("{param}-b")])
  })
}

fn db_insert(value: String) -> impl AsyncJob<i32, JobError> {
  job::from_fn(move || {
    info!(%value, "inserting");
    Ok(1)
  })
}

fn save_first(param: &str) -> impl AsyncJob<i32, JobError> {
  http_get_data(param)
    .map(|rows| rows.into_iter().next())
    .and_then(|row| {
      job::from_fn(move || row.ok_or_else(|| JobError::Storage("nothing to insert".to_owned())))
    })
    .and_then(db_insert)
}

fn main() {
  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(EnvFilter::from_default_env())
    .init();

  for param in ["account", ""] {
    save_first(param).start(job::callback(
      |inserted| println!("{param:?}: inserted {inserted} row"),
      |err| println!("{param:?}: failed: {err}"),
    ));
  }
}
