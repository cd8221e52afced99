//! Scheduler registry configuration.
use serde::Deserialize;

/// Naming for the worker threads a [`Schedulers`](crate::scheduler::Schedulers)
/// registry spawns.
///
/// Missing fields fall back to their defaults when deserialized, so the
/// struct can be embedded in a larger application config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
  /// Prefix for workers returned by `new_worker`.
  pub worker_name_prefix: String,
  /// Prefix for the reusable worker returned by `shared_worker`.
  pub shared_worker_name_prefix: String,
}

impl Default for SchedulerConfig {
  fn default() -> Self {
    SchedulerConfig {
      worker_name_prefix: "rxlite-worker".to_owned(),
      shared_worker_name_prefix: "rxlite-shared".to_owned(),
    }
  }
}

impl SchedulerConfig {
  pub fn with_worker_name_prefix(mut self, prefix: impl Into<String>) -> Self {
    self.worker_name_prefix = prefix.into();
    self
  }

  pub fn with_shared_worker_name_prefix(mut self, prefix: impl Into<String>) -> Self {
    self.shared_worker_name_prefix = prefix.into();
    self
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[rxlite_macro::test]
  fn partial_config_uses_defaults() {
    let config: SchedulerConfig =
      serde_json::from_str(r#"{ "worker_name_prefix": "io" }"#).unwrap();
    assert_eq!(config.worker_name_prefix, "io");
    assert_eq!(config.shared_worker_name_prefix, "rxlite-shared");
  }

  #[rxlite_macro::test]
  fn builder_overrides() {
    let config = SchedulerConfig::default()
      .with_worker_name_prefix("a")
      .with_shared_worker_name_prefix("b");
    assert_eq!(config.worker_name_prefix, "a");
    assert_eq!(config.shared_worker_name_prefix, "b");
  }
}
