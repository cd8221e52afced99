//! Operator stages.
//!
//! Each operator is a struct wrapping its source plus a relay observer that
//! wraps the downstream observer. Stages never touch the scheduler set except
//! to hand it through from their source.
pub mod complete_status;
pub mod map;
pub mod observe_on;
pub mod subscribe_on;
pub mod tap;
