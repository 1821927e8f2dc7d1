#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

//! Facade crate for the ckit collection utilities.
//!
//! Re-exports the `no_std` core so downstream crates depend on a single package name.


pub use ckit_utils_core_rs::collections::{self, LinkedQueue, LinkedQueueConfig, QueueError};
pub use ckit_utils_core_rs as utils_core;

/// Returns the package version of the facade crate.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}
