//! Loop exercises: an even-number sum, a halving counter, and a
//! character-substitution pass.
//!
//! - **[`core`]**: Pure, deterministic loop logic. No I/O.
//! - **[`config`]**: Loop parameters loaded from `cycles.toml`.
//!
//! [`report`], [`logging`] and [`exit_codes`] back the `cycles` CLI.

pub mod config;
pub mod core;
pub mod exit_codes;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::do_while_cycle::{do_while_cycle, do_while_cycle_with};
pub use crate::core::for_cycle::for_cycle;
pub use crate::core::while_cycle::{while_cycle, while_cycle_with};
