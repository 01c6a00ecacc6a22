//! Deterministic, pure loop logic.
//!
//! Core modules must be free of I/O side effects. They operate on plain
//! values and return deterministic outputs suitable for tests.

pub mod do_while_cycle;
pub mod for_cycle;
pub mod while_cycle;
