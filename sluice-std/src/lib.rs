//! # sluice-std
//!
//! Standard implementations for the Sluice railway library.
//!
//! This crate provides:
//! - **Try wrappers**: [`attempt`], [`attempt_with`], [`attempt_with_async`],
//!   [`attempt_async`], [`attempt_async_with`]
//! - **In-flight chaining**: [`PendingOutcome`] for any future of an outcome
//! - **Logging**: [`logging::log_failure`] (with the `tracing` feature)
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use sluice_core;

// Modules
mod attempt;
pub mod logging;
mod pending;
pub mod testing;

pub use attempt::{attempt, attempt_async, attempt_async_with, attempt_with, attempt_with_async};
pub use pending::{BoxOutcome, PendingOutcome};
