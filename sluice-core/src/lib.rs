//! # sluice-core
//!
//! Core outcome model and combinators for the Sluice railway library.
//!
//! This crate has minimal dependencies and holds everything that does not
//! need an executor or a logging backend: the [`Outcome`] type, its
//! [`Failure`] side, error conversion between payload types, and the Pipe and
//! Trap combinators for settled outcomes.
//!
//! # Railway model
//!
//! An operation either stays on the success track, carrying a payload, or
//! switches to the failure track, carrying a [`Failure`]. Combinators decide
//! which steps run:
//!
//! - **Pipe** ([`Outcome::pipe`], [`Outcome::map`], [`Outcome::tap`]):
//!   runs the next step only on success. A failure skips the step and is
//!   forwarded to the new payload type with every field intact.
//! - **Trap** ([`Outcome::trap`]): runs only on failure, either to observe
//!   it or to replace it with a new outcome.
//!
//! ```rust
//! use sluice_core::{Failure, Outcome};
//!
//! fn parse(input: &str) -> Outcome<u32> {
//!     match input.parse() {
//!         Ok(n) => Outcome::success(n),
//!         Err(e) => Outcome::failure_of(Failure::not_valid().with_message(e.to_string())),
//!     }
//! }
//!
//! let total = parse("oops")
//!     .map(|n| n * 2)
//!     .trap(|_| Outcome::success(0));
//! assert_eq!(total, Outcome::success(0));
//! ```
//!
//! # Error Types
//!
//! - [`Failure`] - Business and unhandled failures, carried as data
//! - [`ContractViolation`] - API misuse, raised by panicking
//! - [`Panicked`] - A captured panic

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod codes;
mod entity;
mod error;
mod failure;
mod forward;
mod outcome;
mod pipe;
mod step;
mod trap;

// Re-exports
pub use entity::entity_name;
pub use error::{BoxError, ContractViolation, Exception, Panicked, exception};
pub use failure::{Failure, FailureKind};
pub use outcome::Outcome;
pub use step::{IntoOutcome, TrapOutput};
