//! # sluice - Railway-Oriented Outcomes
//!
//! `sluice` models the result of an operation as an [`Outcome`]: either a
//! success carrying a payload or a [`Failure`] carrying a code, an optional
//! entity type, a message, and possibly the exception that caused it.
//! Operations chain along two tracks. Success steps are skipped once the
//! chain has failed, and failure activities run only on the failure track.
//!
//! ## Quick Start
//!
//! ```rust
//! use sluice::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Account {
//!     id: u32,
//! }
//!
//! fn find(id: u32) -> Option<Account> {
//!     (id == 1).then_some(Account { id })
//! }
//!
//! let missing = Outcome::success(2).pipe(find);
//! let failure = missing.failure().unwrap();
//! assert_eq!(failure.code(), codes::NOT_FOUND);
//! assert_eq!(failure.entity_type(), Some("Account"));
//!
//! let parsed = attempt(|| "12".parse::<u32>()).map(|n| n + 1);
//! assert_eq!(parsed, Outcome::success(13));
//! ```
//!
//! ## Async chains
//!
//! Futures resolving to an outcome chain with the same combinators through
//! [`PendingOutcome`]:
//!
//! ```rust
//! use sluice::prelude::*;
//!
//! # futures::executor::block_on(async {
//! let outcome = Outcome::success(3)
//!     .as_async()
//!     .map_async(async |n| n * 2)
//!     .trap(log_failure("double"))
//!     .await;
//! assert_eq!(outcome, Outcome::success(6));
//! # });
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events from [`log_failure`] and from the Try
//!   wrappers when they capture an error.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use sluice_core::{
    // Errors
    BoxError,
    ContractViolation,
    Exception,
    // Model
    Failure,
    FailureKind,
    // Step conversions
    IntoOutcome,
    Outcome,
    Panicked,
    TrapOutput,
    codes,
    entity_name,
    exception,
};

// Try wrappers and in-flight chaining
pub use sluice_std::{
    BoxOutcome, PendingOutcome, attempt, attempt_async, attempt_async_with, attempt_with,
    attempt_with_async,
};

pub use sluice_std::logging::{log_failure, record_failure};

/// Testing utilities.
pub mod testing {
    pub use sluice_std::testing::{FailureRecorder, StepProbe, TestError};
}

/// Prelude module - common imports for Sluice.
///
/// # Usage
///
/// ```rust
/// use sluice::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        Exception,
        // Model
        Failure,
        IntoOutcome,
        Outcome,
        // In-flight chaining
        PendingOutcome,
        TrapOutput,
        // Try wrappers
        attempt,
        attempt_async,
        attempt_async_with,
        attempt_with,
        attempt_with_async,
        codes,
        // Logging
        log_failure,
    };
}
