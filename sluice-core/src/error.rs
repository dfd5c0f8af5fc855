//! Error types for Sluice.
//!
//! Two very different kinds of "error" live in this crate:
//!
//! - Business failures are data. They travel through chains as
//!   [`Failure`](crate::Failure) values inside an [`Outcome`](crate::Outcome).
//! - Contract violations are programmer mistakes, such as reading the value of
//!   a failed outcome. They are raised by panicking with a [`ContractViolation`]
//!   and are never turned into outcomes by the combinators.
//!
//! [`Panicked`] describes a panic captured by the Try wrappers, and the
//! [`BoxError`] / [`Exception`] aliases are the currency for arbitrary errors
//! entering the library.

use std::{any::Any, sync::Arc};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A captured error attached to an unhandled failure.
///
/// Shared rather than boxed so that outcomes stay cheap to clone.
pub type Exception = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Converts any boxable error into a shared [`Exception`].
pub fn exception(error: impl Into<BoxError>) -> Exception {
    Arc::from(error.into())
}

/// Misuse of the outcome API.
///
/// These are raised with `panic!` at the call site and never flow downstream
/// as business data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// The value of an unsuccessful outcome was requested.
    #[error("an unsuccessful outcome does not have a value (error code `{code}`)")]
    ValueOnFailure {
        /// Code of the failure that was accessed.
        code: String,
    },

    /// The failure of a successful outcome was requested.
    #[error("a successful outcome does not carry a failure")]
    FailureOnSuccess,
}

impl ContractViolation {
    /// Raises this violation.
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("{self}")
    }
}

/// A panic captured while running an activity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Create a captured panic with an explicit message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Builds the description from a payload returned by `catch_unwind`.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_owned(),
                Err(_) => "activity panicked".to_owned(),
            },
        };
        Self { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
