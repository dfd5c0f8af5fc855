//! # Outcome
//!
//! The success/failure value that every Sluice combinator consumes and
//! produces.
//!
//! An [`Outcome<T>`] is either `Success(T)` or `Failure(Failure)`. A success
//! without a payload is simply `Outcome<()>`, which is also the default type
//! parameter.
//!
//! # Typed and untyped constructors
//!
//! The constructors on `Outcome<T>` are *typed*: when no entity label is
//! given they default it to the short name of `T` (see
//! [`entity_name`](crate::entity_name)). Converting a bare [`Failure`] with
//! `.into()` is the *untyped* path and never touches the label.
//!
//! ```rust
//! use sluice_core::{Failure, Outcome};
//!
//! struct Invoice;
//!
//! let typed = Outcome::<Invoice>::not_found();
//! assert_eq!(typed.failure().unwrap().entity_type(), Some("Invoice"));
//!
//! let untyped: Outcome<Invoice> = Failure::not_found().into();
//! assert_eq!(untyped.failure().unwrap().entity_type(), None);
//! ```

use crate::{
    entity::entity_name,
    error::{ContractViolation, Exception},
    failure::Failure,
};
use std::future::{IntoFuture, Ready, ready};

/// The outcome of an operation: a success carrying `T`, or a [`Failure`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an outcome may be a failure, which should be handled"]
pub enum Outcome<T = ()> {
    /// The operation completed and produced `T`.
    Success(T),
    /// The operation failed.
    Failure(Failure),
}

impl Outcome<()> {
    /// A successful outcome without a payload.
    pub const fn done() -> Self {
        Outcome::Success(())
    }
}

impl<T> Outcome<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// A successful outcome carrying `value`.
    pub const fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Types an existing failure for payload `T`, defaulting its entity
    /// label to `T`'s name when it has none.
    pub fn failure_of(failure: Failure) -> Self {
        Outcome::Failure(failure.with_default_entity(entity_name::<T>()))
    }

    /// A business failure. Blank codes become `UNKNOWN`.
    pub fn error(code: impl Into<String>) -> Self {
        Self::failure_of(Failure::error(code))
    }

    /// An unhandled failure. Blank codes become `UNHANDLED`.
    pub fn unhandled(code: impl Into<String>) -> Self {
        Self::failure_of(Failure::unhandled(code))
    }

    /// Wraps a captured exception as an unhandled failure.
    pub fn wrap(exception: Exception) -> Self {
        Self::failure_of(Failure::wrap(exception))
    }

    /// A `NOT_FOUND` failure.
    pub fn not_found() -> Self {
        Self::failure_of(Failure::not_found())
    }

    /// A `NOT_VALID` failure.
    pub fn not_valid() -> Self {
        Self::failure_of(Failure::not_valid())
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    /// Returns `true` if the operation succeeded.
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the operation failed.
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success payload.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::ValueOnFailure`] on a failure.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(violation) => violation.raise(),
        }
    }

    /// Consumes the outcome and returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::ValueOnFailure`] on a failure.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(failure) => ContractViolation::ValueOnFailure {
                code: failure.code().to_owned(),
            }
            .raise(),
        }
    }

    /// The success payload, or the violation that reading it would raise.
    pub fn try_value(&self) -> Result<&T, ContractViolation> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(failure) => Err(ContractViolation::ValueOnFailure {
                code: failure.code().to_owned(),
            }),
        }
    }

    /// The failure, if the operation failed.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    /// Consumes the outcome and returns its failure.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::FailureOnSuccess`] on a success.
    #[track_caller]
    pub fn into_failure(self) -> Failure {
        match self {
            Outcome::Success(_) => ContractViolation::FailureOnSuccess.raise(),
            Outcome::Failure(failure) => failure,
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<T, Failure> {
        self.into()
    }

    /// Wraps this settled outcome as an immediately ready future, for chaining
    /// with genuinely asynchronous steps.
    pub fn as_async(self) -> Ready<Self> {
        ready(self)
    }
}

impl<T> From<Failure> for Outcome<T> {
    fn from(failure: Failure) -> Self {
        Outcome::Failure(failure)
    }
}

impl<T> From<Result<T, Failure>> for Outcome<T> {
    fn from(result: Result<T, Failure>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(failure) => Outcome::Failure(failure),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Failure> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<T> IntoFuture for Outcome<T> {
    type Output = Self;
    type IntoFuture = Ready<Self>;

    fn into_future(self) -> Self::IntoFuture {
        ready(self)
    }
}
