//! The failure side of an [`Outcome`](crate::Outcome).

use crate::{
    codes,
    error::{BoxError, Exception, exception},
};
use std::{fmt, sync::Arc};

/// Discriminates business failures from captured ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A failure created deliberately by application logic.
    Error,
    /// A failure that originated from a captured error or panic.
    Unhandled,
}

/// A structured failure: code, optional entity label, optional message and,
/// for unhandled failures, the captured exception.
///
/// Failures are immutable once built. The `with_*` builders consume and
/// return the failure, so a constructed value never changes afterwards.
///
/// # Example
///
/// ```rust
/// use sluice_core::{Failure, FailureKind};
///
/// let failure = Failure::error("ACCOUNT_LOCKED")
///     .with_message("too many attempts")
///     .with_entity_type("Account");
///
/// assert_eq!(failure.code(), "ACCOUNT_LOCKED");
/// assert_eq!(failure.kind(), FailureKind::Error);
/// ```
#[derive(Clone)]
pub struct Failure {
    code: String,
    entity_type: Option<String>,
    message: Option<String>,
    kind: FailureKind,
    exception: Option<Exception>,
}

fn code_or(code: String, default: &str) -> String {
    if code.trim().is_empty() {
        default.to_owned()
    } else {
        code
    }
}

impl Failure {
    /// A business failure. Blank codes become [`codes::UNKNOWN`].
    pub fn error(code: impl Into<String>) -> Self {
        Self {
            code: code_or(code.into(), codes::UNKNOWN),
            entity_type: None,
            message: None,
            kind: FailureKind::Error,
            exception: None,
        }
    }

    /// An unhandled failure. Blank codes become [`codes::UNHANDLED`].
    pub fn unhandled(code: impl Into<String>) -> Self {
        Self {
            code: code_or(code.into(), codes::UNHANDLED),
            entity_type: None,
            message: None,
            kind: FailureKind::Unhandled,
            exception: None,
        }
    }

    /// Wraps a captured exception as an unhandled failure whose message is
    /// the exception's display text.
    pub fn wrap(exception: Exception) -> Self {
        let message = exception.to_string();
        Self::unhandled(codes::UNHANDLED)
            .with_message(message)
            .with_exception(exception)
    }

    /// Same as [`Failure::wrap`] for any error convertible to a [`BoxError`].
    pub fn wrap_error(error: impl Into<BoxError>) -> Self {
        Self::wrap(exception(error))
    }

    /// A business failure with code [`codes::NOT_FOUND`].
    pub fn not_found() -> Self {
        Self::error(codes::NOT_FOUND)
    }

    /// A business failure with code [`codes::NOT_VALID`].
    pub fn not_valid() -> Self {
        Self::error(codes::NOT_VALID)
    }

    /// Sets the human-readable message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the subject-entity label.
    pub fn with_entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    /// Attaches a captured exception. The failure becomes unhandled.
    pub fn with_exception(mut self, exception: Exception) -> Self {
        self.kind = FailureKind::Unhandled;
        self.exception = Some(exception);
        self
    }

    /// Fills the entity label only when none was given.
    pub(crate) fn with_default_entity(mut self, entity_type: Option<String>) -> Self {
        if self.entity_type.is_none() {
            self.entity_type = entity_type;
        }
        self
    }

    /// Machine-readable category. Never blank.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Optional subject-entity label.
    pub fn entity_type(&self) -> Option<&str> {
        self.entity_type.as_deref()
    }

    /// Optional human-readable detail.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Business or unhandled.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Returns `true` for failures that originated from a captured error.
    pub fn is_unhandled(&self) -> bool {
        self.kind == FailureKind::Unhandled
    }

    /// The captured exception, if any. Only unhandled failures carry one.
    pub fn exception(&self) -> Option<&Exception> {
        self.exception.as_ref()
    }
}

impl Default for Failure {
    fn default() -> Self {
        Self::error(codes::UNKNOWN)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("code", &self.code)
            .field("entity_type", &self.entity_type)
            .field("message", &self.message)
            .field("kind", &self.kind)
            .field("exception", &self.exception.as_ref().map(|e| e.to_string()))
            .finish()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.code)?;
        if let Some(entity_type) = &self.entity_type {
            write!(f, " {entity_type}")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.exception
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// Exceptions compare by identity.
impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        let same_exception = match (&self.exception, &other.exception) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.code == other.code
            && self.entity_type == other.entity_type
            && self.message == other.message
            && self.kind == other.kind
            && same_exception
    }
}

impl Eq for Failure {}
