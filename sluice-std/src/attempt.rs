//! # Try wrappers
//!
//! Run a fallible activity and turn whatever escapes it into an [`Outcome`].
//!
//! An activity returns `Result<T, E>`; `Ok(v)` becomes `Success(v)`. Both an
//! `Err(e)` and a panic are captured as an [`Exception`] and handed to an
//! error handler. Without an explicit handler the exception is wrapped as an
//! unhandled failure with [`Outcome::wrap`].
//!
//! | function             | activity       | handler                        |
//! |----------------------|----------------|--------------------------------|
//! | [`attempt`]          | sync           | default                        |
//! | [`attempt_with`]     | sync           | sync                           |
//! | [`attempt_with_async`] | sync         | sync or async                  |
//! | [`attempt_async`]    | async          | default                        |
//! | [`attempt_async_with`] | async        | sync or async                  |
//!
//! The activity runs exactly once. The handler runs at most once, and only
//! when something was captured.
//!
//! Panic capture relies on unwinding; with `panic = "abort"` a panicking
//! activity aborts the process as usual.

use futures::FutureExt;
use sluice_core::{BoxError, Exception, Outcome, Panicked, exception};
use std::{
    future::IntoFuture,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

/// Runs `activity`, wrapping any error or panic as an unhandled failure.
///
/// # Example
///
/// ```rust
/// use sluice_std::attempt;
///
/// let outcome = attempt(|| "42".parse::<u32>());
/// assert_eq!(outcome.into_value(), 42);
///
/// let failed = attempt(|| "forty-two".parse::<u32>());
/// assert!(failed.failure().unwrap().is_unhandled());
/// ```
pub fn attempt<T, E, F>(activity: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    attempt_with(activity, Outcome::wrap)
}

/// Runs `activity`, handing any error or panic to `handle_error`.
pub fn attempt_with<T, E, F, H>(activity: F, handle_error: H) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
    H: FnOnce(Exception) -> Outcome<T>,
{
    match capture(activity) {
        Ok(value) => Outcome::Success(value),
        Err(exception) => handle_error(exception),
    }
}

/// Runs a synchronous `activity` with a handler that may be asynchronous.
///
/// The handler may return an `Outcome` directly or any future resolving to
/// one.
pub async fn attempt_with_async<T, E, F, H, R>(activity: F, handle_error: H) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
    H: FnOnce(Exception) -> R,
    R: IntoFuture<Output = Outcome<T>>,
{
    match capture(activity) {
        Ok(value) => Outcome::Success(value),
        Err(exception) => handle_error(exception).await,
    }
}

/// Runs an asynchronous `activity`, wrapping any error or panic as an
/// unhandled failure.
pub async fn attempt_async<T, E, F>(activity: F) -> Outcome<T>
where
    F: AsyncFnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    attempt_async_with(activity, Outcome::wrap).await
}

/// Runs an asynchronous `activity`, handing any error or panic to
/// `handle_error`.
///
/// Panics raised while creating or polling the activity's future are both
/// captured.
pub async fn attempt_async_with<T, E, F, H, R>(activity: F, handle_error: H) -> Outcome<T>
where
    F: AsyncFnOnce() -> Result<T, E>,
    E: Into<BoxError>,
    H: FnOnce(Exception) -> R,
    R: IntoFuture<Output = Outcome<T>>,
{
    let run = async move { activity().await };
    let captured: Exception = match AssertUnwindSafe(run).catch_unwind().await {
        Ok(Ok(value)) => return Outcome::Success(value),
        Ok(Err(error)) => exception(error),
        Err(payload) => Arc::new(Panicked::from_payload(payload)),
    };
    trace_capture(&captured);
    handle_error(captured).await
}

fn capture<T, E, F>(activity: F) -> Result<T, Exception>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    let captured: Exception = match panic::catch_unwind(AssertUnwindSafe(activity)) {
        Ok(Ok(value)) => return Ok(value),
        Ok(Err(error)) => exception(error),
        Err(payload) => Arc::new(Panicked::from_payload(payload)),
    };
    trace_capture(&captured);
    Err(captured)
}

fn trace_capture(exception: &Exception) {
    #[cfg(feature = "tracing")]
    {
        tracing::debug!(error = %exception, "captured activity error as unhandled outcome");
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = exception;
    }
}
