//! # Pipe
//!
//! The success-continuation combinators: the next step runs only when the
//! current outcome is a success, otherwise the failure is forwarded untouched.
//!
//! All shapes reduce to one rule (see [`Outcome::pipe`]):
//!
//! | method       | step                         | result on success         |
//! |--------------|------------------------------|---------------------------|
//! | `pipe`       | `FnOnce(T) -> impl IntoOutcome` | the step's outcome     |
//! | `map`        | `FnOnce(T) -> R`             | `Success(r)`              |
//! | `tap`        | `FnOnce(&T)`                 | the input, unchanged      |
//!
//! Each has an `_async` twin taking an `AsyncFnOnce` step. A payload-less
//! outcome is `Outcome<()>`, so a step that needs no input simply ignores
//! its `()` argument.
//!
//! ```rust
//! use sluice_core::Outcome;
//!
//! let outcome = Outcome::success(5)
//!     .map(|x| x + 1)
//!     .pipe(|x| if x > 5 { Outcome::success(x * 2) } else { Outcome::not_valid() });
//!
//! assert_eq!(outcome, Outcome::success(12));
//! ```

use crate::{outcome::Outcome, step::IntoOutcome};

impl<T> Outcome<T> {
    /// Runs `step` with the payload if this outcome is a success.
    ///
    /// On failure the step is not invoked and the failure is forwarded to the
    /// new payload type with every field intact.
    pub fn pipe<F, O>(self, step: F) -> Outcome<O::Value>
    where
        F: FnOnce(T) -> O,
        O: IntoOutcome,
    {
        match self {
            Outcome::Success(value) => step(value).into_outcome(),
            Outcome::Failure(failure) => failure.forward(),
        }
    }

    /// Runs a step that cannot fail and wraps its value in a success.
    pub fn map<F, R>(self, step: F) -> Outcome<R>
    where
        F: FnOnce(T) -> R,
    {
        self.pipe(|value| Outcome::Success(step(value)))
    }

    /// Runs a side effect with the payload and returns the input unchanged.
    pub fn tap<F>(self, step: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(value) = &self {
            step(value);
        }
        self
    }

    /// Async form of [`pipe`](Self::pipe).
    pub async fn pipe_async<F, O>(self, step: F) -> Outcome<O::Value>
    where
        F: AsyncFnOnce(T) -> O,
        O: IntoOutcome,
    {
        match self {
            Outcome::Success(value) => step(value).await.into_outcome(),
            Outcome::Failure(failure) => failure.forward(),
        }
    }

    /// Async form of [`map`](Self::map).
    pub async fn map_async<F, R>(self, step: F) -> Outcome<R>
    where
        F: AsyncFnOnce(T) -> R,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(step(value).await),
            Outcome::Failure(failure) => failure.forward(),
        }
    }

    /// Async form of [`tap`](Self::tap).
    pub async fn tap_async<F>(self, step: F) -> Self
    where
        F: AsyncFnOnce(&T),
    {
        if let Outcome::Success(value) = &self {
            step(value).await;
        }
        self
    }
}
