//! # In-flight outcomes
//!
//! Chaining on outcomes that are still being computed.
//!
//! Every `Future<Output = Outcome<T>>` is a [`PendingOutcome<T>`]: the same
//! Pipe and Trap combinators available on a settled [`Outcome`] can be called
//! on it directly. Each combinator awaits the input first and then applies the
//! settled form, so a chain runs strictly step after step whether its links
//! are settled or in flight.
//!
//! ```rust
//! use sluice_core::Outcome;
//! use sluice_std::PendingOutcome;
//!
//! async fn load(id: u32) -> Outcome<String> {
//!     Outcome::success(format!("user-{id}"))
//! }
//!
//! # futures::executor::block_on(async {
//! let name_len = load(7)
//!     .map(|name| name.len())
//!     .pipe_async(async |len| Outcome::success(len * 2))
//!     .await;
//! assert_eq!(name_len, Outcome::success(12));
//! # });
//! ```
//!
//! `map` shares its name with `futures::FutureExt::map`. When both traits are
//! in scope, call it as `PendingOutcome::map(future, step)`.

use futures::future::BoxFuture;
use sluice_core::{Failure, IntoOutcome, Outcome, TrapOutput};
use std::future::Future;

/// A boxed in-flight outcome, for storing chains behind one type.
pub type BoxOutcome<'a, T> = BoxFuture<'a, Outcome<T>>;

/// Pipe and Trap combinators for in-flight outcomes.
///
/// Implemented for every future resolving to an [`Outcome`].
pub trait PendingOutcome<T>: Future<Output = Outcome<T>> + Sized {
    /// Awaits the input, then applies [`Outcome::pipe`].
    fn pipe<F, O>(self, step: F) -> impl Future<Output = Outcome<O::Value>>
    where
        F: FnOnce(T) -> O,
        O: IntoOutcome,
    {
        async move { self.await.pipe(step) }
    }

    /// Awaits the input, then applies [`Outcome::pipe_async`].
    fn pipe_async<F, O>(self, step: F) -> impl Future<Output = Outcome<O::Value>>
    where
        F: AsyncFnOnce(T) -> O,
        O: IntoOutcome,
    {
        async move { self.await.pipe_async(step).await }
    }

    /// Awaits the input, then applies [`Outcome::map`].
    fn map<F, R>(self, step: F) -> impl Future<Output = Outcome<R>>
    where
        F: FnOnce(T) -> R,
    {
        async move { self.await.map(step) }
    }

    /// Awaits the input, then applies [`Outcome::map_async`].
    fn map_async<F, R>(self, step: F) -> impl Future<Output = Outcome<R>>
    where
        F: AsyncFnOnce(T) -> R,
    {
        async move { self.await.map_async(step).await }
    }

    /// Awaits the input, then applies [`Outcome::tap`].
    fn tap<F>(self, step: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.tap(step) }
    }

    /// Awaits the input, then applies [`Outcome::tap_async`].
    fn tap_async<F>(self, step: F) -> impl Future<Output = Outcome<T>>
    where
        F: AsyncFnOnce(&T),
    {
        async move { self.await.tap_async(step).await }
    }

    /// Awaits the input, then applies [`Outcome::trap`].
    fn trap<F, O>(self, activity: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Failure) -> O,
        O: TrapOutput<T>,
    {
        async move { self.await.trap(activity) }
    }

    /// Awaits the input, then applies [`Outcome::trap_async`].
    fn trap_async<F, O>(self, activity: F) -> impl Future<Output = Outcome<T>>
    where
        F: AsyncFnOnce(&Failure) -> O,
        O: TrapOutput<T>,
    {
        async move { self.await.trap_async(activity).await }
    }
}

impl<T, Fut> PendingOutcome<T> for Fut where Fut: Future<Output = Outcome<T>> {}
