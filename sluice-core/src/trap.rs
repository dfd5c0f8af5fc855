//! # Trap
//!
//! The failure-continuation combinator, mirroring [`pipe`](crate::Outcome::pipe):
//! the activity runs only when the outcome is a failure.
//!
//! - An activity returning `()` observes the failure (logging, auditing) and
//!   the original failure continues down the chain.
//! - An activity returning `Outcome<T>` replaces the failure, either
//!   recovering into a success or substituting a different failure. Nothing
//!   from the original failure is merged into the replacement.

use crate::{failure::Failure, outcome::Outcome, step::TrapOutput};

impl<T> Outcome<T> {
    /// Runs `activity` with the failure if this outcome failed.
    ///
    /// Successes are returned unchanged without invoking the activity.
    pub fn trap<F, O>(self, activity: F) -> Self
    where
        F: FnOnce(&Failure) -> O,
        O: TrapOutput<T>,
    {
        if let Outcome::Failure(failure) = &self {
            let output = activity(failure);
            return output.settle(self);
        }
        self
    }

    /// Async form of [`trap`](Self::trap).
    pub async fn trap_async<F, O>(self, activity: F) -> Self
    where
        F: AsyncFnOnce(&Failure) -> O,
        O: TrapOutput<T>,
    {
        if let Outcome::Failure(failure) = &self {
            let output = activity(failure).await;
            return output.settle(self);
        }
        self
    }
}
