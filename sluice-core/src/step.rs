//! Step output conversion traits.
//!
//! A single `pipe`/`trap` entry point accepts steps with different return
//! shapes. These traits decide what each shape means for the chain.

use crate::{failure::Failure, outcome::Outcome};

/// Converts the output of a Pipe step into the next [`Outcome`].
///
/// # Implementations
///
/// - `Outcome<R>` → returned as is (this is how failures enter a chain)
/// - `Result<R, Failure>` → `Ok` is a success, `Err` the failure itself
/// - `Option<R>` → `None` becomes a `NOT_FOUND` failure typed for `R`
///
/// Raw values are handled by `map`, side effects by `tap`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be turned into an `Outcome`",
    label = "the step must return an `Outcome`, `Result<_, Failure>` or `Option`",
    note = "use `map` for steps that return a plain value and `tap` for side effects"
)]
pub trait IntoOutcome {
    /// Payload of the produced outcome.
    type Value;

    /// Performs the conversion.
    fn into_outcome(self) -> Outcome<Self::Value>;
}

impl<T> IntoOutcome for Outcome<T> {
    type Value = T;

    fn into_outcome(self) -> Outcome<T> {
        self
    }
}

impl<T> IntoOutcome for Result<T, Failure> {
    type Value = T;

    fn into_outcome(self) -> Outcome<T> {
        self.into()
    }
}

impl<T> IntoOutcome for Option<T> {
    type Value = T;

    fn into_outcome(self) -> Outcome<T> {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::not_found(),
        }
    }
}

/// Interprets the output of a Trap activity.
///
/// - `()` → observe only: the original failure is kept
/// - `Outcome<T>` → replaces the input (recovery or a different failure)
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Trap output for `Outcome<{T}>`",
    label = "return `()` to observe the failure or `Outcome<{T}>` to replace it",
    note = "a Trap activity cannot change the payload type"
)]
pub trait TrapOutput<T> {
    /// Settles the trapped `input` given this activity output.
    fn settle(self, input: Outcome<T>) -> Outcome<T>;
}

impl<T> TrapOutput<T> for () {
    fn settle(self, input: Outcome<T>) -> Outcome<T> {
        input
    }
}

impl<T> TrapOutput<T> for Outcome<T> {
    fn settle(self, _input: Outcome<T>) -> Outcome<T> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    #[test]
    fn test_option_none_is_not_found() {
        let outcome = None::<u32>.into_outcome();
        let failure = outcome.failure().unwrap();
        assert_eq!(failure.code(), codes::NOT_FOUND);
        assert_eq!(failure.entity_type(), Some("u32"));
    }

    #[test]
    fn test_result_err_is_failure_unchanged() {
        let failure = Failure::not_valid().with_message("negative");
        let outcome = Err::<u32, _>(failure.clone()).into_outcome();
        assert_eq!(outcome, Outcome::Failure(failure));
    }

    #[test]
    fn test_unit_keeps_input() {
        let input = Outcome::<u8>::error("E");
        assert_eq!(().settle(input.clone()), input);
    }

    #[test]
    fn test_outcome_replaces_input() {
        let input = Outcome::<u8>::error("E");
        assert_eq!(Outcome::success(1).settle(input), Outcome::success(1));
    }
}
