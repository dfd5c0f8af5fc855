//! Error conversion across payload types.
//!
//! When a chain step would change the payload type from `A` to `B` but the
//! current outcome is already a failure, the step never runs. The failure is
//! re-typed as `Outcome<B>` by moving every field across unchanged: code,
//! entity label, message, kind and captured exception.

use crate::{failure::Failure, outcome::Outcome};

impl Failure {
    /// Re-expresses this failure as a failed `Outcome<R>`.
    ///
    /// Pure field transfer: the unhandled refinement and its exception are
    /// kept, and the entity label is not re-defaulted for `R`.
    pub fn forward<R>(self) -> Outcome<R> {
        Outcome::Failure(self)
    }
}

impl<T> Outcome<T> {
    /// Re-types a failed outcome for payload `R`.
    ///
    /// A success cannot be re-typed without running a step, so it is handed
    /// back unchanged in `Err`.
    pub fn forward<R>(self) -> Result<Outcome<R>, Self> {
        match self {
            Outcome::Failure(failure) => Ok(failure.forward()),
            success @ Outcome::Success(_) => Err(success),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FailureKind, error::exception};
    use std::sync::Arc;

    struct Order;
    struct Receipt;

    #[test]
    fn test_forward_keeps_all_fields() {
        let source = Outcome::<Order>::error("ASDF");
        let source_failure = source.failure().cloned().unwrap();

        let forwarded: Outcome<Receipt> = source.forward().ok().unwrap();
        let failure = forwarded.failure().unwrap();

        assert_eq!(failure, &source_failure);
        assert_eq!(failure.entity_type(), Some("Order"));
    }

    #[test]
    fn test_forward_keeps_unhandled_exception() {
        let ex = exception("timeout");
        let forwarded: Outcome<Receipt> = Failure::wrap(ex.clone()).forward();

        let failure = forwarded.failure().unwrap();
        assert_eq!(failure.kind(), FailureKind::Unhandled);
        assert!(Arc::ptr_eq(failure.exception().unwrap(), &ex));
        assert!(forwarded.try_value().is_err());
    }

    #[test]
    fn test_forward_success_is_refused() {
        let outcome = Outcome::success(10);
        let refused = outcome.forward::<String>().unwrap_err();
        assert_eq!(refused, Outcome::success(10));
    }
}
