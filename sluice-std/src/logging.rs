//! Failure logging for Trap activities.

use sluice_core::Failure;

/// Builds a Trap activity that logs the failure and lets it continue.
///
/// ```rust
/// use sluice_core::Outcome;
/// use sluice_std::logging::log_failure;
///
/// let outcome = Outcome::<u32>::not_found().trap(log_failure("load_user"));
/// assert!(outcome.is_failure());
/// ```
pub fn log_failure(step: &'static str) -> impl Fn(&Failure) + Clone + Copy {
    move |failure: &Failure| record_failure(step, failure)
}

/// Emits one `warn` event describing `failure`.
///
/// A no-op unless the `tracing` feature is enabled.
pub fn record_failure(step: &str, failure: &Failure) {
    #[cfg(feature = "tracing")]
    {
        tracing::warn!(
            step,
            code = failure.code(),
            entity_type = failure.entity_type(),
            message = failure.message(),
            unhandled = failure.is_unhandled(),
            exception = failure.exception().map(tracing::field::display),
            "outcome failed"
        );
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (step, failure);
    }
}
