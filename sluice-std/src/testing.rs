//! Testing utilities for Sluice.
//!
//! This module provides small helpers for asserting how chains behave.
//!
//! # Features
//!
//! - [`StepProbe`]: counts how often a step ran
//! - [`FailureRecorder`]: a Trap activity that records every failure it sees
//! - [`TestError`]: a plain error type for feeding the Try wrappers

use sluice_core::Failure;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use thiserror::Error;

// ============================================================================
// Step Probe
// ============================================================================

/// Counts invocations of a step.
///
/// Clones share the same counter, so a probe can be moved into `async`
/// steps and inspected afterwards.
///
/// # Example
///
/// ```rust
/// use sluice_core::Outcome;
/// use sluice_std::testing::StepProbe;
///
/// let probe = StepProbe::new();
/// let _ = Outcome::<u32>::not_found().map(|x| {
///     probe.hit();
///     x + 1
/// });
/// probe.assert_not_called();
/// ```
#[derive(Clone, Debug, Default)]
pub struct StepProbe {
    calls: Arc<AtomicUsize>,
}

impl StepProbe {
    /// Create a probe that has not been hit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one invocation.
    pub fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of recorded invocations.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Panics unless the step ran exactly once.
    #[track_caller]
    pub fn assert_called_once(&self) {
        assert_eq!(self.count(), 1, "step was expected to run exactly once");
    }

    /// Panics if the step ran at all.
    #[track_caller]
    pub fn assert_not_called(&self) {
        assert_eq!(self.count(), 0, "step ran when it should have been skipped");
    }
}

// ============================================================================
// Failure Recorder
// ============================================================================

/// Records failures passed to Trap activities.
///
/// # Example
///
/// ```rust
/// use sluice_core::Outcome;
/// use sluice_std::testing::FailureRecorder;
///
/// let recorder = FailureRecorder::new();
/// let _ = Outcome::<u32>::error("E1").trap(recorder.observer());
/// assert_eq!(recorder.codes(), vec!["E1".to_string()]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FailureRecorder {
    failures: Arc<Mutex<Vec<Failure>>>,
}

impl FailureRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A Trap activity that records the failure and lets it continue.
    pub fn observer(&self) -> impl FnOnce(&Failure) + 'static {
        let failures = self.failures.clone();
        move |failure: &Failure| failures.lock().unwrap().push(failure.clone())
    }

    /// Get a clone of the recorded failures.
    pub fn failures(&self) -> Vec<Failure> {
        self.failures.lock().unwrap().clone()
    }

    /// Codes of the recorded failures, in order.
    pub fn codes(&self) -> Vec<String> {
        self.failures
            .lock()
            .unwrap()
            .iter()
            .map(|f| f.code().to_owned())
            .collect()
    }

    /// Get the number of recorded failures.
    pub fn count(&self) -> usize {
        self.failures.lock().unwrap().len()
    }
}

// ============================================================================
// Test Error
// ============================================================================

/// A simple error carrying only a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TestError {
    message: String,
}

impl TestError {
    /// Create a test error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
