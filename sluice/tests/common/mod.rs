#![allow(dead_code)]

use sluice::{Failure, Outcome};

// ============================================================================
// Test Payload Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct TypeT {
    pub id: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeR {
    pub label: String,
}

impl From<TypeT> for TypeR {
    fn from(t: TypeT) -> Self {
        TypeR {
            label: format!("r-{}", t.id),
        }
    }
}

// ============================================================================
// Outcome Fixtures
// ============================================================================

pub const CODE: &str = "ASDF";
pub const MESSAGE: &str = "SDFG";
pub const ENTITY: &str = "DFGH";

pub fn success_t() -> Outcome<TypeT> {
    Outcome::success(TypeT { id: 7 })
}

/// A business failure with every optional field filled.
pub fn test_error() -> Failure {
    Failure::error(CODE)
        .with_message(MESSAGE)
        .with_entity_type(ENTITY)
}

pub fn test_error_t() -> Outcome<TypeT> {
    Outcome::failure_of(test_error())
}

// ============================================================================
// Assertions
// ============================================================================

#[track_caller]
pub fn assert_test_error<T: std::fmt::Debug>(outcome: &Outcome<T>) {
    let failure = outcome.failure().expect("expected a failure");
    assert_eq!(failure.code(), CODE);
    assert_eq!(failure.message(), Some(MESSAGE));
    assert_eq!(failure.entity_type(), Some(ENTITY));
    assert!(!failure.is_unhandled());
}
