use sluice::{Failure, FailureKind, Outcome, entity_name, exception};
use std::sync::Arc;

mod common;
use common::{TypeR, TypeT, test_error, test_error_t};

#[test]
fn test_forward_moves_every_field() {
    let ex = exception("socket closed");
    let failure = Failure::unhandled("NET")
        .with_message("read failed")
        .with_entity_type("Socket")
        .with_exception(ex.clone());

    let forwarded: Outcome<TypeR> = failure.clone().forward();
    let moved = forwarded.into_failure();

    assert_eq!(moved, failure);
    assert_eq!(moved.kind(), FailureKind::Unhandled);
    assert!(Arc::ptr_eq(moved.exception().unwrap(), &ex));
}

#[test]
fn test_forward_keeps_missing_entity() {
    let forwarded: Outcome<TypeR> = Failure::error("E").forward();
    assert_eq!(forwarded.failure().unwrap().entity_type(), None);
}

#[test]
fn test_outcome_forward_hands_back_success() {
    let success = Outcome::success(TypeT { id: 1 });
    assert_eq!(success.clone().forward::<TypeR>(), Err(success));

    let retyped = test_error_t().forward::<TypeR>().unwrap();
    assert_eq!(retyped.into_failure(), test_error());
}

#[test]
fn test_result_interop_with_question_mark() {
    fn lookup(id: u32) -> Result<TypeR, Failure> {
        let t = Outcome::success(TypeT { id })
            .pipe(|t| (t.id != 0).then_some(t))
            .into_result()?;
        Ok(TypeR::from(t))
    }

    assert_eq!(lookup(4).unwrap().label, "r-4");
    assert_eq!(lookup(0).unwrap_err().entity_type(), Some("TypeT"));

    let back: Outcome<TypeR> = lookup(4).into();
    assert!(back.is_success());
}

#[test]
fn test_entity_names() {
    assert_eq!(entity_name::<TypeT>().as_deref(), Some("TypeT"));
    assert_eq!(entity_name::<Vec<TypeR>>().as_deref(), Some("Vec<TypeR>"));
    assert_eq!(entity_name::<()>(), None);
}

#[tokio::test]
async fn test_outcome_is_awaitable() {
    let outcome = test_error_t().await;
    assert_eq!(outcome.into_failure(), test_error());
}
