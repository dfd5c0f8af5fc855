use sluice::{BoxOutcome, Outcome, PendingOutcome, testing::StepProbe};

mod common;
use common::{TypeR, TypeT, assert_test_error, success_t, test_error_t};

async fn load(id: u32) -> Outcome<TypeT> {
    Outcome::success(TypeT { id })
}

#[tokio::test]
async fn test_async_steps_on_settled_outcome() {
    let outcome = success_t()
        .map_async(async |t| TypeR::from(t))
        .await
        .pipe_async(async |r| Outcome::success(r.label.len()))
        .await;

    assert_eq!(outcome, Outcome::success(3));
}

#[tokio::test]
async fn test_in_flight_failure_skips_steps() {
    let probe = StepProbe::new();
    let outcome = test_error_t()
        .as_async()
        .pipe_async(async |t| {
            probe.hit();
            Outcome::success(TypeR::from(t))
        })
        .tap_async(async |_| probe.hit())
        .map(|r| r.label)
        .await;

    assert_test_error(&outcome);
    probe.assert_not_called();
}

#[tokio::test]
async fn test_chain_from_async_fn() {
    let probe = StepProbe::new();
    let outcome = load(3)
        .tap(|t| {
            probe.hit();
            assert_eq!(t.id, 3);
        })
        .map(TypeR::from)
        .pipe(|r| Some(r.label))
        .await;

    probe.assert_called_once();
    assert_eq!(outcome, Outcome::success("r-3".to_string()));
}

#[tokio::test]
async fn test_settled_and_in_flight_agree() {
    let settled = success_t()
        .map(TypeR::from)
        .pipe(|r| Outcome::success(r.label));

    let in_flight = success_t()
        .as_async()
        .map_async(async |t| TypeR::from(t))
        .pipe_async(async |r| Outcome::success(r.label))
        .await;

    assert_eq!(settled, in_flight);
}

#[tokio::test]
async fn test_steps_run_in_order() {
    let order = std::sync::Mutex::new(Vec::new());
    let outcome = Outcome::done()
        .as_async()
        .tap_async(async |_| {
            tokio::task::yield_now().await;
            order.lock().unwrap().push(1);
        })
        .tap(|_| order.lock().unwrap().push(2))
        .map_async(async |()| {
            order.lock().unwrap().push(3);
        })
        .await;

    assert!(outcome.is_success());
    assert_eq!(*order.lock().unwrap(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_boxed_chain() {
    fn build(id: u32) -> BoxOutcome<'static, TypeR> {
        Box::pin(load(id).map(TypeR::from))
    }

    let chains = vec![build(1), build(2)];
    let mut labels = Vec::new();
    for chain in chains {
        labels.push(chain.await.into_value().label);
    }
    assert_eq!(labels, vec!["r-1", "r-2"]);
}
