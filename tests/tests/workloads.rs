mod utils;
#[allow(unused)]
use utils::*;

use mock_ledger::InjectedFailure;
use overdrive::params::draw_safety_params;
use overdrive::prelude::*;
use overdrive_core::ConfigError;
use serde_json::json;

#[tokio::test]
async fn randomized_fields_stay_in_declared_ranges() {
    let (ledger, adapter) = sim();
    let mut workload = EvaluateSafetyWorkload::seeded(42);
    workload
        .initialize(0, 1, 0, json!({}), adapter)
        .await
        .unwrap();

    for _ in 0..1_000 {
        workload.submit().await;
    }

    let requests = ledger.recorded_requests().await;
    assert_eq!(requests.len(), 1_000);

    for request in &requests {
        assert_eq!(request.contract_id, "overtake_chaincode");
        assert_eq!(request.contract_function, "EvaluateSafety");
        assert!(!request.read_only);
        assert_eq!(request.contract_arguments.len(), 1);

        let value: serde_json::Value =
            serde_json::from_str(&request.contract_arguments[0]).unwrap();
        let field = |name: &str| value[name].as_f64().unwrap();
        assert!((5.0..15.0).contains(&field("relativeSpeed")));
        assert!((20.0..40.0).contains(&field("oncomingSpeed")));
        assert!((200.0..700.0).contains(&field("visibilityDistance")));
        assert!((30.0..80.0).contains(&field("overtakingDistance")));
        assert!((0.5..2.0).contains(&field("reactionTime")));
        assert!((5.0..15.0).contains(&field("safetyMargin")));
    }
}

#[tokio::test]
async fn fixed_tuple_is_forwarded_verbatim() {
    let (ledger, adapter) = sim();
    let mut workload = OvertakeProposalWorkload::new();
    workload
        .initialize(0, 1, 0, json!({}), adapter)
        .await
        .unwrap();

    workload.submit().await;

    let expected: Vec<String> = ["10.0", "5.0", "20.0", "30.0", "2.0", "1.5"]
        .map(String::from)
        .to_vec();
    assert_eq!(
        ledger.recorded_requests().await,
        vec![TransactionRequest::invoke(
            "overtakingcc",
            "InitiateOvertakeProposal",
            expected,
        )]
    );
}

#[tracing_test::traced_test]
#[tokio::test]
async fn adapter_failure_never_escapes_submit() {
    let (ledger, adapter) = sim();
    let mut workload = EvaluateSafetyWorkload::seeded(7);
    workload
        .initialize(0, 1, 0, json!({}), adapter)
        .await
        .unwrap();

    ledger
        .fail_next_with(InjectedFailure::Transport(
            "connection reset by peer".to_string(),
        ))
        .await;
    workload.submit().await;

    assert!(logs_contain("failed to submit EvaluateSafety transaction"));
    assert!(logs_contain("connection reset by peer"));

    // The worker keeps accepting submissions after the failure.
    workload.submit().await;
    assert_eq!(ledger.request_count().await, 2);
}

#[tracing_test::traced_test]
#[tokio::test]
async fn lifecycle_phases_never_regress() {
    let (ledger, adapter) = sim();
    let mut workload = OvertakeProposalWorkload::new();
    assert_eq!(workload.phase(), LifecyclePhase::Uninitialized);

    // Submitting before initialize is a logged no-op, not a crash.
    workload.submit().await;
    assert!(logs_contain("outside the Ready phase"));
    assert_eq!(workload.phase(), LifecyclePhase::Uninitialized);
    assert_eq!(ledger.request_count().await, 0);

    workload
        .initialize(0, 1, 0, json!({}), adapter)
        .await
        .unwrap();
    assert_eq!(workload.phase(), LifecyclePhase::Ready);

    workload.submit().await;
    workload.cleanup().await;
    assert_eq!(workload.phase(), LifecyclePhase::Terminated);

    // Submitting after cleanup is equally harmless.
    workload.submit().await;
    assert_eq!(ledger.request_count().await, 1);
}

#[tokio::test]
async fn wrong_arity_is_rejected_at_initialize() {
    let (_ledger, adapter) = sim();
    let mut workload = OvertakeProposalWorkload::with_args(vec!["10.0".to_string()]);

    let err = workload
        .initialize(0, 1, 0, json!({}), adapter)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Config(ConfigError::ArityMismatch {
            expected: 6,
            actual: 1,
            ..
        })
    ));
    assert_eq!(workload.phase(), LifecyclePhase::Uninitialized);
}

#[tokio::test]
async fn seeded_workloads_draw_identical_streams() {
    let (first_ledger, first_adapter) = sim();
    let (second_ledger, second_adapter) = sim();

    let mut first = EvaluateSafetyWorkload::seeded(42);
    let mut second = EvaluateSafetyWorkload::seeded(42);
    first
        .initialize(0, 1, 0, json!({}), first_adapter)
        .await
        .unwrap();
    second
        .initialize(0, 1, 0, json!({}), second_adapter)
        .await
        .unwrap();

    first.submit().await;
    second.submit().await;

    assert_eq!(
        first_ledger.recorded_requests().await,
        second_ledger.recorded_requests().await
    );
}

#[tokio::test]
async fn randomized_positional_tuple_is_accepted() {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    let mut rng = SmallRng::seed_from_u64(9);
    let params = draw_safety_params(&mut rng);

    let (ledger, adapter) = sim();
    let mut workload = OvertakeProposalWorkload::with_args(params.positional());
    workload
        .initialize(0, 1, 0, json!({}), adapter)
        .await
        .unwrap();
    workload.submit().await;

    assert_eq!(ledger.proposal_count().await, 1);
}
