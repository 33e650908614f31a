use mock_ledger::SimLedger;
use overdrive::operations::{check_proposal_status, initiate_overtake_proposal};
use overdrive_core::{SafetyParams, SubmitError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn pending_params() -> SafetyParams {
    SafetyParams {
        relative_speed: 10.0,
        oncoming_speed: 30.0,
        visibility_distance: 600.0,
        overtaking_distance: 40.0,
        reaction_time: 1.0,
        safety_margin: 6.0,
    }
}

#[tokio::test]
async fn initiate_then_check_round_trips() -> anyhow::Result<()> {
    init_tracing();
    let ledger = SimLedger::new();
    let args: [String; 6] = ["600.0", "40.0", "10.0", "30.0", "1.0", "6.0"].map(String::from);

    let id = initiate_overtake_proposal(&ledger, &args).await?;
    assert_eq!(id, "proposal-1");

    let status = check_proposal_status(&ledger, &id).await?;
    assert_eq!(status, "Pending");
    Ok(())
}

#[tokio::test]
async fn check_status_uses_query_semantics() -> anyhow::Result<()> {
    init_tracing();
    let ledger = SimLedger::new();
    ledger
        .seed_proposal("proposal-42", pending_params(), "Pending")
        .await;

    let status = check_proposal_status(&ledger, "proposal-42").await?;
    assert_eq!(status, "Pending");

    let requests = ledger.recorded_requests().await;
    assert_eq!(requests.len(), 1);
    assert!(requests[0].read_only);
    assert_eq!(requests[0].contract_function, "CheckProposalStatus");
    assert_eq!(requests[0].contract_arguments, vec!["proposal-42"]);
    Ok(())
}

#[tokio::test]
async fn missing_proposal_surfaces_contract_rejection() {
    init_tracing();
    let ledger = SimLedger::new();

    let err = check_proposal_status(&ledger, "proposal-404")
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::Contract(_)));
    assert!(err.to_string().contains("does not exist"));
}

#[tokio::test]
async fn argument_order_reaches_the_contract_untouched() -> anyhow::Result<()> {
    init_tracing();
    let ledger = SimLedger::new();
    let args: [String; 6] = ["600.0", "40.0", "10.0", "30.0", "1.0", "6.0"].map(String::from);

    initiate_overtake_proposal(&ledger, &args).await?;

    let recorded = &ledger.recorded_requests().await[0];
    assert_eq!(recorded.contract_arguments, args.to_vec());
    assert!(!recorded.read_only);

    // The stored proposal reflects the positional decode [Dv, Do, Vr, Vo, Tr, Sm].
    let proposal = ledger.proposal("proposal-1").await.unwrap();
    assert_eq!(proposal.params.visibility_distance, 600.0);
    assert_eq!(proposal.params.overtaking_distance, 40.0);
    assert_eq!(proposal.params.relative_speed, 10.0);
    assert_eq!(proposal.params.oncoming_speed, 30.0);
    assert_eq!(proposal.params.reaction_time, 1.0);
    assert_eq!(proposal.params.safety_margin, 6.0);
    Ok(())
}
