//! Drives both workload variants through a short fixed batch against the
//! simulated ledger, the way an external round scheduler would.

use anyhow::Result;
use mock_ledger::SimLedger;
use overdrive::prelude::*;
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

const BATCH: usize = 25;

#[tokio::main]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_env_filter("overdrive=debug,mock_ledger=debug,overtake_round=info")
        .init();

    let ledger = Arc::new(SimLedger::new());
    let adapter: Arc<dyn SutAdapter> = ledger.clone();

    let mut randomized = EvaluateSafetyWorkload::new();
    randomized
        .initialize(0, 1, 0, json!({}), adapter.clone())
        .await?;
    for _ in 0..BATCH {
        randomized.submit().await;
    }
    randomized.cleanup().await;

    let mut fixed = OvertakeProposalWorkload::new();
    fixed.initialize(0, 1, 1, json!({}), adapter).await?;
    for _ in 0..BATCH {
        fixed.submit().await;
    }
    fixed.cleanup().await;

    info!(
        "round complete: {} requests recorded, {} proposals stored",
        ledger.request_count().await,
        ledger.proposal_count().await,
    );

    // The operation-helper path against the same ledger.
    let args: [String; 6] = ["600.0", "40.0", "10.0", "30.0", "1.0", "6.0"].map(String::from);
    let id = initiate_overtake_proposal(ledger.as_ref(), &args).await?;
    let status = check_proposal_status(ledger.as_ref(), &id).await?;
    info!("{id} is {status}");

    Ok(())
}
