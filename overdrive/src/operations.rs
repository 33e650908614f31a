//! Thin positional wrappers over the ledger-SDK contract surface.
//!
//! Argument order is the remote function's contract and is not validated
//! here beyond arity; a reordered tuple produces a well-formed call with
//! wrong semantics.

use overdrive_core::{LedgerContract, SubmitError, CHECK_PROPOSAL_STATUS, INITIATE_OVERTAKE_PROPOSAL};
use tracing::info;

/// Start an overtaking proposal.
///
/// Positional order: `[Dv, Do, Vr, Vo, Tr, Sm]`. Returns the decoded
/// result string from the contract.
pub async fn initiate_overtake_proposal(
    contract: &dyn LedgerContract,
    args: &[String; 6],
) -> Result<String, SubmitError> {
    let result = contract
        .submit_transaction(INITIATE_OVERTAKE_PROPOSAL, args.as_slice())
        .await?;
    let decoded = String::from_utf8_lossy(&result).into_owned();
    info!("proposal initiated: {decoded}");
    Ok(decoded)
}

/// Look up the current status of a stored proposal. Read-only evaluation,
/// no state mutation.
pub async fn check_proposal_status(
    contract: &dyn LedgerContract,
    proposal_id: &str,
) -> Result<String, SubmitError> {
    let result = contract
        .evaluate_transaction(CHECK_PROPOSAL_STATUS, &[proposal_id.to_string()])
        .await?;
    let decoded = String::from_utf8_lossy(&result).into_owned();
    info!("proposal status: {decoded}");
    Ok(decoded)
}
