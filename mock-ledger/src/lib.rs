//! In-process simulated ledger for the overdrive test-suites and demos.
//!
//! Stands in for the remote chaincode endpoint: dispatches on function
//! name, keeps a proposal store, records every request for assertions, and
//! fails on demand. No ordering, endorsement, or consensus is simulated;
//! a request either executes against the in-memory state or is rejected.

use async_trait::async_trait;
use overdrive_core::{
    LedgerContract, SafetyParams, SubmissionOutcome, SubmitError, SutAdapter, TransactionRequest,
    CHECK_PROPOSAL_STATUS, EVALUATE_SAFETY, INITIATE_OVERTAKE_PROPOSAL, PROPOSAL_CONTRACT,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::debug;

/// Failure queued for the next request, whatever it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectedFailure {
    Transport(String),
    Contract(String),
}

/// A stored overtaking proposal and its decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Proposal {
    pub params: SafetyParams,
    pub status: String,
}

#[derive(Default)]
pub struct SimLedger {
    proposals: Mutex<HashMap<String, Proposal>>,
    requests: Mutex<Vec<TransactionRequest>>,
    next_id: AtomicU64,
    fail_next: Mutex<Option<InjectedFailure>>,
}

impl SimLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a failure for the next request.
    pub async fn fail_next_with(&self, failure: InjectedFailure) {
        *self.fail_next.lock().await = Some(failure);
    }

    /// Every request seen so far, in arrival order. Failed attempts are
    /// recorded too.
    pub async fn recorded_requests(&self) -> Vec<TransactionRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    pub async fn proposal(&self, id: &str) -> Option<Proposal> {
        self.proposals.lock().await.get(id).cloned()
    }

    pub async fn proposal_count(&self) -> usize {
        self.proposals.lock().await.len()
    }

    /// Pre-populate a proposal, for tests that only exercise the read path.
    pub async fn seed_proposal(&self, id: &str, params: SafetyParams, status: &str) {
        self.proposals.lock().await.insert(
            id.to_string(),
            Proposal {
                params,
                status: status.to_string(),
            },
        );
    }

    async fn record(&self, request: &TransactionRequest) {
        self.requests.lock().await.push(request.clone());
    }

    async fn dispatch(
        &self,
        function: &str,
        args: &[String],
        read_only: bool,
    ) -> Result<Vec<u8>, SubmitError> {
        if let Some(failure) = self.fail_next.lock().await.take() {
            return Err(match failure {
                InjectedFailure::Transport(msg) => SubmitError::Transport(msg),
                InjectedFailure::Contract(msg) => SubmitError::Contract(msg),
            });
        }

        match function {
            EVALUATE_SAFETY => {
                reject_query(function, read_only)?;
                let payload = single_arg(function, args)?;
                let params: SafetyParams = serde_json::from_str(payload).map_err(|err| {
                    SubmitError::Contract(format!("invalid {function} payload: {err}"))
                })?;

                Ok(safety_window(&params).to_string().into_bytes())
            }

            INITIATE_OVERTAKE_PROPOSAL => {
                reject_query(function, read_only)?;
                let params = positional_params(function, args)?;
                let status = if safety_window(&params) {
                    "Pending"
                } else {
                    "Rejected"
                };

                let id = format!("proposal-{}", self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
                debug!("storing {id} with status {status}");
                self.proposals.lock().await.insert(
                    id.clone(),
                    Proposal {
                        params,
                        status: status.to_string(),
                    },
                );

                Ok(id.into_bytes())
            }

            CHECK_PROPOSAL_STATUS => {
                if !read_only {
                    return Err(SubmitError::Contract(format!(
                        "{function} must be evaluated, not submitted"
                    )));
                }
                let id = single_arg(function, args)?;
                match self.proposals.lock().await.get(id) {
                    Some(proposal) => Ok(proposal.status.clone().into_bytes()),
                    None => Err(SubmitError::Contract(format!(
                        "proposal {id} does not exist"
                    ))),
                }
            }

            other => Err(SubmitError::Contract(format!(
                "function {other} does not exist"
            ))),
        }
    }
}

#[async_trait]
impl SutAdapter for SimLedger {
    async fn send_request(
        &self,
        request: TransactionRequest,
    ) -> Result<SubmissionOutcome, SubmitError> {
        self.record(&request).await;
        let payload = self
            .dispatch(
                &request.contract_function,
                &request.contract_arguments,
                request.read_only,
            )
            .await?;

        Ok(SubmissionOutcome::new(payload))
    }
}

#[async_trait]
impl LedgerContract for SimLedger {
    async fn submit_transaction(
        &self,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, SubmitError> {
        self.record(&TransactionRequest::invoke(
            PROPOSAL_CONTRACT,
            function,
            args.to_vec(),
        ))
        .await;
        self.dispatch(function, args, false).await
    }

    async fn evaluate_transaction(
        &self,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, SubmitError> {
        self.record(&TransactionRequest::query(
            PROPOSAL_CONTRACT,
            function,
            args.to_vec(),
        ))
        .await;
        self.dispatch(function, args, true).await
    }
}

/// The overtaking window check: time gained on the visible stretch must
/// exceed reaction time plus exposure to oncoming traffic plus the margin.
fn safety_window(p: &SafetyParams) -> bool {
    (p.visibility_distance - p.overtaking_distance) / p.relative_speed
        > p.reaction_time + p.overtaking_distance / p.oncoming_speed + p.safety_margin
}

fn reject_query(function: &str, read_only: bool) -> Result<(), SubmitError> {
    if read_only {
        return Err(SubmitError::Contract(format!(
            "{function} mutates state and cannot be evaluated"
        )));
    }
    Ok(())
}

fn single_arg<'a>(function: &str, args: &'a [String]) -> Result<&'a str, SubmitError> {
    match args {
        [arg] => Ok(arg),
        _ => Err(SubmitError::Contract(format!(
            "{function} expects 1 argument, got {}",
            args.len()
        ))),
    }
}

fn positional_params(function: &str, args: &[String]) -> Result<SafetyParams, SubmitError> {
    let [dv, do_, vr, vo, tr, sm] = args else {
        return Err(SubmitError::Contract(format!(
            "{function} expects 6 arguments, got {}",
            args.len()
        )));
    };

    let parse = |name: &str, raw: &String| {
        raw.parse::<f64>().map_err(|_| {
            SubmitError::Contract(format!("{function}: argument {name} is not a number: {raw}"))
        })
    };

    Ok(SafetyParams {
        visibility_distance: parse("Dv", dv)?,
        overtaking_distance: parse("Do", do_)?,
        relative_speed: parse("Vr", vr)?,
        oncoming_speed: parse("Vo", vo)?,
        reaction_time: parse("Tr", tr)?,
        safety_margin: parse("Sm", sm)?,
    })
}
