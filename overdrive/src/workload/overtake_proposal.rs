use crate::params::ParamPolicy;
use crate::submitter::submit_guarded;
use crate::workload::{LifecyclePhase, WorkloadModule};
use async_trait::async_trait;
use overdrive_core::{
    FunctionSignature, SubmitError, SutAdapter, TransactionRequest, WorkloadConfig,
    DEFAULT_CHANNEL, INITIATE_OVERTAKE_PROPOSAL, PROPOSAL_CONTRACT,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// The comparative-run tuple: `[Dv, Do, Vr, Vo, Tr, Sm]`.
const FIXED_ARGS: [&str; 6] = ["10.0", "5.0", "20.0", "30.0", "2.0", "1.5"];

/// Fixed-policy workload against the `InitiateOvertakeProposal` function.
///
/// Submits the same positional tuple on every call, so throughput numbers
/// are not skewed by input-dependent branching in the contract.
pub struct OvertakeProposalWorkload {
    inner: Inner,
    args: Vec<String>,
}

enum Inner {
    Uninitialized,
    Ready(Worker),
    Terminated,
}

struct Worker {
    worker_index: u64,
    config: WorkloadConfig,
    policy: ParamPolicy,
    adapter: Arc<dyn SutAdapter>,
    // Never drawn from under the fixed policy, but the generator interface
    // is shared with the randomized variant.
    rng: SmallRng,
}

impl OvertakeProposalWorkload {
    pub fn new() -> Self {
        Self::with_args(FIXED_ARGS.iter().map(|s| s.to_string()).collect())
    }

    /// Use a custom fixed tuple. The tuple is validated against the
    /// function signature at initialize time.
    pub fn with_args(args: Vec<String>) -> Self {
        Self {
            inner: Inner::Uninitialized,
            args,
        }
    }
}

impl Default for OvertakeProposalWorkload {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkloadModule for OvertakeProposalWorkload {
    async fn initialize(
        &mut self,
        worker_index: u64,
        total_workers: u64,
        round_index: u64,
        _round_args: Value,
        adapter: Arc<dyn SutAdapter>,
    ) -> Result<(), SubmitError> {
        let config = WorkloadConfig::new(
            PROPOSAL_CONTRACT,
            DEFAULT_CHANNEL,
            FunctionSignature::positional(INITIATE_OVERTAKE_PROPOSAL, 6),
        );

        // The tuple never changes, so a mismatch is caught here instead of
        // on the first submission.
        config.signature.check(&self.args)?;

        debug!(
            worker_index,
            total_workers, round_index, "initializing InitiateOvertakeProposal workload"
        );

        self.inner = Inner::Ready(Worker {
            worker_index,
            config,
            policy: ParamPolicy::Fixed(self.args.clone()),
            adapter,
            rng: SmallRng::from_entropy(),
        });

        Ok(())
    }

    async fn submit(&mut self) {
        let Inner::Ready(worker) = &mut self.inner else {
            error!("InitiateOvertakeProposal submit called outside the Ready phase");
            return;
        };
        let Worker {
            config,
            policy,
            adapter,
            rng,
            ..
        } = worker;

        submit_guarded(INITIATE_OVERTAKE_PROPOSAL, async {
            let args = policy.generate(config.signature.encoding, rng)?;
            let request =
                TransactionRequest::invoke(&config.contract_id, &config.signature.function, args);
            adapter.send_request(request).await
        })
        .await;
    }

    async fn cleanup(&mut self) {
        if let Inner::Ready(worker) = &self.inner {
            debug!(worker.worker_index, "InitiateOvertakeProposal workload cleanup");
        }
        self.inner = Inner::Terminated;
    }

    fn phase(&self) -> LifecyclePhase {
        match self.inner {
            Inner::Uninitialized => LifecyclePhase::Uninitialized,
            Inner::Ready(_) => LifecyclePhase::Ready,
            Inner::Terminated => LifecyclePhase::Terminated,
        }
    }
}
