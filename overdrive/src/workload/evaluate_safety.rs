use crate::params::ParamPolicy;
use crate::submitter::submit_guarded;
use crate::workload::{LifecyclePhase, WorkloadModule};
use async_trait::async_trait;
use overdrive_core::{
    FunctionSignature, SubmitError, SutAdapter, TransactionRequest, WorkloadConfig,
    DEFAULT_CHANNEL, EVALUATE_SAFETY, SAFETY_CONTRACT,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// Randomized-policy workload against the `EvaluateSafety` function.
///
/// Every submission draws a fresh safety tuple from the declared ranges and
/// sends it as a single JSON payload on an invoke call.
pub struct EvaluateSafetyWorkload {
    inner: Inner,
    seed: Option<u64>,
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
    rng: SmallRng,
}

impl EvaluateSafetyWorkload {
    pub fn new() -> Self {
        Self {
            inner: Inner::Uninitialized,
            seed: None,
        }
    }

    /// Deterministic parameter stream, for comparative runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Inner::Uninitialized,
            seed: Some(seed),
        }
    }
}

impl Default for EvaluateSafetyWorkload {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkloadModule for EvaluateSafetyWorkload {
    async fn initialize(
        &mut self,
        worker_index: u64,
        total_workers: u64,
        round_index: u64,
        _round_args: Value,
        adapter: Arc<dyn SutAdapter>,
    ) -> Result<(), SubmitError> {
        let config = WorkloadConfig::new(
            SAFETY_CONTRACT,
            DEFAULT_CHANNEL,
            FunctionSignature::json_payload(EVALUATE_SAFETY),
        );

        debug!(
            worker_index,
            total_workers, round_index, "initializing EvaluateSafety workload"
        );

        // Decorrelate workers sharing a seed without losing determinism.
        let rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(worker_index)),
            None => SmallRng::from_entropy(),
        };

        self.inner = Inner::Ready(Worker {
            worker_index,
            config,
            policy: ParamPolicy::Randomized,
            adapter,
            rng,
        });

        Ok(())
    }

    async fn submit(&mut self) {
        let Inner::Ready(worker) = &mut self.inner else {
            error!("EvaluateSafety submit called outside the Ready phase");
            return;
        };
        let Worker {
            config,
            policy,
            adapter,
            rng,
            ..
        } = worker;

        submit_guarded(EVALUATE_SAFETY, async {
            let args = policy.generate(config.signature.encoding, rng)?;
            config.signature.check(&args)?;
            let request =
                TransactionRequest::invoke(&config.contract_id, &config.signature.function, args);
            adapter.send_request(request).await
        })
        .await;
    }

    async fn cleanup(&mut self) {
        if let Inner::Ready(worker) = &self.inner {
            debug!(worker.worker_index, "EvaluateSafety workload cleanup");
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
