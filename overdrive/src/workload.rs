//! Workload lifecycle surface driven by an external round scheduler.
//!
//! The scheduler calls [`WorkloadModule::initialize`] once per round per
//! worker, [`WorkloadModule::submit`] once per generated transaction, and
//! [`WorkloadModule::cleanup`] once at the end. Concurrency across workers
//! and rate control live entirely on the scheduler's side; a workload
//! instance only ever sees its own sequential calls.

pub mod evaluate_safety;
pub mod overtake_proposal;

use async_trait::async_trait;
use overdrive_core::{SubmitError, SutAdapter};
use serde_json::Value;
use std::sync::Arc;

/// Lifecycle position of a worker's workload instance.
///
/// `Uninitialized → Ready → Terminated`, with no way back. Submissions
/// repeat an unbounded number of times while `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Uninitialized,
    Ready,
    Terminated,
}

/// One benchmark workload as the external scheduler drives it.
#[async_trait]
pub trait WorkloadModule: Send {
    /// Capture worker identity, the adapter handle, and contract/channel
    /// identifiers, and validate the variant's argument convention against
    /// its declared signature. No network I/O happens here.
    async fn initialize(
        &mut self,
        worker_index: u64,
        total_workers: u64,
        round_index: u64,
        round_args: Value,
        adapter: Arc<dyn SutAdapter>,
    ) -> Result<(), SubmitError>;

    /// Generate one transaction request and forward it through the adapter.
    ///
    /// A failed attempt is logged and counted, never raised: one bad
    /// transaction must not take down the worker.
    async fn submit(&mut self);

    /// Release per-worker resources. A no-op is permitted when none were
    /// acquired.
    async fn cleanup(&mut self);

    fn phase(&self) -> LifecyclePhase;
}
