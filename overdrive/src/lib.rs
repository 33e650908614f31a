//! Benchmark workloads for a vehicle-overtaking ledger contract.
//!
//! An external harness owns worker pools, rate control, and statistics;
//! this crate provides what the harness drives: a workload lifecycle
//! ([`WorkloadModule`]), parameter generation under randomized or fixed
//! policies, guarded transaction submission, and thin operation helpers
//! over a ledger-SDK contract handle.

pub mod operations;
pub mod params;
pub mod workload;

pub(crate) mod submitter;

pub use workload::evaluate_safety::EvaluateSafetyWorkload;
pub use workload::overtake_proposal::OvertakeProposalWorkload;
pub use workload::{LifecyclePhase, WorkloadModule};

pub mod prelude {
    pub use crate::operations::{check_proposal_status, initiate_overtake_proposal};
    pub use crate::params::ParamPolicy;
    pub use crate::workload::evaluate_safety::EvaluateSafetyWorkload;
    pub use crate::workload::overtake_proposal::OvertakeProposalWorkload;
    pub use crate::workload::{LifecyclePhase, WorkloadModule};
    pub use overdrive_core::{
        ArgEncoding, LedgerContract, SubmissionOutcome, SubmitError, SutAdapter,
        TransactionRequest,
    };
}
