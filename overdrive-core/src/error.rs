use thiserror::Error;

/// Failure classes a submission attempt can surface.
///
/// None of these are allowed to escape a workload's `submit` call; they are
/// caught there, logged, and the attempt counts as completed-but-failed.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Transmission failure between the client and the ledger network.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The remote function rejected the transaction.
    #[error("contract rejected transaction: {0}")]
    Contract(String),

    /// The argument payload could not be constructed.
    #[error("argument encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The arguments do not match the declared function signature.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{function} expects {expected} positional arguments, got {actual}")]
    ArityMismatch {
        function: String,
        expected: usize,
        actual: usize,
    },

    #[error("{function} expects a single JSON object argument")]
    PayloadShape { function: String },
}
