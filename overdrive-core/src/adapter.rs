use crate::{SubmitError, TransactionRequest};
use async_trait::async_trait;

/// Opaque result of a submission.
///
/// The payload is only ever decoded for logging; nothing structured is
/// retained on this side of the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub payload: Vec<u8>,
}

impl SubmissionOutcome {
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Lossy UTF-8 decode of the returned byte payload.
    pub fn decode(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

/// Request-submission capability of the system under test.
///
/// Any concrete backend client implements this one operation; workloads
/// never see anything else of the client.
#[async_trait]
pub trait SutAdapter: Send + Sync {
    async fn send_request(
        &self,
        request: TransactionRequest,
    ) -> Result<SubmissionOutcome, SubmitError>;
}

/// Ledger-SDK style contract handle.
///
/// `submit_transaction` mutates ledger state and goes through ordering;
/// `evaluate_transaction` reads current state without mutation. Both return
/// a byte payload convertible to a string.
#[async_trait]
pub trait LedgerContract: Send + Sync {
    async fn submit_transaction(
        &self,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, SubmitError>;

    async fn evaluate_transaction(
        &self,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, SubmitError>;
}
