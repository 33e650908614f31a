use overdrive_core::{SubmissionOutcome, SubmitError};
use std::future::Future;
#[allow(unused)]
use tracing::{debug, error};

/// What became of one submission attempt. The external harness owns real
/// statistics; this is only for callers that want to branch on the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubmitStatus {
    Success,
    Failed,
}

/// Run one submission attempt without letting a failure escape.
///
/// Every error class ends here: transport failures, contract rejections,
/// and encoding errors are logged under the operation label and counted,
/// and the worker moves on to its next submission.
pub(crate) async fn submit_guarded<F>(op: &str, attempt: F) -> SubmitStatus
where
    F: Future<Output = Result<SubmissionOutcome, SubmitError>>,
{
    match attempt.await {
        Ok(outcome) => {
            debug!("{op} returned: {}", outcome.decode());

            #[cfg(feature = "metrics")]
            metrics::counter!("overdrive.submit.success", "op" => op.to_string()).increment(1);

            SubmitStatus::Success
        }
        Err(err) => {
            error!("failed to submit {op} transaction: {err}");

            #[cfg(feature = "metrics")]
            metrics::counter!("overdrive.submit.error", "op" => op.to_string()).increment(1);

            SubmitStatus::Failed
        }
    }
}
