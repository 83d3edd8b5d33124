use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};
use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::error::AnalysisError;
use crate::models::{DetectionOutcome, DiagnosisOutcome};
use crate::orchestrator::{AnalysisEvent, Command};

/// The two operations the external analysis backend offers.
/// Implementations submit the file once and never retry.
#[allow(async_fn_in_trait)]
pub trait AnalysisClient {
    type File;

    async fn detect_optic_disc(&self, file: &Self::File)
    -> Result<DetectionOutcome, AnalysisError>;

    async fn diagnose_glaucoma(&self, file: &Self::File)
    -> Result<DiagnosisOutcome, AnalysisError>;
}

/// Runs one orchestrator command and tags the completion with its run.
pub async fn execute<C: AnalysisClient>(client: &C, command: Command<C::File>) -> AnalysisEvent {
    match command {
        Command::Detect { run, file } => {
            debug!("Submitting optic disc detection for run {}", run);
            AnalysisEvent::Detected {
                run,
                result: client.detect_optic_disc(&file).await,
            }
        }
        Command::Diagnose { run, file } => {
            debug!("Submitting glaucoma diagnosis for run {}", run);
            AnalysisEvent::Diagnosed {
                run,
                result: client.diagnose_glaucoma(&file).await,
            }
        }
    }
}

/// Resolves to `work`'s result, or to [`AnalysisError::Timeout`] if `deadline` fires first.
pub async fn with_deadline<T, W, D>(work: W, deadline: D, timeout_ms: u32) -> Result<T, AnalysisError>
where
    W: Future<Output = Result<T, AnalysisError>>,
    D: Future<Output = ()>,
{
    let work = pin!(work);
    let deadline = pin!(deadline);

    match select(work, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(AnalysisError::Timeout {
            after_ms: timeout_ms,
        }),
    }
}

/// Turns a finished backend response into an outcome.
/// Every status outside 2xx is a failure, whatever the body says.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, AnalysisError> {
    if !(200..300).contains(&status) {
        warn!("Backend answered {}: {}", status, body);
        return Err(AnalysisError::Status { status });
    }
    serde_json::from_str(body).map_err(|e| AnalysisError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    #[test]
    fn work_finishing_first_wins() {
        let result = block_on(with_deadline(ready(Ok(5)), pending::<()>(), 1000));
        assert_eq!(result, Ok(5));
    }

    #[test]
    fn deadline_firing_first_times_out() {
        let result: Result<u8, _> = block_on(with_deadline(pending(), ready(()), 250));
        assert_eq!(result, Err(AnalysisError::Timeout { after_ms: 250 }));
    }

    #[test]
    fn work_errors_pass_through() {
        let result: Result<u8, _> = block_on(with_deadline(
            ready(Err(AnalysisError::Status { status: 502 })),
            pending::<()>(),
            1000,
        ));
        assert_eq!(result, Err(AnalysisError::Status { status: 502 }));
    }

    #[test]
    fn success_body_decodes_into_outcome() {
        let outcome: DiagnosisOutcome =
            decode_response(200, r#"{ "isPositive": false, "confidence": 71.5 }"#).unwrap();
        assert!(!outcome.is_positive);
        assert_eq!(outcome.confidence, 71.5);
    }

    #[test]
    fn any_non_success_status_fails_even_with_valid_body() {
        let body = r#"{ "isPositive": true, "confidence": 93 }"#;
        for status in [199, 300, 404, 422, 500, 503] {
            let result: Result<DiagnosisOutcome, _> = decode_response(status, body);
            assert_eq!(result, Err(AnalysisError::Status { status }));
        }
        let result: Result<DiagnosisOutcome, _> = decode_response(201, body);
        assert!(result.is_ok());
    }

    #[test]
    fn undecodable_body_is_a_decode_error() {
        let result: Result<DetectionOutcome, _> = decode_response(200, "<html>Bad gateway</html>");
        assert!(matches!(result, Err(AnalysisError::Decode(_))));

        let result: Result<DetectionOutcome, _> = decode_response(200, r#"{ "detections": [] }"#);
        assert!(matches!(result, Err(AnalysisError::Decode(_))));
    }
}
