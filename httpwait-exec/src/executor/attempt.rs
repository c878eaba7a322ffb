use std::time::Duration;

use httpwait_core::{AttemptFailure, AttemptOutcome, BodyReadMode, Reporter, RequestSpec};
use tracing::debug;

use crate::executor::body::decode_body;
use crate::executor::http::{HttpClient, HttpError, HttpRequestParts};

/// Everything one attempt needs besides the request itself.
#[derive(Debug, Clone, Copy)]
pub struct AttemptSettings {
    pub timeout: Duration,
    pub body_mode: BodyReadMode,
    pub html_to_text: bool,
}

/// Issue exactly one request and classify what happened.
///
/// Never fails: transport and body errors come back as
/// [`AttemptOutcome::Failed`] after being logged.
pub async fn execute_attempt(
    http: &dyn HttpClient,
    reporter: &dyn Reporter,
    request: &RequestSpec,
    settings: AttemptSettings,
) -> AttemptOutcome {
    let parts = HttpRequestParts::from(request);
    let read_body = settings.body_mode != BodyReadMode::None;
    debug!(method = %parts.method, url = %parts.url, "sending request");

    let resp = match http.send(parts, settings.timeout, read_body).await {
        Ok(resp) => resp,
        Err(e) => {
            let failure = classify(e);
            log_failure(reporter, &failure, settings.timeout);
            return AttemptOutcome::Failed(failure);
        }
    };

    match &resp.reason {
        Some(reason) => reporter.info(&format!("Status: {}, {reason}", resp.status)),
        None => reporter.info(&format!("Status: {}", resp.status)),
    }

    let raw_body = match resp.body {
        Ok(raw) => raw,
        Err(e) => {
            let failure = classify(e);
            log_failure(reporter, &failure, settings.timeout);
            return AttemptOutcome::Failed(failure);
        }
    };

    match decode_body(settings.body_mode, settings.html_to_text, raw_body.as_deref()) {
        Ok(body) => {
            if let Some(body) = &body {
                reporter.info(&format!("Response: {body}"));
            }
            AttemptOutcome::Ok {
                status: resp.status,
                reason: resp.reason,
                body,
            }
        }
        Err(failure) => {
            log_failure(reporter, &failure, settings.timeout);
            AttemptOutcome::Failed(failure)
        }
    }
}

fn classify(err: HttpError) -> AttemptFailure {
    match err {
        HttpError::Timeout => AttemptFailure::Timeout,
        HttpError::Aborted => AttemptFailure::Aborted,
        HttpError::Network(msg) | HttpError::Other(msg) => AttemptFailure::Network(msg),
    }
}

fn log_failure(reporter: &dyn Reporter, failure: &AttemptFailure, timeout: Duration) {
    let message = match failure {
        AttemptFailure::Timeout => {
            format!("Timeout: no response within {} ms", timeout.as_millis())
        }
        AttemptFailure::Aborted => "Aborted: request was cancelled".to_string(),
        AttemptFailure::Network(msg) => format!("Network error: {msg}"),
        AttemptFailure::BodyParse(msg) => format!("Body parse error: {msg}"),
    };
    reporter.error(&message);
}
