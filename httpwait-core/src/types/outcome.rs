use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// A response body read according to the configured [`BodyReadMode`](super::BodyReadMode).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Json(v) => write!(f, "{v}"),
            ResponseBody::Text(s) => f.write_str(s),
        }
    }
}

/// Why a single attempt did not produce a usable response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttemptFailure {
    #[error("timeout")]
    Timeout,
    #[error("aborted")]
    Aborted,
    #[error("network error: {0}")]
    Network(String),
    #[error("body parse error: {0}")]
    BodyParse(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    Ok {
        status: u16,
        reason: Option<String>,
        body: Option<ResponseBody>,
    },
    Failed(AttemptFailure),
}

impl AttemptOutcome {
    pub fn status(&self) -> Option<u16> {
        match self {
            AttemptOutcome::Ok { status, .. } => Some(*status),
            AttemptOutcome::Failed(_) => None,
        }
    }

    pub fn body(&self) -> Option<&ResponseBody> {
        match self {
            AttemptOutcome::Ok { body, .. } => body.as_ref(),
            AttemptOutcome::Failed(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PollStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "timeout")]
    Timeout,
    #[serde(rename = "maxLoop")]
    MaxLoop,
}

impl PollStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PollStatus::Ok => "OK",
            PollStatus::Timeout => "timeout",
            PollStatus::MaxLoop => "maxLoop",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, PollStatus::Ok)
    }
}

impl fmt::Display for PollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal result of a run, produced exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct PollResult {
    pub result: PollStatus,
    /// Status of the last attempt; `None` if it failed before a response arrived.
    pub http_status: Option<u16>,
    /// Last body that was read successfully, across all attempts.
    pub response: Option<ResponseBody>,
    pub duration: Duration,
    pub attempts: u64,
}

impl PollResult {
    pub fn duration_ms(&self) -> u64 {
        self.duration.as_millis() as u64
    }
}
