use httpwait_core::{PollResult, PollStatus, ResponseBody};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
pub struct PollSummary<'a> {
    pub result: PollStatus,
    pub http_status: Option<u16>,
    pub response: Option<&'a ResponseBody>,
    pub duration_ms: u64,
    pub attempts: u64,
}

impl<'a> From<&'a PollResult> for PollSummary<'a> {
    fn from(r: &'a PollResult) -> Self {
        Self {
            result: r.result,
            http_status: r.http_status,
            response: r.response.as_ref(),
            duration_ms: r.duration_ms(),
            attempts: r.attempts,
        }
    }
}

/// Text mode relies on the reporter lines already printed during the run,
/// so only the JSON summary is written here.
pub fn print_result<T: Serialize>(format: OutputFormat, result: &T) {
    if format == OutputFormat::Json {
        if let Ok(json) = serde_json::to_string(result) {
            println!("{json}");
        }
    }
}
