#![forbid(unsafe_code)]

//! Runtime for `httpwait`: one HTTP request per attempt, a bounded poll loop
//! around it, and reporting of the final result.

pub mod executor;
pub mod poll;
pub mod report;

use httpwait_core::{normalize, ConfigError, PolicyFailure, PollResult, RawInputs, Reporter, RunError};

pub use crate::executor::{HttpClient, HttpError, ReqwestHttpClient};
pub use crate::poll::{PollState, Poller};
pub use crate::report::report_result;

/// A finished run: the poll result plus the stop-on-error verdict.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub result: PollResult,
    pub verdict: Result<(), PolicyFailure>,
}

impl RunOutcome {
    pub fn into_result(self) -> Result<PollResult, RunError> {
        self.verdict?;
        Ok(self.result)
    }
}

/// Normalize inputs, poll, and record outputs.
///
/// Only configuration errors abort before polling; the stop-on-error
/// verdict is returned alongside the result so callers can still render it.
pub async fn run(
    raw: &RawInputs,
    http: &dyn HttpClient,
    reporter: &dyn Reporter,
) -> Result<RunOutcome, ConfigError> {
    let config = normalize(raw, reporter)?;
    let result = Poller::new(http, reporter).run(&config).await;
    let verdict = report_result(&result, config.stop_on_error, reporter);
    Ok(RunOutcome { result, verdict })
}
