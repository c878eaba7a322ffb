use httpwait_core::{AttemptOutcome, PollConfig, PollResult, PollStatus, Reporter, ResponseBody};
use tokio::time::Instant;
use tracing::{debug, info};

use crate::executor::{execute_attempt, AttemptSettings, HttpClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Polling,
    Succeeded,
    TimedOut,
    AttemptsExhausted,
}

impl PollState {
    pub fn status(&self) -> Option<PollStatus> {
        match self {
            PollState::Polling => None,
            PollState::Succeeded => Some(PollStatus::Ok),
            PollState::TimedOut => Some(PollStatus::Timeout),
            PollState::AttemptsExhausted => Some(PollStatus::MaxLoop),
        }
    }
}

/// Repeats the configured request until the desired status shows up, the
/// poll budget runs out, or the attempt ceiling is reached.
pub struct Poller<'a> {
    pub http: &'a dyn HttpClient,
    pub reporter: &'a dyn Reporter,
}

impl<'a> Poller<'a> {
    pub fn new(http: &'a dyn HttpClient, reporter: &'a dyn Reporter) -> Self {
        Self { http, reporter }
    }

    pub async fn run(&self, config: &PollConfig) -> PollResult {
        let timing = &config.timing;
        let settings = AttemptSettings {
            timeout: timing.single_attempt_timeout,
            body_mode: config.body_mode,
            html_to_text: config.html_to_text,
        };

        let start = Instant::now();
        let mut remaining = timing.max_attempts();
        let mut attempts = 0u64;
        let mut http_status = None;
        let mut response: Option<ResponseBody> = None;
        let mut state = PollState::Polling;

        while remaining > 0 {
            let outcome =
                execute_attempt(self.http, self.reporter, &config.request, settings).await;
            remaining -= 1;
            attempts += 1;

            http_status = outcome.status();
            if let AttemptOutcome::Ok { body: Some(body), .. } = outcome {
                response = Some(body);
            }

            if http_status == Some(config.desired_status) {
                state = PollState::Succeeded;
                break;
            }
            let elapsed = start.elapsed();
            if elapsed > timing.timeout {
                state = PollState::TimedOut;
                break;
            }
            if remaining == 0 {
                break;
            }
            debug!(
                attempt = attempts,
                remaining,
                elapsed_ms = elapsed.as_millis() as u64,
                "desired status not seen, waiting"
            );
            tokio::time::sleep(timing.waiting_time).await;
        }
        if state == PollState::Polling {
            state = PollState::AttemptsExhausted;
        }

        let result = state.status().unwrap_or(PollStatus::MaxLoop);
        let duration = start.elapsed();
        info!(
            result = %result,
            attempts,
            duration_ms = duration.as_millis() as u64,
            "polling finished"
        );
        PollResult {
            result,
            http_status,
            response,
            duration,
            attempts,
        }
    }
}
