use httpwait_core::{PolicyFailure, PollResult, Reporter};

/// Record the run outputs and apply the stop-on-error policy.
///
/// Outputs are always recorded, in the order `response`, `duration`,
/// `result`, `http-status`, even when the policy fails the run.
pub fn report_result(
    result: &PollResult,
    stop_on_error: bool,
    reporter: &dyn Reporter,
) -> Result<(), PolicyFailure> {
    let response = result
        .response
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    let http_status = result
        .http_status
        .map(|s| s.to_string())
        .unwrap_or_default();

    reporter.record_output("response", &response);
    reporter.record_output("duration", &result.duration_ms().to_string());
    reporter.record_output("result", result.result.as_str());
    reporter.record_output("http-status", &http_status);

    if stop_on_error && !result.result.is_ok() {
        return Err(PolicyFailure {
            result: result.result,
        });
    }
    Ok(())
}
