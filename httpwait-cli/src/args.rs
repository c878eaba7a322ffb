use clap::Args;
use httpwait_core::RawInputs;

use crate::output::OutputFormat;

/// What to request. Every flag falls back to the matching `INPUT_*`
/// variable that the GitHub Actions runner exports for action inputs.
#[derive(Debug, Args, Clone)]
pub struct RequestArgs {
    #[arg(long, env = "INPUT_URL", default_value = "", hide_default_value = true)]
    pub url: String,
    #[arg(long, env = "INPUT_METHOD", default_value = "", hide_default_value = true)]
    pub method: String,
    /// JSON object of request headers.
    #[arg(long, env = "INPUT_HEADERS", default_value = "", hide_default_value = true)]
    pub headers: String,
    #[arg(long, env = "INPUT_BODY", default_value = "", hide_default_value = true)]
    pub body: String,
    /// JSON, TEXT or empty to skip the body.
    #[arg(
        long,
        env = "INPUT_BODY-READING-METHOD",
        default_value = "",
        hide_default_value = true
    )]
    pub body_reading_method: String,
    #[arg(long, env = "INPUT_HTML-TO-TEXT", default_value = "", hide_default_value = true)]
    pub html_to_text: String,
    #[arg(long, env = "INPUT_HTTP-STATUS", default_value = "", hide_default_value = true)]
    pub http_status: String,
    #[arg(long, env = "INPUT_STOP-ON-ERROR", default_value = "", hide_default_value = true)]
    pub stop_on_error: String,
}

/// Timing inputs in milliseconds.
#[derive(Debug, Args, Clone)]
pub struct TimingArgs {
    #[arg(long, env = "INPUT_TIMEOUT", default_value = "", hide_default_value = true)]
    pub timeout: String,
    #[arg(
        long,
        env = "INPUT_SINGLE-FETCH-TIMEOUT",
        default_value = "",
        hide_default_value = true
    )]
    pub single_fetch_timeout: String,
    #[arg(long, env = "INPUT_WAITING-TIME", default_value = "", hide_default_value = true)]
    pub waiting_time: String,
}

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Suppress info lines; warnings, errors and outputs are still written.
    #[arg(long, short)]
    pub quiet: bool,
}

pub fn raw_inputs(request: RequestArgs, timing: TimingArgs) -> RawInputs {
    RawInputs {
        url: request.url,
        method: request.method,
        headers: request.headers,
        body: request.body,
        body_reading_method: request.body_reading_method,
        http_status: request.http_status,
        timeout: timing.timeout,
        single_fetch_timeout: timing.single_fetch_timeout,
        waiting_time: timing.waiting_time,
        stop_on_error: request.stop_on_error,
        html_to_text: request.html_to_text,
    }
}
