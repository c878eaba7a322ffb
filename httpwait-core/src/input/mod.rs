//! Turns raw action inputs into a [`PollConfig`].
//!
//! Inputs arrive as strings exactly as the host supplied them. Timing values
//! are clamped into their bounds with one warning per adjustment; anything
//! that cannot be interpreted is a [`ConfigError`] and aborts the run before
//! the first request.

mod parse;

use crate::error::ConfigError;
use crate::report::Reporter;
use crate::types::{BodyReadMode, PollConfig, RequestSpec, TimingField, TimingPolicy};

pub use parse::{parse_bool, parse_headers, parse_int, parse_method, parse_status, parse_url};

/// Action inputs as received from the host, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub url: String,
    pub method: String,
    pub headers: String,
    pub body: String,
    pub body_reading_method: String,
    pub http_status: String,
    pub timeout: String,
    pub single_fetch_timeout: String,
    pub waiting_time: String,
    pub stop_on_error: String,
    pub html_to_text: String,
}

impl RawInputs {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    fn timing(&self, field: TimingField) -> &str {
        match field {
            TimingField::Timeout => &self.timeout,
            TimingField::SingleFetchTimeout => &self.single_fetch_timeout,
            TimingField::WaitingTime => &self.waiting_time,
        }
    }
}

pub fn normalize(raw: &RawInputs, reporter: &dyn Reporter) -> Result<PollConfig, ConfigError> {
    let url = parse_url(&raw.url)?;
    let method = parse_method(&raw.method)?;
    let headers = parse_headers(&raw.headers)?;
    let body = Some(raw.body.as_str())
        .filter(|b| !b.is_empty())
        .map(str::to_string);

    let body_mode = match raw.body_reading_method.parse::<BodyReadMode>() {
        Ok(mode) => mode,
        Err(e) => {
            reporter.error(&format!("{e}, the response body will not be read"));
            BodyReadMode::None
        }
    };
    let html_to_text = parse_bool("html-to-text", &raw.html_to_text)?;
    let desired_status = parse_status(&raw.http_status)?;
    let stop_on_error = parse_bool("stop-on-error", &raw.stop_on_error)?;

    // Parse everything first so a malformed value fails before any warning.
    let mut parsed = [0i64; 3];
    for (slot, field) in parsed.iter_mut().zip(TimingField::ALL) {
        *slot = parse_int(field.input_name(), raw.timing(field))?
            .unwrap_or(field.default_ms() as i64);
    }
    let mut clamped = [0u64; 3];
    for ((slot, field), value) in clamped.iter_mut().zip(TimingField::ALL).zip(parsed) {
        let c = field.clamp(value);
        if let Some(warning) = field.clamp_warning(&c) {
            reporter.warning(&warning);
        }
        *slot = c.value();
    }
    let timing = TimingPolicy::from_millis(clamped[0], clamped[1], clamped[2]);

    let config = PollConfig {
        request: RequestSpec {
            url,
            method,
            headers,
            body,
        },
        timing,
        body_mode,
        html_to_text,
        desired_status,
        stop_on_error,
    };
    log_config(raw, &config, reporter);
    Ok(config)
}

fn log_config(raw: &RawInputs, config: &PollConfig, reporter: &dyn Reporter) {
    reporter.info(&format!("url: {}", raw.url.trim()));
    reporter.info(&format!("method: {}", config.request.method));
    if !raw.headers.trim().is_empty() {
        reporter.info(&format!("headers: {}", raw.headers.trim()));
    }
    if !raw.body.is_empty() {
        reporter.info(&format!("body: {}", raw.body));
    }
    reporter.info(&format!("body-reading-method: {}", config.body_mode));
    reporter.info(&format!("http-status: {}", config.desired_status));
    let timing = &config.timing;
    for (field, value) in TimingField::ALL.into_iter().zip([
        timing.timeout,
        timing.single_attempt_timeout,
        timing.waiting_time,
    ]) {
        reporter.info(&format!("{}: {} ms", field.input_name(), value.as_millis()));
    }
    reporter.info(&format!("stop-on-error: {}", config.stop_on_error));
    if config.html_to_text {
        reporter.info("html-to-text: true");
    }
}
