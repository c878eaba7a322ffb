use crate::types::{BodyReadMode, RequestSpec, TimingPolicy};

/// Everything a run needs, normalized and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollConfig {
    pub request: RequestSpec,
    pub timing: TimingPolicy,
    pub body_mode: BodyReadMode,
    /// Strip markup from `TEXT` bodies.
    pub html_to_text: bool,
    pub desired_status: u16,
    pub stop_on_error: bool,
}

impl PollConfig {
    pub fn new(request: RequestSpec) -> Self {
        Self {
            request,
            timing: TimingPolicy::default(),
            body_mode: BodyReadMode::None,
            html_to_text: false,
            desired_status: 200,
            stop_on_error: false,
        }
    }
}
