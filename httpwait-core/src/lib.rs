#![forbid(unsafe_code)]

//! Data model and input normalization for `httpwait`.
//!
//! The poller itself lives in `httpwait-exec`; this crate only turns raw
//! action inputs into an immutable [`PollConfig`] and defines the values that
//! flow between the poll loop and the reporting side.

pub mod error;
pub mod input;
pub mod report;
pub mod types;

pub use crate::error::{ConfigError, PolicyFailure, RunError};
pub use crate::input::{normalize, RawInputs};
pub use crate::report::{LogLevel, MemoryReporter, Reporter};
pub use crate::types::{
    AttemptFailure, AttemptOutcome, BodyReadMode, Bounds, Clamp, PollConfig, PollResult,
    PollStatus, RequestSpec, ResponseBody, TimingField, TimingPolicy,
};
