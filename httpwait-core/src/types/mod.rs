mod body;
mod config;
mod outcome;
mod request;
mod timing;

pub use body::{BodyReadMode, UnknownBodyReadMode};
pub use config::PollConfig;
pub use outcome::{AttemptFailure, AttemptOutcome, PollResult, PollStatus, ResponseBody};
pub use request::{Headers, RequestSpec};
pub use timing::{Bounds, Clamp, TimingField, TimingPolicy};
