use thiserror::Error;

use crate::types::PollStatus;

/// Fatal run errors. Everything else is absorbed by the poll loop.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Policy(#[from] PolicyFailure),
}

/// Missing or malformed input. Raised before any request is made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),
    #[error("invalid url {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },
    #[error("input {name} is not a valid integer: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("input http-status must be between 100 and 599, got {0}")]
    InvalidStatus(i64),
    #[error("invalid HTTP method: {0:?}")]
    InvalidMethod(String),
    #[error("input headers must be a JSON object with scalar values: {0}")]
    InvalidHeaders(String),
    #[error(
        "Input does not meet YAML 1.2 \"Core Schema\" specification: {name}\n\
         Support boolean input list: `true | True | TRUE | false | False | FALSE`"
    )]
    InvalidBoolean { name: &'static str, value: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Action failed because of stop-on-error is set and result is not OK: {result}")]
pub struct PolicyFailure {
    pub result: PollStatus,
}
