use std::fmt;
use std::str::FromStr;

/// How the response body of an attempt is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyReadMode {
    /// The body is not read at all.
    #[default]
    None,
    Json,
    Text,
}

impl BodyReadMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyReadMode::None => "NONE",
            BodyReadMode::Json => "JSON",
            BodyReadMode::Text => "TEXT",
        }
    }
}

impl fmt::Display for BodyReadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown body-reading-method {0:?}")]
pub struct UnknownBodyReadMode(pub String);

impl FromStr for BodyReadMode {
    type Err = UnknownBodyReadMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(BodyReadMode::None);
        }
        if s.eq_ignore_ascii_case("json") {
            return Ok(BodyReadMode::Json);
        }
        if s.eq_ignore_ascii_case("text") {
            return Ok(BodyReadMode::Text);
        }
        Err(UnknownBodyReadMode(s.to_string()))
    }
}
