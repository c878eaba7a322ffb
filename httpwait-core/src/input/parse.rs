use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConfigError;
use crate::types::Headers;

pub fn parse_url(raw: &str) -> Result<url::Url, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ConfigError::MissingInput("url"));
    }
    let url = url::Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidUrl {
            value: raw.to_string(),
            reason: format!("unsupported scheme {other:?}"),
        }),
    }
}

pub fn parse_method(raw: &str) -> Result<String, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok("GET".to_string());
    }
    if !TCHAR_RE.is_match(raw) {
        return Err(ConfigError::InvalidMethod(raw.to_string()));
    }
    Ok(raw.to_ascii_uppercase())
}

// RFC 9110 token.
static TCHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[!#$%&'*+\-.^_`|~0-9A-Za-z]+$").expect("valid regex"));

/// `None` for an empty input or an empty object.
pub fn parse_headers(raw: &str) -> Result<Option<Headers>, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| ConfigError::InvalidHeaders(e.to_string()))?;
    let serde_json::Value::Object(map) = value else {
        return Err(ConfigError::InvalidHeaders("not an object".to_string()));
    };

    let mut headers = Headers::new();
    for (k, v) in map {
        let v = match v {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            _ => {
                return Err(ConfigError::InvalidHeaders(format!(
                    "value of {k:?} is not a string"
                )))
            }
        };
        headers.insert(k, v);
    }
    Ok(if headers.is_empty() { None } else { Some(headers) })
}

pub fn parse_int(name: &'static str, raw: &str) -> Result<Option<i64>, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidNumber {
            name,
            value: raw.to_string(),
        })
}

pub fn parse_status(raw: &str) -> Result<u16, ConfigError> {
    let Some(status) = parse_int("http-status", raw)? else {
        return Ok(200);
    };
    if !(100..=599).contains(&status) {
        return Err(ConfigError::InvalidStatus(status));
    }
    Ok(status as u16)
}

/// Boolean spellings accepted by the GitHub Actions toolkit.
pub fn parse_bool(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim() {
        "" => Ok(false),
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        other => Err(ConfigError::InvalidBoolean {
            name,
            value: other.to_string(),
        }),
    }
}
