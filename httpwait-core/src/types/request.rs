use std::collections::BTreeMap;

pub type Headers = BTreeMap<String, String>;

/// The request issued on every attempt. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub url: url::Url,
    pub method: String,
    /// `None` when the input was empty or `{}`; nothing is sent in that case.
    pub headers: Option<Headers>,
    /// `None` when the input was empty; no body is sent in that case.
    pub body: Option<String>,
}

impl RequestSpec {
    pub fn get(url: url::Url) -> Self {
        Self {
            url,
            method: "GET".to_string(),
            headers: None,
            body: None,
        }
    }
}
