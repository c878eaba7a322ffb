use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use httpwait_core::RequestSpec;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("timeout")]
    Timeout,
    #[error("request aborted")]
    Aborted,
    #[error("connect/dns/tls error: {0}")]
    Network(String),
    #[error("http error: {0}")]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequestParts {
    pub method: String,
    pub url: url::Url,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl From<&RequestSpec> for HttpRequestParts {
    fn from(spec: &RequestSpec) -> Self {
        Self {
            method: spec.method.clone(),
            url: spec.url.clone(),
            headers: spec.headers.clone().unwrap_or_default(),
            body: spec.body.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponseParts {
    pub status: u16,
    pub reason: Option<String>,
    /// `Ok(None)` when the caller asked not to read the body. A failed read
    /// is kept here so the status that did arrive is not lost.
    pub body: Result<Option<Vec<u8>>, HttpError>,
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform one request. `timeout` bounds the wait for the response head;
    /// reading the body is not covered by it.
    async fn send(
        &self,
        req: HttpRequestParts,
        timeout: Duration,
        read_body: bool,
    ) -> Result<HttpResponseParts, HttpError>;
}

pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("httpwait/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HttpError::Other(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(
        &self,
        req: HttpRequestParts,
        timeout: Duration,
        read_body: bool,
    ) -> Result<HttpResponseParts, HttpError> {
        let method = reqwest::Method::from_bytes(req.method.as_bytes())
            .map_err(|e| HttpError::Other(e.to_string()))?;
        let mut rb = self.client.request(method, req.url);

        for (k, v) in req.headers {
            rb = rb.header(k, v);
        }
        if let Some(body) = req.body {
            rb = rb.body(body);
        }

        let resp = match tokio::time::timeout(timeout, rb.send()).await {
            Ok(sent) => sent.map_err(map_reqwest_error)?,
            Err(_) => return Err(HttpError::Timeout),
        };
        let status = resp.status();

        let body = if read_body {
            resp.bytes()
                .await
                .map(|b| Some(b.to_vec()))
                .map_err(map_reqwest_error)
        } else {
            Ok(None)
        };

        Ok(HttpResponseParts {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
            body,
        })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        return HttpError::Timeout;
    }
    if is_aborted(&e) {
        return HttpError::Aborted;
    }
    if e.is_connect() || e.is_request() || e.is_body() {
        return HttpError::Network(e.to_string());
    }
    HttpError::Other(e.to_string())
}

fn is_aborted(e: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(e);
    while let Some(err) = source {
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            if matches!(
                io.kind(),
                std::io::ErrorKind::ConnectionAborted | std::io::ErrorKind::Interrupted
            ) {
                return true;
            }
        }
        source = err.source();
    }
    false
}
