mod attempt;
pub mod body;
pub mod html;
pub mod http;

pub use attempt::{execute_attempt, AttemptSettings};
pub use http::{HttpClient, HttpError, HttpRequestParts, HttpResponseParts, ReqwestHttpClient};
