use interning_core::{Internship, RequestId};
use thiserror::Error;

/// Phase of a refresh, reported once each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Response headers accepted; `bytes` is the advertised length, if any.
    Downloading,
    /// Body received in full; `bytes` is its length.
    Decoding,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchProgress {
    pub request_id: RequestId,
    pub stage: Stage,
    pub bytes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Progress(FetchProgress),
    RefreshCompleted {
        request_id: RequestId,
        result: Result<Vec<Internship>, FetchError>,
    },
}

/// Raw posting list plus the URL it was finally served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub final_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("invalid source url: {0}")]
    InvalidUrl(String),
    #[error("server answered with status {0}")]
    HttpStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("too many redirects")]
    TooManyRedirects,
    #[error("posting list exceeds {max_bytes} bytes")]
    TooLarge { max_bytes: u64 },
    #[error("unsupported content type {0:?}")]
    UnsupportedContentType(String),
    #[error("malformed posting list: {0}")]
    Decode(String),
    #[error("network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_redirect() {
            FetchError::TooManyRedirects
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
