use std::sync::mpsc;
use std::time::Duration;

use futures_util::StreamExt;
use interning_core::RequestId;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use reqwest::Response;
use url::Url;

use crate::{EngineEvent, FetchError, FetchOutput, FetchProgress, Stage};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    /// Media types accepted for the posting list, compared without parameters.
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 20 * 1024 * 1024,
            // Raw file hosts commonly label JSON as text/plain.
            allowed_content_types: ["application/json", "text/plain", "application/octet-stream"]
                .map(String::from)
                .to_vec(),
        }
    }
}

/// Receives engine events while a refresh is running.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(
        &self,
        request_id: RequestId,
        url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<FetchOutput, FetchError>;
}

/// Downloads the posting list over HTTP(S) within the configured limits.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(Policy::limited(self.settings.redirect_limit))
            .build()
            .map_err(|err| FetchError::Network(err.to_string()))
    }

    /// Header checks; runs before any of the body is read.
    fn accept(&self, response: &Response) -> Result<(), FetchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }
        let max_bytes = self.settings.max_bytes;
        if response.content_length().is_some_and(|len| len > max_bytes) {
            return Err(FetchError::TooLarge { max_bytes });
        }
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        match content_type {
            Some(raw) if !self.allows(raw) => Err(FetchError::UnsupportedContentType(
                media_type(raw).to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn allows(&self, content_type: &str) -> bool {
        let media = media_type(content_type);
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(media))
    }

    async fn read_body(&self, response: Response) -> Result<Vec<u8>, FetchError> {
        let max_bytes = self.settings.max_bytes;
        let mut body = Vec::new();
        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            body.extend_from_slice(&chunk?);
            if body.len() as u64 > max_bytes {
                return Err(FetchError::TooLarge { max_bytes });
            }
        }
        Ok(body)
    }
}

/// `text/plain; charset=utf-8` → `text/plain`.
fn media_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
}

/// Accepts only absolute http(s) URLs.
pub fn parse_source_url(raw: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(raw).map_err(|err| FetchError::InvalidUrl(err.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl(format!("unsupported scheme {other}"))),
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(
        &self,
        request_id: RequestId,
        url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<FetchOutput, FetchError> {
        let url = parse_source_url(url)?;
        let response = self.client()?.get(url).send().await?;
        self.accept(&response)?;

        sink.emit(EngineEvent::Progress(FetchProgress {
            request_id,
            stage: Stage::Downloading,
            bytes: response.content_length(),
        }));

        let final_url = response.url().to_string();
        let bytes = self.read_body(response).await?;
        Ok(FetchOutput { bytes, final_url })
    }
}
