use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_debug, engine_error};
use interning_core::{Internship, RequestId};

use crate::decode::decode_internships;
use crate::fetch::{ChannelProgressSink, FetchSettings, Fetcher, ProgressSink, ReqwestFetcher};
use crate::{EngineEvent, FetchError, FetchProgress, Stage};

enum EngineCommand {
    Refresh { request_id: RequestId },
}

/// Runs fetches on a background tokio runtime and reports completions as
/// [`EngineEvent`]s. Overlapping refreshes are all allowed to finish; the
/// receiver decides which completion is current.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        settings: FetchSettings,
        source_url: impl Into<String>,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> Self {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)), source_url, event_tx)
    }

    pub fn with_fetcher(
        fetcher: Arc<dyn Fetcher>,
        source_url: impl Into<String>,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let source_url: Arc<str> = source_url.into().into();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    engine_error!("Failed to start fetch runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                let source_url = source_url.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), &source_url, command, event_tx).await;
                });
            }
        });

        Self { cmd_tx }
    }

    pub fn refresh(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::Refresh { request_id });
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    source_url: &str,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Refresh { request_id } => {
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = fetch_internships(fetcher, request_id, source_url, &sink).await;
            let _ = event_tx.send(EngineEvent::RefreshCompleted { request_id, result });
        }
    }
}

/// Fetches and decodes the posting list in one step.
pub async fn fetch_internships(
    fetcher: &dyn Fetcher,
    request_id: RequestId,
    source_url: &str,
    sink: &dyn ProgressSink,
) -> Result<Vec<Internship>, FetchError> {
    let output = fetcher.fetch(request_id, source_url, sink).await?;
    let byte_len = output.bytes.len() as u64;
    engine_debug!("Fetched {} bytes from {}", byte_len, output.final_url);
    sink.emit(EngineEvent::Progress(FetchProgress {
        request_id,
        stage: Stage::Decoding,
        bytes: Some(byte_len),
    }));
    decode_internships(&output.bytes).map_err(|err| FetchError::Decode(err.to_string()))
}
