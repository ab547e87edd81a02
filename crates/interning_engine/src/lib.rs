//! Interning engine: fetching, decoding and on-disk state.
mod decode;
mod engine;
mod fetch;
mod levels;
mod persist;
mod store;
mod types;

pub use decode::{decode_internships, DecodeError};
pub use engine::{fetch_internships, EngineHandle};
pub use fetch::{parse_source_url, FetchSettings, Fetcher, ProgressSink, ReqwestFetcher};
pub use levels::{LevelsError, LevelsTable};
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use store::{FileStore, STORE_FILENAME};
pub use types::{EngineEvent, FetchError, FetchOutput, FetchProgress, Stage};
