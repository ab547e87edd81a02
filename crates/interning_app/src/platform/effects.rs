use engine_logging::{engine_debug, engine_info, engine_warn};
use interning_core::storage::{decode_flag, DARK_MODE_KEY, FLIPPED_KEY};
use interning_core::{group_internships, Effect, KeyValueStore, Msg, RequestId};
use interning_engine::{EngineEvent, EngineHandle};

/// Anything that can start a fetch for a given request id.
pub trait RefreshLauncher {
    fn refresh(&self, request_id: RequestId);
}

impl RefreshLauncher for EngineHandle {
    fn refresh(&self, request_id: RequestId) {
        EngineHandle::refresh(self, request_id)
    }
}

/// Executes reducer effects and turns engine events back into messages.
///
/// Owns the key-value store: every read and write happens on the thread that
/// runs the update loop.
pub struct EffectRunner<S, L> {
    store: S,
    launcher: L,
}

impl<S: KeyValueStore, L: RefreshLauncher> EffectRunner<S, L> {
    pub fn new(store: S, launcher: L) -> Self {
        Self { store, launcher }
    }

    pub fn restore_settings(&self) -> Msg {
        Msg::SettingsRestored {
            dark_mode: decode_flag(self.store.get(DARK_MODE_KEY).as_deref()),
            flipped: decode_flag(self.store.get(FLIPPED_KEY).as_deref()),
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchInternships { request_id } => {
                    engine_info!("Refresh requested request_id={}", request_id);
                    self.launcher.refresh(request_id);
                }
                Effect::Persist { key, value } => {
                    engine_debug!("Persist {:?} = {:?}", key, value);
                    self.store.set(&key, &value);
                }
            }
        }
    }

    /// Groups fetched postings against the store. Progress events yield no message.
    pub fn translate(&self, event: EngineEvent) -> Option<Msg> {
        match event {
            EngineEvent::Progress(progress) => {
                engine_debug!(
                    "Refresh {} {:?} bytes={:?}",
                    progress.request_id,
                    progress.stage,
                    progress.bytes
                );
                None
            }
            EngineEvent::RefreshCompleted {
                request_id,
                result: Ok(internships),
            } => {
                engine_info!(
                    "Refresh {} returned {} postings",
                    request_id,
                    internships.len()
                );
                Some(Msg::CompaniesLoaded {
                    request_id,
                    companies: group_internships(internships, &self.store),
                })
            }
            EngineEvent::RefreshCompleted {
                request_id,
                result: Err(err),
            } => {
                engine_warn!("Refresh {} failed: {}", request_id, err);
                Some(Msg::RefreshFailed { request_id })
            }
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}
