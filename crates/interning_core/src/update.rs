use crate::storage::{applied_key, encode_flag, status_key, DARK_MODE_KEY, FLIPPED_KEY};
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SettingsRestored { dark_mode, flipped } => {
            state.set_dark_mode(dark_mode);
            state.filters_mut().reversed = flipped;
            Vec::new()
        }
        Msg::RefreshRequested => {
            let request_id = state.begin_refresh();
            vec![Effect::FetchInternships { request_id }]
        }
        Msg::CompaniesLoaded {
            request_id,
            companies,
        } => {
            // Stale completions from a superseded refresh are dropped.
            state.finish_refresh(request_id, companies);
            Vec::new()
        }
        Msg::RefreshFailed { request_id } => {
            state.abandon_refresh(request_id);
            Vec::new()
        }
        Msg::AppliedChanged { company, applied } => {
            // Stored under the listed spelling, whatever case was typed.
            match state.set_applied(&company, applied) {
                Some(name) => vec![Effect::persist(applied_key(&name), encode_flag(applied))],
                None => Vec::new(),
            }
        }
        Msg::StatusChanged { company, status } => {
            match state.set_status(&company, status) {
                Some(name) => vec![Effect::persist(status_key(&name), status.as_str())],
                None => Vec::new(),
            }
        }
        Msg::QueryChanged(query) => {
            state.filters_mut().query = query;
            Vec::new()
        }
        Msg::ClosedFilterChanged(closed) => {
            state.filters_mut().closed = closed;
            Vec::new()
        }
        Msg::AppliedFilterChanged(applied) => {
            state.filters_mut().applied = applied;
            Vec::new()
        }
        Msg::SponsorshipFilterChanged(sponsorship) => {
            state.filters_mut().sponsorship = sponsorship;
            Vec::new()
        }
        Msg::DarkModeToggled => {
            let dark_mode = !state.dark_mode();
            state.set_dark_mode(dark_mode);
            vec![Effect::persist(DARK_MODE_KEY, encode_flag(dark_mode))]
        }
        Msg::OrderToggled => {
            let filters = state.filters_mut();
            filters.reversed = !filters.reversed;
            let flipped = filters.reversed;
            vec![Effect::persist(FLIPPED_KEY, encode_flag(flipped))]
        }
    };

    (state, effects)
}
