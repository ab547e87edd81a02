use interning_core::storage::{decode_flag, DARK_MODE_KEY, FLIPPED_KEY};
use interning_core::{
    group_internships, update, AppState, ApplicationStatus, Effect, Internship, KeyValueStore,
    MemoryStore, Msg,
};

fn init_logging() {
    engine_logging::initialize_for_tests();
}

fn postings() -> Vec<Internship> {
    vec![
        Internship {
            company: "A".to_string(),
            description: "Intern".to_string(),
            link: interning_core::CLOSED_SENTINEL.to_string(),
            locations: vec!["NY".to_string()],
        },
        Internship {
            company: "B".to_string(),
            description: "SWE 🇺🇸".to_string(),
            link: "http://x".to_string(),
            locations: vec!["SF".to_string()],
        },
    ]
}

/// Runs one message and writes any persist effects through to `store`,
/// answering fetches with `postings()`.
fn dispatch(state: AppState, msg: Msg, store: &mut MemoryStore) -> AppState {
    let (mut state, effects) = update(state, msg);
    for effect in effects {
        match effect {
            Effect::Persist { key, value } => store.set(&key, &value),
            Effect::FetchInternships { request_id } => {
                let companies = group_internships(postings(), &*store);
                state = dispatch(
                    state,
                    Msg::CompaniesLoaded {
                        request_id,
                        companies,
                    },
                    store,
                );
            }
        }
    }
    state
}

#[test]
fn applied_flag_survives_reload() {
    init_logging();
    let mut store = MemoryStore::new();
    let state = dispatch(AppState::new(), Msg::RefreshRequested, &mut store);
    let _ = dispatch(
        state,
        Msg::AppliedChanged {
            company: "B".to_string(),
            applied: true,
        },
        &mut store,
    );

    assert_eq!(store.get("Applied: B").as_deref(), Some("yes"));

    let reloaded = dispatch(AppState::new(), Msg::RefreshRequested, &mut store);
    let view = reloaded.view();
    let b = view.rows.iter().find(|r| r.name == "B").unwrap();
    assert!(b.applied);
    assert_eq!(view.summary.unwrap().applied, 1);
}

#[test]
fn status_survives_refresh() {
    init_logging();
    let mut store = MemoryStore::new();
    let state = dispatch(AppState::new(), Msg::RefreshRequested, &mut store);
    let state = dispatch(
        state,
        Msg::StatusChanged {
            company: "A".to_string(),
            status: ApplicationStatus::Rejected,
        },
        &mut store,
    );

    let state = dispatch(state, Msg::RefreshRequested, &mut store);
    assert_eq!(state.view().rows[0].status, ApplicationStatus::Rejected);
    assert_eq!(store.get("Status: A").as_deref(), Some("rejected"));
}

#[test]
fn display_settings_round_trip_through_store() {
    init_logging();
    let mut store = MemoryStore::new();
    let state = dispatch(AppState::new(), Msg::DarkModeToggled, &mut store);
    let _ = dispatch(state, Msg::OrderToggled, &mut store);

    let restored = dispatch(
        AppState::new(),
        Msg::SettingsRestored {
            dark_mode: decode_flag(store.get(DARK_MODE_KEY).as_deref()),
            flipped: decode_flag(store.get(FLIPPED_KEY).as_deref()),
        },
        &mut store,
    );
    let view = restored.view();
    assert!(view.dark_mode);
    assert!(view.flipped);
    assert_eq!(store.len(), 2);
}
