//! Interning core: pure state machine, grouping, filtering and view-model helpers.
mod effect;
mod filter;
mod group;
mod msg;
mod state;
pub mod storage;
mod types;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{filter_companies, Filters};
pub use group::group_internships;
pub use msg::Msg;
pub use state::{AppState, RequestId};
pub use storage::{KeyValueStore, MemoryStore};
pub use types::{
    AppliedType, ApplicationStatus, ClosedType, Company, Internship, SponsorshipType,
    UnknownOption, CITIZENSHIP_MARKER, CLOSED_SENTINEL, NO_SPONSORSHIP_MARKER,
};
pub use update::update;
pub use view_model::{AppViewModel, AppliedSummary, CompanyRowView, InternshipView};
