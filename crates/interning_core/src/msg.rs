use crate::{AppliedType, ApplicationStatus, ClosedType, Company, RequestId, SponsorshipType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Persisted display settings read at start-up.
    SettingsRestored { dark_mode: bool, flipped: bool },
    /// User asked for a fresh copy of the postings.
    RefreshRequested,
    /// Fetch finished and postings were grouped into companies.
    CompaniesLoaded {
        request_id: RequestId,
        companies: Vec<Company>,
    },
    /// Fetch for `request_id` failed.
    RefreshFailed { request_id: RequestId },
    /// User ticked or cleared the applied box for a company. The name is
    /// resolved with [`AppState::find_company`](crate::AppState::find_company).
    AppliedChanged { company: String, applied: bool },
    /// User picked an application status for a company.
    StatusChanged {
        company: String,
        status: ApplicationStatus,
    },
    /// User edited the free-text filter.
    QueryChanged(String),
    ClosedFilterChanged(ClosedType),
    AppliedFilterChanged(AppliedType),
    SponsorshipFilterChanged(SponsorshipType),
    DarkModeToggled,
    OrderToggled,
}
