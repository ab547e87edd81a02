use crate::{AppliedType, ApplicationStatus, ClosedType, SponsorshipType};

/// Applied count over the whole list plus how many rows are currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppliedSummary {
    pub applied: usize,
    pub total: usize,
    pub shown: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub loading: bool,
    pub dark_mode: bool,
    pub flipped: bool,
    pub query: String,
    pub closed: ClosedType,
    pub applied: AppliedType,
    pub sponsorship: SponsorshipType,
    pub summary: Option<AppliedSummary>,
    pub rows: Vec<CompanyRowView>,
}

impl AppViewModel {
    /// Loaded, but every company was filtered out.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRowView {
    pub name: String,
    pub locations: Vec<String>,
    pub internships: Vec<InternshipView>,
    pub applied: bool,
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternshipView {
    pub description: String,
    /// `None` for closed postings.
    pub link: Option<String>,
}
