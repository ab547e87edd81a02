use crate::filter::{filter_companies, Filters};
use crate::view_model::{AppViewModel, AppliedSummary, CompanyRowView, InternshipView};
use crate::{ApplicationStatus, Company};

/// Identifies one refresh round-trip.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    /// `None` while the list is loading.
    companies: Option<Vec<Company>>,
    filters: Filters,
    dark_mode: bool,
    next_request_id: RequestId,
    pending_refresh: Option<RequestId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn companies(&self) -> Option<&[Company]> {
        self.companies.as_deref()
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn pending_refresh(&self) -> Option<RequestId> {
        self.pending_refresh
    }

    /// The filtered list, or `None` while loading.
    pub fn visible_companies(&self) -> Option<Vec<Company>> {
        self.companies
            .as_deref()
            .map(|companies| filter_companies(companies, &self.filters))
    }

    pub fn view(&self) -> AppViewModel {
        let visible = self.visible_companies();
        let summary = self.companies.as_deref().map(|all| AppliedSummary {
            applied: all.iter().filter(|c| c.applied).count(),
            total: all.len(),
            shown: visible.as_ref().map_or(0, Vec::len),
        });

        AppViewModel {
            loading: visible.is_none(),
            dark_mode: self.dark_mode,
            flipped: self.filters.reversed,
            query: self.filters.query.clone(),
            closed: self.filters.closed,
            applied: self.filters.applied,
            sponsorship: self.filters.sponsorship,
            summary,
            rows: visible
                .unwrap_or_default()
                .iter()
                .map(row_view)
                .collect(),
        }
    }

    /// Returns whether the state changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn filters_mut(&mut self) -> &mut Filters {
        self.mark_dirty();
        &mut self.filters
    }

    pub(crate) fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
        self.mark_dirty();
    }

    /// Clears the list and allocates the id the next completion must carry.
    /// Any refresh still in flight is superseded.
    pub(crate) fn begin_refresh(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.pending_refresh = Some(request_id);
        self.companies = None;
        self.mark_dirty();
        request_id
    }

    /// Installs `companies` if `request_id` is the pending refresh.
    pub(crate) fn finish_refresh(&mut self, request_id: RequestId, companies: Vec<Company>) -> bool {
        if self.pending_refresh != Some(request_id) {
            return false;
        }
        self.pending_refresh = None;
        self.companies = Some(companies);
        self.mark_dirty();
        true
    }

    /// Stops waiting for `request_id`. The list stays in its loading state.
    pub(crate) fn abandon_refresh(&mut self, request_id: RequestId) -> bool {
        if self.pending_refresh != Some(request_id) {
            return false;
        }
        self.pending_refresh = None;
        true
    }

    /// Looks a company up by name. An exact match wins; otherwise the first
    /// company whose name matches ignoring case. `None` while loading.
    pub fn find_company(&self, name: &str) -> Option<&Company> {
        self.company_index(name)
            .and_then(|index| self.companies.as_ref().map(|companies| &companies[index]))
    }

    fn company_index(&self, name: &str) -> Option<usize> {
        let companies = self.companies.as_deref()?;
        companies.iter().position(|c| c.name == name).or_else(|| {
            let folded = name.to_lowercase();
            companies
                .iter()
                .position(|c| c.name.to_lowercase() == folded)
        })
    }

    /// Returns the listed name of the edited company.
    pub(crate) fn set_applied(&mut self, name: &str, applied: bool) -> Option<String> {
        self.with_company(name, |company| company.applied = applied)
    }

    pub(crate) fn set_status(&mut self, name: &str, status: ApplicationStatus) -> Option<String> {
        self.with_company(name, |company| company.status = status)
    }

    fn with_company(&mut self, name: &str, edit: impl FnOnce(&mut Company)) -> Option<String> {
        let index = self.company_index(name)?;
        let company = &mut self.companies.as_mut()?[index];
        edit(company);
        let name = company.name.clone();
        self.mark_dirty();
        Some(name)
    }
}

fn row_view(company: &Company) -> CompanyRowView {
    CompanyRowView {
        name: company.name.clone(),
        locations: company.locations(),
        internships: company
            .internships
            .iter()
            .map(|internship| InternshipView {
                description: internship.description.clone(),
                link: (!internship.is_closed()).then(|| internship.link.clone()),
            })
            .collect(),
        applied: company.applied,
        status: company.status,
    }
}
