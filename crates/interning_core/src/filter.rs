use crate::{
    AppliedType, ClosedType, Company, Internship, SponsorshipType, CITIZENSHIP_MARKER,
    NO_SPONSORSHIP_MARKER,
};

/// Active predicates plus the display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filters {
    pub closed: ClosedType,
    pub applied: AppliedType,
    pub sponsorship: SponsorshipType,
    pub query: String,
    pub reversed: bool,
}

/// Returns the visible companies for `filters`.
///
/// Internship-level predicates run first; a company left with no internships
/// is dropped before the company-level predicates see it. Reversal is applied
/// last and is purely positional.
pub fn filter_companies(companies: &[Company], filters: &Filters) -> Vec<Company> {
    let query = filters.query.to_lowercase();

    let mut visible: Vec<Company> = companies
        .iter()
        .filter_map(|company| {
            let internships: Vec<Internship> = company
                .internships
                .iter()
                .filter(|i| closed_matches(filters.closed, i))
                .filter(|i| sponsorship_matches(filters.sponsorship, i))
                .cloned()
                .collect();
            if internships.is_empty() {
                return None;
            }
            Some(Company {
                internships,
                ..company.clone()
            })
        })
        .filter(|company| applied_matches(filters.applied, company.applied))
        .filter(|company| text_matches(&query, company))
        .collect();

    if filters.reversed {
        visible.reverse();
    }
    visible
}

fn closed_matches(closed: ClosedType, internship: &Internship) -> bool {
    match closed {
        ClosedType::All => true,
        ClosedType::Yes => internship.is_closed(),
        ClosedType::No => !internship.is_closed(),
    }
}

fn sponsorship_matches(sponsorship: SponsorshipType, internship: &Internship) -> bool {
    match sponsorship {
        SponsorshipType::All => true,
        SponsorshipType::Citizenship => !internship.description.contains(CITIZENSHIP_MARKER),
        SponsorshipType::Sponsorship => !internship.description.contains(NO_SPONSORSHIP_MARKER),
    }
}

fn applied_matches(applied: AppliedType, company_applied: bool) -> bool {
    match applied {
        AppliedType::All => true,
        AppliedType::Yes => company_applied,
        AppliedType::No => !company_applied,
    }
}

// `query` is already lowercased.
fn text_matches(query: &str, company: &Company) -> bool {
    if query.is_empty() || company.name.to_lowercase().contains(query) {
        return true;
    }
    company.internships.iter().any(|internship| {
        internship.description.to_lowercase().contains(query)
            || internship
                .locations
                .join("\n")
                .to_lowercase()
                .contains(query)
    })
}
