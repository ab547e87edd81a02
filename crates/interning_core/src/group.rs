use crate::storage::{applied_key, decode_flag, status_key, KeyValueStore};
use crate::{ApplicationStatus, Company, Internship};

/// Groups postings by company name in first-seen order and attaches each
/// company's persisted applied flag and status.
pub fn group_internships(internships: Vec<Internship>, store: &dyn KeyValueStore) -> Vec<Company> {
    let mut companies: Vec<Company> = Vec::new();
    for internship in internships {
        match companies.iter_mut().find(|c| c.name == internship.company) {
            Some(company) => company.internships.push(internship),
            None => {
                let name = internship.company.clone();
                companies.push(Company {
                    applied: decode_flag(store.get(&applied_key(&name)).as_deref()),
                    status: load_status(store, &name),
                    name,
                    internships: vec![internship],
                });
            }
        }
    }
    companies
}

fn load_status(store: &dyn KeyValueStore, company: &str) -> ApplicationStatus {
    store
        .get(&status_key(company))
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default()
}
