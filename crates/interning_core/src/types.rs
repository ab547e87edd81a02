use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Marker used in place of a link when a posting no longer accepts applications.
pub const CLOSED_SENTINEL: &str = "🔒";
/// Description marker: posting requires U.S. citizenship.
pub const CITIZENSHIP_MARKER: &str = "🇺🇸";
/// Description marker: posting does not offer sponsorship.
pub const NO_SPONSORSHIP_MARKER: &str = "🛂";

/// A single posting as delivered by the data source.
///
/// Absent fields decode as empty values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Internship {
    pub company: String,
    pub description: String,
    pub link: String,
    pub locations: Vec<String>,
}

impl Internship {
    pub fn is_closed(&self) -> bool {
        self.link == CLOSED_SENTINEL
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub name: String,
    pub applied: bool,
    pub status: ApplicationStatus,
    pub internships: Vec<Internship>,
}

impl Company {
    /// Locations across all internships, de-duplicated in first-seen order.
    pub fn locations(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for location in self.internships.iter().flat_map(|i| i.locations.iter()) {
            if !seen.contains(location) {
                seen.push(location.clone());
            }
        }
        seen
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ApplicationStatus {
    #[default]
    None,
    Waiting,
    Oa,
    Rejected,
    Offer,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::None,
        ApplicationStatus::Waiting,
        ApplicationStatus::Oa,
        ApplicationStatus::Rejected,
        ApplicationStatus::Offer,
    ];

    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::None => "none",
            ApplicationStatus::Waiting => "waiting",
            ApplicationStatus::Oa => "oa",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Offer => "offer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::None => "None",
            ApplicationStatus::Waiting => "Waiting",
            ApplicationStatus::Oa => "Got OA",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Offer => "Offer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown option {:?}", self.0)
    }
}

impl std::error::Error for UnknownOption {}

impl FromStr for ApplicationStatus {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// Filter on whether a posting is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosedType {
    #[default]
    All,
    Yes,
    No,
}

impl ClosedType {
    pub fn label(self) -> &'static str {
        match self {
            ClosedType::All => "All",
            ClosedType::Yes => "Closed",
            ClosedType::No => "Not Closed",
        }
    }
}

impl FromStr for ClosedType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ClosedType::All),
            "yes" => Ok(ClosedType::Yes),
            "no" => Ok(ClosedType::No),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}

/// Filter on the company's applied flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppliedType {
    #[default]
    All,
    Yes,
    No,
}

impl AppliedType {
    pub fn label(self) -> &'static str {
        match self {
            AppliedType::All => "All",
            AppliedType::Yes => "Applied",
            AppliedType::No => "Not Applied",
        }
    }
}

impl FromStr for AppliedType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(AppliedType::All),
            "yes" => Ok(AppliedType::Yes),
            "no" => Ok(AppliedType::No),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}

/// Filter on the citizenship / sponsorship markers in a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SponsorshipType {
    #[default]
    All,
    Citizenship,
    Sponsorship,
}

impl SponsorshipType {
    pub fn label(self) -> &'static str {
        match self {
            SponsorshipType::All => "All",
            SponsorshipType::Citizenship => "U.S Citizenship Not Required",
            SponsorshipType::Sponsorship => "May Offer Sponsorship",
        }
    }
}

impl FromStr for SponsorshipType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(SponsorshipType::All),
            "citizenship" => Ok(SponsorshipType::Citizenship),
            "sponsorship" => Ok(SponsorshipType::Sponsorship),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}
