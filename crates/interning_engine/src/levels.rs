use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LevelsError {
    #[error("failed to read compensation table: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse compensation table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only map from company name to its compensation-data page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelsTable {
    links: HashMap<String, String>,
}

impl LevelsTable {
    pub fn load(path: &Path) -> Result<Self, LevelsError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses a flat JSON object of `"Company": "https://..."` pairs.
    pub fn from_json(content: &str) -> Result<Self, LevelsError> {
        let links: HashMap<String, String> = serde_json::from_str(content)?;
        Ok(Self { links })
    }

    /// Empty entries count as absent.
    pub fn link(&self, company: &str) -> Option<&str> {
        self.links
            .get(company)
            .map(String::as_str)
            .filter(|link| !link.is_empty())
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
