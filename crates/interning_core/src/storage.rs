//! Key-value port used for everything the dashboard remembers between runs.

use std::collections::BTreeMap;

pub const DARK_MODE_KEY: &str = "dark-mode";
pub const FLIPPED_KEY: &str = "flipped";

/// Synchronous string key-value storage. Last write wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

pub fn applied_key(company: &str) -> String {
    format!("Applied: {company}")
}

pub fn status_key(company: &str) -> String {
    format!("Status: {company}")
}

pub fn encode_flag(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Only the literal `"yes"` reads as set; anything else, including absence, is `false`.
pub fn decode_flag(value: Option<&str>) -> bool {
    value == Some("yes")
}

/// In-memory store, used in tests and as a fallback when no state directory is usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}
