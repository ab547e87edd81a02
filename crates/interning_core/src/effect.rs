#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start fetching postings; the completion must carry `request_id`.
    FetchInternships { request_id: crate::RequestId },
    /// Write one key-value pair through to storage.
    Persist { key: String, value: String },
}

impl Effect {
    pub(crate) fn persist(key: impl Into<String>, value: impl Into<String>) -> Self {
        Effect::Persist {
            key: key.into(),
            value: value.into(),
        }
    }
}
