use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted form draft or fork payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDraft {
    pub key: String,
    pub value: serde_json::Value,
    pub saved_at: DateTime<Utc>,
}

impl StoredDraft {
    pub fn new(key: &str, value: serde_json::Value) -> Self {
        Self {
            key: key.to_string(),
            value,
            saved_at: Utc::now(),
        }
    }
}
