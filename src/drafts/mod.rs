//! Draft persistence for in-progress submissions and fork payloads.
//!
//! The fork validator never reads from here; hosts save what the user typed
//! so it survives navigation or reload, then feed plain text to the validator.

pub mod memory;
pub mod file;

use std::sync::LazyLock;
use regex::Regex;
use crate::errors::OpenQuestError;
use crate::models::StoredDraft;

pub use memory::MemoryDraftStore;
pub use file::FileDraftStore;

static DRAFT_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.:-]{0,127}$").expect("draft key pattern is valid")
});

pub trait DraftStore: Send + Sync {
    fn save(&self, key: &str, value: &serde_json::Value) -> Result<StoredDraft, OpenQuestError>;
    fn load(&self, key: &str) -> Result<Option<StoredDraft>, OpenQuestError>;
    /// Returns whether a draft was removed.
    fn clear(&self, key: &str) -> Result<bool, OpenQuestError>;
    /// Stored keys in ascending order.
    fn keys(&self) -> Result<Vec<String>, OpenQuestError>;
}

pub fn validate_key(key: &str) -> Result<(), OpenQuestError> {
    if DRAFT_KEY.is_match(key) {
        Ok(())
    } else {
        Err(OpenQuestError::InvalidInput(format!("Invalid draft key: {:?}", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keys() {
        for key in ["fork-draft", "problem:42", "user_7.submission", "a"] {
            assert!(validate_key(key).is_ok(), "{key} should be valid");
        }
    }

    #[test]
    fn test_invalid_keys() {
        let long = "k".repeat(200);
        for key in ["", "../etc/passwd", "-leading", "has space", "slash/inside", long.as_str()] {
            assert!(matches!(validate_key(key), Err(OpenQuestError::InvalidInput(_))), "{key} should be rejected");
        }
    }
}
