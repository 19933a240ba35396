use dashmap::DashMap;
use crate::errors::OpenQuestError;
use crate::models::StoredDraft;
use super::{validate_key, DraftStore};

/// Process-local drafts. Lost on restart.
#[derive(Default)]
pub struct MemoryDraftStore {
    drafts: DashMap<String, StoredDraft>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}

impl DraftStore for MemoryDraftStore {
    fn save(&self, key: &str, value: &serde_json::Value) -> Result<StoredDraft, OpenQuestError> {
        validate_key(key)?;
        let draft = StoredDraft::new(key, value.clone());
        self.drafts.insert(key.to_string(), draft.clone());
        Ok(draft)
    }

    fn load(&self, key: &str) -> Result<Option<StoredDraft>, OpenQuestError> {
        validate_key(key)?;
        Ok(self.drafts.get(key).map(|d| d.value().clone()))
    }

    fn clear(&self, key: &str) -> Result<bool, OpenQuestError> {
        validate_key(key)?;
        Ok(self.drafts.remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<String>, OpenQuestError> {
        let mut keys: Vec<String> = self.drafts.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_save_load_clear() {
        let store = MemoryDraftStore::new();
        store.save("fork-draft", &json!({"title": "Rural soil data"})).unwrap();

        let draft = store.load("fork-draft").unwrap().unwrap();
        assert_eq!(draft.value["title"], "Rural soil data");
        assert_eq!(store.len(), 1);

        assert!(store.clear("fork-draft").unwrap());
        assert!(store.load("fork-draft").unwrap().is_none());
        assert!(!store.clear("fork-draft").unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_keys_sorted() {
        let store = MemoryDraftStore::new();
        store.save("b", &json!(1)).unwrap();
        store.save("a", &json!(2)).unwrap();
        assert_eq!(store.keys().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_save_overwrites() {
        let store = MemoryDraftStore::new();
        store.save("k", &json!(1)).unwrap();
        store.save("k", &json!(2)).unwrap();
        assert_eq!(store.load("k").unwrap().unwrap().value, json!(2));
    }

    #[test]
    fn test_rejects_bad_key() {
        let store = MemoryDraftStore::new();
        assert!(store.save("bad key", &json!(null)).is_err());
    }
}
