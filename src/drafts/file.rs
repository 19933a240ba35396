use std::path::{Path, PathBuf};
use tracing::debug;
use crate::errors::OpenQuestError;
use crate::models::StoredDraft;
use super::{validate_key, DraftStore};

/// One pretty-printed JSON file per draft inside a directory.
pub struct FileDraftStore {
    dir: PathBuf,
}

impl FileDraftStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, OpenQuestError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // Validated keys contain no separators or '%'; ':' is not portable in file names.
    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key.replace(':', "%3A")))
    }

    fn key_for(path: &Path) -> Option<String> {
        if path.extension()? != "json" {
            return None;
        }
        let key = path.file_stem()?.to_str()?.replace("%3A", ":");
        validate_key(&key).ok().map(|_| key)
    }
}

impl DraftStore for FileDraftStore {
    fn save(&self, key: &str, value: &serde_json::Value) -> Result<StoredDraft, OpenQuestError> {
        validate_key(key)?;
        let draft = StoredDraft::new(key, value.clone());
        let path = self.path_for(key);
        std::fs::write(&path, serde_json::to_string_pretty(&draft)?)?;
        debug!(key, path = %path.display(), "Saved draft");
        Ok(draft)
    }

    fn load(&self, key: &str) -> Result<Option<StoredDraft>, OpenQuestError> {
        validate_key(key)?;
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self, key: &str) -> Result<bool, OpenQuestError> {
        validate_key(key)?;
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>, OpenQuestError> {
        let mut keys = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            if let Some(key) = Self::key_for(&entry?.path()) {
                keys.push(key);
            }
        }
        keys.sort();
        Ok(keys)
    }
}
