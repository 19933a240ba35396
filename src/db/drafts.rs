use chrono::{DateTime, Utc};
use crate::drafts::{validate_key, DraftStore};
use crate::errors::OpenQuestError;
use crate::models::StoredDraft;
use super::Database;

impl DraftStore for Database {
    fn save(&self, key: &str, value: &serde_json::Value) -> Result<StoredDraft, OpenQuestError> {
        validate_key(key)?;
        let draft = StoredDraft::new(key, value.clone());
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO drafts (key, value, saved_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![key, serde_json::to_string(value)?, draft.saved_at.to_rfc3339()],
        ).map_err(|e| OpenQuestError::Database(format!("Insert failed: {}", e)))?;
        Ok(draft)
    }

    fn load(&self, key: &str) -> Result<Option<StoredDraft>, OpenQuestError> {
        validate_key(key)?;
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT value, saved_at FROM drafts WHERE key = ?1")
            .map_err(|e| OpenQuestError::Database(format!("Query failed: {}", e)))?;

        let row = stmt.query_row(rusqlite::params![key], |row: &rusqlite::Row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        });

        match row {
            Ok((value, saved_at)) => {
                let saved_at = DateTime::parse_from_rfc3339(&saved_at)
                    .map_err(|e| OpenQuestError::Database(format!("Bad timestamp for draft {}: {}", key, e)))?
                    .with_timezone(&Utc);
                Ok(Some(StoredDraft {
                    key: key.to_string(),
                    value: serde_json::from_str(&value)?,
                    saved_at,
                }))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(OpenQuestError::Database(format!("Query error: {}", e))),
        }
    }

    fn clear(&self, key: &str) -> Result<bool, OpenQuestError> {
        validate_key(key)?;
        let conn = self.lock()?;
        let removed = conn.execute("DELETE FROM drafts WHERE key = ?1", rusqlite::params![key])
            .map_err(|e| OpenQuestError::Database(format!("Delete failed: {}", e)))?;
        Ok(removed > 0)
    }

    fn keys(&self) -> Result<Vec<String>, OpenQuestError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT key FROM drafts ORDER BY key")
            .map_err(|e| OpenQuestError::Database(format!("Query failed: {}", e)))?;

        let rows = stmt.query_map([], |row: &rusqlite::Row| row.get::<_, String>(0))
            .map_err(|e| OpenQuestError::Database(format!("Query error: {}", e)))?;

        let mut keys = Vec::new();
        for row in rows {
            keys.push(row.map_err(|e| OpenQuestError::Database(format!("Row error: {}", e)))?);
        }
        Ok(keys)
    }
}
