use crate::cli::commands::{DraftAction, DraftArgs};
use crate::db::Database;
use crate::drafts::DraftStore;
use crate::errors::OpenQuestError;
use tracing::info;

pub async fn handle_draft(args: DraftArgs) -> Result<(), OpenQuestError> {
    let db = Database::new(&args.db)?;
    run_draft_action(&db, args.action)
}

fn run_draft_action(store: &dyn DraftStore, action: DraftAction) -> Result<(), OpenQuestError> {
    match action {
        DraftAction::Save { key, value } => {
            let value: serde_json::Value = serde_json::from_str(&value)
                .map_err(|e| OpenQuestError::InvalidInput(format!("Draft value is not JSON: {}", e)))?;
            let draft = store.save(&key, &value)?;
            info!(key = %draft.key, "Draft saved");
            println!("Saved {} at {}", draft.key, draft.saved_at.to_rfc3339());
        }
        DraftAction::Load { key } => {
            let draft = store.load(&key)?
                .ok_or_else(|| OpenQuestError::NotFound(format!("Draft {}", key)))?;
            println!("{}", serde_json::to_string_pretty(&draft.value)?);
        }
        DraftAction::Clear { key } => {
            if store.clear(&key)? {
                println!("Cleared {}", key);
            } else {
                println!("No draft stored under {}", key);
            }
        }
        DraftAction::List => {
            for key in store.keys()? {
                println!("{}", key);
            }
        }
    }
    Ok(())
}
