use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenQuestError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Raised only by gating surfaces (CLI `check`), never by the validator itself.
    #[error("Fork too similar: {0} field(s) need more differentiation")]
    ForkTooSimilar(usize),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
