use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct DifferenceRequest {
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub candidate: String,
}

#[derive(Debug, Serialize)]
pub struct DifferenceResponse {
    pub difference: u8,
}

#[derive(Debug, Serialize)]
pub struct ClearDraftResponse {
    pub key: String,
    pub cleared: bool,
}
