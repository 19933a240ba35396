pub mod types;
pub mod classification;

pub use types::OpenQuestError;
pub use classification::ErrorClassification;
