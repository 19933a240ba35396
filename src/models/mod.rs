pub mod problem;
pub mod difference;
pub mod indicator;
pub mod draft;

pub use problem::{ComparableField, ForkPayload, PerField, ProblemText};
pub use difference::{FieldDifference, ForkValidationReport, ForkValidationResult};
pub use indicator::{DifficultyIndicator, DifficultyLevel, IndicatorColor};
pub use draft::StoredDraft;
