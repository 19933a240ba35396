//! OpenQuest fork validation.
//!
//! A fork of a problem may only be published once its title, pitch and
//! description have each moved far enough away from the original. The
//! scoring lives in [`fork`]; [`api`] and [`cli`] expose it, and [`drafts`]
//! keeps in-progress submissions around between edits.

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod drafts;
pub mod errors;
pub mod fork;
pub mod models;
pub mod utils;

pub use errors::OpenQuestError;
pub use fork::{compute_field_difference, get_difficulty_indicator, validate_fork};
pub use models::{ForkValidationResult, ProblemText};
