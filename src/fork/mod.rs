//! Fork differentiation: scores how far a resubmitted problem has moved
//! away from the one it forked, and gates publication per field.

pub mod validator;
pub mod indicator;
pub mod live;

pub use validator::{validate_fork, validate_fork_with, weighted_overall};
pub use indicator::{get_difficulty_indicator, indicator_for};
pub use live::LiveValidator;
pub use crate::utils::similarity::compute_field_difference;
