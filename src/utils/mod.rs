pub mod similarity;

pub use similarity::compute_field_difference;
