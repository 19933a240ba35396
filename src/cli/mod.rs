pub mod commands;
pub mod check;
pub mod draft;
pub mod render;
pub mod score;
pub mod serve;

pub use commands::{Cli, Commands};
