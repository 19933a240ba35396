pub mod health;
pub mod forks;
pub mod drafts;
