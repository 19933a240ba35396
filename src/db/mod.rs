pub mod connection;
pub mod drafts;
pub mod schema;

pub use connection::Database;
