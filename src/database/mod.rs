pub mod connection;
pub mod models;
pub mod players;
pub mod ratings;
pub mod setup;
pub mod source;

pub use connection::{create_memory_pool, create_pool, get_connection, DbPool};
pub use models::*;
pub use source::SqliteSource;
