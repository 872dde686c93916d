pub mod models;
pub mod table;

pub use models::{MenuItem, MenusResponse, WarListItem, WarResponse};
