//! Database access layer

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::{ConversationRepo, ConversationRow, DbError};
