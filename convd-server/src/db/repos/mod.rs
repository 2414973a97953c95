//! Repository implementations for database access
//!
//! One repository: conversations. It is read-only and uses a single
//! parameterized statement per call (no N+1, no in-process reduction).

pub mod conversations;

pub use conversations::{ConversationRepo, ConversationRow, DbError};
