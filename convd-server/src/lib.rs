//! convd-server: read-only HTTP API over the contacts/messages dataset
//!
//! Serves a single conversation-listing endpoint: per contact, the most
//! recent message, optionally filtered by a case-insensitive substring
//! search, 50 rows per page. Writes happen elsewhere (convd-seed).

pub mod config;
pub mod db;
pub mod http;
pub mod models;

/// Schema migrations shared by the server and the seeder.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../migrations");
