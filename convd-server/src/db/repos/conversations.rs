//! Conversation repository
//!
//! The one real query in the system: for each contact, its most recent
//! message, ordered by that message's timestamp descending, paginated.
//!
//! The search and no-search paths reduce over different candidate sets on
//! purpose. Without a term, "latest" means latest overall. With a term,
//! the ILIKE filter is applied first and "latest" means latest among the
//! matching rows, so a contact whose true latest message does not match
//! still surfaces its newest matching one. Tie-break between messages
//! sharing a timestamp is unspecified on both paths.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::models::Page;

/// One (contact, latest message) pair as returned by the API.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ConversationRow {
    pub message_id: i64,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub contact_id: i64,
    pub name: String,
    pub phone_number: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Conversation repository
pub struct ConversationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ConversationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List conversations for a page, optionally filtered by a
    /// case-insensitive substring over name, phone number, and content.
    pub async fn list(
        &self,
        page: Page,
        search: Option<&str>,
    ) -> Result<Vec<ConversationRow>, DbError> {
        match search {
            Some(term) if !term.is_empty() => self.list_matching(page, term).await,
            _ => self.list_latest(page).await,
        }
    }

    /// No-search path: DISTINCT ON picks one row per contact from the
    /// (contact_id, timestamp DESC) scan, the outer query re-orders by
    /// recency across contacts.
    async fn list_latest(&self, page: Page) -> Result<Vec<ConversationRow>, DbError> {
        let rows = sqlx::query_as::<_, ConversationRow>(
            r#"
            SELECT * FROM (
                SELECT DISTINCT ON (m.contact_id)
                    m.id AS message_id,
                    m.content,
                    m.timestamp,
                    m.contact_id,
                    c.name,
                    c.phone_number
                FROM messages m
                JOIN contacts c ON m.contact_id = c.id
                ORDER BY m.contact_id, m.timestamp DESC
            ) AS latest_messages
            ORDER BY timestamp DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Search path: filter first, then rank the surviving rows per contact
    /// with a window function and keep rank 1.
    async fn list_matching(
        &self,
        page: Page,
        term: &str,
    ) -> Result<Vec<ConversationRow>, DbError> {
        let pattern = format!("%{}%", term);
        let rows = sqlx::query_as::<_, ConversationRow>(
            r#"
            WITH ranked_messages AS (
                SELECT
                    m.id AS message_id,
                    m.content,
                    m.timestamp,
                    c.id AS contact_id,
                    c.name,
                    c.phone_number,
                    ROW_NUMBER() OVER (PARTITION BY c.id ORDER BY m.timestamp DESC) AS rn
                FROM contacts c
                JOIN messages m ON c.id = m.contact_id
                WHERE
                    c.name ILIKE $1 OR
                    c.phone_number ILIKE $1 OR
                    m.content ILIKE $1
            )
            SELECT
                message_id,
                content,
                timestamp,
                contact_id,
                name,
                phone_number
            FROM ranked_messages
            WHERE rn = 1
            ORDER BY timestamp DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
