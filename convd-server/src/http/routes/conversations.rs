//! Conversation listing endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::{ConversationRepo, ConversationRow};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Page;

/// Query params for GET /conversations.
///
/// `page` is accepted as a raw string so that non-numeric input degrades
/// to page 1 instead of a 400.
#[derive(Debug, Default, Deserialize)]
pub struct ConversationParams {
    pub page: Option<String>,
    #[serde(rename = "searchValue")]
    pub search_value: Option<String>,
}

impl ConversationParams {
    fn page(&self) -> Page {
        Page::from_query_value(self.page.as_deref())
    }

    /// Empty search terms mean "no filter".
    fn search(&self) -> Option<&str> {
        self.search_value.as_deref().filter(|s| !s.is_empty())
    }
}

/// GET /conversations?page=<int>&searchValue=<string>
async fn list_conversations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ConversationParams>,
) -> Result<Json<Vec<ConversationRow>>, ApiError> {
    let rows = ConversationRepo::new(&state.pool)
        .list(params.page(), params.search())
        .await?;

    Ok(Json(rows))
}

/// Conversation routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/conversations", get(list_conversations))
}
