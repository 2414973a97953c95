//! Welcome page

use std::sync::Arc;

use axum::response::Html;
use axum::{routing::get, Router};

use crate::http::server::AppState;

const WELCOME: &str = "<h1>Welcome to convd</h1>\
<p>Server is running correctly.</p>\
<p>Use the <code>/conversations</code> endpoint to fetch data.</p>\
<p><b>Example:</b> <a href=\"/conversations\">/conversations</a></p>";

/// GET /
async fn home() -> Html<&'static str> {
    Html(WELCOME)
}

/// Home routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn home_mentions_conversations_endpoint() {
        let Html(body) = home().await;
        assert!(body.contains("/conversations"));
    }
}
