//! Static front-end page.

use axum::response::Html;

/// Serves the single-page simulator UI.
///
/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
