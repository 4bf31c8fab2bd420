use axum::response::Html;

/// Landing page with a description search box wired to `/titles/description/:description`.
pub async fn handle_index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}
