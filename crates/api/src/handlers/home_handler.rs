//! Landing page.

use axum::{extract::State, response::Html};

use crate::state::AppState;

/// Static landing page greeting the configured display name
pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        "<h1>Users &amp; Posts API</h1><h2>Welcome, {} to my deployed site!</h2>",
        escape_html(&state.config.display_name)
    ))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
