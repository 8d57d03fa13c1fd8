// GET /api/chats and /api/chats/{index}: chat list and chat detail.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::pipeline::chats::{chat_messages, chat_overviews};
use crate::web::{api_error, AppState};

pub async fn list_chats(State(state): State<AppState>) -> impl IntoResponse {
    Json(chat_overviews(&state.corpus))
}

/// Parsed and scored messages of the conversation at `index`.
pub async fn get_chat(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> impl IntoResponse {
    let Some(conversation) = state.corpus.conversations.get(index) else {
        return api_error(StatusCode::NOT_FOUND, "No conversation at that index");
    };

    let messages = chat_messages(conversation, &state.corpus.current_user.name);
    Json(serde_json::json!({
        "username": conversation.username,
        "image": conversation.profile.image,
        "messages": messages,
    }))
    .into_response()
}
