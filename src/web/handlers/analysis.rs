// GET /api/config, /api/data, /api/score: analysis over the loaded corpus.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::pipeline::analysis::analyze_corpus;
use crate::scoring::keywords::SUSPICIOUS_KEYWORDS;
use crate::scoring::risk::suspicion_percentage;
use crate::web::AppState;

/// Top terms per contact plus the max token count.
pub async fn get_analysis(State(state): State<AppState>) -> impl IntoResponse {
    Json(analyze_corpus(&state.corpus))
}

/// The raw corpus, unchanged.
pub async fn get_data(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.corpus.as_ref().clone())
}

pub async fn get_score(State(state): State<AppState>) -> impl IntoResponse {
    let score = suspicion_percentage(&state.corpus.conversations, SUSPICIOUS_KEYWORDS);
    Json(serde_json::json!({ "score": score }))
}
