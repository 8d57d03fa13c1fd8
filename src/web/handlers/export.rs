// GET /api/csv and /api/report: downloadable exports.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::output::csv::render_csv;
use crate::output::markdown::render_report;
use crate::web::{api_error, AppState};

pub async fn get_csv(State(state): State<AppState>) -> impl IntoResponse {
    match render_csv(&state.corpus) {
        Ok(csv) => ([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], csv).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "CSV export failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "CSV export failed")
        }
    }
}

pub async fn get_report(State(state): State<AppState>) -> impl IntoResponse {
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    (
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        render_report(&state.corpus, &generated_at),
    )
}
