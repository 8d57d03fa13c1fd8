// Web server: Axum-based JSON API for the case dashboard.
//
// The corpus is loaded once at startup and shared read-only. Every request
// recomputes its analysis from that snapshot; no state changes between
// requests.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::corpus::models::Corpus;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub corpus: Arc<Corpus>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(corpus: Corpus, port: u16, bind: &str) -> Result<()> {
    let state = AppState {
        corpus: Arc::new(corpus),
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("casewatch API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/config", get(handlers::analysis::get_analysis))
        .route("/api/data", get(handlers::analysis::get_data))
        .route("/api/score", get(handlers::analysis::get_score))
        .route("/api/chats", get(handlers::chats::list_chats))
        .route("/api/chats/{index}", get(handlers::chats::get_chat))
        .route("/api/csv", get(handlers::export::get_csv))
        .route("/api/report", get(handlers::export::get_report));

    Router::new()
        .merge(api)
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::corpus::models::{Conversation, CurrentUser};

    fn test_state() -> AppState {
        AppState {
            corpus: Arc::new(Corpus {
                current_user: CurrentUser {
                    name: "Cosi".to_string(),
                    image: "cosi.png".to_string(),
                },
                conversations: vec![Conversation::new(
                    "Alex",
                    vec![
                        "Alex: got the weed ready, 10:01am".to_string(),
                        "Cosi: cool, cash only, 10:02am".to_string(),
                    ],
                )],
            }),
        }
    }

    async fn fetch(uri: &str) -> Response {
        build_router(test_state())
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn read_body(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn read_body_string(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let resp = fetch("/health").await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn config_returns_analysis() {
        let resp = fetch("/api/config").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_body(resp).await;
        assert_eq!(body["current_user"]["name"], "Cosi");
        assert_eq!(body["users"][0]["username"], "Alex");
        assert_eq!(body["max_token_count"], 6);
    }

    #[tokio::test]
    async fn score_is_percentage_of_flagged_messages() {
        let body = read_body(fetch("/api/score").await).await;
        assert_eq!(body["score"], 100);
    }

    #[tokio::test]
    async fn chats_list_has_risk() {
        let body = read_body(fetch("/api/chats").await).await;
        assert_eq!(body[0]["level"], "medium");
        assert_eq!(body[0]["hits"], 2);
    }

    #[tokio::test]
    async fn chat_detail_and_missing_chat() {
        let body = read_body(fetch("/api/chats/0").await).await;
        assert_eq!(body["messages"][0]["suspicion_score"], 300);
        assert_eq!(body["messages"][1]["from_current_user"], true);

        let resp = fetch("/api/chats/7").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cors_preflight_allows_only_reads() {
        let resp = build_router(test_state())
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/config")
                    .header("origin", "http://localhost:5173")
                    .header("access-control-request-method", "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let methods = resp
            .headers()
            .get("access-control-allow-methods")
            .unwrap()
            .to_str()
            .unwrap()
            .to_ascii_uppercase();
        assert!(methods.contains("GET"));
        for write in ["POST", "PUT", "DELETE"] {
            assert!(!methods.contains(write), "{write} should not be allowed: {methods}");
        }

        let headers = resp
            .headers()
            .get("access-control-allow-headers")
            .unwrap()
            .to_str()
            .unwrap()
            .to_ascii_lowercase();
        assert!(headers.contains("content-type"));
        assert!(!headers.contains("authorization"));
    }

    #[tokio::test]
    async fn csv_export() {
        let resp = fetch("/api/csv").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap().to_str().unwrap(),
            "text/csv; charset=utf-8"
        );
        let body = read_body_string(resp).await;
        assert!(body.starts_with("\"User\",\"Message\",\"Time\"\n"));
        assert!(body.contains(r#""Alex","Cosi: cool, cash only","10:02am""#));
    }

    #[tokio::test]
    async fn report_export() {
        let body = read_body_string(fetch("/api/report").await).await;
        assert!(body.contains("### Suspect: **Cosi**"));
    }
}
