mod analyze;

use std::any::Any;
use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use newspulse_sentiment::NewsSentimentPipeline;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<NewsSentimentPipeline>,
}

/// Error response rendered as `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: &self.message,
            }),
        )
            .into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
}

#[allow(clippy::needless_pass_by_value)]
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "request handler panicked");
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/analyze", post(analyze::analyze))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(request_id))
                .layer(build_cors())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use newspulse_sentiment::{
        ArticleSource, ContentFetcher, FeedEntry, FetchedContent, PipelineOptions,
        PolarityScores, SentimentError, SentimentScorer,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    // -------------------------------------------------------------------------
    // Stub collaborators
    // -------------------------------------------------------------------------

    struct StubSource {
        titles: Vec<&'static str>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ArticleSource for StubSource {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn lookup(
            &self,
            _query: &str,
            limit: usize,
        ) -> Result<Vec<FeedEntry>, SentimentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .titles
                .iter()
                .take(limit)
                .enumerate()
                .map(|(i, title)| FeedEntry {
                    title: Some((*title).to_string()),
                    link: Some(format!("https://news.example.com/{i}")),
                    published: None,
                })
                .collect())
        }
    }

    struct NoFetch;

    #[async_trait]
    impl ContentFetcher for NoFetch {
        async fn fetch_content(&self, _link: &str) -> FetchedContent {
            panic!("headline mode must not fetch content");
        }
    }

    /// Positive for titles containing "up", negative for "down", else neutral.
    struct DirectionScorer;

    impl SentimentScorer for DirectionScorer {
        fn name(&self) -> &'static str {
            "direction"
        }

        fn polarity_scores(&self, text: &str) -> Result<PolarityScores, SentimentError> {
            let compound = if text.contains("up") {
                0.6
            } else if text.contains("down") {
                -0.4
            } else {
                0.0
            };
            Ok(PolarityScores::compound_only(compound))
        }
    }

    struct PanickingScorer;

    impl SentimentScorer for PanickingScorer {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn polarity_scores(&self, _text: &str) -> Result<PolarityScores, SentimentError> {
            panic!("scorer exploded");
        }
    }

    fn test_app_with(scorer: Arc<dyn SentimentScorer>) -> (Router, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = StubSource {
            titles: vec!["Gold up", "Gold down", "Gold flat", "Gold up again"],
            calls: Arc::clone(&calls),
        };
        let pipeline = NewsSentimentPipeline::new(
            Arc::new(source),
            Arc::new(NoFetch),
            scorer,
            PipelineOptions::default(),
        );
        let app = build_app(AppState {
            pipeline: Arc::new(pipeline),
        });
        (app, calls)
    }

    fn test_app() -> (Router, Arc<AtomicUsize>) {
        test_app_with(Arc::new(DirectionScorer))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        serde_json::from_slice(&body).expect("json parse")
    }

    // -------------------------------------------------------------------------
    // Routes
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn health_returns_ok_with_request_id() {
        let (app, _) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        let json = json_body(response).await;
        assert_eq!(json, serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn analyze_returns_summary_report() {
        let (app, calls) = test_app();
        let response = app
            .oneshot(post_json(r#"{"query": "gold", "num_articles": 4}"#))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let json = json_body(response).await;
        assert_eq!(json["query"], "gold");
        assert_eq!(json["total_articles"], 4);
        assert_eq!(json["summary"]["positive"]["count"], 2);
        assert_eq!(json["summary"]["positive"]["percent"], 50.0);
        assert_eq!(json["summary"]["negative"]["count"], 1);
        assert_eq!(json["summary"]["neutral"]["count"], 1);

        let first = &json["articles"][0];
        assert_eq!(first["title"], "Gold up");
        assert_eq!(first["link"], "https://news.example.com/0");
        assert_eq!(first["published"], "");
        assert_eq!(first["content"], "Gold up");
        assert_eq!(first["sentiment"], "positive");
        assert_eq!(first["polarity"], 0.6);
        assert!(first.get("explanation").is_none());
    }

    #[tokio::test]
    async fn analyze_echoes_untrimmed_query() {
        let (app, _) = test_app();
        let response = app
            .oneshot(post_json(r#"{"query": "  gold market  ", "limit": 1}"#))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["query"], "  gold market  ");
    }

    #[tokio::test]
    async fn analyze_accepts_limit_alias() {
        let (app, _) = test_app();
        let response = app
            .oneshot(post_json(r#"{"query": "gold", "limit": 2}"#))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["total_articles"], 2);
    }

    #[tokio::test]
    async fn analyze_defaults_limit_when_absent_or_non_positive() {
        for body in [r#"{"query": "gold"}"#, r#"{"query": "gold", "num_articles": 0}"#] {
            let (app, _) = test_app();
            let response = app.oneshot(post_json(body)).await.expect("response");
            assert_eq!(response.status(), StatusCode::OK);
            let json = json_body(response).await;
            // Stub only has four titles; the default of ten is not reached.
            assert_eq!(json["total_articles"], 4, "body: {body}");
        }
    }

    #[tokio::test]
    async fn empty_query_is_bad_request_and_skips_pipeline() {
        for body in [r#"{"query": ""}"#, r#"{"query": "   "}"#, r#"{"num_articles": 3}"#] {
            let (app, calls) = test_app();
            let response = app.oneshot(post_json(body)).await.expect("response");

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
            assert!(response.headers().contains_key(REQUEST_ID_HEADER));
            let json = json_body(response).await;
            assert_eq!(json["error"], "query must not be empty");
            assert_eq!(calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn malformed_body_is_unprocessable() {
        let (app, calls) = test_app();
        let response = app
            .oneshot(post_json(r#"{"query": "gold", "num_articles": "five"}"#))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = json_body(response).await;
        assert!(json["error"].is_string());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn scorer_panic_becomes_internal_error() {
        let (app, _) = test_app_with(Arc::new(PanickingScorer));
        let response = app
            .oneshot(post_json(r#"{"query": "gold"}"#))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(response).await;
        assert_eq!(json["error"], "internal server error");
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let (app, _) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/analyze")
                    .header(header::ORIGIN, "https://dashboard.example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }

    #[test]
    fn api_error_renders_error_field() {
        let response = ApiError::new(StatusCode::BAD_REQUEST, "nope").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
