use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use newspulse_sentiment::SummaryReport;
use serde::Deserialize;

use super::{ApiError, AppState};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeRequest {
    query: Option<String>,
    #[serde(alias = "limit")]
    num_articles: Option<i64>,
}

pub(super) async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<SummaryReport>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(request_id = %req_id.0, error = %rejection, "rejected analyze body");
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    })?;

    let query = request.query.unwrap_or_default();
    let report = state
        .pipeline
        .analyze(&query, request.num_articles)
        .await
        .map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, e.to_string()))?;

    tracing::debug!(
        request_id = %req_id.0,
        query = %report.query,
        total = report.total_articles,
        "analyze request served"
    );
    Ok(Json(report))
}
