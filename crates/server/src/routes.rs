pub mod bench;
pub mod fortunes;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use common::types::Health;

use crate::errors::ApiError;
use crate::metrics;
use crate::state::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics_handler() -> impl IntoResponse {
    metrics::encode_metrics()
}

async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not Found", None)
}

/// Build the full application router: benchmark routes plus health and metrics.
pub fn build_router(state: ServerState) -> Router {
    metrics::init();

    let bench = Router::new()
        .route("/plaintext", get(bench::plaintext))
        .route("/json", get(bench::json))
        .route("/db", get(bench::db))
        .route("/fortunes", get(fortunes::fortunes));

    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler));

    bench
        .merge(ops)
        .fallback(not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new().layer(
                TraceLayer::new_for_http()
                    // 每次请求创建 span，包含方法和路径等
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                    .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                    // 响应返回时打点，包含状态码与耗时
                    .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                    // 失败（5xx 等）时以 ERROR 记录
                    .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
            ),
        )
}
