use once_cell::sync::Lazy;
use prometheus::{register_histogram, register_int_counter, Encoder, Histogram, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static FORTUNES_RENDERED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "fortunes_rendered_total",
        "Total fortunes pages rendered"
    )
    .expect("register fortunes_rendered_total")
});

pub static FORTUNES_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "fortunes_errors_total",
        "Total fortunes requests that failed to load or render"
    )
    .expect("register fortunes_errors_total")
});

pub static WORLD_QUERIES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "world_queries_total",
        "Total single-row world lookups"
    )
    .expect("register world_queries_total")
});

pub static FORTUNES_REQUEST_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "fortunes_request_duration_seconds",
        "Fortunes request duration in seconds",
        vec![0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .expect("register fortunes_request_duration")
});

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}

/// Touch every metric so `/metrics` lists them before the first request.
pub fn init() {
    Lazy::force(&FORTUNES_RENDERED_TOTAL);
    Lazy::force(&FORTUNES_ERRORS_TOTAL);
    Lazy::force(&WORLD_QUERIES_TOTAL);
    Lazy::force(&FORTUNES_REQUEST_DURATION);
}
