use askama::Template;
use axum::{extract::State, response::Html};

use crate::errors::ApiError;
use crate::metrics;
use crate::state::ServerState;
use crate::templates::FortunesTemplate;

/// GET /fortunes: persisted fortunes plus the request-time one, sorted and rendered.
pub async fn fortunes(State(state): State<ServerState>) -> Result<Html<String>, ApiError> {
    let _timer = metrics::FORTUNES_REQUEST_DURATION.start_timer();

    let fortunes = state.fortunes.list_for_request().await.map_err(|e| {
        metrics::FORTUNES_ERRORS_TOTAL.inc();
        ApiError::from(e)
    })?;

    let body = FortunesTemplate { fortunes: &fortunes }.render().map_err(|e| {
        metrics::FORTUNES_ERRORS_TOTAL.inc();
        ApiError::from(e)
    })?;

    metrics::FORTUNES_RENDERED_TOTAL.inc();
    Ok(Html(body))
}
