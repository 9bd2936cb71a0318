use axum::{extract::State, http::header, response::IntoResponse, Json};
use common::{types::Message, HELLO_WORLD};
use service::world::World;

use crate::errors::ApiError;
use crate::metrics;
use crate::state::ServerState;

/// GET /plaintext
pub async fn plaintext() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], HELLO_WORLD)
}

/// GET /json
pub async fn json() -> Json<Message> {
    Json(Message { message: HELLO_WORLD })
}

/// GET /db: one random `World` row.
pub async fn db(State(state): State<ServerState>) -> Result<Json<World>, ApiError> {
    metrics::WORLD_QUERIES_TOTAL.inc();
    let world = state.worlds.random_world().await?;
    Ok(Json(world))
}
