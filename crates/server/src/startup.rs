use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::{
    fortune::{cache::FortuneCache, repo::seaorm::SeaOrmFortuneRepository},
    world::repo::SeaOrmWorldRepository,
    FortuneService, WorldService,
};

fn load_bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let addr = cfg.server.bind_addr();
    addr.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {addr}: {e}")))
}

/// Wire repositories, the fortune cache and services over one connection pool.
pub fn build_state(db: DatabaseConnection, cfg: &AppConfig) -> ServerState {
    let cache = FortuneCache::new(&cfg.cache);
    let fortunes = FortuneService::new(
        Arc::new(SeaOrmFortuneRepository { db: db.clone() }),
        cache,
        cfg.fortunes.retrieval,
    );
    let worlds = WorldService::new(Arc::new(SeaOrmWorldRepository { db }));
    ServerState { fortunes, worlds }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(service = "server", event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Public entry: load config, connect, build the app and serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    run_with_config(cfg).await
}

pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    let state = build_state(db, &cfg);
    info!(retrieval = ?state.fortunes.mode(), "fortune service ready");

    let app: Router = routes::build_router(state);

    let addr = load_bind_addr(&cfg)?;
    info!(%addr, "starting fortunes server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
