use std::future::Future;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use service::ContentServices;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect, migrate, and build the router for the given configuration.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    common::env::ensure_static_dir(&cfg.server.static_dir).await;

    // DB connection
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Migration(e.to_string()))?;
        info!(service = "server", event = "migrated", "database schema up to date");
    }

    let state = ServerState::new(ContentServices::seaorm(db));
    Ok(routes::build_router(state, build_cors(), &cfg.server.static_dir))
}

/// Public entry: build the app and serve until `shutdown` resolves
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg).await?;

    // Bind and serve
    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("cannot bind {addr}: {e}")))?;
    info!(service = "server", event = "listening", addr = %listener.local_addr()?, "server listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!(service = "server", event = "drained", "server stopped accepting connections");
    Ok(())
}
