use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use common::env::static_dir_present;
use configs::{AppConfig, StoreBackend};
use migration::MigratorTrait;
use service::directory::{
    repo::{InMemoryStore, SeaOrmStore},
    repository::EntryStore,
};
use service::DirectoryService;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Open the configured entry store. The database backend is migrated before use.
pub async fn build_store(cfg: &AppConfig) -> Result<Arc<dyn EntryStore>, StartupError> {
    match cfg.store.backend {
        StoreBackend::Memory => {
            info!(seed = cfg.store.seed, "using in-memory store");
            let store = if cfg.store.seed { InMemoryStore::seeded() } else { InMemoryStore::new() };
            Ok(Arc::new(store))
        }
        StoreBackend::Database => {
            let db = models::db::connect_with_config(&cfg.database)
                .await
                .map_err(|e| StartupError::Store(e.to_string()))?;
            migration::Migrator::up(&db, None)
                .await
                .map_err(|e| StartupError::Store(format!("migration failed: {e}")))?;
            info!("using database store");
            Ok(Arc::new(SeaOrmStore::new(db)))
        }
    }
}

/// Build the full application from config: store, service and router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let store = build_store(cfg).await?;
    let state = AppState::new(DirectoryService::new(store));
    let static_dir = if static_dir_present(&cfg.server.static_dir).await {
        Some(cfg.server.static_dir.as_str())
    } else {
        None
    };
    Ok(routes::build_router(state, build_cors(), static_dir))
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, backend = ?cfg.store.backend, "phonebook server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
