mod config;
mod db;
mod errors;
mod locale;
mod models;
mod pages;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::locale::{LocaleRegistry, LocaleResolver};
use crate::pages::{InMemoryPageStore, PageStore, PgPageStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Quest API v{}", env!("CARGO_PKG_VERSION"));

    // The registry must have exactly one default locale; refuse to start otherwise.
    let registry = LocaleRegistry::fractional_quest().context("Invalid locale registry")?;
    info!(
        "Locale registry loaded: {} locales, default '{}'",
        registry.len(),
        registry.default_locale().code
    );
    let resolver = LocaleResolver::new(Arc::new(registry));

    let pages: Arc<dyn PageStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url, config.db_max_connections).await?;
            Arc::new(PgPageStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set; serving from an empty in-memory page store");
            Arc::new(InMemoryPageStore::default())
        }
    };

    let state = AppState {
        pages,
        resolver,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
