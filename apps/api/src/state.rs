use std::sync::Arc;

use crate::config::Config;
use crate::locale::LocaleResolver;
use crate::pages::PageStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres-backed in production, in-memory when no database is configured.
    pub pages: Arc<dyn PageStore>,
    /// Immutable; built from the locale registry once at startup.
    pub resolver: LocaleResolver,
    pub config: Config,
}

#[cfg(test)]
pub(crate) fn test_state(pages: Vec<crate::models::page::PageRecord>) -> AppState {
    use crate::locale::LocaleRegistry;
    use crate::pages::InMemoryPageStore;

    AppState {
        pages: Arc::new(InMemoryPageStore::new(pages)),
        resolver: LocaleResolver::new(Arc::new(
            LocaleRegistry::fractional_quest().expect("built-in registry"),
        )),
        config: Config {
            database_url: None,
            db_max_connections: 1,
            site_base_url: crate::config::DEFAULT_SITE_BASE_URL.to_string(),
            port: 0,
            rust_log: "debug".to_string(),
        },
    }
}
