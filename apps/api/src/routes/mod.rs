pub mod health;

use axum::{routing::get, Router};

use crate::locale::handlers as locale_handlers;
use crate::pages::handlers as page_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Locale routing
        .route("/api/v1/locales", get(locale_handlers::handle_list_locales))
        .route(
            "/api/v1/locales/:locale/locations",
            get(locale_handlers::handle_locations),
        )
        .route("/api/v1/hreflang", get(locale_handlers::handle_hreflang))
        .route("/api/v1/locale-path", get(locale_handlers::handle_locale_path))
        .route("/api/v1/switch", get(locale_handlers::handle_switch_locale))
        .route("/api/v1/day-rate", get(locale_handlers::handle_day_rate))
        // Page store
        .route(
            "/api/v1/static-params/:locale",
            get(page_handlers::handle_static_params),
        )
        .route(
            "/api/v1/pages/:locale/:slug",
            get(page_handlers::handle_get_page),
        )
        .with_state(state)
}
