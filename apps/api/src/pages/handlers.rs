use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::pages::PageMetadata;
use crate::state::AppState;

#[derive(Serialize)]
pub struct StaticParamsResponse {
    pub locale: String,
    pub slugs: Vec<String>,
}

#[derive(Serialize)]
pub struct PageResponse {
    #[serde(flatten)]
    pub metadata: PageMetadata,
    pub hero_subtitle: Option<String>,
    pub head_html: String,
}

/// GET /api/v1/static-params/:locale
/// Base-path segments to pre-render for a locale, derived from stored slugs.
pub async fn handle_static_params(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Json<StaticParamsResponse>, AppError> {
    // Validate before touching the store.
    state.resolver.registry().require(&locale)?;

    let all_slugs = state.pages.all_slugs().await?;
    let slugs = state.resolver.slugs_for_locale(&locale, &all_slugs)?;
    info!(
        locale = %locale,
        total = all_slugs.len(),
        matched = slugs.len(),
        "static params resolved"
    );

    Ok(Json(StaticParamsResponse { locale, slugs }))
}

/// GET /api/v1/pages/:locale/:slug
/// `slug` is the locale-free path segment, e.g. `fractional-cto-jobs`.
pub async fn handle_get_page(
    State(state): State<AppState>,
    Path((locale, slug)): Path<(String, String)>,
) -> Result<Json<PageResponse>, AppError> {
    let resolver = &state.resolver;
    let info = resolver.registry().require(&locale)?;

    let base_path = format!("/{slug}");
    let db_slug = resolver.canonical_slug(&locale, &base_path)?;
    debug!(locale = %locale, db_slug = %db_slug, "resolving page");

    let record = state
        .pages
        .lookup(&db_slug)
        .await?
        .filter(|page| page.is_published)
        .ok_or_else(|| AppError::NotFound(format!("Page '{slug}' not found for locale '{locale}'")))?;

    let metadata = PageMetadata::build(
        &record,
        info,
        &base_path,
        resolver,
        &state.config.site_base_url,
    )?;
    let head_html = metadata.render_head_links();

    Ok(Json(PageResponse {
        metadata,
        hero_subtitle: record.hero_subtitle,
        head_html,
    }))
}
