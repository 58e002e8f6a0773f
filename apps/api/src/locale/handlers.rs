use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::locale::currency::{format_day_rate_range, format_salary, role_defaults, RoleDefaults};
use crate::locale::detect::{locale_from_path, switch_locale_path};
use crate::locale::registry::LocationOption;
use crate::locale::{HreflangEntry, LocaleInfo};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PathQuery {
    pub path: String,
}

#[derive(Deserialize)]
pub struct LocalePathQuery {
    pub locale: String,
    pub path: String,
}

#[derive(Deserialize)]
pub struct SwitchQuery {
    pub pathname: String,
    pub target: String,
}

#[derive(Deserialize)]
pub struct DayRateQuery {
    pub locale: String,
    pub min: Option<i64>,
    pub max: Option<i64>,
    /// Executive role (`cfo`, `cto`, ...). Supplies the range when min/max are absent.
    pub role: Option<String>,
    #[serde(default)]
    pub from_gbp: bool,
}

#[derive(Serialize)]
pub struct HreflangResponse {
    pub path: String,
    pub alternates: Vec<HreflangEntry>,
    pub absolute: Vec<HreflangEntry>,
}

#[derive(Serialize)]
pub struct LocalePathResponse {
    pub locale: String,
    pub path: String,
    pub slug: String,
}

#[derive(Serialize)]
pub struct SwitchResponse {
    pub from: String,
    pub target: String,
    pub path: String,
}

#[derive(Serialize)]
pub struct DayRateResponse {
    pub locale: String,
    pub currency: String,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleDefaults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_salary: Option<String>,
}

#[derive(Serialize)]
pub struct LocationsResponse {
    pub locale: String,
    pub locations: Vec<LocationOption>,
}

fn require_path(path: &str) -> Result<(), AppError> {
    if path.trim().is_empty() {
        return Err(AppError::Validation("path must not be empty".to_string()));
    }
    Ok(())
}

/// GET /api/v1/locales
pub async fn handle_list_locales(State(state): State<AppState>) -> Json<Vec<LocaleInfo>> {
    Json(state.resolver.registry().iter().cloned().collect())
}

/// GET /api/v1/hreflang?path=
pub async fn handle_hreflang(
    State(state): State<AppState>,
    Query(params): Query<PathQuery>,
) -> Result<Json<HreflangResponse>, AppError> {
    require_path(&params.path)?;
    let resolver = &state.resolver;
    Ok(Json(HreflangResponse {
        alternates: resolver.hreflang_alternates(&params.path),
        absolute: resolver.absolute_alternates(&state.config.site_base_url, &params.path),
        path: params.path,
    }))
}

/// GET /api/v1/locale-path?locale=&path=
pub async fn handle_locale_path(
    State(state): State<AppState>,
    Query(params): Query<LocalePathQuery>,
) -> Result<Json<LocalePathResponse>, AppError> {
    require_path(&params.path)?;
    let path = state.resolver.locale_path(&params.locale, &params.path)?;
    let slug = state.resolver.canonical_slug(&params.locale, &params.path)?;
    Ok(Json(LocalePathResponse {
        locale: params.locale,
        path,
        slug,
    }))
}

/// GET /api/v1/switch?pathname=&target=
pub async fn handle_switch_locale(
    State(state): State<AppState>,
    Query(params): Query<SwitchQuery>,
) -> Result<Json<SwitchResponse>, AppError> {
    let from = locale_from_path(state.resolver.registry(), &params.pathname)
        .code
        .clone();
    let path = switch_locale_path(&state.resolver, &params.pathname, &params.target)?;
    Ok(Json(SwitchResponse {
        from,
        target: params.target,
        path,
    }))
}

/// GET /api/v1/day-rate?locale=&min=&max=&role=&from_gbp=
/// Explicit bounds win; otherwise the role's market range is used as-is
/// (role figures are already in the market currency).
pub async fn handle_day_rate(
    State(state): State<AppState>,
    Query(params): Query<DayRateQuery>,
) -> Result<Json<DayRateResponse>, AppError> {
    let info = state.resolver.registry().require(&params.locale)?;
    let role = params
        .role
        .as_deref()
        .map(|role| role_defaults(info, role))
        .transpose()?;

    let (min, max, from_gbp) = match (params.min, params.max, role) {
        (Some(min), Some(max), _) => (min, max, params.from_gbp),
        (None, None, Some(defaults)) => (defaults.min_day_rate, defaults.max_day_rate, false),
        _ => {
            return Err(AppError::Validation(
                "either both min and max, or a role, are required".to_string(),
            ))
        }
    };
    if min > max {
        return Err(AppError::Validation(format!(
            "min ({min}) must not exceed max ({max})"
        )));
    }

    let display = format_day_rate_range(min, max, info, from_gbp)?;
    let avg_salary = role
        .map(|defaults| format_salary(defaults.avg_salary, info, false))
        .transpose()?;
    Ok(Json(DayRateResponse {
        locale: info.code.clone(),
        currency: info.currency.clone(),
        display,
        role,
        avg_salary,
    }))
}

/// GET /api/v1/locales/:locale/locations
pub async fn handle_locations(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Json<LocationsResponse>, AppError> {
    let info = state.resolver.registry().require(&locale)?;
    Ok(Json(LocationsResponse {
        locale: info.code.clone(),
        locations: info.locations.clone(),
    }))
}
