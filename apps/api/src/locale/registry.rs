use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::locale::resolver::X_DEFAULT;

/// Errors raised by locale configuration and locale-aware lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("Locale configuration error: {0}")]
    Configuration(String),

    #[error("Unknown locale: {0}")]
    InvalidLocale(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

/// One entry of a market's job-location filter. The empty value means "all".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationOption {
    pub value: String,
    pub label: String,
}

/// One supported market of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleInfo {
    pub code: String,
    pub name: String,
    /// BCP-47 tag used in hreflang output, e.g. `en-GB`.
    pub hreflang: String,
    pub currency: String,
    pub currency_symbol: String,
    pub country: String,
    pub is_default: bool,
    pub locations: Vec<LocationOption>,
}

impl LocaleInfo {
    pub fn new(code: &str, name: &str, hreflang: &str) -> Self {
        LocaleInfo {
            code: code.to_string(),
            name: name.to_string(),
            hreflang: hreflang.to_string(),
            currency: String::new(),
            currency_symbol: String::new(),
            country: code.to_uppercase(),
            is_default: false,
            locations: Vec::new(),
        }
    }

    pub fn with_currency(mut self, currency: &str, symbol: &str) -> Self {
        self.currency = currency.to_string();
        self.currency_symbol = symbol.to_string();
        self
    }

    /// `all_label` becomes the leading catch-all option; each city is its own value.
    pub fn with_locations(mut self, all_label: &str, cities: &[&str]) -> Self {
        self.locations = std::iter::once(LocationOption {
            value: String::new(),
            label: all_label.to_string(),
        })
        .chain(cities.iter().map(|city| LocationOption {
            value: city.to_string(),
            label: city.to_string(),
        }))
        .collect();
        self
    }

    pub fn default_locale(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Open Graph wants `en_GB`, not `en-GB`.
    pub fn og_locale(&self) -> String {
        self.hreflang.replace('-', "_")
    }
}

/// Ordered, validated set of locales. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<LocaleInfo>,
    default_index: usize,
}

impl LocaleRegistry {
    /// Validates the entries: at least one locale, unique codes, unique
    /// hreflang tags that do not collide with `x-default`, exactly one default.
    pub fn new(locales: Vec<LocaleInfo>) -> Result<Self, LocaleError> {
        if locales.is_empty() {
            return Err(LocaleError::Configuration(
                "registry must contain at least one locale".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        let mut seen_tags = HashSet::new();
        for locale in &locales {
            if locale.code.is_empty() {
                return Err(LocaleError::Configuration(
                    "locale code must not be empty".to_string(),
                ));
            }
            if !seen.insert(locale.code.as_str()) {
                return Err(LocaleError::Configuration(format!(
                    "duplicate locale code '{}'",
                    locale.code
                )));
            }

            let tag = locale.hreflang.trim();
            if tag.is_empty() {
                return Err(LocaleError::Configuration(format!(
                    "locale '{}' has an empty hreflang tag",
                    locale.code
                )));
            }
            if tag.eq_ignore_ascii_case(X_DEFAULT) {
                return Err(LocaleError::Configuration(format!(
                    "locale '{}' uses the reserved hreflang tag '{X_DEFAULT}'",
                    locale.code
                )));
            }
            // Tags compare case-insensitively.
            if !seen_tags.insert(tag.to_ascii_lowercase()) {
                return Err(LocaleError::Configuration(format!(
                    "duplicate hreflang tag '{}'",
                    locale.hreflang
                )));
            }
        }

        let defaults: Vec<usize> = locales
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_default)
            .map(|(i, _)| i)
            .collect();

        let default_index = match defaults.as_slice() {
            [only] => *only,
            [] => {
                return Err(LocaleError::Configuration(
                    "no default locale configured".to_string(),
                ))
            }
            _ => {
                return Err(LocaleError::Configuration(format!(
                    "{} locales marked as default, expected exactly one",
                    defaults.len()
                )))
            }
        };

        Ok(LocaleRegistry {
            locales,
            default_index,
        })
    }

    /// The production market set: UK at the root, US/AU/NZ prefixed.
    pub fn fractional_quest() -> Result<Self, LocaleError> {
        let locales = vec![
            LocaleInfo::new("uk", "United Kingdom", "en-GB")
                .with_currency("GBP", "£")
                .with_locations(
                    "All UK Locations",
                    &["London", "Manchester", "Birmingham", "Bristol", "Edinburgh", "Leeds", "Remote"],
                )
                .default_locale(),
            LocaleInfo::new("us", "United States", "en-US")
                .with_currency("USD", "$")
                .with_locations(
                    "All US Locations",
                    &[
                        "New York",
                        "San Francisco",
                        "Los Angeles",
                        "Chicago",
                        "Boston",
                        "Austin",
                        "Seattle",
                        "Remote",
                    ],
                ),
            LocaleInfo::new("au", "Australia", "en-AU")
                .with_currency("AUD", "A$")
                .with_locations(
                    "All Australian Locations",
                    &["Sydney", "Melbourne", "Brisbane", "Perth", "Adelaide", "Remote"],
                ),
            LocaleInfo::new("nz", "New Zealand", "en-NZ")
                .with_currency("NZD", "NZ$")
                .with_locations(
                    "All NZ Locations",
                    &["Auckland", "Wellington", "Christchurch", "Hamilton", "Remote"],
                ),
        ];
        Self::new(locales)
    }

    pub fn get(&self, code: &str) -> Option<&LocaleInfo> {
        self.locales.iter().find(|l| l.code == code)
    }

    /// Like `get`, but an absent code is an error rather than a silent fallback.
    pub fn require(&self, code: &str) -> Result<&LocaleInfo, LocaleError> {
        self.get(code)
            .ok_or_else(|| LocaleError::InvalidLocale(code.to_string()))
    }

    pub fn default_locale(&self) -> &LocaleInfo {
        &self.locales[self.default_index]
    }

    /// Suffix carried by default-locale jobs pages, e.g. `-uk`.
    pub fn default_suffix(&self) -> String {
        format!("-{}", self.default_locale().code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocaleInfo> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }
}
