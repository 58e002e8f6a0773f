//! Locale Path Resolver — maps between public URL paths, locale-prefixed
//! routes and the canonical slugs used as page-store keys.
//!
//! The default locale lives at the root and its jobs pages carry a suffix
//! (`/fractional-cfo-jobs-uk`). Every other locale is served under a path
//! prefix (`/us/fractional-cfo-jobs`) and stored under a slug prefix
//! (`us-fractional-cto-jobs`).
//!
//! All operations are pure. An unknown locale is always an error, never a
//! silent fallback to the default.

use std::sync::Arc;

use serde::Serialize;

use crate::locale::registry::{LocaleError, LocaleInfo, LocaleRegistry};

/// hreflang value for the fallback alternate.
pub const X_DEFAULT: &str = "x-default";

/// Substrings that mark a page as a jobs page for default-locale suffixing.
/// Known false positive: any `fractional-` guide page (e.g.
/// `/fractional-quest-guide`) is classed as a jobs page.
const JOBS_MARKERS: [&str; 2] = ["-jobs", "fractional-"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HreflangEntry {
    pub hreflang: String,
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct LocaleResolver {
    registry: Arc<LocaleRegistry>,
}

impl LocaleResolver {
    pub fn new(registry: Arc<LocaleRegistry>) -> Self {
        LocaleResolver { registry }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Strips exactly one trailing default-locale suffix (`-uk`).
    pub fn normalize_base_path<'a>(&self, path: &'a str) -> &'a str {
        let suffix = self.registry.default_suffix();
        path.strip_suffix(suffix.as_str()).unwrap_or(path)
    }

    /// Public path of `base_path` in `locale`.
    pub fn locale_path(&self, locale: &str, base_path: &str) -> Result<String, LocaleError> {
        let info = self.registry.require(locale)?;
        Ok(self.path_for(info, base_path))
    }

    /// One entry per registry locale in registry order, then `x-default`
    /// pointing at the default locale's path.
    pub fn hreflang_alternates(&self, base_path: &str) -> Vec<HreflangEntry> {
        let mut entries: Vec<HreflangEntry> = self
            .registry
            .iter()
            .map(|info| HreflangEntry {
                hreflang: info.hreflang.clone(),
                path: self.path_for(info, base_path),
            })
            .collect();

        entries.push(HreflangEntry {
            hreflang: X_DEFAULT.to_string(),
            path: self.path_for(self.registry.default_locale(), base_path),
        });

        entries
    }

    /// Same as `hreflang_alternates` with every path joined onto `base_url`.
    pub fn absolute_alternates(&self, base_url: &str, base_path: &str) -> Vec<HreflangEntry> {
        let base_url = base_url.trim_end_matches('/');
        self.hreflang_alternates(base_path)
            .into_iter()
            .map(|entry| HreflangEntry {
                path: join_url(base_url, &entry.path),
                hreflang: entry.hreflang,
            })
            .collect()
    }

    /// Page-store key for `base_path` in `locale`.
    ///
    /// `base_path` must already have any `/{locale}/` routing segment removed;
    /// a slug prefix is never de-duplicated here.
    pub fn canonical_slug(&self, locale: &str, base_path: &str) -> Result<String, LocaleError> {
        let info = self.registry.require(locale)?;
        Ok(self.slug_for(info, base_path))
    }

    /// Base-path segments of every slug stored for `locale`, in input order.
    ///
    /// Only slugs that `canonical_slug(locale, segment)` reproduces exactly are
    /// returned, so each result maps back to a slug in `all_slugs`.
    pub fn slugs_for_locale<S: AsRef<str>>(
        &self,
        locale: &str,
        all_slugs: &[S],
    ) -> Result<Vec<String>, LocaleError> {
        let info = self.registry.require(locale)?;

        let segments = all_slugs
            .iter()
            .map(|slug| slug.as_ref())
            .filter_map(|slug| {
                let segment = if info.is_default {
                    if self.has_foreign_prefix(slug) {
                        return None;
                    }
                    self.normalize_base_path(slug)
                } else {
                    slug.strip_prefix(info.code.as_str())?.strip_prefix('-')?
                };
                (self.slug_for(info, segment) == slug).then(|| segment.to_string())
            })
            .collect();

        Ok(segments)
    }

    fn path_for(&self, info: &LocaleInfo, base_path: &str) -> String {
        let normalized = self.normalize_base_path(base_path);

        if info.is_default {
            if is_jobs_page(normalized) {
                return format!("{normalized}{}", self.registry.default_suffix());
            }
            return normalized.to_string();
        }

        if normalized.is_empty() || normalized.starts_with('/') {
            format!("/{}{normalized}", info.code)
        } else {
            format!("/{}/{normalized}", info.code)
        }
    }

    fn slug_for(&self, info: &LocaleInfo, base_path: &str) -> String {
        if info.is_default {
            let path = self.path_for(info, base_path);
            return strip_leading_slash(&path).to_string();
        }
        let normalized = self.normalize_base_path(base_path);
        format!("{}-{}", info.code, strip_leading_slash(normalized))
    }

    fn has_foreign_prefix(&self, slug: &str) -> bool {
        self.registry.iter().filter(|l| !l.is_default).any(|l| {
            slug.strip_prefix(l.code.as_str())
                .is_some_and(|rest| rest.starts_with('-'))
        })
    }
}

/// Joins a site origin and a site path with exactly one `/` between them.
/// Default-locale paths keep whatever leading slash the caller gave, so the
/// separator cannot be assumed.
pub fn join_url(base_url: &str, path: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    match path.strip_prefix('/') {
        Some(rest) => format!("{base_url}/{rest}"),
        None => format!("{base_url}/{path}"),
    }
}

pub fn is_jobs_page(path: &str) -> bool {
    JOBS_MARKERS.iter().any(|marker| path.contains(marker))
}

fn strip_leading_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> LocaleResolver {
        LocaleResolver::new(Arc::new(LocaleRegistry::fractional_quest().unwrap()))
    }

    const SAMPLE_PATHS: [&str; 6] = [
        "/fractional-cfo-jobs",
        "/fractional-cto-jobs",
        "/birmingham",
        "/interim-cmo-jobs",
        "/part-time-cfo",
        "/",
    ];

    #[test]
    fn test_normalize_strips_single_trailing_suffix() {
        let r = resolver();
        assert_eq!(r.normalize_base_path("/fractional-cfo-jobs-uk"), "/fractional-cfo-jobs");
        assert_eq!(r.normalize_base_path("/fractional-cfo-jobs"), "/fractional-cfo-jobs");
    }

    #[test]
    fn test_normalize_ignores_mid_string_and_partial_matches() {
        let r = resolver();
        assert_eq!(r.normalize_base_path("/uk-hiring-guide"), "/uk-hiring-guide");
        assert_eq!(r.normalize_base_path("/jobs-ukraine"), "/jobs-ukraine");
        assert_eq!(r.normalize_base_path("/fractional-cfo-jobsuk"), "/fractional-cfo-jobsuk");
        assert_eq!(r.normalize_base_path("/cfo-jobs-uk-uk"), "/cfo-jobs-uk");
    }

    #[test]
    fn test_scenario_locale_paths_for_cfo_jobs() {
        let r = resolver();
        let p = "/fractional-cfo-jobs";
        assert_eq!(r.locale_path("uk", p).unwrap(), "/fractional-cfo-jobs-uk");
        assert_eq!(r.locale_path("us", p).unwrap(), "/us/fractional-cfo-jobs");
        assert_eq!(r.locale_path("au", p).unwrap(), "/au/fractional-cfo-jobs");
        assert_eq!(r.locale_path("nz", p).unwrap(), "/nz/fractional-cfo-jobs");
    }

    #[test]
    fn test_suffixed_input_is_not_carried_to_other_locales() {
        let r = resolver();
        assert_eq!(
            r.locale_path("us", "/fractional-cfo-jobs-uk").unwrap(),
            "/us/fractional-cfo-jobs"
        );
    }

    #[test]
    fn test_scenario_hreflang_alternates() {
        let r = resolver();
        let alternates: Vec<(String, String)> = r
            .hreflang_alternates("/fractional-cfo-jobs")
            .into_iter()
            .map(|e| (e.hreflang, e.path))
            .collect();

        let expected: Vec<(String, String)> = [
            ("en-GB", "/fractional-cfo-jobs-uk"),
            ("en-US", "/us/fractional-cfo-jobs"),
            ("en-AU", "/au/fractional-cfo-jobs"),
            ("en-NZ", "/nz/fractional-cfo-jobs"),
            ("x-default", "/fractional-cfo-jobs-uk"),
        ]
        .iter()
        .map(|(l, p)| (l.to_string(), p.to_string()))
        .collect();

        assert_eq!(alternates, expected);
    }

    #[test]
    fn test_non_jobs_page_has_no_suffix() {
        let r = resolver();
        assert_eq!(r.locale_path("uk", "/birmingham").unwrap(), "/birmingham");
        assert_eq!(r.locale_path("us", "/birmingham").unwrap(), "/us/birmingham");
    }

    #[test]
    fn test_fractional_guide_pages_are_classed_as_jobs_pages() {
        // Documents the current heuristic: any `fractional-` page gets the suffix.
        let r = resolver();
        assert!(is_jobs_page("/fractional-quest-guide"));
        assert_eq!(
            r.locale_path("uk", "/fractional-quest-guide").unwrap(),
            "/fractional-quest-guide-uk"
        );
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        let r = resolver();
        let err = r.locale_path("fr", "/fractional-cfo-jobs").unwrap_err();
        assert_eq!(err, LocaleError::InvalidLocale("fr".to_string()));
        assert!(r.canonical_slug("fr", "/fractional-cfo-jobs").is_err());
        assert!(r.slugs_for_locale("fr", &["fr-fractional-cfo-jobs"]).is_err());
    }

    #[test]
    fn test_default_locale_path_is_idempotent() {
        let r = resolver();
        for p in SAMPLE_PATHS.iter().chain(["/fractional-cfo-jobs-uk", ""].iter()) {
            let once = r.locale_path("uk", p).unwrap();
            let twice = r.locale_path("uk", &once).unwrap();
            assert_eq!(once, twice, "path {p}");
        }
    }

    #[test]
    fn test_alternates_have_registry_len_plus_one_entries() {
        let r = resolver();
        for p in SAMPLE_PATHS {
            let alternates = r.hreflang_alternates(p);
            assert_eq!(alternates.len(), r.registry().len() + 1);
            let last = alternates.last().unwrap();
            assert_eq!(last.hreflang, X_DEFAULT);
            assert_eq!(last.path, r.locale_path("uk", p).unwrap());
        }
    }

    #[test]
    fn test_absolute_alternates_join_base_url() {
        let r = resolver();
        let alternates = r.absolute_alternates("https://fractional.quest/", "/fractional-cto-jobs");
        assert_eq!(alternates[1].path, "https://fractional.quest/us/fractional-cto-jobs");
        assert_eq!(alternates[4].path, "https://fractional.quest/fractional-cto-jobs-uk");
    }

    #[test]
    fn test_absolute_alternates_for_slashless_path() {
        let r = resolver();
        let alternates = r.absolute_alternates("https://fractional.quest", "fractional-cfo-jobs");
        let urls: Vec<&str> = alternates.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://fractional.quest/fractional-cfo-jobs-uk",
                "https://fractional.quest/us/fractional-cfo-jobs",
                "https://fractional.quest/au/fractional-cfo-jobs",
                "https://fractional.quest/nz/fractional-cfo-jobs",
                "https://fractional.quest/fractional-cfo-jobs-uk",
            ]
        );
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://fractional.quest/", "/remote"), "https://fractional.quest/remote");
        assert_eq!(join_url("https://fractional.quest", "remote"), "https://fractional.quest/remote");
        assert_eq!(join_url("https://fractional.quest", ""), "https://fractional.quest/");
    }

    #[test]
    fn test_canonical_slug_for_international_locales() {
        let r = resolver();
        assert_eq!(
            r.canonical_slug("us", "/fractional-cto-jobs").unwrap(),
            "us-fractional-cto-jobs"
        );
        assert_eq!(
            r.canonical_slug("nz", "fractional-cmo-jobs").unwrap(),
            "nz-fractional-cmo-jobs"
        );
    }

    #[test]
    fn test_canonical_slug_for_default_locale_has_no_prefix() {
        let r = resolver();
        assert_eq!(
            r.canonical_slug("uk", "/fractional-cfo-jobs").unwrap(),
            "fractional-cfo-jobs-uk"
        );
        assert_eq!(r.canonical_slug("uk", "/birmingham").unwrap(), "birmingham");
    }

    #[test]
    fn test_canonical_slug_does_not_strip_existing_prefix() {
        // Stripping the routing segment is the router's job.
        let r = resolver();
        assert_eq!(
            r.canonical_slug("us", "/us-fractional-cto-jobs").unwrap(),
            "us-us-fractional-cto-jobs"
        );
    }

    #[test]
    fn test_scenario_slugs_for_locale_leading_prefix_only() {
        let r = resolver();
        let all = ["us-fractional-cto-jobs", "uk-other", "au-fractional-cto-jobs"];
        assert_eq!(r.slugs_for_locale("us", &all).unwrap(), vec!["fractional-cto-jobs"]);
    }

    #[test]
    fn test_slugs_for_locale_ignores_prefix_elsewhere() {
        let r = resolver();
        let all = ["campus-jobs", "focus-us-jobs", "us", "usa-remote"];
        assert!(r.slugs_for_locale("us", &all).unwrap().is_empty());
    }

    #[test]
    fn test_slugs_for_locale_keeps_input_order() {
        let r = resolver();
        let all = [
            "au-fractional-cto-jobs",
            "london",
            "au-fractional-cfo-jobs",
            "au-remote",
        ];
        assert_eq!(
            r.slugs_for_locale("au", &all).unwrap(),
            vec!["fractional-cto-jobs", "fractional-cfo-jobs", "remote"]
        );
    }

    #[test]
    fn test_slugs_for_default_locale_skip_international_rows() {
        let r = resolver();
        let all = [
            "fractional-cfo-jobs-uk",
            "us-fractional-cfo-jobs",
            "birmingham",
            "nz-remote",
        ];
        assert_eq!(
            r.slugs_for_locale("uk", &all).unwrap(),
            vec!["fractional-cfo-jobs", "birmingham"]
        );
    }

    #[test]
    fn test_slugs_for_locale_results_always_map_back_into_input() {
        let r = resolver();
        let all = [
            "us-fractional-cto-jobs",
            "us-fractional-cto-jobs-uk",
            "us-birmingham",
            "fractional-cfo-jobs",
            "fractional-cfo-jobs-uk",
            "london-uk",
        ];
        for locale in ["uk", "us", "au", "nz"] {
            for segment in r.slugs_for_locale(locale, &all).unwrap() {
                let slug = r.canonical_slug(locale, &segment).unwrap();
                assert!(all.contains(&slug.as_str()), "{locale}: {slug}");
            }
        }
    }

    #[test]
    fn test_round_trip_through_slug_and_back() {
        let r = resolver();
        for locale in ["us", "au", "nz"] {
            for p in SAMPLE_PATHS {
                let public = r.locale_path(locale, p).unwrap();
                let routed = public.strip_prefix(&format!("/{locale}")).unwrap();
                let slug = r.canonical_slug(locale, routed).unwrap();
                let back = r.slugs_for_locale(locale, &[slug.as_str()]).unwrap();
                let expected = r.normalize_base_path(p).trim_start_matches('/');
                assert_eq!(back, vec![expected.to_string()], "{locale} {p}");
            }
        }
    }
}
