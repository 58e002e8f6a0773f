use crate::locale::registry::{LocaleError, LocaleInfo, LocaleRegistry};
use crate::locale::resolver::{is_jobs_page, LocaleResolver};

/// Locale implied by a request path: the first segment when it names a
/// non-default locale, otherwise the default locale.
pub fn locale_from_path<'a>(registry: &'a LocaleRegistry, pathname: &str) -> &'a LocaleInfo {
    pathname
        .split('/')
        .find(|segment| !segment.is_empty())
        .and_then(|first| registry.get(first))
        .filter(|info| !info.is_default)
        .unwrap_or_else(|| registry.default_locale())
}

/// Removes a leading `/{locale}` routing segment for any non-default locale.
/// The match is segment-exact, so `/usability` is left alone.
pub fn strip_locale_prefix<'a>(registry: &LocaleRegistry, pathname: &'a str) -> &'a str {
    for info in registry.iter().filter(|l| !l.is_default) {
        let Some(rest) = pathname
            .strip_prefix('/')
            .and_then(|p| p.strip_prefix(info.code.as_str()))
        else {
            continue;
        };
        if rest.is_empty() || rest.starts_with('/') {
            return rest;
        }
    }
    pathname
}

/// Equivalent of `pathname` in `target`, used by the market switcher.
pub fn switch_locale_path(
    resolver: &LocaleResolver,
    pathname: &str,
    target: &str,
) -> Result<String, LocaleError> {
    let registry = resolver.registry();
    let info = registry.require(target)?;
    let clean = resolver.normalize_base_path(strip_locale_prefix(registry, pathname));

    if info.is_default {
        if is_jobs_page(clean) {
            return Ok(format!("{clean}{}", registry.default_suffix()));
        }
        if clean.is_empty() {
            return Ok("/".to_string());
        }
        return Ok(clean.to_string());
    }

    resolver.locale_path(target, clean)
}
