use serde::Serialize;

use crate::locale::registry::{LocaleError, LocaleInfo};
use crate::locale::resolver::{join_url, HreflangEntry, LocaleResolver};
use crate::models::page::PageRecord;

/// SEO metadata for one page in one locale, ready for a page renderer.
#[derive(Debug, Clone, Serialize)]
pub struct PageMetadata {
    pub slug: String,
    pub locale: String,
    pub title: String,
    pub heading: String,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub page_url: String,
    pub canonical_url: String,
    pub og_locale: String,
    pub alternates: Vec<HreflangEntry>,
}

impl PageMetadata {
    /// `base_path` is the locale-free path the page was requested under.
    /// A stored `canonical_url` wins over the derived self-referencing URL.
    pub fn build(
        record: &PageRecord,
        locale: &LocaleInfo,
        base_path: &str,
        resolver: &LocaleResolver,
        site_base_url: &str,
    ) -> Result<Self, LocaleError> {
        let site = site_base_url.trim_end_matches('/');
        let page_url = join_url(site, &resolver.locale_path(&locale.code, base_path)?);
        let canonical_url = record
            .canonical_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| page_url.clone());

        Ok(PageMetadata {
            slug: record.slug.clone(),
            locale: locale.code.clone(),
            title: record.title.clone(),
            heading: record
                .hero_title
                .clone()
                .unwrap_or_else(|| record.title.clone()),
            description: record.meta_description.clone(),
            keywords: record.keywords.clone().unwrap_or_default(),
            page_url,
            canonical_url,
            og_locale: locale.og_locale(),
            alternates: resolver.absolute_alternates(site, base_path),
        })
    }

    /// `<link>` tags for the document head: canonical first, then one
    /// alternate per hreflang entry.
    pub fn render_head_links(&self) -> String {
        let mut out = format!(
            "<link rel=\"canonical\" href=\"{}\" />\n",
            escape_attr(&self.canonical_url)
        );
        for entry in &self.alternates {
            out.push_str(&format!(
                "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />\n",
                escape_attr(&entry.hreflang),
                escape_attr(&entry.path)
            ));
        }
        out
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
