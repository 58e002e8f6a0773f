//! Page Store — read-only access to page records keyed by canonical slug.
//!
//! `AppState` holds an `Arc<dyn PageStore>`: Postgres in production, the
//! in-memory store when no database is configured and in tests.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::page::PageRecord;

#[async_trait]
pub trait PageStore: Send + Sync {
    /// Published page stored under `slug`, if any.
    async fn lookup(&self, slug: &str) -> Result<Option<PageRecord>, AppError>;

    /// Slugs of every published page.
    async fn all_slugs(&self) -> Result<Vec<String>, AppError>;
}

pub struct PgPageStore {
    pool: PgPool,
}

impl PgPageStore {
    pub fn new(pool: PgPool) -> Self {
        PgPageStore { pool }
    }
}

#[async_trait]
impl PageStore for PgPageStore {
    async fn lookup(&self, slug: &str) -> Result<Option<PageRecord>, AppError> {
        debug!(slug, "looking up page");
        let page = sqlx::query_as::<_, PageRecord>(
            r#"
            SELECT slug, page_type, title, meta_description, keywords, canonical_url,
                   hero_title, hero_subtitle, is_published, updated_at
            FROM pages
            WHERE slug = $1 AND is_published = true
            LIMIT 1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;
        Ok(page)
    }

    async fn all_slugs(&self) -> Result<Vec<String>, AppError> {
        let slugs: Vec<String> =
            sqlx::query_scalar("SELECT slug FROM pages WHERE is_published = true ORDER BY slug")
                .fetch_all(&self.pool)
                .await?;
        Ok(slugs)
    }
}

/// Fixed set of pages held in memory, in insertion order.
#[derive(Default)]
pub struct InMemoryPageStore {
    pages: Vec<PageRecord>,
}

impl InMemoryPageStore {
    #[cfg(test)]
    pub fn new(pages: Vec<PageRecord>) -> Self {
        InMemoryPageStore { pages }
    }
}

#[async_trait]
impl PageStore for InMemoryPageStore {
    async fn lookup(&self, slug: &str) -> Result<Option<PageRecord>, AppError> {
        Ok(self
            .pages
            .iter()
            .find(|p| p.slug == slug && p.is_published)
            .cloned())
    }

    async fn all_slugs(&self) -> Result<Vec<String>, AppError> {
        Ok(self
            .pages
            .iter()
            .filter(|p| p.is_published)
            .map(|p| p.slug.clone())
            .collect())
    }
}

#[cfg(test)]
pub(crate) fn sample_page(slug: &str, title: &str, is_published: bool) -> PageRecord {
    PageRecord {
        slug: slug.to_string(),
        page_type: "jobs".to_string(),
        title: title.to_string(),
        meta_description: Some(format!("{title} description")),
        keywords: Some(vec!["fractional".to_string(), "jobs".to_string()]),
        canonical_url: None,
        hero_title: None,
        hero_subtitle: None,
        is_published,
        updated_at: chrono::Utc::now(),
    }
}
