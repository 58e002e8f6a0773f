use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `pages` table. Only the columns this service reads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PageRecord {
    pub slug: String,
    pub page_type: String,
    pub title: String,
    pub meta_description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub canonical_url: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub is_published: bool,
    pub updated_at: DateTime<Utc>,
}
