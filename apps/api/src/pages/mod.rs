// Page store access and per-page SEO metadata for locale-routed pages.

pub mod handlers;
pub mod metadata;
pub mod store;

pub use metadata::PageMetadata;
pub use store::{InMemoryPageStore, PageStore, PgPageStore};
