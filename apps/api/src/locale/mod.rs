// Locale routing: registry, path/slug resolution, market formatting.
// Everything in here is pure and shared read-only through AppState.

pub mod currency;
pub mod detect;
pub mod handlers;
pub mod registry;
pub mod resolver;

pub use registry::{LocaleError, LocaleInfo, LocaleRegistry};
pub use resolver::{HreflangEntry, LocaleResolver};
