//! Internationalization support for requirement text.
//!
//! All locale handling, localized message templates and catalog lookup live
//! here.
//!
//! - `registry`: single source of truth for supported locales
//! - `locale`: validated locale handle
//! - `strings`: per-locale message template tables
//! - `catalog`: (key, locale) lookup with plural and canonical-locale fallback
//! - `metrics`: catalog lookup observability

mod catalog;
mod locale;
mod metrics;
mod registry;
mod strings;

pub use catalog::{MessageCatalog, MessageKey, UNKNOWN_MESSAGE};
pub use locale::Locale;
pub use metrics::{CatalogMetrics, MetricsReport};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::{MessageStrings, ENGLISH_MESSAGES, SPANISH_MESSAGES};
