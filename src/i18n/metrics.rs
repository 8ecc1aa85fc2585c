//! Catalog lookup observability.
//!
//! Process-wide counters for message-catalog activity. Plural fallbacks are
//! expected behavior and tracked separately from genuinely missing messages.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global catalog metrics singleton.
pub struct CatalogMetrics {
    /// Number of message lookups performed
    lookups: AtomicUsize,

    /// Number of lookups that fell back to the canonical locale
    locale_fallbacks: AtomicUsize,

    /// Number of lookups that fell back from a plural variant to the base key
    plural_fallbacks: AtomicUsize,

    /// Number of lookups that had to substitute the sentinel string
    missing_messages: AtomicUsize,
}

static METRICS: OnceLock<CatalogMetrics> = OnceLock::new();

impl CatalogMetrics {
    /// The process-wide metrics instance.
    pub fn global() -> &'static CatalogMetrics {
        METRICS.get_or_init(|| CatalogMetrics {
            lookups: AtomicUsize::new(0),
            locale_fallbacks: AtomicUsize::new(0),
            plural_fallbacks: AtomicUsize::new(0),
            missing_messages: AtomicUsize::new(0),
        })
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_locale_fallback(&self) {
        self.locale_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_plural_fallback(&self) {
        self.plural_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing(&self) {
        self.missing_messages.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn locale_fallbacks(&self) -> usize {
        self.locale_fallbacks.load(Ordering::Relaxed)
    }

    pub fn plural_fallbacks(&self) -> usize {
        self.plural_fallbacks.load(Ordering::Relaxed)
    }

    pub fn missing_messages(&self) -> usize {
        self.missing_messages.load(Ordering::Relaxed)
    }

    /// Snapshot of the current counters.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let missing = self.missing_messages();
        let missing_rate = if lookups > 0 {
            (missing as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            locale_fallbacks: self.locale_fallbacks(),
            plural_fallbacks: self.plural_fallbacks(),
            missing_messages: missing,
            missing_rate,
        }
    }
}

/// Serializable snapshot of catalog metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub locale_fallbacks: usize,
    pub plural_fallbacks: usize,
    pub missing_messages: usize,
    pub missing_rate: f64,
}
