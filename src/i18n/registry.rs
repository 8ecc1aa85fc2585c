//! Locale registry: single source of truth for supported display locales.
//!
//! Initialized once behind an `OnceLock` and immutable afterwards. The
//! canonical locale is the one every message table is guaranteed to cover;
//! lookups for other locales fall back to it.

use std::sync::OnceLock;

/// Metadata for one supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g. "en", "es")
    pub code: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Native name of the language
    pub native_name: &'static str,

    /// Whether this is the canonical locale (exactly one should be true)
    pub is_canonical: bool,

    /// Whether this locale is offered to users
    pub enabled: bool,
}

/// Registry of every supported locale.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// The process-wide registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: supported_locales(),
        })
    }

    /// Look up a locale by its language code.
    pub fn by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All locales currently offered to users.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// The canonical locale.
    ///
    /// # Panics
    /// Panics if the registry does not contain exactly one canonical locale,
    /// which indicates broken registry data.
    pub fn canonical(&self) -> &LocaleConfig {
        let canonical: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_canonical)
            .collect();
        match canonical.len() {
            1 => canonical[0],
            0 => panic!("no canonical locale in registry"),
            _ => panic!("multiple canonical locales in registry"),
        }
    }
}

fn supported_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            enabled: true,
        },
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_canonical: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_singleton() {
        assert!(std::ptr::eq(LocaleRegistry::get(), LocaleRegistry::get()));
    }

    #[test]
    fn test_by_code_known() {
        let config = LocaleRegistry::get().by_code("es").expect("es registered");
        assert_eq!(config.name, "Spanish");
        assert_eq!(config.native_name, "Español");
        assert!(!config.is_canonical);
    }

    #[test]
    fn test_by_code_unknown() {
        assert!(LocaleRegistry::get().by_code("fr").is_none());
    }

    #[test]
    fn test_canonical_is_english() {
        let canonical = LocaleRegistry::get().canonical();
        assert_eq!(canonical.code, "en");
        assert!(canonical.enabled);
    }

    #[test]
    fn test_list_enabled() {
        let enabled = LocaleRegistry::get().list_enabled();
        assert_eq!(enabled.len(), 2);
        assert!(enabled.iter().any(|locale| locale.code == "en"));
        assert!(enabled.iter().any(|locale| locale.code == "es"));
    }
}
