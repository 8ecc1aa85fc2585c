//! Validated locale handle.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};

/// A language/region identifier validated against the locale registry.
///
/// Only registered, enabled locales can be constructed, so downstream code
/// never has to handle an unknown code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };
    pub const SPANISH: Locale = Locale { code: "es" };

    /// Build a locale from a language code.
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().by_code(code) {
            Some(config) if config.enabled => Ok(Locale { code: config.code }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// The process-wide default locale that lookups fall back to.
    pub fn canonical() -> Locale {
        Locale {
            code: LocaleRegistry::get().canonical().code,
        }
    }

    /// The language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Registry metadata for this locale.
    ///
    /// # Panics
    /// Panics if the code is not registered, which cannot happen for a
    /// properly constructed `Locale`.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .by_code(self.code)
            .expect("locale code is always registered")
    }

    /// Whether this is the canonical locale.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known() {
        let locale = Locale::from_code("es").expect("es is enabled");
        assert_eq!(locale.code(), "es");
        assert!(!locale.is_canonical());
    }

    #[test]
    fn test_from_code_unknown() {
        let result = Locale::from_code("de");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Locale::from_code("").is_err());
    }

    #[test]
    fn test_canonical_is_english() {
        assert_eq!(Locale::canonical(), Locale::ENGLISH);
        assert!(Locale::canonical().is_canonical());
    }

    #[test]
    fn test_constants_match_registry() {
        assert_eq!(Locale::ENGLISH.config().code, "en");
        assert_eq!(Locale::SPANISH.config().native_name, "Español");
    }
}
