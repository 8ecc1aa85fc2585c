//! Message catalog: (key, locale) → formatted requirement text.
//!
//! Lookups never fail outward. A message missing from the requested locale
//! falls back to the canonical locale; a message missing there too is logged
//! and replaced with [`UNKNOWN_MESSAGE`] so one untranslated entry can never
//! abort a whole statement list.

use crate::i18n::metrics::CatalogMetrics;
use crate::i18n::strings::{MessageStrings, ENGLISH_MESSAGES, SPANISH_MESSAGES};
use crate::i18n::Locale;
use std::sync::OnceLock;
use tracing::error;

/// Sentinel substituted when a message has no localized text anywhere.
pub const UNKNOWN_MESSAGE: &str = "UNKNOWN MESSAGE STRING";

/// Identifier for one localizable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    CaseSensitive,
    NotCaseSensitive,
    MinLength,
    MinLengthPlural,
    MaxLength,
    MaxLengthPlural,
    MinAlpha,
    MinAlphaPlural,
    MaxAlpha,
    MaxAlphaPlural,
    NumericNotAllowed,
    MinNumeric,
    MinNumericPlural,
    MaxNumeric,
    MaxNumericPlural,
    FirstCharNumeric,
    LastCharNumeric,
    SpecialNotAllowed,
    MinSpecial,
    MinSpecialPlural,
    MaxSpecial,
    MaxSpecialPlural,
    FirstCharSpecial,
    LastCharSpecial,
    MaxRepeat,
    MaxRepeatPlural,
    MaxSequentialRepeat,
    MaxSequentialRepeatPlural,
    MinLowerCase,
    MinLowerCasePlural,
    MaxLowerCase,
    MaxLowerCasePlural,
    MinUpperCase,
    MinUpperCasePlural,
    MaxUpperCase,
    MaxUpperCasePlural,
    MinUnique,
    MinUniquePlural,
    DisallowedValues,
    DisallowedAttributes,
    WordlistCheck,
    MaxOldChars,
    MinimumFrequency,
    UniqueRequired,
    LegacyComplexity,
    ModernComplexity,
    DaySingular,
    DayPlural,
    HourSingular,
    HourPlural,
}

impl MessageKey {
    /// The registered plural variant of this key, if one exists.
    ///
    /// Keys without a variant (for example the first/last-character messages
    /// and the password-history message) fall back to their base text for
    /// every count; that fallback is expected and silent.
    pub fn plural_variant(self) -> Option<MessageKey> {
        match self {
            MessageKey::MinLength => Some(MessageKey::MinLengthPlural),
            MessageKey::MaxLength => Some(MessageKey::MaxLengthPlural),
            MessageKey::MinAlpha => Some(MessageKey::MinAlphaPlural),
            MessageKey::MaxAlpha => Some(MessageKey::MaxAlphaPlural),
            MessageKey::MinNumeric => Some(MessageKey::MinNumericPlural),
            MessageKey::MaxNumeric => Some(MessageKey::MaxNumericPlural),
            MessageKey::MinSpecial => Some(MessageKey::MinSpecialPlural),
            MessageKey::MaxSpecial => Some(MessageKey::MaxSpecialPlural),
            MessageKey::MaxRepeat => Some(MessageKey::MaxRepeatPlural),
            MessageKey::MaxSequentialRepeat => Some(MessageKey::MaxSequentialRepeatPlural),
            MessageKey::MinLowerCase => Some(MessageKey::MinLowerCasePlural),
            MessageKey::MaxLowerCase => Some(MessageKey::MaxLowerCasePlural),
            MessageKey::MinUpperCase => Some(MessageKey::MinUpperCasePlural),
            MessageKey::MaxUpperCase => Some(MessageKey::MaxUpperCasePlural),
            MessageKey::MinUnique => Some(MessageKey::MinUniquePlural),
            _ => None,
        }
    }
}

impl MessageStrings {
    /// The raw template for a key in this table. Empty means untranslated.
    pub fn template(&self, key: MessageKey) -> &'static str {
        match key {
            MessageKey::CaseSensitive => self.case_sensitive,
            MessageKey::NotCaseSensitive => self.not_case_sensitive,
            MessageKey::MinLength => self.min_length,
            MessageKey::MinLengthPlural => self.min_length_plural,
            MessageKey::MaxLength => self.max_length,
            MessageKey::MaxLengthPlural => self.max_length_plural,
            MessageKey::MinAlpha => self.min_alpha,
            MessageKey::MinAlphaPlural => self.min_alpha_plural,
            MessageKey::MaxAlpha => self.max_alpha,
            MessageKey::MaxAlphaPlural => self.max_alpha_plural,
            MessageKey::NumericNotAllowed => self.numeric_not_allowed,
            MessageKey::MinNumeric => self.min_numeric,
            MessageKey::MinNumericPlural => self.min_numeric_plural,
            MessageKey::MaxNumeric => self.max_numeric,
            MessageKey::MaxNumericPlural => self.max_numeric_plural,
            MessageKey::FirstCharNumeric => self.first_char_numeric,
            MessageKey::LastCharNumeric => self.last_char_numeric,
            MessageKey::SpecialNotAllowed => self.special_not_allowed,
            MessageKey::MinSpecial => self.min_special,
            MessageKey::MinSpecialPlural => self.min_special_plural,
            MessageKey::MaxSpecial => self.max_special,
            MessageKey::MaxSpecialPlural => self.max_special_plural,
            MessageKey::FirstCharSpecial => self.first_char_special,
            MessageKey::LastCharSpecial => self.last_char_special,
            MessageKey::MaxRepeat => self.max_repeat,
            MessageKey::MaxRepeatPlural => self.max_repeat_plural,
            MessageKey::MaxSequentialRepeat => self.max_sequential_repeat,
            MessageKey::MaxSequentialRepeatPlural => self.max_sequential_repeat_plural,
            MessageKey::MinLowerCase => self.min_lower_case,
            MessageKey::MinLowerCasePlural => self.min_lower_case_plural,
            MessageKey::MaxLowerCase => self.max_lower_case,
            MessageKey::MaxLowerCasePlural => self.max_lower_case_plural,
            MessageKey::MinUpperCase => self.min_upper_case,
            MessageKey::MinUpperCasePlural => self.min_upper_case_plural,
            MessageKey::MaxUpperCase => self.max_upper_case,
            MessageKey::MaxUpperCasePlural => self.max_upper_case_plural,
            MessageKey::MinUnique => self.min_unique,
            MessageKey::MinUniquePlural => self.min_unique_plural,
            MessageKey::DisallowedValues => self.disallowed_values,
            MessageKey::DisallowedAttributes => self.disallowed_attributes,
            MessageKey::WordlistCheck => self.wordlist_check,
            MessageKey::MaxOldChars => self.max_old_chars,
            MessageKey::MinimumFrequency => self.minimum_frequency,
            MessageKey::UniqueRequired => self.unique_required,
            MessageKey::LegacyComplexity => self.legacy_complexity,
            MessageKey::ModernComplexity => self.modern_complexity,
            MessageKey::DaySingular => self.day_singular,
            MessageKey::DayPlural => self.day_plural,
            MessageKey::HourSingular => self.hour_singular,
            MessageKey::HourPlural => self.hour_plural,
        }
    }
}

/// The (locale → message table) mapping used by the resolver.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    tables: Vec<(&'static str, MessageStrings)>,
}

static CATALOG: OnceLock<MessageCatalog> = OnceLock::new();

impl MessageCatalog {
    /// The built-in catalog covering every enabled locale.
    pub fn global() -> &'static MessageCatalog {
        CATALOG.get_or_init(|| {
            MessageCatalog::new(vec![("en", ENGLISH_MESSAGES), ("es", SPANISH_MESSAGES)])
        })
    }

    /// Build a catalog from explicit tables. Mostly useful for tests that
    /// need untranslated or deliberately broken entries.
    pub fn new(tables: Vec<(&'static str, MessageStrings)>) -> Self {
        Self { tables }
    }

    fn table(&self, code: &str) -> Option<&MessageStrings> {
        self.tables
            .iter()
            .find(|(table_code, _)| *table_code == code)
            .map(|(_, table)| table)
    }

    fn raw_template(&self, key: MessageKey, code: &str) -> Option<&'static str> {
        self.table(code)
            .map(|table| table.template(key))
            .filter(|template| !template.is_empty())
    }

    /// The template for a key, falling back to the canonical locale.
    pub fn template(&self, key: MessageKey, locale: Locale) -> Option<&'static str> {
        if let Some(template) = self.raw_template(key, locale.code()) {
            return Some(template);
        }
        let canonical = Locale::canonical();
        if locale != canonical {
            CatalogMetrics::global().record_locale_fallback();
            if let Some(template) = self.raw_template(key, canonical.code()) {
                return Some(template);
            }
        }
        None
    }

    /// Localize a message with a numeric argument.
    ///
    /// Counts above one first try the plural variant key; a key with no
    /// registered variant silently uses its base text. Only a message missing
    /// from every table degrades to the sentinel.
    pub fn localize_count(&self, key: MessageKey, count: i64, locale: Locale) -> String {
        let metrics = CatalogMetrics::global();
        metrics.record_lookup();

        if count > 1 {
            match key.plural_variant() {
                Some(plural) => match self.template(plural, locale) {
                    Some(template) => return render(template, &count.to_string()),
                    None => {
                        error!(
                            "unable to display requirement text for message '{:?}': no localized text",
                            plural
                        );
                    }
                },
                None => metrics.record_plural_fallback(),
            }
        }

        match self.template(key, locale) {
            Some(template) => render(template, &count.to_string()),
            None => {
                metrics.record_missing();
                error!(
                    "unable to display requirement text for message '{:?}': no localized text",
                    key
                );
                UNKNOWN_MESSAGE.to_string()
            }
        }
    }

    /// Localize a message with a string argument. No plural variant is ever
    /// attempted for string arguments.
    pub fn localize_text(&self, key: MessageKey, detail: &str, locale: Locale) -> String {
        let metrics = CatalogMetrics::global();
        metrics.record_lookup();

        match self.template(key, locale) {
            Some(template) => render(template, detail),
            None => {
                metrics.record_missing();
                error!(
                    "unable to display requirement text for message '{:?}': no localized text",
                    key
                );
                UNKNOWN_MESSAGE.to_string()
            }
        }
    }
}

fn render(template: &str, value: &str) -> String {
    template.replace("{value}", value)
}
