//! Setting metadata.

use crate::i18n::Locale;
use crate::settings::template::Template;
use crate::settings::value::{SettingError, StoredValue};

/// Value syntax of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingSyntax {
    Boolean,
    Numeric,
    Text,
    TextList,
    /// Text constrained to one of the declared options
    Select,
    /// Numeric value interpreted as seconds
    Duration,
}

/// Structural flags attached to a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingFlag {
    Required,
    Sensitive,
    Hidden,
    Deprecated,
}

/// Keys for the per-setting property map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKey {
    /// Lowest allowed numeric value
    Minimum,
    /// Highest allowed numeric value; 0 means unbounded
    Maximum,
    /// UI placeholder text
    Placeholder,
}

/// Default value in const-friendly form.
#[derive(Debug, Clone, Copy)]
pub enum RawDefault {
    Boolean(bool),
    Numeric(i64),
    Text(&'static str),
    TextList(&'static [&'static str]),
}

impl RawDefault {
    fn to_value(self) -> StoredValue {
        match self {
            RawDefault::Boolean(v) => StoredValue::Boolean(v),
            RawDefault::Numeric(v) => StoredValue::Numeric(v),
            RawDefault::Text(v) => StoredValue::Text(v.to_string()),
            RawDefault::TextList(v) => {
                StoredValue::TextList(v.iter().map(|s| s.to_string()).collect())
            }
        }
    }
}

/// Static metadata for one configuration setting.
#[derive(Debug, Clone)]
pub struct Setting {
    /// Globally unique registry key
    pub key: &'static str,

    pub syntax: SettingSyntax,

    /// Short label per locale code
    pub labels: &'static [(&'static str, &'static str)],

    /// Description per locale code
    pub descriptions: &'static [(&'static str, &'static str)],

    pub flags: &'static [SettingFlag],

    pub properties: &'static [(PropertyKey, &'static str)],

    /// (value, label) pairs for `Select` settings
    pub options: &'static [(&'static str, &'static str)],

    /// Optional validation pattern for text values
    pub pattern: Option<&'static str>,

    /// Default applied when no template override matches
    pub default: RawDefault,

    /// Template-specific default overrides
    pub template_defaults: &'static [(Template, RawDefault)],
}

impl Setting {
    /// Short label, falling back to the canonical locale.
    pub fn label(&self, locale: Locale) -> Option<&'static str> {
        localized(self.labels, locale)
    }

    /// Description text, falling back to the canonical locale.
    pub fn description(&self, locale: Locale) -> Option<&'static str> {
        localized(self.descriptions, locale)
    }

    /// Raw property value.
    pub fn property(&self, key: PropertyKey) -> Option<&'static str> {
        self.properties
            .iter()
            .find(|(property, _)| *property == key)
            .map(|(_, value)| *value)
    }

    /// Property value parsed as a number.
    pub fn numeric_property(&self, key: PropertyKey) -> Result<Option<i64>, SettingError> {
        match self.property(key) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<i64>()
                .map(Some)
                .map_err(|_| SettingError::MalformedProperty {
                    key: self.key,
                    property: key,
                }),
        }
    }

    /// The default value under the given template set.
    pub fn default_value(&self, template: Template) -> StoredValue {
        self.template_defaults
            .iter()
            .find(|(candidate, _)| *candidate == template)
            .map(|(_, raw)| *raw)
            .unwrap_or(self.default)
            .to_value()
    }

    /// The compiled validation pattern, if one is declared.
    pub fn compiled_pattern(&self) -> Result<Option<regex::Regex>, SettingError> {
        match self.pattern {
            None => Ok(None),
            Some(pattern) => regex::Regex::new(pattern).map(Some).map_err(|source| {
                SettingError::InvalidPattern {
                    key: self.key,
                    source,
                }
            }),
        }
    }
}

fn localized(
    table: &'static [(&'static str, &'static str)],
    locale: Locale,
) -> Option<&'static str> {
    table
        .iter()
        .find(|(code, _)| *code == locale.code())
        .or_else(|| {
            table
                .iter()
                .find(|(code, _)| *code == Locale::canonical().code())
        })
        .map(|(_, text)| *text)
}
