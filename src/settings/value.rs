//! Stored setting values.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::settings::setting::{PropertyKey, Setting, SettingSyntax};

/// Errors raised while validating or transforming a setting value.
#[derive(Debug, Error)]
pub enum SettingError {
    #[error("setting '{key}': value kind does not match syntax {expected:?}")]
    SyntaxMismatch {
        key: &'static str,
        expected: SettingSyntax,
    },

    #[error("setting '{key}': value {value} outside allowed range {minimum}..{maximum}")]
    OutOfRange {
        key: &'static str,
        value: i64,
        minimum: i64,
        maximum: i64,
    },

    #[error("setting '{key}': '{value}' is not a declared option")]
    UnknownOption { key: &'static str, value: String },

    #[error("setting '{key}': value does not match pattern '{pattern}'")]
    PatternMismatch {
        key: &'static str,
        pattern: &'static str,
    },

    #[error("setting '{key}': invalid pattern: {source}")]
    InvalidPattern {
        key: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("setting '{key}': property {property:?} is not a valid number")]
    MalformedProperty {
        key: &'static str,
        property: PropertyKey,
    },

    #[error("value serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One persisted configuration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum StoredValue {
    Boolean(bool),
    Numeric(i64),
    Text(String),
    TextList(Vec<String>),
}

impl StoredValue {
    // ==================== Native Accessors ====================

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            StoredValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            StoredValue::Numeric(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StoredValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            StoredValue::TextList(v) => Some(v),
            _ => None,
        }
    }

    /// Whether this value kind can back a setting of the given syntax.
    pub fn matches_syntax(&self, syntax: SettingSyntax) -> bool {
        matches!(
            (self, syntax),
            (StoredValue::Boolean(_), SettingSyntax::Boolean)
                | (StoredValue::Numeric(_), SettingSyntax::Numeric)
                | (StoredValue::Numeric(_), SettingSyntax::Duration)
                | (StoredValue::Text(_), SettingSyntax::Text)
                | (StoredValue::Text(_), SettingSyntax::Select)
                | (StoredValue::TextList(_), SettingSyntax::TextList)
        )
    }

    // ==================== Display Forms ====================

    /// Human-readable form for debug output.
    pub fn to_debug_string(&self) -> String {
        match self {
            StoredValue::Boolean(v) => v.to_string(),
            StoredValue::Numeric(v) => v.to_string(),
            StoredValue::Text(v) => v.clone(),
            StoredValue::TextList(v) => v.join(", "),
        }
    }

    /// Structured key/value form for debug output.
    pub fn to_debug_json(&self) -> Result<serde_json::Value, SettingError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Persisted serialized form.
    pub fn to_serialized(&self) -> Result<String, SettingError> {
        Ok(serde_json::to_string(self)?)
    }

    // ==================== Validation ====================

    /// Validate this value against a setting's syntax, declared numeric
    /// range, options and pattern.
    pub fn validate(&self, setting: &Setting) -> Result<(), SettingError> {
        if !self.matches_syntax(setting.syntax) {
            return Err(SettingError::SyntaxMismatch {
                key: setting.key,
                expected: setting.syntax,
            });
        }

        match self {
            StoredValue::Numeric(value) => {
                let minimum = setting.numeric_property(PropertyKey::Minimum)?.unwrap_or(0);
                let maximum = setting.numeric_property(PropertyKey::Maximum)?.unwrap_or(0);
                // A maximum of 0 means the range is open above.
                if *value < minimum || (maximum != 0 && *value > maximum) {
                    return Err(SettingError::OutOfRange {
                        key: setting.key,
                        value: *value,
                        minimum,
                        maximum,
                    });
                }
            }
            StoredValue::Text(text) => {
                if setting.syntax == SettingSyntax::Select
                    && !setting.options.iter().any(|(value, _)| *value == text.as_str())
                {
                    return Err(SettingError::UnknownOption {
                        key: setting.key,
                        value: text.clone(),
                    });
                }
                if let (Some(pattern), false) = (setting.pattern, text.is_empty()) {
                    let compiled = regex::Regex::new(pattern).map_err(|source| {
                        SettingError::InvalidPattern {
                            key: setting.key,
                            source,
                        }
                    })?;
                    if !compiled.is_match(text) {
                        return Err(SettingError::PatternMismatch {
                            key: setting.key,
                            pattern,
                        });
                    }
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Whether the stored form is stale and would be rewritten on the next
    /// save (unnormalized text, duplicate list entries).
    pub fn requires_update(&self) -> bool {
        match self {
            StoredValue::Text(text) => text.trim() != text,
            StoredValue::TextList(values) => {
                let mut seen = std::collections::HashSet::new();
                values.iter().any(|value| !seen.insert(value))
            }
            _ => false,
        }
    }

    /// Stable content hash of the serialized form.
    pub fn value_hash(&self) -> Result<String, SettingError> {
        let serialized = self.to_serialized()?;
        let mut hasher = Sha256::new();
        hasher.update(serialized.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Form Tests ====================

    #[test]
    fn test_debug_string_forms() {
        assert_eq!(StoredValue::Boolean(true).to_debug_string(), "true");
        assert_eq!(StoredValue::Numeric(42).to_debug_string(), "42");
        assert_eq!(
            StoredValue::TextList(vec!["a".into(), "b".into()]).to_debug_string(),
            "a, b"
        );
    }

    #[test]
    fn test_serialized_round_trip() {
        let value = StoredValue::TextList(vec!["password".into(), "secret".into()]);
        let serialized = value.to_serialized().expect("serializes");
        let restored: StoredValue = serde_json::from_str(&serialized).expect("deserializes");
        assert_eq!(value, restored);
    }

    #[test]
    fn test_debug_json_tagged() {
        let json = StoredValue::Numeric(7).to_debug_json().expect("json form");
        assert_eq!(json["type"], "Numeric");
        assert_eq!(json["value"], 7);
    }

    // ==================== Hash Tests ====================

    #[test]
    fn test_value_hash_stable_and_nonempty() {
        let first = StoredValue::Text("abc".into()).value_hash().expect("hash");
        let second = StoredValue::Text("abc".into()).value_hash().expect("hash");
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_value_hash_differs_by_content() {
        let first = StoredValue::Text("abc".into()).value_hash().expect("hash");
        let second = StoredValue::Text("abd".into()).value_hash().expect("hash");
        assert_ne!(first, second);
    }

    // ==================== Migration Predicate Tests ====================

    #[test]
    fn test_requires_update_on_unnormalized_text() {
        assert!(StoredValue::Text(" padded ".into()).requires_update());
        assert!(!StoredValue::Text("clean".into()).requires_update());
    }

    #[test]
    fn test_requires_update_on_duplicate_list_entries() {
        assert!(StoredValue::TextList(vec!["a".into(), "a".into()]).requires_update());
        assert!(!StoredValue::TextList(vec!["a".into(), "b".into()]).requires_update());
    }
}
