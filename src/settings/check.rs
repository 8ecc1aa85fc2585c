//! Registry consistency checks.
//!
//! A property-style gate over the static setting catalog: every check walks
//! the given settings, records failures per setting (and template, where
//! applicable) and never aborts early, so one defect cannot mask another.

use std::collections::HashSet;

use crate::i18n::Locale;
use crate::settings::registry::SettingRegistry;
use crate::settings::setting::{PropertyKey, Setting, SettingSyntax};
use crate::settings::template::Template;

/// Accumulated results of one or more registry checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Consistency violations that must be fixed in the registry data
    pub errors: Vec<String>,

    /// Non-fatal observations (e.g. defaults pending migration)
    pub warnings: Vec<String>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: CheckReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for CheckReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Default values must survive every representation and validate under every
/// template.
pub fn check_default_values(settings: &[Setting]) -> CheckReport {
    let mut report = CheckReport::new();
    for setting in settings {
        for template in Template::ALL {
            let context = format!("{} [{}]", setting.key, template.id());
            let value = setting.default_value(*template);

            if !value.matches_syntax(setting.syntax) {
                report.errors.push(format!(
                    "{}: default value kind does not match syntax {:?}",
                    context, setting.syntax
                ));
                continue;
            }

            let debug_string = value.to_debug_string();
            if debug_string.len() > 4096 {
                report
                    .warnings
                    .push(format!("{}: oversized debug form", context));
            }

            if let Err(error) = value.to_debug_json() {
                report
                    .errors
                    .push(format!("{}: debug form failed: {}", context, error));
            }

            if let Err(error) = value.to_serialized() {
                report
                    .errors
                    .push(format!("{}: serialization failed: {}", context, error));
            }

            if let Err(error) = value.validate(setting) {
                report
                    .errors
                    .push(format!("{}: default value invalid: {}", context, error));
            }

            if value.requires_update() {
                report
                    .warnings
                    .push(format!("{}: default value pending migration", context));
            }

            match value.value_hash() {
                Ok(hash) if hash.is_empty() => {
                    report.errors.push(format!("{}: empty value hash", context));
                }
                Ok(_) => {}
                Err(error) => {
                    report
                        .errors
                        .push(format!("{}: value hash failed: {}", context, error));
                }
            }
        }
    }
    report
}

/// Every setting must resolve a non-empty label for the canonical locale.
pub fn check_labels(settings: &[Setting]) -> CheckReport {
    let mut report = CheckReport::new();
    for setting in settings {
        match setting.label(Locale::canonical()) {
            Some(label) if !label.is_empty() => {}
            _ => report
                .errors
                .push(format!("{}: missing label for canonical locale", setting.key)),
        }
    }
    report
}

/// Every setting must resolve a non-empty description for the canonical
/// locale.
pub fn check_descriptions(settings: &[Setting]) -> CheckReport {
    let mut report = CheckReport::new();
    for setting in settings {
        match setting.description(Locale::canonical()) {
            Some(description) if !description.is_empty() => {}
            _ => report.errors.push(format!(
                "{}: missing description for canonical locale",
                setting.key
            )),
        }
    }
    report
}

/// Flag lists must not repeat a flag.
pub fn check_flags(settings: &[Setting]) -> CheckReport {
    let mut report = CheckReport::new();
    for setting in settings {
        for (index, flag) in setting.flags.iter().enumerate() {
            if setting.flags[..index].contains(flag) {
                report
                    .errors
                    .push(format!("{}: duplicate flag {:?}", setting.key, flag));
            }
        }
    }
    report
}

/// Property maps must not repeat a key, and numeric properties must parse.
pub fn check_properties(settings: &[Setting]) -> CheckReport {
    let mut report = CheckReport::new();
    for setting in settings {
        for (index, (key, _)) in setting.properties.iter().enumerate() {
            if setting.properties[..index]
                .iter()
                .any(|(earlier, _)| earlier == key)
            {
                report
                    .errors
                    .push(format!("{}: duplicate property {:?}", setting.key, key));
            }
        }
        for property in [PropertyKey::Minimum, PropertyKey::Maximum] {
            if let Err(error) = setting.numeric_property(property) {
                report.errors.push(format!("{}: {}", setting.key, error));
            }
        }
    }
    report
}

/// Option maps must be present for select settings and free of duplicates.
pub fn check_options(settings: &[Setting]) -> CheckReport {
    let mut report = CheckReport::new();
    for setting in settings {
        if setting.syntax == SettingSyntax::Select && setting.options.is_empty() {
            report
                .errors
                .push(format!("{}: select setting declares no options", setting.key));
        }
        for (index, (value, _)) in setting.options.iter().enumerate() {
            if setting.options[..index]
                .iter()
                .any(|(earlier, _)| earlier == value)
            {
                report
                    .errors
                    .push(format!("{}: duplicate option '{}'", setting.key, value));
            }
        }
    }
    report
}

/// Declared patterns must compile.
pub fn check_patterns(settings: &[Setting]) -> CheckReport {
    let mut report = CheckReport::new();
    for setting in settings {
        if let Err(error) = setting.compiled_pattern() {
            report.errors.push(format!("{}: {}", setting.key, error));
        }
    }
    report
}

/// Registry keys must be globally unique; the first duplicate fails.
pub fn check_key_uniqueness(settings: &[Setting]) -> CheckReport {
    let mut report = CheckReport::new();
    let mut seen = HashSet::new();
    for setting in settings {
        if !seen.insert(setting.key) {
            report
                .errors
                .push(format!("{}: duplicate registry key", setting.key));
        }
    }
    report
}

/// A non-zero declared maximum must exceed the declared minimum.
pub fn check_numeric_ranges(settings: &[Setting]) -> CheckReport {
    let mut report = CheckReport::new();
    for setting in settings {
        let minimum = setting
            .numeric_property(PropertyKey::Minimum)
            .unwrap_or(None)
            .unwrap_or(0);
        let maximum = setting
            .numeric_property(PropertyKey::Maximum)
            .unwrap_or(None)
            .unwrap_or(0);
        if maximum != 0 && maximum <= minimum {
            report.errors.push(format!(
                "{}: maximum {} does not exceed minimum {}",
                setting.key, maximum, minimum
            ));
        }
    }
    report
}

/// Run every check over the global registry.
pub fn run_registry_checks() -> CheckReport {
    let settings = SettingRegistry::get().all();
    let mut report = CheckReport::new();
    report.merge(check_default_values(settings));
    report.merge(check_labels(settings));
    report.merge(check_descriptions(settings));
    report.merge(check_flags(settings));
    report.merge(check_properties(settings));
    report.merge(check_options(settings));
    report.merge(check_patterns(settings));
    report.merge(check_key_uniqueness(settings));
    report.merge(check_numeric_ranges(settings));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::setting::RawDefault;

    fn numeric_setting(
        key: &'static str,
        properties: &'static [(PropertyKey, &'static str)],
        default: i64,
    ) -> Setting {
        Setting {
            key,
            syntax: SettingSyntax::Numeric,
            labels: &[("en", "Test setting")],
            descriptions: &[("en", "Setting used by registry check tests.")],
            flags: &[],
            properties,
            options: &[],
            pattern: None,
            default: RawDefault::Numeric(default),
            template_defaults: &[],
        }
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_new_is_clean() {
        let report = CheckReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_report_merge_accumulates() {
        let mut report = CheckReport::new();
        let mut other = CheckReport::new();
        other.errors.push("boom".to_string());
        other.warnings.push("hmm".to_string());
        report.merge(other);
        assert!(report.has_errors());
        assert!(report.has_warnings());
    }

    // ==================== Range Check Tests ====================

    #[test]
    fn test_inverted_range_reported() {
        let setting = numeric_setting(
            "test.inverted",
            &[(PropertyKey::Minimum, "10"), (PropertyKey::Maximum, "5")],
            10,
        );
        let report = check_numeric_ranges(&[setting]);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("test.inverted"));
    }

    #[test]
    fn test_zero_maximum_means_unbounded() {
        let setting = numeric_setting(
            "test.unbounded",
            &[(PropertyKey::Minimum, "10"), (PropertyKey::Maximum, "0")],
            10,
        );
        assert!(check_numeric_ranges(&[setting]).is_clean());
    }

    // ==================== Uniqueness Check Tests ====================

    #[test]
    fn test_duplicate_keys_fail_on_second_occurrence() {
        let first = numeric_setting("test.duplicate", &[], 1);
        let second = numeric_setting("test.duplicate", &[], 2);
        let report = check_key_uniqueness(&[first, second]);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("test.duplicate"));
    }

    // ==================== Default Value Check Tests ====================

    #[test]
    fn test_default_outside_declared_range_reported() {
        let setting = numeric_setting(
            "test.outOfRange",
            &[(PropertyKey::Minimum, "1"), (PropertyKey::Maximum, "5")],
            9,
        );
        let report = check_default_values(&[setting]);
        // One failure per template.
        assert_eq!(report.errors.len(), Template::ALL.len());
        assert!(report.errors[0].contains("test.outOfRange"));
    }

    #[test]
    fn test_malformed_numeric_property_reported() {
        let setting = numeric_setting(
            "test.badProperty",
            &[(PropertyKey::Maximum, "not-a-number")],
            0,
        );
        let report = check_properties(&[setting]);
        assert_eq!(report.errors.len(), 1);
    }

    // ==================== Global Registry Tests ====================

    #[test]
    fn test_global_registry_is_consistent() {
        let report = run_registry_checks();
        assert!(
            !report.has_errors(),
            "registry check failures: {:?}",
            report.errors
        );
    }
}
