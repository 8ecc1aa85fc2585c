//! Rule-to-text resolution engine.
//!
//! Turns a resolved [`PasswordPolicy`] into an ordered list of localized
//! requirement statements. Emission order is fixed and user-visible; every
//! step produces zero or one statement except the numeric and symbol groups,
//! which produce up to four each.

use crate::config::RenderConfig;
use crate::escape::escape_html;
use crate::i18n::{Locale, MessageCatalog, MessageKey};
use crate::policy::{ComplexityLevel, PasswordPolicy, PolicyRule, RuleReader};

/// Minimum length imposed by the vendor complexity modes.
const COMPLEXITY_MINIMUM_LENGTH: i64 = 6;

/// Maximum-length values at or above this are treated as "no practical
/// ceiling" and suppressed.
const PRACTICAL_LENGTH_CEILING: i64 = 64;

const SECONDS_PER_HOUR: i64 = 60 * 60;
const SECONDS_PER_DAY: i64 = 60 * 60 * 24;

/// Resolve a policy into its ordered requirement statements.
///
/// A policy carrying a non-empty administrator-authored override text yields
/// exactly that text as the single statement. Lookup failures never escape;
/// an untranslated message degrades to a sentinel placeholder.
pub fn resolve(policy: &PasswordPolicy, locale: Locale, catalog: &MessageCatalog) -> Vec<String> {
    if let Some(text) = policy.rule_text() {
        return vec![text.to_string()];
    }

    let rules = policy.rules();
    let level = policy.complexity();
    let mut statements = Vec::new();

    if rules.read_flag(PolicyRule::CaseSensitive) {
        statements.push(catalog.localize_text(MessageKey::CaseSensitive, "", locale));
    } else {
        statements.push(catalog.localize_text(MessageKey::NotCaseSensitive, "", locale));
    }

    {
        let mut value = rules.read_bound(PolicyRule::MinimumLength);
        if level == ComplexityLevel::Legacy {
            value = COMPLEXITY_MINIMUM_LENGTH;
        }
        if value == 0 && level == ComplexityLevel::Modern {
            value = COMPLEXITY_MINIMUM_LENGTH;
        }
        if value > 0 {
            statements.push(catalog.localize_count(MessageKey::MinLength, value, locale));
        }
    }

    {
        let value = rules.read_bound(PolicyRule::MaximumLength);
        if value > 0 && value < PRACTICAL_LENGTH_CEILING {
            statements.push(catalog.localize_count(MessageKey::MaxLength, value, locale));
        }
    }

    {
        let value = rules.read_bound(PolicyRule::MinimumAlpha);
        if value > 0 {
            statements.push(catalog.localize_count(MessageKey::MinAlpha, value, locale));
        }
    }

    {
        let value = rules.read_bound(PolicyRule::MaximumAlpha);
        if value > 0 {
            statements.push(catalog.localize_count(MessageKey::MaxAlpha, value, locale));
        }
    }

    if !rules.read_flag(PolicyRule::AllowNumeric) {
        statements.push(catalog.localize_text(MessageKey::NumericNotAllowed, "", locale));
    } else {
        let min_value = rules.read_bound(PolicyRule::MinimumNumeric);
        if min_value > 0 {
            statements.push(catalog.localize_count(MessageKey::MinNumeric, min_value, locale));
        }

        let max_value = rules.read_bound(PolicyRule::MaximumNumeric);
        if max_value > 0 {
            statements.push(catalog.localize_count(MessageKey::MaxNumeric, max_value, locale));
        }

        // The positional statements carry the maximum count even when it is
        // 0; configured behavior, kept as-is.
        if !rules.read_flag(PolicyRule::AllowFirstCharNumeric) {
            statements.push(catalog.localize_count(MessageKey::FirstCharNumeric, max_value, locale));
        }

        if !rules.read_flag(PolicyRule::AllowLastCharNumeric) {
            statements.push(catalog.localize_count(MessageKey::LastCharNumeric, max_value, locale));
        }
    }

    if !rules.read_flag(PolicyRule::AllowSpecial) {
        statements.push(catalog.localize_text(MessageKey::SpecialNotAllowed, "", locale));
    } else {
        let min_value = rules.read_bound(PolicyRule::MinimumSpecial);
        if min_value > 0 {
            statements.push(catalog.localize_count(MessageKey::MinSpecial, min_value, locale));
        }

        let max_value = rules.read_bound(PolicyRule::MaximumSpecial);
        if max_value > 0 {
            statements.push(catalog.localize_count(MessageKey::MaxSpecial, max_value, locale));
        }

        if !rules.read_flag(PolicyRule::AllowFirstCharSpecial) {
            statements.push(catalog.localize_count(MessageKey::FirstCharSpecial, max_value, locale));
        }

        if !rules.read_flag(PolicyRule::AllowLastCharSpecial) {
            statements.push(catalog.localize_count(MessageKey::LastCharSpecial, max_value, locale));
        }
    }

    {
        let value = rules.read_bound(PolicyRule::MaximumRepeat);
        if value > 0 {
            statements.push(catalog.localize_count(MessageKey::MaxRepeat, value, locale));
        }
    }

    {
        let value = rules.read_bound(PolicyRule::MaximumSequentialRepeat);
        if value > 0 {
            statements.push(catalog.localize_count(MessageKey::MaxSequentialRepeat, value, locale));
        }
    }

    {
        let value = rules.read_bound(PolicyRule::MinimumLowerCase);
        if value > 0 {
            statements.push(catalog.localize_count(MessageKey::MinLowerCase, value, locale));
        }
    }

    {
        let value = rules.read_bound(PolicyRule::MaximumLowerCase);
        if value > 0 {
            statements.push(catalog.localize_count(MessageKey::MaxLowerCase, value, locale));
        }
    }

    {
        let value = rules.read_bound(PolicyRule::MinimumUpperCase);
        if value > 0 {
            statements.push(catalog.localize_count(MessageKey::MinUpperCase, value, locale));
        }
    }

    {
        let value = rules.read_bound(PolicyRule::MaximumUpperCase);
        if value > 0 {
            statements.push(catalog.localize_count(MessageKey::MaxUpperCase, value, locale));
        }
    }

    {
        let value = rules.read_bound(PolicyRule::MinimumUnique);
        if value > 0 {
            statements.push(catalog.localize_count(MessageKey::MinUnique, value, locale));
        }
    }

    {
        let values = rules.read_values(PolicyRule::DisallowedValues);
        if !values.is_empty() {
            let mut detail = String::new();
            for value in values {
                detail.push(' ');
                detail.push_str(&escape_html(value));
            }
            statements.push(catalog.localize_text(MessageKey::DisallowedValues, &detail, locale));
        }
    }

    {
        // Legacy complexity implies attribute-based checks even when the
        // configured list is empty.
        let values = rules.read_values(PolicyRule::DisallowedAttributes);
        if !values.is_empty() || level == ComplexityLevel::Legacy {
            statements.push(catalog.localize_text(MessageKey::DisallowedAttributes, "", locale));
        }
    }

    if rules.read_flag(PolicyRule::EnableWordlist) {
        statements.push(catalog.localize_text(MessageKey::WordlistCheck, "", locale));
    }

    {
        let value = rules.read_bound(PolicyRule::MaximumOldChars);
        if value > 0 {
            statements.push(catalog.localize_count(MessageKey::MaxOldChars, value, locale));
        }
    }

    {
        let value = rules.read_bound(PolicyRule::MinimumLifetime);
        if value > 0 {
            let duration = if value % SECONDS_PER_DAY == 0 {
                let days = value / SECONDS_PER_DAY;
                let unit = if days <= 1 {
                    MessageKey::DaySingular
                } else {
                    MessageKey::DayPlural
                };
                format!("{} {}", days, catalog.localize_text(unit, "", locale))
            } else {
                let hours = value / SECONDS_PER_HOUR;
                let unit = if hours <= 1 {
                    MessageKey::HourSingular
                } else {
                    MessageKey::HourPlural
                };
                format!("{} {}", hours, catalog.localize_text(unit, "", locale))
            };
            statements.push(catalog.localize_text(MessageKey::MinimumFrequency, &duration, locale));
        }
    }

    match level {
        ComplexityLevel::Legacy => {
            statements.push(catalog.localize_text(MessageKey::LegacyComplexity, "", locale));
        }
        ComplexityLevel::Modern => {
            let max_violations = rules.read_bound(PolicyRule::ComplexityMaxViolations);
            statements.push(catalog.localize_text(
                MessageKey::ModernComplexity,
                &max_violations.to_string(),
                locale,
            ));
        }
        ComplexityLevel::None => {}
    }

    if rules.read_flag(PolicyRule::UniqueRequired) {
        statements.push(catalog.localize_text(MessageKey::UniqueRequired, "", locale));
    }

    statements
}

/// Compose the resolved statements into one string, prepending the prefix and
/// appending the separator to each.
///
/// An override text bypasses composition entirely and is returned verbatim.
pub fn compose(
    policy: &PasswordPolicy,
    locale: Locale,
    catalog: &MessageCatalog,
    render: &RenderConfig,
) -> String {
    if let Some(text) = policy.rule_text() {
        return text.to_string();
    }

    let mut composed = String::new();
    for statement in resolve(policy, locale, catalog) {
        composed.push_str(&render.prefix);
        composed.push_str(&statement);
        composed.push_str(&render.separator);
    }
    composed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::RuleSet;

    fn resolve_rules(rules: RuleSet) -> Vec<String> {
        resolve(
            &PasswordPolicy::new(rules),
            Locale::ENGLISH,
            MessageCatalog::global(),
        )
    }

    // ==================== Ordering Tests ====================

    #[test]
    fn test_case_sensitivity_always_first() {
        let statements = resolve_rules(RuleSet::new());
        assert_eq!(statements[0], "Password is case sensitive.");
    }

    #[test]
    fn test_not_case_sensitive_variant() {
        let statements = resolve_rules(RuleSet::new().with_flag(PolicyRule::CaseSensitive, false));
        assert_eq!(statements[0], "Password is not case sensitive.");
    }

    #[test]
    fn test_unconstrained_policy_emits_only_case_statement() {
        let statements = resolve_rules(RuleSet::new());
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn test_emission_order_min_before_max() {
        let statements = resolve_rules(
            RuleSet::new()
                .with_bound(PolicyRule::MinimumLength, 8)
                .with_bound(PolicyRule::MaximumLength, 20),
        );
        assert_eq!(statements[1], "Must be at least 8 characters long.");
        assert_eq!(statements[2], "Must be no more than 20 characters long.");
    }

    // ==================== Length Tests ====================

    #[test]
    fn test_max_length_ceiling_suppressed() {
        for ceiling in [0, 64, 65] {
            let statements =
                resolve_rules(RuleSet::new().with_bound(PolicyRule::MaximumLength, ceiling));
            assert_eq!(statements.len(), 1, "ceiling {} must be suppressed", ceiling);
        }
    }

    #[test]
    fn test_max_length_just_below_ceiling_emitted() {
        let statements = resolve_rules(RuleSet::new().with_bound(PolicyRule::MaximumLength, 63));
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[1], "Must be no more than 63 characters long.");
    }

    // ==================== Numeric Group Tests ====================

    #[test]
    fn test_numeric_disallowed_short_circuits_group() {
        let statements = resolve_rules(
            RuleSet::new()
                .with_flag(PolicyRule::AllowNumeric, false)
                .with_bound(PolicyRule::MinimumNumeric, 2)
                .with_bound(PolicyRule::MaximumNumeric, 4)
                .with_flag(PolicyRule::AllowFirstCharNumeric, false),
        );
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[1], "Must not include any numbers.");
    }

    #[test]
    fn test_numeric_group_sub_statements() {
        let statements = resolve_rules(
            RuleSet::new()
                .with_bound(PolicyRule::MinimumNumeric, 1)
                .with_bound(PolicyRule::MaximumNumeric, 4)
                .with_flag(PolicyRule::AllowFirstCharNumeric, false)
                .with_flag(PolicyRule::AllowLastCharNumeric, false),
        );
        assert_eq!(
            statements[1..],
            [
                "Must include at least 1 number.".to_string(),
                "Must not include more than 4 numbers.".to_string(),
                "The first character must not be a number.".to_string(),
                "The last character must not be a number.".to_string(),
            ]
        );
    }

    #[test]
    fn test_first_char_numeric_emitted_with_zero_maximum() {
        // The statement still appears when the maximum numeric bound is 0.
        let statements =
            resolve_rules(RuleSet::new().with_flag(PolicyRule::AllowFirstCharNumeric, false));
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[1], "The first character must not be a number.");
    }

    // ==================== Symbol Group Tests ====================

    #[test]
    fn test_special_disallowed_short_circuits_group() {
        let statements = resolve_rules(
            RuleSet::new()
                .with_flag(PolicyRule::AllowSpecial, false)
                .with_bound(PolicyRule::MinimumSpecial, 3),
        );
        assert_eq!(statements.len(), 2);
        assert_eq!(
            statements[1],
            "Must not include any symbol (non letter or number) characters."
        );
    }

    // ==================== Complexity Override Tests ====================

    #[test]
    fn test_legacy_complexity_forces_minimum_length() {
        let statements = resolve_rules(
            RuleSet::new()
                .with_flag(PolicyRule::LegacyComplexityEnabled, true)
                .with_bound(PolicyRule::MinimumLength, 12),
        );
        assert!(statements.contains(&"Must be at least 6 characters long.".to_string()));
        assert!(!statements.iter().any(|s| s.contains("12")));
    }

    #[test]
    fn test_modern_complexity_defaults_minimum_length_only_when_unset() {
        let defaulted = resolve_rules(
            RuleSet::new().with_flag(PolicyRule::ModernComplexityEnabled, true),
        );
        assert!(defaulted.contains(&"Must be at least 6 characters long.".to_string()));

        let configured = resolve_rules(
            RuleSet::new()
                .with_flag(PolicyRule::ModernComplexityEnabled, true)
                .with_bound(PolicyRule::MinimumLength, 10),
        );
        assert!(configured.contains(&"Must be at least 10 characters long.".to_string()));
    }

    #[test]
    fn test_legacy_complexity_adds_attribute_and_complexity_statements() {
        let statements = resolve_rules(
            RuleSet::new().with_flag(PolicyRule::LegacyComplexityEnabled, true),
        );
        assert!(statements
            .contains(&"Must not include part of your name or user name.".to_string()));
        assert!(statements.iter().any(|s| s.contains("three of the following categories")));
    }

    #[test]
    fn test_modern_complexity_statement_carries_violation_count() {
        let statements = resolve_rules(
            RuleSet::new()
                .with_flag(PolicyRule::ModernComplexityEnabled, true)
                .with_bound(PolicyRule::ComplexityMaxViolations, 3),
        );
        assert!(statements.iter().any(|s| s.contains("at most 3 of")));
        // Modern mode alone does not imply the attribute statement.
        assert!(!statements
            .contains(&"Must not include part of your name or user name.".to_string()));
    }

    // ==================== Content Restriction Tests ====================

    #[test]
    fn test_disallowed_values_escaped_and_space_separated() {
        let statements = resolve_rules(
            RuleSet::new().with_values(PolicyRule::DisallowedValues, ["<script>", "admin"]),
        );
        assert_eq!(
            statements[1],
            "Must not include the following values: &lt;script&gt; admin"
        );
    }

    #[test]
    fn test_disallowed_attributes_from_list() {
        let statements = resolve_rules(
            RuleSet::new().with_values(PolicyRule::DisallowedAttributes, ["cn", "sn"]),
        );
        assert_eq!(
            statements[1],
            "Must not include part of your name or user name."
        );
    }

    // ==================== Lifetime Tests ====================

    #[test]
    fn test_lifetime_exact_days() {
        let statements =
            resolve_rules(RuleSet::new().with_bound(PolicyRule::MinimumLifetime, 172_800));
        assert_eq!(
            statements[1],
            "Password may not be changed more often than once every 2 days."
        );
    }

    #[test]
    fn test_lifetime_single_day() {
        let statements =
            resolve_rules(RuleSet::new().with_bound(PolicyRule::MinimumLifetime, 86_400));
        assert_eq!(
            statements[1],
            "Password may not be changed more often than once every 1 day."
        );
    }

    #[test]
    fn test_lifetime_fractional_day_uses_hours() {
        let statements =
            resolve_rules(RuleSet::new().with_bound(PolicyRule::MinimumLifetime, 5_400));
        assert_eq!(
            statements[1],
            "Password may not be changed more often than once every 1 hour."
        );
    }

    #[test]
    fn test_lifetime_multiple_hours() {
        let statements =
            resolve_rules(RuleSet::new().with_bound(PolicyRule::MinimumLifetime, 10_800));
        assert_eq!(
            statements[1],
            "Password may not be changed more often than once every 3 hours."
        );
    }

    // ==================== Override Text Tests ====================

    #[test]
    fn test_override_text_returns_single_statement() {
        let policy = PasswordPolicy::with_rule_text(
            RuleSet::new().with_bound(PolicyRule::MinimumLength, 8),
            Some("Use a passphrase of four random words.".to_string()),
        );
        let statements = resolve(&policy, Locale::ENGLISH, MessageCatalog::global());
        assert_eq!(statements, ["Use a passphrase of four random words."]);
    }

    // ==================== Compose Tests ====================

    #[test]
    fn test_compose_applies_prefix_and_separator() {
        let policy = PasswordPolicy::new(RuleSet::new().with_bound(PolicyRule::MinimumLength, 8));
        let render = RenderConfig {
            prefix: "- ".to_string(),
            separator: "\n".to_string(),
        };
        let composed = compose(&policy, Locale::ENGLISH, MessageCatalog::global(), &render);
        assert_eq!(
            composed,
            "- Password is case sensitive.\n- Must be at least 8 characters long.\n"
        );
    }

    #[test]
    fn test_compose_defaults_to_line_break_separator() {
        let policy = PasswordPolicy::new(RuleSet::new());
        let composed = compose(
            &policy,
            Locale::ENGLISH,
            MessageCatalog::global(),
            &RenderConfig::default(),
        );
        assert_eq!(composed, "Password is case sensitive.<br/>");
    }

    #[test]
    fn test_compose_override_text_verbatim() {
        let policy = PasswordPolicy::with_rule_text(
            RuleSet::new(),
            Some("Contact the helpdesk for password rules.".to_string()),
        );
        let render = RenderConfig {
            prefix: "- ".to_string(),
            separator: "\n".to_string(),
        };
        let composed = compose(&policy, Locale::ENGLISH, MessageCatalog::global(), &render);
        assert_eq!(composed, "Contact the helpdesk for password rules.");
    }

    // ==================== Localization Tests ====================

    #[test]
    fn test_resolve_spanish() {
        let statements = resolve(
            &PasswordPolicy::new(RuleSet::new().with_bound(PolicyRule::MinimumLength, 8)),
            Locale::SPANISH,
            MessageCatalog::global(),
        );
        assert_eq!(
            statements[0],
            "La contraseña distingue entre mayúsculas y minúsculas."
        );
        assert_eq!(statements[1], "Debe tener al menos 8 caracteres.");
    }
}
