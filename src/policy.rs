//! Password policy rules and the resolved policy object.
//!
//! A policy is an immutable bag of named rules for one evaluation context
//! (for example "existing user" vs "new user"). Rules are identified by the
//! closed [`PolicyRule`] enumeration so that an unknown rule reference is a
//! compile error rather than a runtime lookup failure.

use std::collections::HashMap;

/// Identifier for one password policy rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyRule {
    CaseSensitive,
    MinimumLength,
    MaximumLength,
    MinimumAlpha,
    MaximumAlpha,
    AllowNumeric,
    MinimumNumeric,
    MaximumNumeric,
    AllowFirstCharNumeric,
    AllowLastCharNumeric,
    AllowSpecial,
    MinimumSpecial,
    MaximumSpecial,
    AllowFirstCharSpecial,
    AllowLastCharSpecial,
    MaximumRepeat,
    MaximumSequentialRepeat,
    MinimumLowerCase,
    MaximumLowerCase,
    MinimumUpperCase,
    MaximumUpperCase,
    MinimumUnique,
    DisallowedValues,
    DisallowedAttributes,
    EnableWordlist,
    MaximumOldChars,
    MinimumLifetime,
    LegacyComplexityEnabled,
    ModernComplexityEnabled,
    ComplexityMaxViolations,
    UniqueRequired,
}

/// Value kind a rule carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSyntax {
    /// Boolean flag.
    Flag,
    /// Integer bound; 0 means "unconstrained".
    Bound,
    /// List of strings.
    Values,
}

/// A configured rule value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleValue {
    Flag(bool),
    Bound(i64),
    Values(Vec<String>),
}

impl PolicyRule {
    /// Every known rule, in declaration order.
    pub const ALL: &'static [PolicyRule] = &[
        PolicyRule::CaseSensitive,
        PolicyRule::MinimumLength,
        PolicyRule::MaximumLength,
        PolicyRule::MinimumAlpha,
        PolicyRule::MaximumAlpha,
        PolicyRule::AllowNumeric,
        PolicyRule::MinimumNumeric,
        PolicyRule::MaximumNumeric,
        PolicyRule::AllowFirstCharNumeric,
        PolicyRule::AllowLastCharNumeric,
        PolicyRule::AllowSpecial,
        PolicyRule::MinimumSpecial,
        PolicyRule::MaximumSpecial,
        PolicyRule::AllowFirstCharSpecial,
        PolicyRule::AllowLastCharSpecial,
        PolicyRule::MaximumRepeat,
        PolicyRule::MaximumSequentialRepeat,
        PolicyRule::MinimumLowerCase,
        PolicyRule::MaximumLowerCase,
        PolicyRule::MinimumUpperCase,
        PolicyRule::MaximumUpperCase,
        PolicyRule::MinimumUnique,
        PolicyRule::DisallowedValues,
        PolicyRule::DisallowedAttributes,
        PolicyRule::EnableWordlist,
        PolicyRule::MaximumOldChars,
        PolicyRule::MinimumLifetime,
        PolicyRule::LegacyComplexityEnabled,
        PolicyRule::ModernComplexityEnabled,
        PolicyRule::ComplexityMaxViolations,
        PolicyRule::UniqueRequired,
    ];

    /// The value kind this rule carries.
    pub fn syntax(&self) -> RuleSyntax {
        match self {
            PolicyRule::CaseSensitive
            | PolicyRule::AllowNumeric
            | PolicyRule::AllowFirstCharNumeric
            | PolicyRule::AllowLastCharNumeric
            | PolicyRule::AllowSpecial
            | PolicyRule::AllowFirstCharSpecial
            | PolicyRule::AllowLastCharSpecial
            | PolicyRule::EnableWordlist
            | PolicyRule::LegacyComplexityEnabled
            | PolicyRule::ModernComplexityEnabled
            | PolicyRule::UniqueRequired => RuleSyntax::Flag,
            PolicyRule::DisallowedValues | PolicyRule::DisallowedAttributes => RuleSyntax::Values,
            _ => RuleSyntax::Bound,
        }
    }

    /// The value used when a policy does not configure this rule.
    pub fn default_value(&self) -> RuleValue {
        match self.syntax() {
            RuleSyntax::Flag => RuleValue::Flag(matches!(
                self,
                PolicyRule::CaseSensitive
                    | PolicyRule::AllowNumeric
                    | PolicyRule::AllowFirstCharNumeric
                    | PolicyRule::AllowLastCharNumeric
                    | PolicyRule::AllowSpecial
                    | PolicyRule::AllowFirstCharSpecial
                    | PolicyRule::AllowLastCharSpecial
            )),
            RuleSyntax::Bound => match self {
                PolicyRule::ComplexityMaxViolations => RuleValue::Bound(2),
                _ => RuleValue::Bound(0),
            },
            RuleSyntax::Values => RuleValue::Values(Vec::new()),
        }
    }
}

/// Read access to rule values.
///
/// The resolver only needs these three capabilities; anything that can answer
/// them can act as a policy source.
pub trait RuleReader {
    /// Read a boolean rule. Falls back to the rule default when unset.
    fn read_flag(&self, rule: PolicyRule) -> bool;

    /// Read an integer bound rule. Falls back to the rule default when unset.
    fn read_bound(&self, rule: PolicyRule) -> i64;

    /// Read a string-list rule. Falls back to the rule default when unset.
    fn read_values(&self, rule: PolicyRule) -> &[String];
}

/// A typed rule-to-value mapping with per-rule defaults.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    values: HashMap<PolicyRule, RuleValue>,
}

impl RuleSet {
    /// Create an empty rule set; every read returns the rule default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a boolean rule.
    pub fn with_flag(mut self, rule: PolicyRule, value: bool) -> Self {
        debug_assert_eq!(rule.syntax(), RuleSyntax::Flag);
        self.values.insert(rule, RuleValue::Flag(value));
        self
    }

    /// Set an integer bound rule.
    pub fn with_bound(mut self, rule: PolicyRule, value: i64) -> Self {
        debug_assert_eq!(rule.syntax(), RuleSyntax::Bound);
        self.values.insert(rule, RuleValue::Bound(value));
        self
    }

    /// Set a string-list rule.
    pub fn with_values<I, S>(mut self, rule: PolicyRule, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        debug_assert_eq!(rule.syntax(), RuleSyntax::Values);
        self.values
            .insert(rule, RuleValue::Values(values.into_iter().map(Into::into).collect()));
        self
    }

    /// Whether the rule has an explicitly configured value.
    pub fn is_configured(&self, rule: PolicyRule) -> bool {
        self.values.contains_key(&rule)
    }
}

const NO_VALUES: &[String] = &[];

impl RuleReader for RuleSet {
    fn read_flag(&self, rule: PolicyRule) -> bool {
        match self.values.get(&rule) {
            Some(RuleValue::Flag(v)) => *v,
            _ => match rule.default_value() {
                RuleValue::Flag(v) => v,
                _ => false,
            },
        }
    }

    fn read_bound(&self, rule: PolicyRule) -> i64 {
        match self.values.get(&rule) {
            Some(RuleValue::Bound(v)) => *v,
            _ => match rule.default_value() {
                RuleValue::Bound(v) => v,
                _ => 0,
            },
        }
    }

    fn read_values(&self, rule: PolicyRule) -> &[String] {
        match self.values.get(&rule) {
            Some(RuleValue::Values(v)) => v,
            _ => NO_VALUES,
        }
    }
}

/// Vendor complexity mode derived from the configured rules.
///
/// The legacy mode forces the effective minimum length and replaces part of
/// the generated statement list; the modern mode only supplies a minimum
/// length default and adds a violation-count statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityLevel {
    None,
    Legacy,
    Modern,
}

impl ComplexityLevel {
    /// Derive the complexity level from rule values. Legacy wins when both
    /// mode flags are set.
    pub fn from_rules(rules: &impl RuleReader) -> Self {
        if rules.read_flag(PolicyRule::LegacyComplexityEnabled) {
            ComplexityLevel::Legacy
        } else if rules.read_flag(PolicyRule::ModernComplexityEnabled) {
            ComplexityLevel::Modern
        } else {
            ComplexityLevel::None
        }
    }
}

/// An immutable, resolved password policy.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    rules: RuleSet,
    rule_text: Option<String>,
    complexity: ComplexityLevel,
}

impl PasswordPolicy {
    /// Build a policy from a rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self::with_rule_text(rules, None)
    }

    /// Build a policy carrying an administrator-authored override text.
    ///
    /// The complexity level is derived once here so that the statement
    /// emission order stays the single source of truth downstream.
    pub fn with_rule_text(rules: RuleSet, rule_text: Option<String>) -> Self {
        let complexity = ComplexityLevel::from_rules(&rules);
        Self {
            rules,
            rule_text,
            complexity,
        }
    }

    /// The configured rules.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The pre-composed override text, if present and non-empty.
    pub fn rule_text(&self) -> Option<&str> {
        self.rule_text.as_deref().filter(|text| !text.is_empty())
    }

    /// The derived vendor complexity level.
    pub fn complexity(&self) -> ComplexityLevel {
        self.complexity
    }
}
