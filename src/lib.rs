//! Translate password policy rules into localized requirement statements.
//!
//! The core of this crate is the resolver in [`resolver`]: a deterministic
//! pass over a [`policy::PasswordPolicy`] that emits localized, correctly
//! pluralized requirement sentences in a fixed, user-visible order. Vendor
//! complexity modes reshape the effective rule values before emission, and an
//! administrator-authored override text bypasses generation entirely.
//!
//! The [`settings`] module carries the static configuration-setting registry
//! and a consistency gate that is re-run whenever the registry data changes.
//!
//! # Example
//!
//! ```rust,ignore
//! use password_requirements::{resolve, Locale, MessageCatalog, PasswordPolicy, PolicyRule, RuleSet};
//!
//! let rules = RuleSet::new()
//!     .with_bound(PolicyRule::MinimumLength, 8)
//!     .with_bound(PolicyRule::MinimumNumeric, 1);
//! let policy = PasswordPolicy::new(rules);
//! let statements = resolve(&policy, Locale::ENGLISH, MessageCatalog::global());
//! ```

pub mod config;
pub mod escape;
pub mod i18n;
pub mod policy;
pub mod resolver;
pub mod settings;

pub use config::RenderConfig;
pub use escape::escape_html;
pub use i18n::{CatalogMetrics, Locale, MessageCatalog, MessageKey, UNKNOWN_MESSAGE};
pub use policy::{ComplexityLevel, PasswordPolicy, PolicyRule, RuleReader, RuleSet, RuleValue};
pub use resolver::{compose, resolve};
pub use settings::{run_registry_checks, CheckReport, Setting, SettingRegistry, StoredValue, Template};
