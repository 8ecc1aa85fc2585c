//! Configuration-setting registry and its consistency checks.
//!
//! - `template`: product template variants that select per-setting defaults
//! - `setting`: static metadata for one setting
//! - `registry`: the catalog of every known setting
//! - `value`: stored values, their representations and validation
//! - `check`: the consistency gate over the registry data

mod check;
mod registry;
mod setting;
mod template;
mod value;

pub use check::{
    check_default_values, check_descriptions, check_flags, check_key_uniqueness, check_labels,
    check_numeric_ranges, check_options, check_patterns, check_properties, run_registry_checks,
    CheckReport,
};
pub use registry::SettingRegistry;
pub use setting::{PropertyKey, RawDefault, Setting, SettingFlag, SettingSyntax};
pub use template::Template;
pub use value::{SettingError, StoredValue};
