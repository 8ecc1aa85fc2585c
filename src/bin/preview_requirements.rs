//! Preview binary - resolves a policy and displays the requirement text
//! without any page-rendering layer.
//!
//! Usage:
//!   cargo run --bin preview                  # Resolve the demo policy
//!
//! Optional environment variables:
//! - REQUIREMENTS_LOCALE (defaults to en)
//! - REQUIREMENTS_PREFIX (defaults to empty)
//! - REQUIREMENTS_SEPARATOR (defaults to <br/>)
//! - MINIMUM_LENGTH (defaults to 8)
//! - MAXIMUM_LENGTH (defaults to 20)
//! - MINIMUM_LIFETIME (seconds, defaults to 86400)
//! - RULE_TEXT (override text; replaces all generated statements)

use anyhow::Result;
use password_requirements::{
    compose, resolve, run_registry_checks, Locale, MessageCatalog, PasswordPolicy, PolicyRule,
    RenderConfig, RuleSet,
};
use tracing::info;

fn env_bound(name: &str, fallback: i64) -> i64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(fallback)
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("password_requirements=info".parse().unwrap()),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    let locale = match std::env::var("REQUIREMENTS_LOCALE") {
        Ok(code) => Locale::from_code(&code)?,
        Err(_) => Locale::canonical(),
    };
    let render = RenderConfig::from_env();

    info!("Building demo policy...");
    let rules = RuleSet::new()
        .with_bound(PolicyRule::MinimumLength, env_bound("MINIMUM_LENGTH", 8))
        .with_bound(PolicyRule::MaximumLength, env_bound("MAXIMUM_LENGTH", 20))
        .with_bound(PolicyRule::MinimumNumeric, 1)
        .with_bound(PolicyRule::MinimumSpecial, 1)
        .with_bound(PolicyRule::MaximumRepeat, 3)
        .with_bound(
            PolicyRule::MinimumLifetime,
            env_bound("MINIMUM_LIFETIME", 86_400),
        )
        .with_values(PolicyRule::DisallowedValues, ["password", "test"])
        .with_flag(PolicyRule::EnableWordlist, true)
        .with_flag(PolicyRule::UniqueRequired, true);
    let policy = PasswordPolicy::with_rule_text(rules, std::env::var("RULE_TEXT").ok());

    let catalog = MessageCatalog::global();
    let statements = resolve(&policy, locale, catalog);

    println!();
    println!("--- Requirement statements ({}) ---", locale.code());
    println!();
    for (index, statement) in statements.iter().enumerate() {
        println!("{:>2}. {}", index + 1, statement);
    }
    println!();
    println!("--- Composed output ---");
    println!();
    println!("{}", compose(&policy, locale, catalog, &render));
    println!();

    info!("Checking setting registry consistency...");
    let report = run_registry_checks();
    if report.has_errors() {
        println!("Registry check failures:");
        for error in &report.errors {
            println!("  ✗ {}", error);
        }
        anyhow::bail!("setting registry is inconsistent");
    }
    for warning in &report.warnings {
        println!("  ⚠ {}", warning);
    }
    println!("✓ Setting registry is consistent");

    Ok(())
}
