//! Password Policy Core
//!
//! Strength rules, reuse history and expiration checks for a single user's
//! password.
//!
//! ## Architecture
//!
//! - **Core**: strength checker, fingerprint digest, history tracker, expiration checker
//! - **Domain**: the password record and fingerprint value object
//! - **Application**: the change-password flow tying the checks together
//! - **Shared**: common types, constants, configuration and utilities
//!
//! ## Usage
//!
//! ```rust
//! use password_policy_core::{ChangeOutcome, PasswordPolicyService, PasswordRecord};
//!
//! let service = PasswordPolicyService::new();
//! let mut record = PasswordRecord::new();
//!
//! assert!(service.is_expired(&record));
//! assert_eq!(service.change_password(&mut record, "StrongPassw0rd!"), ChangeOutcome::Updated);
//! assert_eq!(service.change_password(&mut record, "StrongPassw0rd!"), ChangeOutcome::Reused);
//! assert!(!service.is_expired(&record));
//! ```

use std::sync::Once;

pub mod application;
pub mod core;
pub mod domain;
pub mod shared;

// Re-export main components
pub use application::PasswordPolicyService;
pub use crate::core::crypto::{check_password_strength, HashManager, PasswordConfig, StrengthChecker};
pub use crate::core::expiration::{is_expired, ExpirationChecker};
pub use crate::core::history::{is_reused, record_change, HistoryTracker};
pub use domain::{Fingerprint, PasswordRecord};
pub use shared::config::CoreConfig;
pub use shared::error::{PolicyError, PolicyResult};
pub use shared::types::{ChangeOutcome, StrengthIssue, StrengthReport};
pub use shared::utils::create_banner;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

static LOGGER_INIT: Once = Once::new();

/// Initialize logging from .env / environment configuration
pub fn init() -> PolicyResult<CoreConfig> {
    let config = CoreConfig::from_env()?;
    init_logging(&config)?;
    Ok(config)
}

/// Install the env_logger backend at the configured level.
///
/// Only the first call installs a logger; later calls return `Ok(())`.
pub fn init_logging(config: &CoreConfig) -> PolicyResult<()> {
    let mut result = Ok(());
    LOGGER_INIT.call_once(|| {
        result = env_logger::Builder::new()
            .filter_level(config.log_level)
            .try_init()
            .map_err(PolicyError::from);
    });
    result
}

/// Run the demonstration flow for `password` and render the banners.
///
/// Strength is reported first. A strong password then goes through the
/// reuse check and is recorded if new. Expiration is reported last.
pub fn render_demo(service: &PasswordPolicyService, record: &mut PasswordRecord, password: &str) -> String {
    let mut out: Vec<String> = Vec::new();

    let outcome = service.change_password(record, password);
    match &outcome {
        // A rejected password never reaches the reuse check, so no reuse or
        // update banner follows the issue list.
        ChangeOutcome::Rejected(report) => {
            out.push(create_banner("Password is weak. Issues:"));
            for issue in report.messages() {
                out.push(format!("- {}", issue));
            }
        }
        ChangeOutcome::Reused => {
            out.push(create_banner("Password is strong."));
            out.push(create_banner("Password has been used before. Choose a different one."));
        }
        ChangeOutcome::Updated => {
            out.push(create_banner("Password is strong."));
            out.push(create_banner("Password updated successfully."));
        }
    }

    if service.is_expired(record) {
        out.push(create_banner("Password has expired. Please change your password."));
    } else {
        out.push(create_banner("Password is still valid."));
    }

    out.join("\n")
}

/// Render the fixed policy and the effective log level
pub fn render_policy(config: &CoreConfig) -> String {
    let checker = StrengthChecker::new_default();
    let policy = checker.config();

    let lines = [
        format!("{} v{} configuration:", NAME, VERSION),
        String::new(),
        format!("  Minimum Length: {}", policy.min_length()),
        format!("  Special Characters: {}", policy.special_characters()),
        format!("  History Limit: {}", policy.history_limit()),
        format!("  Expiration (days): {}", policy.expiration_days()),
        format!("  Expiration Window: {}s", ExpirationChecker::new().max_age().num_seconds()),
        format!("  Log Level: {}", config.log_level),
    ];
    lines.join("\n")
}

/// Demonstration path for the hardcoded example password on a fresh record
pub fn demo_password_policy() -> String {
    let service = PasswordPolicyService::new();
    let mut record = PasswordRecord::new();
    render_demo(&service, &mut record, shared::constants::DEMO_PASSWORD)
}
