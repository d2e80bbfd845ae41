use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::checker::CheckerError;

/// Application-level constants
pub const APP_NAME: &str = "Symptom Checker";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of positive matches shown by default.
pub const DEFAULT_TOP_N: usize = 5;

/// Overrides the reference data directory.
pub const RESOURCES_ENV: &str = "SYMPTOM_CHECKER_RESOURCES";

/// Filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "warn,symptom_checker_lib=info,symptom_check=info"
}

/// Get the application data directory (~/SymptomChecker/).
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join("SymptomChecker"))
}

/// Reference data directory: `$SYMPTOM_CHECKER_RESOURCES`, else
/// `~/SymptomChecker/resources` if it exists. `None` means use the demo data.
pub fn resources_dir() -> Option<PathBuf> {
    let default = app_data_dir()
        .map(|dir| dir.join("resources"))
        .filter(|dir| dir.is_dir());
    resolve_resources_dir(std::env::var(RESOURCES_ENV).ok(), default)
}

fn resolve_resources_dir(env_value: Option<String>, default: Option<PathBuf>) -> Option<PathBuf> {
    match env_value {
        Some(v) if !v.trim().is_empty() => Some(PathBuf::from(v.trim())),
        _ => default,
    }
}

/// Per-engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// How many positive matches the report keeps.
    pub top_n: usize,
}

impl CheckerConfig {
    pub fn new(top_n: usize) -> Result<Self, CheckerError> {
        if top_n == 0 {
            return Err(CheckerError::InvalidConfig("top_n must be at least 1".into()));
        }
        Ok(Self { top_n })
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}
