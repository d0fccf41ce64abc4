//! ==============================================================================
//! config.rs - build-time dashboard configuration
//! ==============================================================================
//!
//! values are baked into the wasm bundle when it is built:
//!     EXPENSE_API_BASE   api origin, empty = same origin as the page
//!     EXPENSE_LOG_LEVEL  error | warn | info | debug | trace (default info)
//!     EXPENSE_CURRENCY   symbol shown before amounts (default ₹)
//!
//! ==============================================================================

use std::str::FromStr;

pub const DEFAULT_CURRENCY: &str = "₹";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub log_level: log::Level,
    pub currency: String,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("EXPENSE_API_BASE"),
            option_env!("EXPENSE_LOG_LEVEL"),
            option_env!("EXPENSE_CURRENCY"),
        )
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>, currency: Option<&str>) -> Self {
        let api_base = api_base.unwrap_or("").trim().trim_end_matches('/').to_string();
        let log_level = log_level
            .and_then(|l| log::Level::from_str(l.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        let currency = currency
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
            .to_string();

        Self { api_base, log_level, currency }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}
