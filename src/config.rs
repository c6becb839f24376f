// ⚙️ Configuration - Read once from the environment at startup
//
// LUNCH_MONEY_TOKEN    (required) API token, passed through untouched
// LUNCH_MONEY_API_URL  (optional) API base URL
// ASSET_REPORT_LOG     (optional) off|error|warn|info|debug|trace
// NO_COLOR             (optional) any non-empty value disables styling

use crate::client::DEFAULT_BASE_URL;
use crate::report::ColorMode;
use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use std::str::FromStr;

pub const TOKEN_VAR: &str = "LUNCH_MONEY_TOKEN";
pub const API_URL_VAR: &str = "LUNCH_MONEY_API_URL";
pub const LOG_VAR: &str = "ASSET_REPORT_LOG";
pub const NO_COLOR_VAR: &str = "NO_COLOR";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub token: String,
    pub api_url: String,
    pub log_level: LevelFilter,
    /// NO_COLOR is set
    pub no_color: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup (tests pass a closure over a map)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .ok_or_else(|| anyhow!("{} is not set", TOKEN_VAR))?;

        let api_url = lookup(API_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let log_level = match lookup(LOG_VAR) {
            Some(level) if !level.trim().is_empty() => LevelFilter::from_str(level.trim())
                .with_context(|| format!("Invalid {} value: {:?}", LOG_VAR, level))?,
            _ => LevelFilter::Warn,
        };

        let no_color = lookup(NO_COLOR_VAR).map(|v| !v.is_empty()).unwrap_or(false);

        Ok(Config { token, api_url, log_level, no_color })
    }

    /// Colors only for a terminal, and never when NO_COLOR is set
    pub fn color_mode(&self, is_terminal: bool) -> ColorMode {
        if is_terminal && !self.no_color {
            ColorMode::Always
        } else {
            ColorMode::Never
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[(TOKEN_VAR, "secret")]).unwrap();

        assert_eq!(config.token, "secret");
        assert_eq!(config.api_url, DEFAULT_BASE_URL);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(!config.no_color);
    }

    #[test]
    fn test_missing_token() {
        let err = config_from(&[]).unwrap_err();
        assert!(err.to_string().contains(TOKEN_VAR));
    }

    #[test]
    fn test_token_is_not_validated() {
        let config = config_from(&[(TOKEN_VAR, "")]).unwrap();
        assert_eq!(config.token, "");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (TOKEN_VAR, "t"),
            (API_URL_VAR, "http://127.0.0.1:9000/v1"),
            (LOG_VAR, "debug"),
            (NO_COLOR_VAR, "1"),
        ])
        .unwrap();

        assert_eq!(config.api_url, "http://127.0.0.1:9000/v1");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.no_color);
    }

    #[test]
    fn test_invalid_log_level() {
        let err = config_from(&[(TOKEN_VAR, "t"), (LOG_VAR, "loud")]).unwrap_err();
        assert!(err.to_string().contains(LOG_VAR));
    }

    #[test]
    fn test_color_mode() {
        let mut config = config_from(&[(TOKEN_VAR, "t")]).unwrap();
        assert_eq!(config.color_mode(true), ColorMode::Always);
        assert_eq!(config.color_mode(false), ColorMode::Never);

        config.no_color = true;
        assert_eq!(config.color_mode(true), ColorMode::Never);

        let empty = config_from(&[(TOKEN_VAR, "t"), (NO_COLOR_VAR, "")]).unwrap();
        assert!(!empty.no_color);
    }
}
