// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{Cost, Locale};

/// The name of the Tally application.
pub const APP_NAME: &str = "tally";

/// Configuration for the Tally core.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Locale used to format costs.
    #[serde(default)]
    pub locale: Locale,

    /// Tasks costing at least this much are highlighted in the list.
    #[serde(default = "default_highlight_threshold")]
    pub highlight_threshold: Cost,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            highlight_threshold: default_highlight_threshold(),
        }
    }
}

fn default_highlight_threshold() -> Cost {
    Cost::from_units(1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.locale, Locale::PtBr);
        assert_eq!(config.highlight_threshold, Cost::from_units(1000));
    }

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str(
            r#"
locale = "en-US"
highlight_threshold = "250.50"
"#,
        )
        .unwrap();
        assert_eq!(config.locale, Locale::EnUs);
        assert_eq!(config.highlight_threshold, Cost::from_cents(25_050));
    }

    #[test]
    fn test_parse_config_integer_threshold() {
        let config: Config = toml::from_str("highlight_threshold = 500").unwrap();
        assert_eq!(config.highlight_threshold, Cost::from_units(500));
    }

    #[test]
    fn test_parse_config_invalid() {
        assert!(toml::from_str::<Config>(r#"locale = "xx""#).is_err());
        assert!(toml::from_str::<Config>("highlight_threshold = -1").is_err());
    }
}
