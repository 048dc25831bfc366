//! Dashboard settings, read from the `dashboard.toml` embedded at build time.

use serde::Deserialize;

use crowdfund_domain::query::DEFAULT_PAGE_SIZE;

const EMBEDDED: &str = include_str!("../dashboard.toml");

/// Where campaign records come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
    /// The in-process mock set.
    #[default]
    Mock,
    /// The crowdfundd JSON API.
    Http,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_source: DataSourceKind,
    pub api_base: String,
    pub featured_count: usize,
    pub page_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_source: DataSourceKind::Mock,
            api_base: "/api".to_string(),
            featured_count: 3,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl DashboardConfig {
    /// Parse a `dashboard.toml` document.
    ///
    /// A zero page size would hide every campaign, so it falls back to the
    /// default.
    ///
    /// # Errors
    ///
    /// Returns the TOML error when the document is malformed.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(content)?;
        if config.page_size == 0 {
            config.page_size = DEFAULT_PAGE_SIZE;
        }
        let trimmed = config.api_base.trim_end_matches('/').len();
        config.api_base.truncate(trimmed);
        Ok(config)
    }

    /// The embedded configuration, or defaults if it does not parse.
    #[must_use]
    pub fn embedded() -> Self {
        Self::parse(EMBEDDED).unwrap_or_else(|err| {
            leptos::logging::warn!("invalid dashboard.toml, using defaults: {err}");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_embedded_file() {
        let config = DashboardConfig::parse(EMBEDDED).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn should_fill_missing_fields_with_defaults() {
        let config = DashboardConfig::parse("featured_count = 6").unwrap();
        assert_eq!(config.featured_count, 6);
        assert_eq!(config.data_source, DataSourceKind::Mock);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn should_select_http_source() {
        let config =
            DashboardConfig::parse("data_source = 'http'\napi_base = 'http://localhost:3000/api/'")
                .unwrap();
        assert_eq!(config.data_source, DataSourceKind::Http);
        assert_eq!(config.api_base, "http://localhost:3000/api");
    }

    #[test]
    fn should_replace_zero_page_size() {
        let config = DashboardConfig::parse("page_size = 0").unwrap();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn should_reject_unknown_source() {
        assert!(DashboardConfig::parse("data_source = 'graphql'").is_err());
    }
}
