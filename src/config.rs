//! Bridge configuration.
//!
//! Options load from a TOML file the host points at, layered over built-in
//! defaults. [`BridgeOptions::defaults`] returns the same defaults without
//! touching the filesystem (useful in tests).
//!
//! ```toml
//! username = "rest-reader"
//! password = "secret"
//! rest_config_option = "search-options"
//! rest_transform = "search-transform"
//! search_exclude = """
//! status = draft
//! embargo_until > {{today}}
//! """
//! driver = "marklogic"
//! search_page = "https://example.org/search"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::drivers::DEFAULT_DRIVER;

/// Errors that can occur while loading options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read options file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse options file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Admin-configured bridge options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BridgeOptions {
    /// Backend account name. Together with `password` this decides whether
    /// the host constructs a backend client at all.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,

    /// Name of the stored REST options node the backend searches with.
    #[serde(default)]
    pub rest_config_option: String,

    /// Name of the REST transform applied to results.
    #[serde(default)]
    pub rest_transform: String,

    /// Newline-delimited exclusion rules, `<field> <operator> <value>` per
    /// line. Read fresh on every query.
    #[serde(default)]
    pub search_exclude: String,

    /// Active driver name.
    #[serde(default = "default_driver")]
    pub driver: String,

    /// Canonical search page URL used as the base for pagination links.
    #[serde(default)]
    pub search_page: Option<String>,
}

fn default_driver() -> String {
    DEFAULT_DRIVER.to_string()
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self::defaults()
    }
}

impl BridgeOptions {
    /// Built-in defaults, no filesystem access.
    pub fn defaults() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            rest_config_option: String::new(),
            rest_transform: String::new(),
            search_exclude: String::new(),
            driver: default_driver(),
            search_page: None,
        }
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Whether the host has enough to construct a backend client.
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_have_marklogic_driver_and_no_credentials() {
        let options = BridgeOptions::defaults();
        assert_eq!(options.driver, "marklogic");
        assert!(!options.has_credentials());
        assert_eq!(options.search_page, None);
        assert_eq!(options.search_exclude, "");
    }

    #[test]
    fn load_reads_toml_and_fills_missing_fields() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(
            file,
            r#"
username = "rest-reader"
password = "secret"
search_exclude = "status = draft"
search_page = "https://example.org/search"
"#
        )?;

        let options = BridgeOptions::load(file.path())?;
        assert!(options.has_credentials());
        assert_eq!(options.search_exclude, "status = draft");
        assert_eq!(options.driver, "marklogic");
        assert_eq!(options.rest_transform, "");
        assert_eq!(
            options.search_page.as_deref(),
            Some("https://example.org/search")
        );
        Ok(())
    }

    #[test]
    fn load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "username = [not toml").unwrap();
        match BridgeOptions::load(file.path()) {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn credentials_require_both_fields() {
        let mut options = BridgeOptions::defaults();
        options.username = "rest-reader".into();
        assert!(!options.has_credentials());
        options.password = "secret".into();
        assert!(options.has_credentials());
    }
}
