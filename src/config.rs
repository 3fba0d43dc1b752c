//! Build-time configuration.
//!
//! The site runs entirely in the browser, so configuration is baked in at compile time via
//! `option_env!`. `build.rs` forwards `BRAINIUM_*` keys from a `.env` file when they are not
//! already set in the real environment.

use crate::error::ConfigError;

/// Environment variable holding the form-processing endpoint URL.
pub const SCRIPT_URL_VAR: &str = "BRAINIUM_SCRIPT_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Endpoint receiving registration submits and answering participant count queries.
    ///
    /// `None` runs the site without a backend: submissions are stubbed as successful and
    /// the advisory notice is raised.
    pub script_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(option_env!("BRAINIUM_SCRIPT_URL"))
    }

    /// Builds the configuration from a raw endpoint value.
    ///
    /// # Returns
    /// - `Ok(Config)` with `script_url: None` - Value absent or blank
    /// - `Ok(Config)` with `script_url: Some(_)` - Value is an http(s) URL
    /// - `Err(ConfigError::InvalidEnvValue)` - Value present but not an http(s) URL
    pub fn from_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let script_url = match value.map(str::trim) {
            None | Some("") => None,
            Some(url) if url.starts_with("https://") || url.starts_with("http://") => {
                Some(url.to_string())
            }
            Some(url) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: SCRIPT_URL_VAR.to_string(),
                    reason: format!("expected an http(s) URL, got {:?}", url),
                })
            }
        };

        Ok(Self { script_url })
    }

    pub fn is_backend_configured(&self) -> bool {
        self.script_url.is_some()
    }
}
