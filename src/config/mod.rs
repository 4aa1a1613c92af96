#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::demo::DEFAULT_ENDPOINT;
use crate::core::http::default_headers;
use crate::core::HttpSettings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_header, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Resolved HTTP settings after the config file and command line are merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub api_endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub headers: HashMap<String, String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: Some(DEFAULT_TIMEOUT_SECONDS),
            headers: default_headers(),
        }
    }
}

impl HttpSettings for HttpConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn default_headers(&self) -> HashMap<String, String> {
        self.headers.clone()
    }
}

impl Validate for HttpConfig {
    fn validate(&self) -> Result<()> {
        validate_url("http.endpoint", &self.api_endpoint)?;

        if let Some(timeout) = self.timeout_seconds {
            validate_range("http.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        for (name, value) in &self.headers {
            validate_header("http.headers", name, value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{ErrorSeverity, TxError};

    #[test]
    fn test_default_http_config_is_valid() {
        let config = HttpConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api_endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_seconds(), Some(DEFAULT_TIMEOUT_SECONDS));
    }

    #[test]
    fn test_timeout_out_of_range_is_rejected() {
        let config = HttpConfig {
            timeout_seconds: Some(0),
            ..HttpConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TxError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_illegal_header_name_is_rejected() {
        let mut config = HttpConfig::default();
        config.headers.insert("Bad Name".to_string(), "x".to_string());
        match config.validate() {
            Err(e) => assert_eq!(e.severity(), ErrorSeverity::High),
            Ok(()) => panic!("header name with a space must not validate"),
        }
    }

    #[test]
    fn test_header_injection_is_rejected() {
        let mut config = HttpConfig::default();
        config
            .headers
            .insert("X-Trace".to_string(), "a\r\nb".to_string());
        assert!(config.validate().is_err());
    }
}
