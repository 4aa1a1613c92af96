use crate::config::HttpConfig;
use crate::core::demo::DemoPlan;
use crate::core::{AccountId, Amount};
use crate::utils::error::{Result, TxError};
use crate::utils::validation::Validate;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub http: Option<HttpSection>,
    pub demo: Option<DemoSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpSection {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoSection {
    pub credit_amount: Option<Amount>,
    pub credit_account: Option<AccountId>,
    pub debit_amount: Option<Amount>,
    pub debit_account: Option<AccountId>,
    pub addends: Option<[Decimal; 2]>,
    pub skip_http: Option<bool>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TxError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TxError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left
    /// as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TxError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// HTTP settings from the `[http]` table layered over the defaults.
    pub fn http_config(&self) -> HttpConfig {
        let mut config = HttpConfig::default();
        if let Some(http) = &self.http {
            if let Some(endpoint) = &http.endpoint {
                config.api_endpoint = endpoint.clone();
            }
            if http.timeout_seconds.is_some() {
                config.timeout_seconds = http.timeout_seconds;
            }
            if let Some(headers) = &http.headers {
                config.headers = headers.clone();
            }
        }
        config
    }

    /// Demonstration plan from the `[demo]` table layered over the standard run.
    pub fn demo_plan(&self) -> Result<DemoPlan> {
        let mut plan = DemoPlan::standard()?;
        plan.endpoint = self.http_config().api_endpoint;

        if let Some(demo) = &self.demo {
            if let Some(amount) = demo.credit_amount {
                plan.credit_amount = amount;
            }
            if let Some(account) = &demo.credit_account {
                plan.credit_account = account.clone();
            }
            if let Some(amount) = demo.debit_amount {
                plan.debit_amount = amount;
            }
            if let Some(account) = &demo.debit_account {
                plan.debit_account = account.clone();
            }
            if let Some([a, b]) = demo.addends {
                plan.addends = (a, b);
            }
            if let Some(skip_http) = demo.skip_http {
                plan.skip_http = skip_http;
            }
        }
        Ok(plan)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.http_config().validate()
    }
}
