use crate::config::toml_config::TomlConfig;
use crate::config::HttpConfig;
use crate::core::demo::DemoPlan;
use crate::core::{AccountId, Amount};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_header, validate_range, validate_url, Validate};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "transaction-legs")]
#[command(about = "Execute credit/debit legs and JSON HTTP requests", version)]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,

    /// Override the HTTP endpoint used by `request` and `demo`
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Credit an amount to an account
    Credit { amount: Amount, account: AccountId },

    /// Debit an amount from an account
    Debit { amount: Amount, account: AccountId },

    /// Add two numbers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: Decimal,
        #[arg(allow_negative_numbers = true)]
        b: Decimal,
    },

    /// Send a JSON request and print the decoded response
    Request {
        /// Target URL; defaults to the configured endpoint
        url: Option<String>,

        /// GET, POST or PUT (case-insensitive)
        #[arg(short = 'X', long, default_value = "GET")]
        method: String,

        /// JSON body for POST and PUT
        #[arg(short = 'd', long)]
        payload: Option<String>,

        /// Header as NAME=VALUE; when given, replaces the default headers
        #[arg(short = 'H', long = "header", value_parser = parse_header)]
        headers: Vec<(String, String)>,
    },

    /// Run the credit/debit/add/GET demonstration
    Demo {
        #[arg(long)]
        credit_amount: Option<Amount>,
        #[arg(long)]
        credit_account: Option<AccountId>,
        #[arg(long)]
        debit_amount: Option<Amount>,
        #[arg(long)]
        debit_account: Option<AccountId>,
        #[arg(long, help = "Skip the HTTP request")]
        skip_http: bool,
    },
}

fn parse_header(raw: &str) -> std::result::Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("header name is empty in '{}'", raw));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

impl CliConfig {
    /// Reads `--config` once; callers pass the result to the resolvers below.
    pub fn load_file(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// HTTP settings: defaults, then the config file, then command-line flags.
    pub fn http_config(&self, file: &TomlConfig) -> Result<HttpConfig> {
        let mut config = file.http_config();
        if let Some(endpoint) = &self.endpoint {
            config.api_endpoint = endpoint.clone();
        }
        if self.timeout_seconds.is_some() {
            config.timeout_seconds = self.timeout_seconds;
        }
        config.validate()?;
        Ok(config)
    }

    /// Demonstration plan with the same layering as [`CliConfig::http_config`].
    pub fn demo_plan(&self, file: &TomlConfig) -> Result<DemoPlan> {
        let mut plan = file.demo_plan()?;
        if let Some(endpoint) = &self.endpoint {
            plan.endpoint = endpoint.clone();
        }

        if let Command::Demo {
            credit_amount,
            credit_account,
            debit_amount,
            debit_account,
            skip_http,
        } = &self.command
        {
            if let Some(amount) = credit_amount {
                plan.credit_amount = *amount;
            }
            if let Some(account) = credit_account {
                plan.credit_account = account.clone();
            }
            if let Some(amount) = debit_amount {
                plan.debit_amount = *amount;
            }
            if let Some(account) = debit_account {
                plan.debit_account = account.clone();
            }
            plan.skip_http |= *skip_http;
        }
        Ok(plan)
    }

    /// Headers given with `-H`, or `None` to fall back to the defaults.
    pub fn request_headers(&self) -> Option<HashMap<String, String>> {
        match &self.command {
            Command::Request { headers, .. } if !headers.is_empty() => {
                Some(headers.iter().cloned().collect())
            }
            _ => None,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.endpoint {
            validate_url("endpoint", endpoint)?;
        }
        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, crate::config::MAX_TIMEOUT_SECONDS)?;
        }
        if let Command::Request { url, headers, .. } = &self.command {
            if let Some(url) = url {
                validate_url("url", url)?;
            }
            for (name, value) in headers {
                validate_header("header", name, value)?;
            }
        }
        Ok(())
    }
}
