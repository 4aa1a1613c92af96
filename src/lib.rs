pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::HttpConfig;
pub use core::arith::simple_add;
pub use core::demo::{DemoPlan, DemoReport, DemoRunner};
pub use core::http::{http_request, HttpClient, HttpMethod};
pub use core::legs::{execute_credit_leg, execute_debit_leg, ConsoleLegExecutor};
pub use domain::model::{AccountId, Amount, LegKind, LegReceipt};
pub use utils::error::{Result, TxError};
