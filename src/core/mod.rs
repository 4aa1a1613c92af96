pub mod arith;
pub mod demo;
pub mod http;
pub mod legs;

pub use crate::domain::model::{AccountId, Amount, LegKind, LegReceipt};
pub use crate::domain::ports::{HttpSettings, LegExecutor};
pub use crate::utils::error::Result;
