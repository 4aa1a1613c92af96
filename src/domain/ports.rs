use crate::domain::model::{AccountId, Amount, LegReceipt};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

pub trait HttpSettings: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
    fn default_headers(&self) -> HashMap<String, String>;
}

#[async_trait]
pub trait LegExecutor: Send + Sync {
    async fn credit(&self, amount: Amount, account: &AccountId) -> Result<LegReceipt>;
    async fn debit(&self, amount: Amount, account: &AccountId) -> Result<LegReceipt>;
}
