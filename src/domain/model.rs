use crate::utils::error::{Result, TxError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Non-negative money amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(TxError::ValidationError {
                message: format!("Amount must not be negative, got {}", value),
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = TxError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = TxError;

    fn from_str(s: &str) -> Result<Self> {
        let value = Decimal::from_str(s.trim()).map_err(|e| TxError::ValidationError {
            message: format!("Invalid amount '{}': {}", s, e),
        })?;
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Opaque account label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    pub fn new(label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(TxError::ValidationError {
                message: "Account label cannot be empty".to_string(),
            });
        }
        Ok(Self(label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountId {
    type Error = TxError;

    fn try_from(label: String) -> Result<Self> {
        Self::new(label)
    }
}

impl From<AccountId> for String {
    fn from(account: AccountId) -> Self {
        account.0
    }
}

impl FromStr for AccountId {
    type Err = TxError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegKind {
    Credit,
    Debit,
}

/// Record of one executed leg. `Display` renders the operator-facing line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegReceipt {
    pub kind: LegKind,
    pub amount: Amount,
    pub account: AccountId,
    pub executed_at: DateTime<Utc>,
}

impl fmt::Display for LegReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LegKind::Credit => write!(f, "Crediting {} to account {}", self.amount, self.account),
            LegKind::Debit => write!(f, "Debiting {} from account {}", self.amount, self.account),
        }
    }
}
