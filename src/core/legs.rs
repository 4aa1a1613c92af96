use crate::core::{AccountId, Amount, LegExecutor, LegKind, LegReceipt};
use crate::utils::error::{Result, TxError};
use async_trait::async_trait;
use chrono::Utc;
use std::io::Write;
use std::sync::Mutex;

fn execute_leg(kind: LegKind, amount: Amount, account: &AccountId) -> LegReceipt {
    let receipt = LegReceipt {
        kind,
        amount,
        account: account.clone(),
        executed_at: Utc::now(),
    };
    tracing::info!(kind = ?kind, amount = %amount, account = %account, "💸 {}", receipt);
    receipt
}

/// Credits `amount` to `account`. No balance is kept; the receipt is the
/// only effect.
pub fn execute_credit_leg(amount: Amount, account: &AccountId) -> LegReceipt {
    execute_leg(LegKind::Credit, amount, account)
}

/// Debits `amount` from `account`.
pub fn execute_debit_leg(amount: Amount, account: &AccountId) -> LegReceipt {
    execute_leg(LegKind::Debit, amount, account)
}

/// Writes one line per executed leg to the wrapped sink.
pub struct ConsoleLegExecutor<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleLegExecutor<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleLegExecutor<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.out
            .into_inner()
            .map_err(|_| TxError::IoError(std::io::Error::other("leg output lock poisoned")))
    }

    fn report(&self, receipt: &LegReceipt) -> Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| TxError::IoError(std::io::Error::other("leg output lock poisoned")))?;
        writeln!(out, "{}", receipt)?;
        out.flush()?;
        Ok(())
    }
}

#[async_trait]
impl<W: Write + Send> LegExecutor for ConsoleLegExecutor<W> {
    async fn credit(&self, amount: Amount, account: &AccountId) -> Result<LegReceipt> {
        let receipt = execute_credit_leg(amount, account);
        self.report(&receipt)?;
        Ok(receipt)
    }

    async fn debit(&self, amount: Amount, account: &AccountId) -> Result<LegReceipt> {
        let receipt = execute_debit_leg(amount, account);
        self.report(&receipt)?;
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_credit_leg_message() {
        let account = AccountId::new("account1").unwrap();
        let receipt = execute_credit_leg(Amount::new(dec!(100)).unwrap(), &account);
        assert_eq!(receipt.kind, LegKind::Credit);
        assert_eq!(receipt.to_string(), "Crediting 100 to account account1");
    }

    #[test]
    fn test_debit_leg_message() {
        let account = AccountId::new("account2").unwrap();
        let receipt = execute_debit_leg(Amount::new(dec!(50)).unwrap(), &account);
        assert_eq!(receipt.kind, LegKind::Debit);
        assert_eq!(receipt.to_string(), "Debiting 50 from account account2");
    }

    #[tokio::test]
    async fn test_console_executor_writes_one_line_per_leg() {
        let executor = ConsoleLegExecutor::new(Vec::new());
        let account = AccountId::new("acc-9").unwrap();

        executor
            .credit(Amount::new(dec!(12.5)).unwrap(), &account)
            .await
            .unwrap();
        executor
            .debit(Amount::new(dec!(0)).unwrap(), &account)
            .await
            .unwrap();

        let written = String::from_utf8(executor.into_inner().unwrap()).unwrap();
        assert_eq!(
            written,
            "Crediting 12.5 to account acc-9\nDebiting 0 from account acc-9\n"
        );
    }
}
