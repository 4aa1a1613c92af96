use crate::core::arith::simple_add;
use crate::core::http::{HttpClient, HttpMethod};
use crate::core::{AccountId, Amount, LegExecutor, LegReceipt};
use crate::utils::error::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use std::fmt;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

#[derive(Debug, Clone)]
pub struct DemoPlan {
    pub credit_amount: Amount,
    pub credit_account: AccountId,
    pub debit_amount: Amount,
    pub debit_account: AccountId,
    pub addends: (Decimal, Decimal),
    pub endpoint: String,
    pub skip_http: bool,
}

impl DemoPlan {
    /// Credit 100 to `account1`, debit 50 from `account2`, add 10 and 20,
    /// then GET the public posts endpoint.
    pub fn standard() -> Result<Self> {
        Ok(Self {
            credit_amount: Amount::new(dec!(100))?,
            credit_account: AccountId::new("account1")?,
            debit_amount: Amount::new(dec!(50))?,
            debit_account: AccountId::new("account2")?,
            addends: (dec!(10), dec!(20)),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            skip_http: false,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DemoReport {
    pub credit: LegReceipt,
    pub debit: LegReceipt,
    pub sum: Decimal,
    pub response: Option<Value>,
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Result of simple_add: {}", self.sum.normalize())?;
        if let Some(response) = &self.response {
            write!(f, "\nHTTP Response: {}", response)?;
        }
        Ok(())
    }
}

pub struct DemoRunner<E: LegExecutor> {
    executor: E,
    client: HttpClient,
    plan: DemoPlan,
}

impl<E: LegExecutor> DemoRunner<E> {
    pub fn new(executor: E, client: HttpClient, plan: DemoPlan) -> Self {
        Self {
            executor,
            client,
            plan,
        }
    }

    pub fn into_executor(self) -> E {
        self.executor
    }

    pub async fn run(&self) -> Result<DemoReport> {
        tracing::info!("🚀 Starting demonstration run");

        let credit = self
            .executor
            .credit(self.plan.credit_amount, &self.plan.credit_account)
            .await?;
        let debit = self
            .executor
            .debit(self.plan.debit_amount, &self.plan.debit_account)
            .await?;

        let (a, b) = self.plan.addends;
        let sum = simple_add(a, b);
        tracing::debug!("simple_add({}, {}) = {}", a, b, sum);

        let response = if self.plan.skip_http {
            tracing::info!("⏭️ Skipping HTTP request");
            None
        } else {
            Some(
                self.client
                    .request(&self.plan.endpoint, HttpMethod::Get, None, None)
                    .await?,
            )
        };

        tracing::info!("✅ Demonstration run completed");
        Ok(DemoReport {
            credit,
            debit,
            sum,
            response,
        })
    }
}
