use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SalaryPayment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: BigDecimal,     // NUMERIC(12,2), always > 0
    pub paid_at: DateTime<Utc>, // TIMESTAMPTZ
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SalaryPayment {
    pub fn new(
        user_id: Uuid,
        amount: BigDecimal,
        paid_at: DateTime<Utc>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            amount,
            paid_at,
            description,
            created_at: Utc::now(),
        }
    }

    /// Calendar date the payment counts towards
    pub fn payment_date(&self) -> NaiveDate {
        self.paid_at.date_naive()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentInput {
    pub amount: Option<BigDecimal>,
    pub description: Option<String>,
    /// Defaults to the time the payment is recorded
    pub paid_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRangeQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub payment: SalaryPayment,
    pub current_balance: BigDecimal,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatistics {
    pub total_earned: BigDecimal,
    pub total_paid: BigDecimal,
    pub current_balance: BigDecimal,
    pub total_payments: i64,
}
