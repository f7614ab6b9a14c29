use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A one-off bonus, kept apart from the per-day bonus of a work day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Bonus {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: BigDecimal, // NUMERIC(12,2), always > 0
    pub bonus_date: NaiveDate,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Bonus {
    pub fn new(
        user_id: Uuid,
        amount: BigDecimal,
        bonus_date: NaiveDate,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            amount,
            bonus_date,
            description,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBonusInput {
    pub amount: Option<BigDecimal>,
    pub description: Option<String>,
    /// Defaults to today
    pub bonus_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BonusStatistics {
    pub total_bonus: BigDecimal,
    pub total_bonuses: i64,
}
