use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{models::SalaryPayment, utils::sql};

#[derive(Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_payment(&self, payment: &SalaryPayment) -> Result<SalaryPayment, sqlx::Error> {
        let payment = sqlx::query_as::<_, SalaryPayment>(&sql(r#"
            INSERT INTO
                salary_payments (
                    id,
                    user_id,
                    amount,
                    paid_at,
                    description,
                    created_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                user_id,
                amount,
                paid_at,
                description,
                created_at
        "#))
        .bind(payment.id)
        .bind(payment.user_id)
        .bind(&payment.amount)
        .bind(payment.paid_at)
        .bind(&payment.description)
        .bind(payment.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(payment)
    }

    /// All payments of a user, newest first
    pub async fn find_payments_by_user(&self, user_id: Uuid) -> Result<Vec<SalaryPayment>, sqlx::Error> {
        let payments = sqlx::query_as::<_, SalaryPayment>(&sql(r#"
            SELECT
                id,
                user_id,
                amount,
                paid_at,
                description,
                created_at
            FROM
                salary_payments
            WHERE
                user_id = ?
            ORDER BY
                paid_at DESC
        "#))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    /// Payments whose UTC date falls in `[start, end]`, newest first. A missing
    /// bound leaves that side of the range open.
    pub async fn find_payments_by_user_in_range(
        &self,
        user_id: Uuid,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<SalaryPayment>, sqlx::Error> {
        let from = start.map(|date| date.and_time(NaiveTime::MIN).and_utc());
        // exclusive upper bound
        let until = end
            .and_then(|date| date.succ_opt())
            .map(|next_day| next_day.and_time(NaiveTime::MIN).and_utc());

        let payments = sqlx::query_as::<_, SalaryPayment>(&sql(r#"
            SELECT
                id,
                user_id,
                amount,
                paid_at,
                description,
                created_at
            FROM
                salary_payments
            WHERE
                user_id = ?
                AND (?::timestamptz IS NULL OR paid_at >= ?::timestamptz)
                AND (?::timestamptz IS NULL OR paid_at < ?::timestamptz)
            ORDER BY
                paid_at DESC
        "#))
        .bind(user_id)
        .bind(from)
        .bind(from)
        .bind(until)
        .bind(until)
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    pub async fn count_payments_by_user(&self, user_id: Uuid) -> Result<i64, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(&sql(r#"
            SELECT
                COUNT(*)
            FROM
                salary_payments
            WHERE
                user_id = ?
        "#))
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Returns false when nothing was deleted
    pub async fn delete_payment(&self, user_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(&sql(r#"
            DELETE FROM salary_payments
            WHERE
                id = ?
                AND user_id = ?
        "#))
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
