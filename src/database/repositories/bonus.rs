use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{
    models::{Bonus, BonusStatistics},
    utils::sql,
};

#[derive(Clone)]
pub struct BonusRepository {
    pool: PgPool,
}

impl BonusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_bonus(&self, bonus: &Bonus) -> Result<Bonus, sqlx::Error> {
        let bonus = sqlx::query_as::<_, Bonus>(&sql(r#"
            INSERT INTO
                bonuses (
                    id,
                    user_id,
                    amount,
                    bonus_date,
                    description,
                    created_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                user_id,
                amount,
                bonus_date,
                description,
                created_at
        "#))
        .bind(bonus.id)
        .bind(bonus.user_id)
        .bind(&bonus.amount)
        .bind(bonus.bonus_date)
        .bind(&bonus.description)
        .bind(bonus.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(bonus)
    }

    /// All bonuses of a user, newest first
    pub async fn find_bonuses_by_user(&self, user_id: Uuid) -> Result<Vec<Bonus>, sqlx::Error> {
        let bonuses = sqlx::query_as::<_, Bonus>(&sql(r#"
            SELECT
                id,
                user_id,
                amount,
                bonus_date,
                description,
                created_at
            FROM
                bonuses
            WHERE
                user_id = ?
            ORDER BY
                bonus_date DESC,
                created_at DESC
        "#))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bonuses)
    }

    pub async fn bonus_statistics(&self, user_id: Uuid) -> Result<BonusStatistics, sqlx::Error> {
        let statistics = sqlx::query_as::<_, BonusStatistics>(&sql(r#"
            SELECT
                COALESCE(SUM(amount), 0) AS total_bonus,
                COUNT(*) AS total_bonuses
            FROM
                bonuses
            WHERE
                user_id = ?
        "#))
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(statistics)
    }

    /// Returns false when nothing was deleted
    pub async fn delete_bonus(&self, user_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(&sql(r#"
            DELETE FROM bonuses
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
