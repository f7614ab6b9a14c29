use bigdecimal::BigDecimal;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{models::User, utils::sql};

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_user(&self, user: &User) -> Result<User, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(&sql(r#"
            INSERT INTO
                users (
                    id,
                    username,
                    password_hash,
                    additional_earnings,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                username,
                password_hash,
                additional_earnings,
                created_at,
                updated_at
        "#))
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.additional_earnings)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(&sql(r#"
            SELECT
                id,
                username,
                password_hash,
                additional_earnings,
                created_at,
                updated_at
            FROM
                users
            WHERE
                id = ?
        "#))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(&sql(r#"
            SELECT
                id,
                username,
                password_hash,
                additional_earnings,
                created_at,
                updated_at
            FROM
                users
            WHERE
                username = ?
        "#))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(&sql(r#"
            SELECT
                COUNT(*)
            FROM
                users
            WHERE
                username = ?
        "#))
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Adds to the earnings accumulator in a single statement and returns the new total
    pub async fn add_additional_earnings(
        &self,
        id: Uuid,
        amount: &BigDecimal,
    ) -> Result<Option<BigDecimal>, sqlx::Error> {
        let total: Option<BigDecimal> = sqlx::query_scalar(&sql(r#"
            UPDATE users
            SET
                additional_earnings = additional_earnings + ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING
                additional_earnings
        "#))
        .bind(amount)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(total)
    }
}
