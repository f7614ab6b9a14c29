use bigdecimal::BigDecimal;
use chrono::{NaiveDate, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::database::{
    models::{WorkDay, WorkDayEntry, WorkDayValues},
    utils::sql,
};

#[derive(Clone)]
pub struct WorkDayRepository {
    pool: PgPool,
}

impl WorkDayRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// All work days of a user, newest first
    pub async fn find_work_days_by_user(&self, user_id: Uuid) -> Result<Vec<WorkDay>, sqlx::Error> {
        let work_days = sqlx::query_as::<_, WorkDay>(&sql(r#"
            SELECT
                id,
                user_id,
                work_date,
                description,
                salary,
                bonus,
                created_at,
                updated_at
            FROM
                work_days
            WHERE
                user_id = ?
            ORDER BY
                work_date DESC
        "#))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(work_days)
    }

    pub async fn find_by_id(&self, user_id: Uuid, id: Uuid) -> Result<Option<WorkDay>, sqlx::Error> {
        let work_day = sqlx::query_as::<_, WorkDay>(&sql(r#"
            SELECT
                id,
                user_id,
                work_date,
                description,
                salary,
                bonus,
                created_at,
                updated_at
            FROM
                work_days
            WHERE
                id = ?
                AND user_id = ?
        "#))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(work_day)
    }

    pub async fn find_by_date(
        &self,
        user_id: Uuid,
        work_date: NaiveDate,
    ) -> Result<Option<WorkDay>, sqlx::Error> {
        let work_day = sqlx::query_as::<_, WorkDay>(&sql(r#"
            SELECT
                id,
                user_id,
                work_date,
                description,
                salary,
                bonus,
                created_at,
                updated_at
            FROM
                work_days
            WHERE
                user_id = ?
                AND work_date = ?
        "#))
        .bind(user_id)
        .bind(work_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(work_day)
    }

    /// Returns `None` when the day does not exist or belongs to someone else
    pub async fn update_work_day(
        &self,
        user_id: Uuid,
        id: Uuid,
        work_date: NaiveDate,
        values: &WorkDayValues,
    ) -> Result<Option<WorkDay>, sqlx::Error> {
        let work_day = sqlx::query_as::<_, WorkDay>(&sql(r#"
            UPDATE work_days
            SET
                work_date = ?,
                description = ?,
                salary = ?,
                bonus = ?,
                updated_at = ?
            WHERE
                id = ?
                AND user_id = ?
            RETURNING
                id,
                user_id,
                work_date,
                description,
                salary,
                bonus,
                created_at,
                updated_at
        "#))
        .bind(work_date)
        .bind(&values.description)
        .bind(&values.salary)
        .bind(&values.bonus)
        .bind(Utc::now())
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(work_day)
    }

    /// Returns false when nothing was deleted
    pub async fn delete_work_day(&self, user_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(&sql(r#"
            DELETE FROM work_days
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

/// Find-or-insert keyed by (user, date). A new day gets the entry's initial
/// values; an existing day is locked and the entry is merged into it.
pub async fn find_or_insert_work_day(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    work_date: NaiveDate,
    entry: &WorkDayEntry,
    default_salary: &BigDecimal,
) -> Result<WorkDay, sqlx::Error> {
    let now = Utc::now();
    let initial = entry.initial_values(default_salary);

    let inserted = sqlx::query_as::<_, WorkDay>(&sql(r#"
        INSERT INTO
            work_days (
                id,
                user_id,
                work_date,
                description,
                salary,
                bonus,
                created_at,
                updated_at
            )
        VALUES
            (?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT (user_id, work_date) DO NOTHING
        RETURNING
            id,
            user_id,
            work_date,
            description,
            salary,
            bonus,
            created_at,
            updated_at
    "#))
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(work_date)
    .bind(&initial.description)
    .bind(&initial.salary)
    .bind(&initial.bonus)
    .bind(now)
    .bind(now)
    .fetch_optional(&mut **tx)
    .await?;

    if let Some(work_day) = inserted {
        log::debug!("Created work day {} for user {}", work_date, user_id);
        return Ok(work_day);
    }

    let existing = sqlx::query_as::<_, WorkDay>(&sql(r#"
        SELECT
            id,
            user_id,
            work_date,
            description,
            salary,
            bonus,
            created_at,
            updated_at
        FROM
            work_days
        WHERE
            user_id = ?
            AND work_date = ?
        FOR UPDATE
    "#))
    .bind(user_id)
    .bind(work_date)
    .fetch_one(&mut **tx)
    .await?;

    let merged = entry.merge(&existing);

    let work_day = sqlx::query_as::<_, WorkDay>(&sql(r#"
        UPDATE work_days
        SET
            description = ?,
            salary = ?,
            bonus = ?,
            updated_at = ?
        WHERE
            id = ?
        RETURNING
            id,
            user_id,
            work_date,
            description,
            salary,
            bonus,
            created_at,
            updated_at
    "#))
    .bind(&merged.description)
    .bind(&merged.salary)
    .bind(&merged.bonus)
    .bind(now)
    .bind(existing.id)
    .fetch_one(&mut **tx)
    .await?;

    log::debug!("Updated work day {} for user {}", work_date, user_id);

    Ok(work_day)
}
