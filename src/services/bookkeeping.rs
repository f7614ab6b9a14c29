use bigdecimal::BigDecimal;
use chrono::{Datelike, NaiveDate, Utc};
use std::sync::LazyLock;
use uuid::Uuid;

use crate::database::models::{
    AdditionalEarnings, AnnualReport, Bonus, BonusEntryInput, BonusStatistics, CreateBonusInput,
    CreatePaymentInput, MonthlyDetailedReport, MonthlyReport, PaymentResponse, PaymentStatistics,
    SalaryBalance, SalaryEntryInput, SalaryPayment, Statistics, UpdateWorkDayInput, User, WorkDay,
    WorkDayEntry, WorkDayInput,
};
use crate::database::repositories::{
    BonusRepository, PaymentRepository, UserRepository, WorkDayRepository,
    work_day::find_or_insert_work_day,
};
use crate::database::transaction::DatabaseTransaction;
use crate::error::{AppError, is_numeric_overflow, is_unique_violation};
use crate::services::ledger;

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Decimal places a money column keeps
pub const MONEY_SCALE: i64 = 2;

/// Magnitude a `NUMERIC(12, 2)` column can no longer hold
static MONEY_LIMIT: LazyLock<BigDecimal> = LazyLock::new(|| BigDecimal::from(10_000_000_000_i64));

/// Amount must be stored exactly: whole cents, below the column limit
pub fn ensure_storable(field: &str, amount: &BigDecimal) -> Result<(), AppError> {
    if amount.normalized().fractional_digit_count() > MONEY_SCALE {
        return Err(AppError::InvalidAmount(format!(
            "{} must not have more than {} decimal places",
            field, MONEY_SCALE
        )));
    }

    if amount.abs() >= *MONEY_LIMIT {
        return Err(AppError::InvalidAmount(format!(
            "{} must be less than {}",
            field, *MONEY_LIMIT
        )));
    }

    Ok(())
}

/// Optional money field that must not be negative when present
pub fn ensure_non_negative(field: &str, value: Option<&BigDecimal>) -> Result<(), AppError> {
    match value {
        Some(amount) if *amount < BigDecimal::from(0) => Err(AppError::InvalidAmount(format!(
            "{} must not be negative",
            field
        ))),
        Some(amount) => ensure_storable(field, amount),
        None => Ok(()),
    }
}

/// Required money field, zero allowed
pub fn require_non_negative(field: &str, value: Option<BigDecimal>) -> Result<BigDecimal, AppError> {
    let amount =
        value.ok_or_else(|| AppError::InvalidAmount(format!("{} is required", field)))?;
    ensure_non_negative(field, Some(&amount))?;
    Ok(amount)
}

/// Required money field, strictly greater than zero
pub fn require_positive(field: &str, value: Option<BigDecimal>) -> Result<BigDecimal, AppError> {
    match value {
        Some(amount) if amount > BigDecimal::from(0) => {
            ensure_storable(field, &amount)?;
            Ok(amount)
        }
        Some(_) => Err(AppError::InvalidAmount(format!(
            "{} must be greater than zero",
            field
        ))),
        None => Err(AppError::InvalidAmount(format!("{} is required", field))),
    }
}

/// Work days, salary payments, one-off bonuses and the reports derived from
/// them, always scoped to one user.
#[derive(Clone)]
pub struct BookkeepingService {
    user_repository: UserRepository,
    work_day_repository: WorkDayRepository,
    payment_repository: PaymentRepository,
    bonus_repository: BonusRepository,
    default_salary: BigDecimal,
}

impl BookkeepingService {
    pub fn new(
        user_repository: UserRepository,
        work_day_repository: WorkDayRepository,
        payment_repository: PaymentRepository,
        bonus_repository: BonusRepository,
        default_salary: BigDecimal,
    ) -> Self {
        Self {
            user_repository,
            work_day_repository,
            payment_repository,
            bonus_repository,
            default_salary,
        }
    }

    async fn require_user(&self, user_id: Uuid) -> Result<User, AppError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                log::warn!("No user row for authenticated id {}", user_id);
                AppError::UserNotFound
            })
    }

    async fn load_records(
        &self,
        user_id: Uuid,
    ) -> Result<(Vec<WorkDay>, Vec<SalaryPayment>), AppError> {
        let work_days = self
            .work_day_repository
            .find_work_days_by_user(user_id)
            .await?;
        let payments = self.payment_repository.find_payments_by_user(user_id).await?;

        Ok((work_days, payments))
    }

    // Reports

    pub async fn statistics(
        &self,
        user_id: Uuid,
        as_of: Option<NaiveDate>,
    ) -> Result<Statistics, AppError> {
        self.require_user(user_id).await?;

        let (work_days, payments) = self.load_records(user_id).await?;
        let reference_date = as_of.unwrap_or_else(today);

        Ok(ledger::statistics(&work_days, &payments, reference_date))
    }

    pub async fn salary_balance(
        &self,
        user_id: Uuid,
        as_of: Option<NaiveDate>,
    ) -> Result<SalaryBalance, AppError> {
        let as_of = as_of.unwrap_or_else(today);
        let statistics = self.statistics(user_id, Some(as_of)).await?;

        Ok(SalaryBalance {
            as_of,
            salary_balance: statistics.salary_balance,
        })
    }

    pub async fn monthly_report(
        &self,
        user_id: Uuid,
        year: Option<i32>,
    ) -> Result<Vec<MonthlyReport>, AppError> {
        self.require_user(user_id).await?;

        let work_days = self
            .work_day_repository
            .find_work_days_by_user(user_id)
            .await?;

        Ok(ledger::monthly_report(
            &work_days,
            year.unwrap_or_else(|| today().year()),
        ))
    }

    pub async fn annual_report(
        &self,
        user_id: Uuid,
        year: Option<i32>,
    ) -> Result<AnnualReport, AppError> {
        let year = year.unwrap_or_else(|| today().year());
        let monthly = self.monthly_report(user_id, Some(year)).await?;

        Ok(ledger::annual_report(year, monthly))
    }

    pub async fn monthly_detailed_report(
        &self,
        user_id: Uuid,
        year: Option<i32>,
        month: Option<u32>,
    ) -> Result<MonthlyDetailedReport, AppError> {
        let now = today();
        let year = year.unwrap_or(now.year());
        let month = month.unwrap_or(now.month());
        ledger::ensure_valid_month(month)?;

        self.require_user(user_id).await?;

        let work_days = self
            .work_day_repository
            .find_work_days_by_user(user_id)
            .await?;

        ledger::monthly_detailed_report(&work_days, year, month)
    }

    // Work days

    pub async fn list_work_days(&self, user_id: Uuid) -> Result<Vec<WorkDay>, AppError> {
        self.require_user(user_id).await?;

        Ok(self
            .work_day_repository
            .find_work_days_by_user(user_id)
            .await?)
    }

    pub async fn work_day_by_date(
        &self,
        user_id: Uuid,
        work_date: NaiveDate,
    ) -> Result<WorkDay, AppError> {
        self.require_user(user_id).await?;

        self.work_day_repository
            .find_by_date(user_id, work_date)
            .await?
            .ok_or_else(|| AppError::RecordNotFound(format!("Work day for {}", work_date)))
    }

    pub async fn record_work_day(
        &self,
        user_id: Uuid,
        input: WorkDayInput,
    ) -> Result<WorkDay, AppError> {
        ensure_non_negative("salary", input.salary.as_ref())?;
        ensure_non_negative("bonus", input.bonus.as_ref())?;

        let entry = WorkDayEntry::Full {
            description: input.description,
            salary: input.salary,
            bonus: input.bonus,
        };

        self.record_entry(user_id, input.work_date, entry).await
    }

    pub async fn record_salary(
        &self,
        user_id: Uuid,
        input: SalaryEntryInput,
    ) -> Result<WorkDay, AppError> {
        let salary = require_non_negative("salary", input.salary)?;

        let entry = WorkDayEntry::Salary {
            description: input.description,
            salary,
        };

        self.record_entry(user_id, input.work_date, entry).await
    }

    pub async fn record_bonus(
        &self,
        user_id: Uuid,
        input: BonusEntryInput,
    ) -> Result<WorkDay, AppError> {
        let bonus = require_non_negative("bonus", input.bonus)?;

        let entry = WorkDayEntry::Bonus {
            description: input.description,
            bonus,
        };

        self.record_entry(user_id, input.work_date, entry).await
    }

    async fn record_entry(
        &self,
        user_id: Uuid,
        work_date: NaiveDate,
        entry: WorkDayEntry,
    ) -> Result<WorkDay, AppError> {
        self.require_user(user_id).await?;

        let default_salary = self.default_salary.clone();
        let work_day = DatabaseTransaction::run(self.work_day_repository.pool(), move |tx| {
            Box::pin(async move {
                let work_day =
                    find_or_insert_work_day(tx, user_id, work_date, &entry, &default_salary)
                        .await?;
                Ok(work_day)
            })
        })
        .await?;

        log::info!("Recorded work day {} for user {}", work_date, user_id);

        Ok(work_day)
    }

    pub async fn update_work_day(
        &self,
        user_id: Uuid,
        id: Uuid,
        input: UpdateWorkDayInput,
    ) -> Result<WorkDay, AppError> {
        ensure_non_negative("salary", input.salary.as_ref())?;
        ensure_non_negative("bonus", input.bonus.as_ref())?;

        self.require_user(user_id).await?;

        let not_found = || AppError::RecordNotFound(format!("Work day {}", id));
        let existing = self
            .work_day_repository
            .find_by_id(user_id, id)
            .await?
            .ok_or_else(not_found)?;

        let (work_date, values) = input.apply(&existing);

        let updated = self
            .work_day_repository
            .update_work_day(user_id, id, work_date, &values)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::DuplicateWorkDay(work_date)
                } else {
                    AppError::from(e)
                }
            })?
            .ok_or_else(not_found)?;

        log::info!("Updated work day {} for user {}", id, user_id);

        Ok(updated)
    }

    pub async fn delete_work_day(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        self.require_user(user_id).await?;

        if !self.work_day_repository.delete_work_day(user_id, id).await? {
            return Err(AppError::RecordNotFound(format!("Work day {}", id)));
        }

        log::info!("Deleted work day {} for user {}", id, user_id);

        Ok(())
    }

    // Payments

    pub async fn list_payments(
        &self,
        user_id: Uuid,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<SalaryPayment>, AppError> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(AppError::BadRequest(format!(
                    "Range start {} is after its end {}",
                    from, to
                )));
            }
        }

        self.require_user(user_id).await?;

        let payments = if from.is_none() && to.is_none() {
            self.payment_repository.find_payments_by_user(user_id).await?
        } else {
            self.payment_repository
                .find_payments_by_user_in_range(user_id, from, to)
                .await?
        };

        Ok(payments)
    }

    pub async fn add_payment(
        &self,
        user_id: Uuid,
        input: CreatePaymentInput,
    ) -> Result<PaymentResponse, AppError> {
        let amount = require_positive("amount", input.amount)?;

        self.require_user(user_id).await?;

        let payment = SalaryPayment::new(
            user_id,
            amount,
            input.paid_at.unwrap_or_else(Utc::now),
            input.description,
        );
        let payment = self.payment_repository.create_payment(&payment).await?;

        log::info!(
            "Recorded payment {} of {} for user {}",
            payment.id,
            payment.amount,
            user_id
        );

        let current_balance = self.salary_balance(user_id, None).await?.salary_balance;

        Ok(PaymentResponse {
            payment,
            current_balance,
        })
    }

    pub async fn delete_payment(&self, user_id: Uuid, id: Uuid) -> Result<SalaryBalance, AppError> {
        self.require_user(user_id).await?;

        if !self.payment_repository.delete_payment(user_id, id).await? {
            return Err(AppError::RecordNotFound(format!("Payment {}", id)));
        }

        log::info!("Deleted payment {} for user {}", id, user_id);

        self.salary_balance(user_id, None).await
    }

    pub async fn payment_statistics(&self, user_id: Uuid) -> Result<PaymentStatistics, AppError> {
        let statistics = self.statistics(user_id, None).await?;
        let total_payments = self
            .payment_repository
            .count_payments_by_user(user_id)
            .await?;

        Ok(PaymentStatistics {
            total_earned: statistics.total_earned,
            total_paid: statistics.total_paid,
            current_balance: statistics.salary_balance,
            total_payments,
        })
    }

    // Bonuses

    pub async fn list_bonuses(&self, user_id: Uuid) -> Result<Vec<Bonus>, AppError> {
        self.require_user(user_id).await?;

        Ok(self.bonus_repository.find_bonuses_by_user(user_id).await?)
    }

    pub async fn add_bonus(&self, user_id: Uuid, input: CreateBonusInput) -> Result<Bonus, AppError> {
        let amount = require_positive("amount", input.amount)?;

        self.require_user(user_id).await?;

        let bonus = Bonus::new(
            user_id,
            amount,
            input.bonus_date.unwrap_or_else(today),
            input.description,
        );
        let bonus = self.bonus_repository.create_bonus(&bonus).await?;

        log::info!(
            "Recorded bonus {} of {} for user {}",
            bonus.id,
            bonus.amount,
            user_id
        );

        Ok(bonus)
    }

    pub async fn delete_bonus(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        self.require_user(user_id).await?;

        if !self.bonus_repository.delete_bonus(user_id, id).await? {
            return Err(AppError::RecordNotFound(format!("Bonus {}", id)));
        }

        log::info!("Deleted bonus {} for user {}", id, user_id);

        Ok(())
    }

    pub async fn bonus_statistics(&self, user_id: Uuid) -> Result<BonusStatistics, AppError> {
        self.require_user(user_id).await?;

        Ok(self.bonus_repository.bonus_statistics(user_id).await?)
    }

    // Additional earnings

    pub async fn additional_earnings(&self, user_id: Uuid) -> Result<AdditionalEarnings, AppError> {
        let user = self.require_user(user_id).await?;

        Ok(AdditionalEarnings {
            additional_earnings: user.additional_earnings,
        })
    }

    pub async fn add_additional_earnings(
        &self,
        user_id: Uuid,
        amount: Option<BigDecimal>,
    ) -> Result<AdditionalEarnings, AppError> {
        let amount = require_positive("amount", amount)?;

        let additional_earnings = self
            .user_repository
            .add_additional_earnings(user_id, &amount)
            .await
            .map_err(|e| {
                if is_numeric_overflow(&e) {
                    AppError::InvalidAmount(format!(
                        "additional earnings total must stay below {}",
                        *MONEY_LIMIT
                    ))
                } else {
                    AppError::from(e)
                }
            })?
            .ok_or(AppError::UserNotFound)?;

        log::info!("Added {} to additional earnings of user {}", amount, user_id);

        Ok(AdditionalEarnings {
            additional_earnings,
        })
    }
}
