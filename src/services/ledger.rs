//! Balance and report aggregation over a user's work days and payments.
//!
//! Everything here is pure: callers hand in a consistent snapshot of records
//! and get derived figures back. Missing salary or bonus values count as zero.

use bigdecimal::{BigDecimal, RoundingMode};
use chrono::{Datelike, Days, Month, NaiveDate};

use crate::database::models::{
    AnnualReport, MonthlyDetailedReport, MonthlyReport, SalaryPayment, Statistics, WorkDay,
};
use crate::error::AppError;

fn zero() -> BigDecimal {
    BigDecimal::from(0)
}

fn amount(value: &Option<BigDecimal>) -> BigDecimal {
    value.clone().unwrap_or_else(zero)
}

fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

fn same_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}

pub fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|month| Month::try_from(month).ok())
        .map(|month| month.name().to_string())
        .unwrap_or_default()
}

#[derive(Debug, Default)]
struct MonthTotals {
    days_count: usize,
    total_salary: BigDecimal,
    total_bonus: BigDecimal,
}

impl MonthTotals {
    fn of<'a>(days: impl IntoIterator<Item = &'a WorkDay>) -> Self {
        let mut totals = Self::default();
        for day in days {
            totals.add(day);
        }
        totals
    }

    fn add(&mut self, day: &WorkDay) {
        self.days_count += 1;
        self.total_salary += amount(&day.salary);
        self.total_bonus += amount(&day.bonus);
    }

    fn total_income(&self) -> BigDecimal {
        &self.total_salary + &self.total_bonus
    }
}

/// Salary position for the month containing `reference_date`.
///
/// Salary owed before that month, less what was paid before it, is carried
/// in as debt (never below zero). Bonuses are reported but never owed.
pub fn statistics(
    work_days: &[WorkDay],
    payments: &[SalaryPayment],
    reference_date: NaiveDate,
) -> Statistics {
    let month_start = first_day_of_month(reference_date);

    let mut prior_salary = zero();
    let mut current = MonthTotals::default();
    for day in work_days {
        if day.work_date < month_start {
            prior_salary += amount(&day.salary);
        } else if same_month(day.work_date, reference_date) {
            current.add(day);
        }
    }

    let mut prior_paid = zero();
    let mut current_paid = zero();
    for payment in payments {
        let paid_on = payment.payment_date();
        if paid_on < month_start {
            prior_paid += &payment.amount;
        } else if same_month(paid_on, reference_date) {
            current_paid += &payment.amount;
        }
    }

    let carried_debt = std::cmp::max(prior_salary - prior_paid, zero());
    let total_earned = current.total_income();
    let salary_balance = &current.total_salary + &carried_debt - &current_paid;

    Statistics {
        days_count: current.days_count,
        total_earned,
        total_salary: current.total_salary,
        total_bonus: current.total_bonus,
        total_paid: current_paid,
        carried_debt,
        salary_balance,
    }
}

/// One entry per calendar month of `year`, January first, empty months included
pub fn monthly_report(work_days: &[WorkDay], year: i32) -> Vec<MonthlyReport> {
    let mut months: [MonthTotals; 12] = Default::default();
    for day in work_days.iter().filter(|day| day.work_date.year() == year) {
        months[day.work_date.month0() as usize].add(day);
    }

    months
        .into_iter()
        .zip(1u32..)
        .map(|(totals, month)| MonthlyReport {
            month,
            month_name: month_name(month),
            year,
            days_count: totals.days_count,
            total_income: totals.total_income(),
            total_salary: totals.total_salary,
            total_bonus: totals.total_bonus,
        })
        .collect()
}

/// Year totals. The monthly average only counts months that have work days
/// and is rounded half-up to cents.
pub fn annual_report(year: i32, monthly_reports: Vec<MonthlyReport>) -> AnnualReport {
    let mut total_days = 0;
    let mut total_salary = zero();
    let mut total_bonus = zero();
    let mut total_income = zero();
    let mut months_with_data = 0u32;

    for month in &monthly_reports {
        total_days += month.days_count;
        total_salary += &month.total_salary;
        total_bonus += &month.total_bonus;
        total_income += &month.total_income;
        if month.days_count > 0 {
            months_with_data += 1;
        }
    }

    let average_monthly_income = if months_with_data > 0 {
        (&total_income / &BigDecimal::from(months_with_data))
            .with_scale_round(2, RoundingMode::HalfUp)
    } else {
        zero().with_scale(2)
    };

    AnnualReport {
        year,
        total_days,
        total_salary,
        total_bonus,
        total_income,
        average_monthly_income,
        monthly_reports,
    }
}

pub fn ensure_valid_month(month: u32) -> Result<(), AppError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Month must be between 1 and 12, got {}",
            month
        )))
    }
}

/// Totals and the date-ordered work days of one month
pub fn monthly_detailed_report(
    work_days: &[WorkDay],
    year: i32,
    month: u32,
) -> Result<MonthlyDetailedReport, AppError> {
    ensure_valid_month(month)?;

    let mut month_days: Vec<WorkDay> = work_days
        .iter()
        .filter(|day| day.work_date.year() == year && day.work_date.month() == month)
        .cloned()
        .collect();
    month_days.sort_by_key(|day| day.work_date);

    let totals = MonthTotals::of(&month_days);

    Ok(MonthlyDetailedReport {
        year,
        month,
        month_name: month_name(month),
        days_count: totals.days_count,
        total_income: totals.total_income(),
        total_salary: totals.total_salary,
        total_bonus: totals.total_bonus,
        work_days: month_days,
    })
}
