use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::work_day::WorkDay;

/// Current-month salary position of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub days_count: usize,
    pub total_earned: BigDecimal,
    pub total_salary: BigDecimal,
    pub total_bonus: BigDecimal,
    pub total_paid: BigDecimal,
    pub carried_debt: BigDecimal,
    pub salary_balance: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub month: u32,
    pub month_name: String,
    pub year: i32,
    pub days_count: usize,
    pub total_salary: BigDecimal,
    pub total_bonus: BigDecimal,
    pub total_income: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualReport {
    pub year: i32,
    pub total_days: usize,
    pub total_salary: BigDecimal,
    pub total_bonus: BigDecimal,
    pub total_income: BigDecimal,
    pub average_monthly_income: BigDecimal,
    pub monthly_reports: Vec<MonthlyReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyDetailedReport {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub days_count: usize,
    pub total_salary: BigDecimal,
    pub total_bonus: BigDecimal,
    pub total_income: BigDecimal,
    pub work_days: Vec<WorkDay>,
}

/// Outstanding salary as of a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryBalance {
    pub as_of: NaiveDate,
    pub salary_balance: BigDecimal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsQuery {
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}
