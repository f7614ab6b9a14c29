use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_WORK_DAY_DESCRIPTION: &str = "Work day";
pub const DEFAULT_BONUS_DESCRIPTION: &str = "Additional income";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WorkDay {
    pub id: Uuid,
    pub user_id: Uuid,
    pub work_date: NaiveDate,
    pub description: Option<String>,
    pub salary: Option<BigDecimal>, // NUMERIC(12,2)
    pub bonus: Option<BigDecimal>,  // NUMERIC(12,2)
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mutable columns of a work day
#[derive(Debug, Clone, PartialEq)]
pub struct WorkDayValues {
    pub description: Option<String>,
    pub salary: Option<BigDecimal>,
    pub bonus: Option<BigDecimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDayInput {
    pub work_date: NaiveDate,
    pub description: Option<String>,
    pub salary: Option<BigDecimal>,
    pub bonus: Option<BigDecimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryEntryInput {
    pub work_date: NaiveDate,
    pub salary: Option<BigDecimal>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusEntryInput {
    pub work_date: NaiveDate,
    pub bonus: Option<BigDecimal>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkDayInput {
    pub work_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub salary: Option<BigDecimal>,
    pub bonus: Option<BigDecimal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDayDateQuery {
    pub date: NaiveDate,
}

/// One entry recorded against a date. Creates the day on first use and is
/// merged into the existing day afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkDayEntry {
    /// Salary and bonus together; either may be omitted
    Full {
        description: Option<String>,
        salary: Option<BigDecimal>,
        bonus: Option<BigDecimal>,
    },
    /// Salary only, bonus untouched
    Salary {
        description: Option<String>,
        salary: BigDecimal,
    },
    /// Bonus only, salary untouched
    Bonus {
        description: Option<String>,
        bonus: BigDecimal,
    },
}

fn non_blank(description: &Option<String>) -> Option<&str> {
    description
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

impl WorkDayEntry {
    /// Values for a day that does not exist yet
    pub fn initial_values(&self, default_salary: &BigDecimal) -> WorkDayValues {
        match self {
            WorkDayEntry::Full {
                description,
                salary,
                bonus,
            } => WorkDayValues {
                description: Some(
                    non_blank(description)
                        .unwrap_or(DEFAULT_WORK_DAY_DESCRIPTION)
                        .to_string(),
                ),
                salary: Some(salary.clone().unwrap_or_else(|| default_salary.clone())),
                bonus: Some(bonus.clone().unwrap_or_else(|| BigDecimal::from(0))),
            },
            WorkDayEntry::Salary {
                description,
                salary,
            } => WorkDayValues {
                description: Some(
                    non_blank(description)
                        .unwrap_or(DEFAULT_WORK_DAY_DESCRIPTION)
                        .to_string(),
                ),
                salary: Some(salary.clone()),
                bonus: Some(BigDecimal::from(0)),
            },
            WorkDayEntry::Bonus { description, bonus } => WorkDayValues {
                description: Some(
                    non_blank(description)
                        .unwrap_or(DEFAULT_BONUS_DESCRIPTION)
                        .to_string(),
                ),
                salary: Some(BigDecimal::from(0)),
                bonus: Some(bonus.clone()),
            },
        }
    }

    /// Values after applying this entry to an existing day
    pub fn merge(&self, existing: &WorkDay) -> WorkDayValues {
        let mut values = WorkDayValues {
            description: existing.description.clone(),
            salary: existing.salary.clone(),
            bonus: existing.bonus.clone(),
        };

        match self {
            WorkDayEntry::Full {
                description,
                salary,
                bonus,
            } => {
                if let Some(text) = non_blank(description) {
                    values.description = Some(text.to_string());
                }
                if let Some(salary) = salary {
                    values.salary = Some(salary.clone());
                }
                if let Some(bonus) = bonus {
                    values.bonus = Some(bonus.clone());
                }
            }
            WorkDayEntry::Salary {
                description,
                salary,
            } => {
                values.salary = Some(salary.clone());
                if let Some(text) = non_blank(description) {
                    values.description = Some(text.to_string());
                }
            }
            WorkDayEntry::Bonus { description, bonus } => {
                values.bonus = Some(bonus.clone());
                if let Some(text) = non_blank(description) {
                    values.description = match existing.description.as_deref() {
                        Some(current) if current.contains(text) => Some(current.to_string()),
                        Some(current) => Some(format!("{}; {}", current, text)),
                        None => Some(text.to_string()),
                    };
                }
            }
        }

        values
    }
}

impl UpdateWorkDayInput {
    /// Date and values after a partial update; absent fields keep their value
    pub fn apply(&self, existing: &WorkDay) -> (NaiveDate, WorkDayValues) {
        let work_date = self.work_date.unwrap_or(existing.work_date);
        let values = WorkDayValues {
            description: self
                .description
                .clone()
                .or_else(|| existing.description.clone()),
            salary: self.salary.clone().or_else(|| existing.salary.clone()),
            bonus: self.bonus.clone().or_else(|| existing.bonus.clone()),
        };

        (work_date, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(value: i64) -> BigDecimal {
        BigDecimal::from(value)
    }

    fn existing(description: Option<&str>, salary: Option<i64>, bonus: Option<i64>) -> WorkDay {
        let now = Utc::now();
        WorkDay {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            work_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            description: description.map(str::to_string),
            salary: salary.map(dec),
            bonus: bonus.map(dec),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn full_entry_defaults_on_creation() {
        let entry = WorkDayEntry::Full {
            description: None,
            salary: None,
            bonus: None,
        };

        assert_eq!(
            entry.initial_values(&dec(3500)),
            WorkDayValues {
                description: Some("Work day".to_string()),
                salary: Some(dec(3500)),
                bonus: Some(dec(0)),
            }
        );
    }

    #[test]
    fn full_entry_keeps_existing_fields_when_omitted() {
        let day = existing(Some("Night shift"), Some(4000), Some(200));
        let entry = WorkDayEntry::Full {
            description: Some("   ".to_string()),
            salary: None,
            bonus: Some(dec(300)),
        };

        assert_eq!(
            entry.merge(&day),
            WorkDayValues {
                description: Some("Night shift".to_string()),
                salary: Some(dec(4000)),
                bonus: Some(dec(300)),
            }
        );
    }

    #[test]
    fn salary_entry_creates_day_without_bonus() {
        let entry = WorkDayEntry::Salary {
            description: Some("Overtime".to_string()),
            salary: dec(5000),
        };

        assert_eq!(
            entry.initial_values(&dec(3500)),
            WorkDayValues {
                description: Some("Overtime".to_string()),
                salary: Some(dec(5000)),
                bonus: Some(dec(0)),
            }
        );
    }

    #[test]
    fn salary_entry_leaves_bonus_alone() {
        let day = existing(Some("Work day"), Some(3500), Some(700));
        let entry = WorkDayEntry::Salary {
            description: None,
            salary: dec(4200),
        };

        let values = entry.merge(&day);
        assert_eq!(values.salary, Some(dec(4200)));
        assert_eq!(values.bonus, Some(dec(700)));
        assert_eq!(values.description.as_deref(), Some("Work day"));
    }

    #[test]
    fn bonus_entry_creates_day_with_zero_salary() {
        let entry = WorkDayEntry::Bonus {
            description: None,
            bonus: dec(800),
        };

        assert_eq!(
            entry.initial_values(&dec(3500)),
            WorkDayValues {
                description: Some("Additional income".to_string()),
                salary: Some(dec(0)),
                bonus: Some(dec(800)),
            }
        );
    }

    #[test]
    fn bonus_entry_appends_description_once() {
        let day = existing(Some("Work day"), Some(3500), Some(0));
        let entry = WorkDayEntry::Bonus {
            description: Some("Tips".to_string()),
            bonus: dec(150),
        };

        let values = entry.merge(&day);
        assert_eq!(values.description.as_deref(), Some("Work day; Tips"));
        assert_eq!(values.salary, Some(dec(3500)));
        assert_eq!(values.bonus, Some(dec(150)));

        let day = existing(Some("Work day; Tips"), Some(3500), Some(150));
        assert_eq!(
            entry.merge(&day).description.as_deref(),
            Some("Work day; Tips")
        );

        let day = existing(None, Some(3500), None);
        assert_eq!(entry.merge(&day).description.as_deref(), Some("Tips"));
    }

    #[test]
    fn update_applies_only_present_fields() {
        let day = existing(Some("Work day"), Some(3500), Some(100));
        let moved_to = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let input = UpdateWorkDayInput {
            work_date: Some(moved_to),
            salary: Some(dec(3600)),
            ..Default::default()
        };

        let (date, values) = input.apply(&day);
        assert_eq!(date, moved_to);
        assert_eq!(
            values,
            WorkDayValues {
                description: Some("Work day".to_string()),
                salary: Some(dec(3600)),
                bonus: Some(dec(100)),
            }
        );
    }
}
