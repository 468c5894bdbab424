use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::HabitError;

/// One recorded execution of a habit on a calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommitRecord {
    pub habit_id: String,
    pub user_id: String,
    pub execution_date: NaiveDate,
    pub count: i64,
}

/// Row shape returned by the data service for
/// `habit_commits.select(execution_date, count)`. Dates arrive as
/// `YYYY-MM-DD` strings and are validated on conversion.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RawCommitRow {
    #[serde(default)]
    pub habit_id: String,
    #[serde(default)]
    pub user_id: String,
    pub execution_date: String,
    pub count: i64,
}

impl TryFrom<RawCommitRow> for CommitRecord {
    type Error = HabitError;

    fn try_from(row: RawCommitRow) -> Result<Self, Self::Error> {
        let execution_date = NaiveDate::parse_from_str(&row.execution_date, "%Y-%m-%d")
            .map_err(|_| HabitError::InvalidDate {
                value: row.execution_date.clone(),
            })?;
        if row.count < 0 {
            return Err(HabitError::InvalidCount { count: row.count });
        }
        Ok(Self {
            habit_id: row.habit_id,
            user_id: row.user_id,
            execution_date,
            count: row.count,
        })
    }
}

/// Decode a JSON array of data-service rows into typed records.
pub fn commits_from_json(payload: &str) -> Result<Vec<CommitRecord>, HabitError> {
    let rows: Vec<RawCommitRow> = serde_json::from_str(payload)?;
    rows.into_iter().map(CommitRecord::try_from).collect()
}
