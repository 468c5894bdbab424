use serde::{Deserialize, Serialize};

/// Which recurrence policy a habit uses. The wire spelling of each
/// variant matches the prefix of the persisted frequency string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyKind {
    Daily,
    WeeklyCount,
    WeeklyDays,
    Custom,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurrenceRule {
    pub kind: FrequencyKind,
    /// Executions per week, 1-7. Only meaningful for WeeklyCount.
    pub weekly_count: u32,
    /// Weekday indices 0-6, 0 being the locale's first weekday.
    /// Only meaningful for WeeklyDays.
    pub weekly_days: Vec<u8>,
    /// Only meaningful for Custom: execute `custom_count` times every
    /// `custom_interval` units.
    pub custom_interval: u32,
    pub custom_unit: String, // "day", "week", "month", "year"
    pub custom_count: u32,
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        Self {
            kind: FrequencyKind::Daily,
            weekly_count: 3,
            weekly_days: Vec::new(),
            custom_interval: 1,
            custom_unit: "day".to_string(),
            custom_count: 1,
        }
    }
}
