use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One cell of the contribution grid. Level -1 marks a padded future
/// day (rendered blank), 0 means no activity, 1-4 are quantized
/// activity buckets with 4 meaning "4 or more".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub level: i32,
}

/// A month label positioned over its grid column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthLabel {
    pub label: String,
    pub col: usize,
}
