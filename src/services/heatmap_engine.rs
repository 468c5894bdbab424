use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::{CommitRecord, HeatmapCell, MonthLabel};

/// Days shown in the wide desktop grid.
pub const SPAN_DESKTOP: u32 = 365;
/// Days shown in the narrow mobile grid.
pub const SPAN_MOBILE: u32 = 90;

/// Contiguous ascending run of `span_days` calendar days ending at
/// `today` inclusive. Pure function of its inputs; callers should
/// capture `today` once per render pass so every cell agrees on the
/// boundary.
pub fn build_date_range(today: NaiveDate, span_days: u32) -> Vec<NaiveDate> {
    (0..span_days as i64)
        .map(|i| today - Duration::days(span_days as i64 - 1 - i))
        .collect()
}

/// Grid-aligned variant: starts on the most recent `week_start` on or
/// before `today - span_days` and is forward-padded to a multiple of
/// 7, so the result lays out as whole columns in a 7-row grid. The
/// tail may contain up to 6 future days, which render as blank cells
/// (level -1). `week_start` is whatever weekday the caller's locale
/// puts at index 0.
pub fn build_aligned_range(today: NaiveDate, span_days: u32, week_start: Weekday) -> Vec<NaiveDate> {
    let anchor = today - Duration::days(span_days as i64);
    let offset = (anchor.weekday().num_days_from_monday() + 7
        - week_start.num_days_from_monday())
        % 7;
    let start = anchor - Duration::days(offset as i64);
    let len = (today - start).num_days() + 1;
    let padded = (len + 6) / 7 * 7;
    (0..padded).map(|i| start + Duration::days(i)).collect()
}

/// Collapse raw commit records into one count per day. Records
/// outside `[range.first, range.last]` are dropped (the query should
/// already be bounded, but multi-habit callers merge result sets) and
/// duplicate dates sum, so overlapping per-habit queries land on the
/// same cell.
pub fn aggregate_commits(
    records: &[CommitRecord],
    range: &[NaiveDate],
) -> HashMap<NaiveDate, i64> {
    let mut by_date = HashMap::new();
    let (Some(&first), Some(&last)) = (range.first(), range.last()) else {
        return by_date;
    };
    for record in records {
        if record.execution_date < first || record.execution_date > last {
            continue;
        }
        *by_date.entry(record.execution_date).or_insert(0) += record.count;
    }
    by_date
}

/// Quantized activity level for one cell: -1 for a day after `today`
/// (padding, rendered blank), 0 for no activity, otherwise the count
/// capped at 4 so intensity tiers stay bounded no matter how large a
/// day gets.
pub fn level_of(date: NaiveDate, today: NaiveDate, counts: &HashMap<NaiveDate, i64>) -> i32 {
    if date > today {
        return -1;
    }
    match counts.get(&date).copied().unwrap_or(0) {
        count if count <= 0 => 0,
        count => count.min(4) as i32,
    }
}

/// Full cell sequence for a range: aggregate once, then level every
/// day. Recomputed from scratch whenever new records arrive.
pub fn build_heatmap(
    range: &[NaiveDate],
    records: &[CommitRecord],
    today: NaiveDate,
) -> Vec<HeatmapCell> {
    let counts = aggregate_commits(records, range);
    range
        .iter()
        .map(|&date| HeatmapCell {
            date,
            level: level_of(date, today, &counts),
        })
        .collect()
}

/// Month labels for the grid header. The grid is column-major: 7 rows,
/// one column per week, so a day at index `i` sits in column `i / 7`.
/// Each month overlapping the range gets one label at the column of
/// its first in-range day; when two months resolve to the same column
/// only the first is kept so labels never overlap. `month_names` is
/// the caller's localized table, index 0 = January; missing entries
/// and out-of-grid columns are omitted rather than erroring.
pub fn compute_month_labels(range: &[NaiveDate], month_names: &[String]) -> Vec<MonthLabel> {
    let mut labels: Vec<MonthLabel> = Vec::new();
    let (Some(&first), Some(&last)) = (range.first(), range.last()) else {
        return labels;
    };
    let num_cols = range.len().div_ceil(7);

    let (mut year, mut month) = (first.year(), first.month());
    while (year, month) <= (last.year(), last.month()) {
        if let Some(idx) = range
            .iter()
            .position(|d| d.year() == year && d.month() == month)
        {
            let col = idx / 7;
            let colliding = labels.last().is_some_and(|prev| prev.col == col);
            if col < num_cols && !colliding {
                if let Some(name) = month_names.get(month as usize - 1) {
                    labels.push(MonthLabel {
                        label: name.clone(),
                        col,
                    });
                }
            }
        }
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    labels
}
