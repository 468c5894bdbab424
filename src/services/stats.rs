use crate::models::CommitRecord;

/// Lifetime commit total across every record for a user, shown on the
/// profile stats card. Counts sum; the row count itself is irrelevant.
pub fn total_commit_count(records: &[CommitRecord]) -> i64 {
    records.iter().map(|r| r.count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, count: i64) -> CommitRecord {
        CommitRecord {
            habit_id: "h1".to_string(),
            user_id: "u1".to_string(),
            execution_date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            count,
        }
    }

    #[test]
    fn sums_counts_not_rows() {
        let records = [record(1, 2), record(2, 3), record(2, 4)];
        assert_eq!(total_commit_count(&records), 9);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(total_commit_count(&[]), 0);
    }
}
