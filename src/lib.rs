//! Habit-tracking core: recurrence-rule encoding and contribution-grid
//! aggregation.
//!
//! Persistence, auth, and rendering live behind external services; this
//! crate owns the two pure pieces any client must reproduce exactly to
//! stay compatible with stored data — the frequency string codec and
//! the day-level heatmap math.

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::HabitError;
pub use models::{
    commits_from_json, CommitRecord, FrequencyKind, Habit, HeatmapCell, MonthLabel, RawCommitRow,
    RecurrenceRule, Tag,
};
pub use services::frequency_codec::{decode, encode};
pub use services::heatmap_engine::{
    aggregate_commits, build_aligned_range, build_date_range, build_heatmap,
    compute_month_labels, level_of, SPAN_DESKTOP, SPAN_MOBILE,
};
pub use services::stats::total_commit_count;
pub use utils::preferences::{Preferences, PreferencesHandle};
