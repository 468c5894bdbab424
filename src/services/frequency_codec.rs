use crate::models::{FrequencyKind, RecurrenceRule};

/// Encode a recurrence rule into its persisted string form. This is
/// the only on-disk representation of recurrence and must stay
/// byte-compatible with stored values:
///
/// ```text
/// daily
/// weekly_count:<n>
/// weekly_days:<d1>,<d2>,...
/// custom:<interval>_<unit>_<count>
/// ```
///
/// Weekday indices are sorted ascending and deduplicated. No range
/// validation happens here; out-of-range values encode as-is and are
/// the form layer's problem.
pub fn encode(rule: &RecurrenceRule) -> String {
    match rule.kind {
        FrequencyKind::Daily => "daily".to_string(),
        FrequencyKind::WeeklyCount => format!("weekly_count:{}", rule.weekly_count),
        FrequencyKind::WeeklyDays => {
            let mut days = rule.weekly_days.clone();
            days.sort_unstable();
            days.dedup();
            let joined = days
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(",");
            format!("weekly_days:{}", joined)
        }
        FrequencyKind::Custom => format!(
            "custom:{}_{}_{}",
            rule.custom_interval, rule.custom_unit, rule.custom_count
        ),
    }
}

/// Decode a stored frequency string into `rule`, in place.
///
/// Decode is tolerant: empty or unrecognized input leaves `rule`
/// untouched, so a garbled stored value degrades to whatever the
/// caller already had instead of breaking the editor. Unparsable
/// numeric segments decode to 0 (`weekly_count`, `custom_interval`,
/// `custom_count`) or are dropped (`weekly_days` entries); an
/// unrecognized custom unit is stored as-is for the form layer to
/// deal with.
pub fn decode(encoded: &str, rule: &mut RecurrenceRule) {
    if encoded.is_empty() {
        return;
    }
    if encoded == "daily" {
        rule.kind = FrequencyKind::Daily;
    } else if let Some(rest) = encoded.strip_prefix("weekly_count:") {
        rule.kind = FrequencyKind::WeeklyCount;
        rule.weekly_count = rest.parse().unwrap_or(0);
    } else if let Some(rest) = encoded.strip_prefix("weekly_days:") {
        rule.kind = FrequencyKind::WeeklyDays;
        rule.weekly_days = rest
            .split(',')
            .filter(|part| !part.is_empty())
            .filter_map(|part| part.parse().ok())
            .collect();
    } else if let Some(rest) = encoded.strip_prefix("custom:") {
        let parts: Vec<&str> = rest.split('_').collect();
        if parts.len() != 3 {
            log::warn!("ignoring malformed custom frequency: {}", encoded);
            return;
        }
        rule.kind = FrequencyKind::Custom;
        rule.custom_interval = parts[0].parse().unwrap_or(0);
        rule.custom_unit = parts[1].to_string();
        rule.custom_count = parts[2].parse().unwrap_or(0);
    } else {
        log::warn!("ignoring unrecognized frequency: {}", encoded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_daily() {
        let rule = RecurrenceRule::default();
        assert_eq!(encode(&rule), "daily");
    }

    #[test]
    fn encodes_weekly_count() {
        let rule = RecurrenceRule {
            kind: FrequencyKind::WeeklyCount,
            weekly_count: 5,
            ..Default::default()
        };
        assert_eq!(encode(&rule), "weekly_count:5");
    }

    #[test]
    fn weekly_days_sorts_and_dedups() {
        let rule = RecurrenceRule {
            kind: FrequencyKind::WeeklyDays,
            weekly_days: vec![5, 1, 3, 1],
            ..Default::default()
        };
        assert_eq!(encode(&rule), "weekly_days:1,3,5");
    }

    #[test]
    fn empty_weekly_days_is_legal() {
        let rule = RecurrenceRule {
            kind: FrequencyKind::WeeklyDays,
            weekly_days: Vec::new(),
            ..Default::default()
        };
        assert_eq!(encode(&rule), "weekly_days:");
    }

    #[test]
    fn encodes_custom() {
        let rule = RecurrenceRule {
            kind: FrequencyKind::Custom,
            custom_interval: 2,
            custom_unit: "week".to_string(),
            custom_count: 3,
            ..Default::default()
        };
        assert_eq!(encode(&rule), "custom:2_week_3");
    }

    #[test]
    fn round_trips_every_kind() {
        let rules = [
            RecurrenceRule::default(),
            RecurrenceRule {
                kind: FrequencyKind::WeeklyCount,
                weekly_count: 7,
                ..Default::default()
            },
            RecurrenceRule {
                kind: FrequencyKind::WeeklyDays,
                weekly_days: vec![0, 2, 6],
                ..Default::default()
            },
            RecurrenceRule {
                kind: FrequencyKind::Custom,
                custom_interval: 3,
                custom_unit: "month".to_string(),
                custom_count: 2,
                ..Default::default()
            },
        ];
        for rule in rules {
            let mut decoded = RecurrenceRule::default();
            decode(&encode(&rule), &mut decoded);
            assert_eq!(decoded.kind, rule.kind);
            match rule.kind {
                FrequencyKind::Daily => {}
                FrequencyKind::WeeklyCount => {
                    assert_eq!(decoded.weekly_count, rule.weekly_count)
                }
                FrequencyKind::WeeklyDays => {
                    assert_eq!(decoded.weekly_days, rule.weekly_days)
                }
                FrequencyKind::Custom => {
                    assert_eq!(decoded.custom_interval, rule.custom_interval);
                    assert_eq!(decoded.custom_unit, rule.custom_unit);
                    assert_eq!(decoded.custom_count, rule.custom_count);
                }
            }
        }
    }

    #[test]
    fn decode_is_noop_on_garbage() {
        let mut rule = RecurrenceRule {
            kind: FrequencyKind::WeeklyCount,
            weekly_count: 4,
            ..Default::default()
        };
        let before = rule.clone();
        decode("garbage", &mut rule);
        assert_eq!(rule, before);
        decode("", &mut rule);
        assert_eq!(rule, before);
    }

    #[test]
    fn decode_is_noop_on_short_custom() {
        let mut rule = RecurrenceRule::default();
        let before = rule.clone();
        decode("custom:2_week", &mut rule);
        assert_eq!(rule, before);
    }

    #[test]
    fn decode_empty_weekly_days() {
        let mut rule = RecurrenceRule {
            weekly_days: vec![1, 2],
            ..Default::default()
        };
        decode("weekly_days:", &mut rule);
        assert_eq!(rule.kind, FrequencyKind::WeeklyDays);
        assert!(rule.weekly_days.is_empty());
    }

    #[test]
    fn decode_drops_unparsable_days() {
        let mut rule = RecurrenceRule::default();
        decode("weekly_days:1,x,5", &mut rule);
        assert_eq!(rule.weekly_days, vec![1, 5]);
    }

    #[test]
    fn decode_keeps_unknown_custom_unit() {
        let mut rule = RecurrenceRule::default();
        decode("custom:2_fortnight_1", &mut rule);
        assert_eq!(rule.kind, FrequencyKind::Custom);
        assert_eq!(rule.custom_unit, "fortnight");
    }

    #[test]
    fn unparsable_count_falls_back_to_zero() {
        let mut rule = RecurrenceRule::default();
        decode("weekly_count:abc", &mut rule);
        assert_eq!(rule.kind, FrequencyKind::WeeklyCount);
        assert_eq!(rule.weekly_count, 0);
    }
}
