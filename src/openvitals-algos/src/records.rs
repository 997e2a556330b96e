use std::collections::HashMap;

use chrono::NaiveDate;
use openvitals_types::workouts::{StrengthEntry, StrengthPersonalRecord};

pub struct PersonalRecordExtractor;

impl PersonalRecordExtractor {
    /// Records achieved within this many days of the reference are recent.
    pub const RECENT_DAYS: i64 = 7;

    /// Keeps the heaviest valid entry per trimmed exercise name; on equal
    /// weight the later date wins, then the first entry seen. Output is
    /// heaviest first, ties by name.
    pub fn extract(
        entries: &[StrengthEntry],
        reference: NaiveDate,
    ) -> Vec<StrengthPersonalRecord> {
        let mut best: Vec<&StrengthEntry> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for entry in entries {
            if let Err(error) = entry.validate() {
                trace!(
                    "skipping strength entry {:?}: {}",
                    entry.exercise_name, error
                );
                continue;
            }

            let name = entry.exercise_name.trim();
            match index.get(name) {
                Some(&i) => {
                    if Self::beats(entry, best[i]) {
                        best[i] = entry;
                    }
                }
                None => {
                    index.insert(name, best.len());
                    best.push(entry);
                }
            }
        }

        let mut records = best
            .into_iter()
            .map(|entry| StrengthPersonalRecord {
                exercise_name: entry.exercise_name.trim().to_string(),
                max_weight: entry.max_weight,
                date: entry.date,
                is_recent: Self::is_recent(entry.date, reference),
            })
            .collect::<Vec<_>>();

        records.sort_by(|a, b| {
            b.max_weight
                .total_cmp(&a.max_weight)
                .then_with(|| a.exercise_name.cmp(&b.exercise_name))
        });
        records
    }

    fn beats(entry: &StrengthEntry, kept: &StrengthEntry) -> bool {
        entry.max_weight > kept.max_weight
            || (entry.max_weight == kept.max_weight && entry.date > kept.date)
    }

    fn is_recent(date: NaiveDate, reference: NaiveDate) -> bool {
        let days = reference.signed_duration_since(date).num_days();
        (0..=Self::RECENT_DAYS).contains(&days)
    }
}
