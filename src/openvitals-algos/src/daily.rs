use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use openvitals_types::biometrics::{BiometricSample, DailyAverage};

pub struct DailyAggregator;

impl DailyAggregator {
    /// Groups samples by calendar day in `tz` and averages each day's valid
    /// values. Samples after `now`, non-positive or non-finite are dropped.
    /// Result is sorted most recent day first.
    pub fn aggregate<Tz: TimeZone>(
        samples: &[BiometricSample],
        tz: &Tz,
        now: DateTime<Utc>,
    ) -> Vec<DailyAverage> {
        let mut days: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();

        for sample in samples {
            if let Err(error) = sample.validate(now) {
                trace!("dropping sample at {}: {}", sample.timestamp, error);
                continue;
            }

            let day = sample.timestamp.with_timezone(tz).date_naive();
            let (sum, count) = days.entry(day).or_insert((0.0, 0));
            *sum += sample.value;
            *count += 1;
        }

        days.into_iter()
            .rev()
            .filter_map(|(day, (sum, count))| {
                let value = sum / f64::from(count);
                value
                    .is_finite()
                    .then_some(DailyAverage::new(day, value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeDelta};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, day, hour, 0, 0).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, day).unwrap()
    }

    #[test]
    fn empty_input() {
        assert!(DailyAggregator::aggregate(&[], &Utc, at(10, 12)).is_empty());
    }

    #[test]
    fn averages_per_day_most_recent_first() {
        let samples = vec![
            BiometricSample::new(at(3, 8), 40.0),
            BiometricSample::new(at(5, 6), 50.0),
            BiometricSample::new(at(3, 22), 60.0),
            BiometricSample::new(at(5, 7), 70.0),
            BiometricSample::new(at(4, 1), 45.0),
        ];
        let daily = DailyAggregator::aggregate(&samples, &Utc, at(10, 12));
        assert_eq!(
            daily,
            vec![
                DailyAverage::new(date(5), 60.0),
                DailyAverage::new(date(4), 45.0),
                DailyAverage::new(date(3), 50.0),
            ]
        );
    }

    #[test]
    fn drops_invalid_samples_and_empty_days() {
        let now = at(10, 12);
        let samples = vec![
            BiometricSample::new(at(3, 8), 0.0),
            BiometricSample::new(at(3, 9), -5.0),
            BiometricSample::new(at(4, 9), f64::NAN),
            BiometricSample::new(at(4, 10), 48.0),
            BiometricSample::new(at(5, 10), f64::INFINITY),
            BiometricSample::new(now + TimeDelta::hours(2), 55.0),
        ];
        let daily = DailyAggregator::aggregate(&samples, &Utc, now);
        assert_eq!(daily, vec![DailyAverage::new(date(4), 48.0)]);
    }

    #[test]
    fn groups_by_caller_timezone() {
        // 23:30 UTC is already the next day at UTC+2
        let samples = vec![
            BiometricSample::new(at(3, 12), 40.0),
            BiometricSample::new(at(3, 23) + TimeDelta::minutes(30), 60.0),
        ];
        let utc = DailyAggregator::aggregate(&samples, &Utc, at(10, 12));
        assert_eq!(utc, vec![DailyAverage::new(date(3), 50.0)]);

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = DailyAggregator::aggregate(&samples, &plus_two, at(10, 12));
        assert_eq!(
            local,
            vec![
                DailyAverage::new(date(4), 60.0),
                DailyAverage::new(date(3), 40.0),
            ]
        );
    }
}
