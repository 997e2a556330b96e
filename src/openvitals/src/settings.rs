use anyhow::anyhow;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use openvitals_algos::StreakCalculator;

/// Calendar and thresholds a run is evaluated with.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub offset: FixedOffset,
    pub reference: DateTime<Utc>,
    pub streak: StreakCalculator,
}

impl Settings {
    pub fn new(
        utc_offset_minutes: i32,
        reference: Option<DateTime<Utc>>,
        min_minutes: f64,
        monthly_goal: u32,
    ) -> anyhow::Result<Self> {
        let offset = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| anyhow!("Invalid UTC offset: {} minutes", utc_offset_minutes))?;

        Ok(Self {
            offset,
            reference: reference.unwrap_or_else(Utc::now),
            streak: StreakCalculator::new(min_minutes, monthly_goal),
        })
    }

    /// The reference instant's calendar day in the configured offset.
    pub fn today(&self) -> NaiveDate {
        self.reference.with_timezone(&self.offset).date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn today_follows_offset() {
        let reference = Utc.with_ymd_and_hms(2025, 6, 10, 23, 30, 0).unwrap();
        let utc = Settings::new(0, Some(reference), 20.0, 16).unwrap();
        assert_eq!(utc.today(), NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());

        let tokyo = Settings::new(9 * 60, Some(reference), 20.0, 16).unwrap();
        assert_eq!(tokyo.today(), NaiveDate::from_ymd_opt(2025, 6, 11).unwrap());
    }

    #[test]
    fn rejects_impossible_offset() {
        assert!(Settings::new(24 * 60, None, 20.0, 16).is_err());
        assert!(Settings::new(i32::MAX, None, 20.0, 16).is_err());
    }

    #[test]
    fn clamps_streak_threshold() {
        let settings = Settings::new(0, None, 5000.0, 12).unwrap();
        assert_eq!(settings.streak.min_minutes, 1440.0);
        assert_eq!(settings.streak.monthly_goal, 12);
    }
}
