use chrono::{DateTime, NaiveDate, Utc};

use crate::InputError;

/// A single timestamped biometric reading (HRV in ms, RHR in bpm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricSample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl BiometricSample {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Samples that fail validation are dropped before aggregation.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), InputError> {
        if !self.value.is_finite() {
            return Err(InputError::NonFiniteValue);
        }
        if self.value <= 0.0 {
            return Err(InputError::NonPositiveValue(self.value));
        }
        if self.timestamp > now {
            return Err(InputError::FutureTimestamp(self.timestamp));
        }
        Ok(())
    }
}

/// Mean of one calendar day's valid samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyAverage {
    pub day: NaiveDate,
    pub value: f64,
}

impl DailyAverage {
    pub fn new(day: NaiveDate, value: f64) -> Self {
        Self { day, value }
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_finite() && self.value > 0.0
    }
}

/// Today's and yesterday's resting heart rate, used for the condition
/// score's RHR correction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RhrReading {
    pub today: Option<f64>,
    pub yesterday: Option<f64>,
}

impl RhrReading {
    pub fn new(today: Option<f64>, yesterday: Option<f64>) -> Self {
        Self { today, yesterday }
    }

    /// Picks the two most recent valid days. `yesterday` is only set when it
    /// is exactly the calendar day before `today`.
    pub fn from_daily(daily: &[DailyAverage]) -> Self {
        let mut valid = daily.iter().filter(|d| d.is_valid()).collect::<Vec<_>>();
        valid.sort_by(|a, b| b.day.cmp(&a.day));

        let Some(today) = valid.first() else {
            return Self::default();
        };

        let yesterday = valid
            .get(1)
            .filter(|y| today.day.signed_duration_since(y.day).num_days() == 1)
            .map(|y| y.value);

        Self {
            today: Some(today.value),
            yesterday,
        }
    }

    /// Change in bpm from yesterday to today, when both are usable.
    pub fn change(&self) -> Option<f64> {
        let today = self.today.filter(|v| v.is_finite() && *v > 0.0)?;
        let yesterday = self.yesterday.filter(|v| v.is_finite() && *v > 0.0)?;
        Some(today - yesterday)
    }
}
