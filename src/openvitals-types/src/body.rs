use chrono::{DateTime, TimeDelta, Utc};

/// A stored body-composition measurement. Either value may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurement {
    pub date: DateTime<Utc>,
    pub weight_kg: Option<f64>,
    pub body_fat_percent: Option<f64>,
}

/// Change in weight (kg) and body fat (percentage points) over a comparison window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyTrend {
    pub weight_change: Option<f64>,
    pub body_fat_change: Option<f64>,
}

impl BodyTrend {
    pub const DEFAULT_WINDOW_DAYS: i64 = 7;

    pub fn new(weight_change: Option<f64>, body_fat_change: Option<f64>) -> Self {
        Self {
            weight_change,
            body_fat_change,
        }
    }

    /// Latest minus earliest value inside `[reference - window_days, reference]`.
    /// Each change needs at least two valid values of its own kind.
    pub fn from_measurements(
        measurements: &[BodyMeasurement],
        window_days: i64,
        reference: DateTime<Utc>,
    ) -> Self {
        let from = reference - TimeDelta::days(window_days.max(0));
        let mut in_window = measurements
            .iter()
            .filter(|m| m.date >= from && m.date <= reference)
            .collect::<Vec<_>>();
        in_window.sort_by_key(|m| m.date);

        let change = |values: Vec<f64>| -> Option<f64> {
            if values.len() < 2 {
                return None;
            }
            Some(values[values.len() - 1] - values[0])
        };

        let weights = in_window
            .iter()
            .filter_map(|m| m.weight_kg)
            .filter(|w| w.is_finite() && *w > 0.0)
            .collect();
        let fats = in_window
            .iter()
            .filter_map(|m| m.body_fat_percent)
            .filter(|f| f.is_finite() && *f > 0.0 && *f < 100.0)
            .collect();

        Self {
            weight_change: change(weights),
            body_fat_change: change(fats),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.weight_change.is_none() && self.body_fat_change.is_none()
    }
}
