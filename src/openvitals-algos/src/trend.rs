use openvitals_types::biometrics::DailyAverage;

use crate::helpers::stats::{linear_slope, mean, round_score};

pub struct TrendScorer;

impl TrendScorer {
    pub const NEUTRAL: u8 = 50;
    pub const WINDOW_DAYS: usize = 7;
    pub const MIN_POINTS: usize = 3;

    /// Score points per 1% of mean HRV gained per day.
    const POINTS_PER_PERCENT: f64 = 10.0;

    /// Regresses the most recent (at most seven) daily HRV averages over
    /// their calendar day offsets. Slope is expressed as percent of the
    /// window mean per day: `score = 50 + slope% * 10`.
    pub fn score(hrv_daily: &[DailyAverage]) -> u8 {
        let mut recent = hrv_daily
            .iter()
            .filter(|d| d.is_valid())
            .copied()
            .collect::<Vec<_>>();
        recent.sort_by(|a, b| b.day.cmp(&a.day));
        recent.truncate(Self::WINDOW_DAYS);

        if recent.len() < Self::MIN_POINTS {
            return Self::NEUTRAL;
        }

        recent.reverse();
        let Some(first) = recent.first().map(|d| d.day) else {
            return Self::NEUTRAL;
        };

        let xs = recent
            .iter()
            .map(|d| d.day.signed_duration_since(first).num_days() as f64)
            .collect::<Vec<_>>();
        let ys = recent.iter().map(|d| d.value).collect::<Vec<_>>();

        let avg = mean(&ys);
        let Some(slope) = linear_slope(&xs, &ys).filter(|_| avg > 0.0) else {
            debug!("degenerate HRV trend, using neutral score");
            return Self::NEUTRAL;
        };

        let normalized = slope / avg * 100.0;
        round_score(f64::from(Self::NEUTRAL) + normalized * Self::POINTS_PER_PERCENT)
            .unwrap_or(Self::NEUTRAL)
    }
}
