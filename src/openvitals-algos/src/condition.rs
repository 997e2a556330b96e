use openvitals_types::{
    biometrics::{DailyAverage, RhrReading},
    scores::{BaselineStatus, ConditionScore},
};

use crate::{Baseline, helpers::stats::truncate_score};

pub struct ConditionScoreCalculator;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionOutput {
    pub baseline: BaselineStatus,
    pub score: Option<ConditionScore>,
}

/// Condition score compares today's HRV against the personal log-domain
/// baseline of all collected days:
/// 1. z = (ln(today) - mean(ln v)) / max(std(ln v), 0.05)
/// 2. raw = 50 + 25z
/// 3. RHR correction when both metrics agree beyond the 2 bpm noise band
/// 4. clamp to [0, 100] and truncate
impl ConditionScoreCalculator {
    const NEUTRAL: f64 = 50.0;
    const Z_MULTIPLIER: f64 = 25.0;

    /// RHR changes within this many bpm are noise.
    const RHR_NOISE_BAND: f64 = 2.0;

    /// Rising RHR on a low-HRV day is penalised at twice its magnitude.
    const RHR_PENALTY_FACTOR: f64 = 2.0;

    pub fn calculate(hrv_daily: &[DailyAverage], rhr: RhrReading) -> ConditionOutput {
        let mut valid = hrv_daily
            .iter()
            .filter(|d| d.is_valid())
            .copied()
            .collect::<Vec<_>>();
        valid.sort_by(|a, b| b.day.cmp(&a.day));

        let baseline = BaselineStatus::new(valid.len().try_into().unwrap_or(u32::MAX));
        if !baseline.is_ready() {
            debug!(
                "condition score calibrating: {}/{} days",
                baseline.days_collected, baseline.days_required
            );
            return ConditionOutput {
                baseline,
                score: None,
            };
        }

        let score = Self::score(&valid, rhr);
        ConditionOutput { baseline, score }
    }

    /// `valid` is non-empty, positive and sorted most recent first.
    fn score(valid: &[DailyAverage], rhr: RhrReading) -> Option<ConditionScore> {
        let today = valid.first()?;
        let values = valid.iter().map(|d| d.value).collect::<Vec<_>>();

        let baseline = Baseline::log(&values, Baseline::LOG_RANGE_FLOOR)?;
        let z = baseline.z_score(today.value)?;

        let raw = Self::NEUTRAL + z * Self::Z_MULTIPLIER + Self::rhr_adjustment(z, rhr);
        let score = truncate_score(raw)?;

        Some(ConditionScore {
            score,
            date: today.day,
        })
    }

    fn rhr_adjustment(z: f64, rhr: RhrReading) -> f64 {
        let Some(change) = rhr.change() else {
            return 0.0;
        };

        if change > Self::RHR_NOISE_BAND && z < 0.0 {
            -change * Self::RHR_PENALTY_FACTOR
        } else if change < -Self::RHR_NOISE_BAND && z > 0.0 {
            change.abs()
        } else {
            0.0
        }
    }
}
