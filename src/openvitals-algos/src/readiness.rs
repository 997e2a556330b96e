use chrono::{DateTime, Utc};
use openvitals_types::{
    biometrics::DailyAverage,
    fatigue::MuscleFatigueState,
    scores::{BaselineStatus, ReadinessComponents, ReadinessStatus, TrainingReadiness},
    sleep::SleepSummary,
};

use crate::{
    Baseline, FatigueScorer, SleepScorer, TrendScorer,
    helpers::stats::round_score,
};

/// Everything training readiness is computed from, for one reference instant.
#[derive(Debug, Clone, Copy)]
pub struct ReadinessInput<'a> {
    /// Daily HRV averages, any order.
    pub hrv_daily: &'a [DailyAverage],
    pub today_rhr: Option<f64>,
    /// Historical resting heart rates to compare `today_rhr` against.
    pub rhr_baseline: &'a [f64],
    pub sleep: Option<SleepSummary>,
    pub fatigue: &'a [MuscleFatigueState],
    pub reference: DateTime<Utc>,
}

pub struct TrainingReadinessCalculator;

/// Fixed-weight fusion of five sub-scores. Missing inputs fall back to each
/// sub-score's default rather than redistributing weight; the result is
/// flagged as calibrating while the HRV baseline is incomplete.
impl TrainingReadinessCalculator {
    const HRV_WEIGHT: f64 = 0.30;
    const RHR_WEIGHT: f64 = 0.20;
    const SLEEP_WEIGHT: f64 = 0.25;
    const FATIGUE_WEIGHT: f64 = 0.15;
    const TREND_WEIGHT: f64 = 0.10;

    const NEUTRAL: u8 = 50;
    const Z_MULTIPLIER: f64 = 15.0;

    pub fn calculate(input: &ReadinessInput) -> TrainingReadiness {
        let hrv_days = input.hrv_daily.iter().filter(|d| d.is_valid()).count();
        let baseline = BaselineStatus::new(hrv_days.try_into().unwrap_or(u32::MAX));

        let components = ReadinessComponents {
            hrv: Self::hrv_score(input.hrv_daily),
            rhr: Self::rhr_score(input.today_rhr, input.rhr_baseline),
            sleep: input
                .sleep
                .as_ref()
                .map(SleepScorer::score)
                .unwrap_or(SleepScorer::FALLBACK),
            fatigue: FatigueScorer::score(input.fatigue, input.reference),
            trend_bonus: TrendScorer::score(input.hrv_daily),
        };

        let score = Self::fuse_fixed(&components);
        if !baseline.is_ready() {
            debug!(
                "training readiness calibrating: {}/{} HRV days",
                baseline.days_collected, baseline.days_required
            );
        }

        TrainingReadiness {
            score,
            status: ReadinessStatus::from_score(score),
            components,
            is_calibrating: !baseline.is_ready(),
        }
    }

    fn fuse_fixed(components: &ReadinessComponents) -> u8 {
        let weighted = [
            (components.hrv, Self::HRV_WEIGHT),
            (components.rhr, Self::RHR_WEIGHT),
            (components.sleep, Self::SLEEP_WEIGHT),
            (components.fatigue, Self::FATIGUE_WEIGHT),
            (components.trend_bonus, Self::TREND_WEIGHT),
        ]
        .into_iter()
        .fold(0.0, |acc, (score, weight)| acc + f64::from(score) * weight);

        round_score(weighted).unwrap_or(Self::NEUTRAL)
    }

    /// Log-domain z-score of the most recent day, `50 + 15z`.
    fn hrv_score(hrv_daily: &[DailyAverage]) -> u8 {
        let Some(today) = hrv_daily
            .iter()
            .filter(|d| d.is_valid())
            .max_by_key(|d| d.day)
        else {
            return Self::NEUTRAL;
        };

        let values = hrv_daily
            .iter()
            .filter(|d| d.is_valid())
            .map(|d| d.value)
            .collect::<Vec<_>>();
        if values.len() < BaselineStatus::REQUIRED_DAYS as usize {
            return Self::NEUTRAL;
        }

        Baseline::log(&values, Baseline::LOG_RANGE_FLOOR)
            .and_then(|b| b.z_score(today.value))
            .and_then(|z| round_score(f64::from(Self::NEUTRAL) + z * Self::Z_MULTIPLIER))
            .unwrap_or(Self::NEUTRAL)
    }

    /// Linear z-score against the RHR baseline, inverted: lower than usual
    /// resting heart rate scores higher.
    fn rhr_score(today: Option<f64>, history: &[f64]) -> u8 {
        let Some(today) = today.filter(|v| v.is_finite() && *v > 0.0) else {
            return Self::NEUTRAL;
        };

        let history = history
            .iter()
            .copied()
            .filter(|v| v.is_finite() && *v > 0.0)
            .collect::<Vec<_>>();

        let Some(baseline) = Baseline::linear(&history, Baseline::RHR_RANGE_FLOOR) else {
            debug!("no RHR baseline, using neutral score");
            return Self::NEUTRAL;
        };

        trace!(
            "RHR today {} vs baseline {:.1} (+-{:.1})",
            today,
            baseline.mean,
            baseline.normal_range
        );

        baseline
            .z_score(today)
            .and_then(|z| round_score(f64::from(Self::NEUTRAL) - z * Self::Z_MULTIPLIER))
            .unwrap_or(Self::NEUTRAL)
    }
}
