use openvitals_types::{
    body::BodyTrend,
    scores::{BodyScoreDetail, WellnessScore},
};

use crate::{fuse, helpers::stats::round_score};

pub struct BodyScorer;

/// Body score rewards stability as much as improvement:
///
/// | change              | weight (kg)          | body fat (pp)         |
/// |---------------------|----------------------|-----------------------|
/// | stable              | \|d\| < 0.5 -> +25   | \|d\| < 0.3 -> +25    |
/// | losing              | +15                  | +25                   |
/// | gaining             | -min(15, d * 5)      | -min(25, d * 10)      |
///
/// Points are added to a baseline of 50 and clamped to [0, 100].
impl BodyScorer {
    const BASELINE_POINTS: f64 = 50.0;

    const WEIGHT_STABLE_KG: f64 = 0.5;
    const WEIGHT_STABLE_POINTS: f64 = 25.0;
    const WEIGHT_LOSS_POINTS: f64 = 15.0;
    const WEIGHT_GAIN_FACTOR: f64 = 5.0;
    const WEIGHT_GAIN_MAX_PENALTY: f64 = 15.0;

    const FAT_STABLE_PP: f64 = 0.3;
    const FAT_STABLE_POINTS: f64 = 25.0;
    const FAT_LOSS_POINTS: f64 = 25.0;
    const FAT_GAIN_FACTOR: f64 = 10.0;
    const FAT_GAIN_MAX_PENALTY: f64 = 25.0;

    /// `None` when neither change is known.
    pub fn detail(trend: &BodyTrend) -> Option<BodyScoreDetail> {
        let weight_change = trend.weight_change.filter(|d| d.is_finite());
        let body_fat_change = trend.body_fat_change.filter(|d| d.is_finite());

        if weight_change.is_none() && body_fat_change.is_none() {
            return None;
        }

        let weight_points = weight_change.map(Self::weight_points).unwrap_or_default();
        let body_fat_points = body_fat_change.map(Self::body_fat_points).unwrap_or_default();

        let final_score = round_score(Self::BASELINE_POINTS + weight_points + body_fat_points)?;

        Some(BodyScoreDetail {
            weight_change,
            body_fat_change,
            weight_points,
            body_fat_points,
            baseline_points: Self::BASELINE_POINTS,
            final_score,
        })
    }

    fn weight_points(change: f64) -> f64 {
        if change.abs() < Self::WEIGHT_STABLE_KG {
            Self::WEIGHT_STABLE_POINTS
        } else if change < 0.0 {
            Self::WEIGHT_LOSS_POINTS
        } else {
            -(change * Self::WEIGHT_GAIN_FACTOR).min(Self::WEIGHT_GAIN_MAX_PENALTY)
        }
    }

    fn body_fat_points(change: f64) -> f64 {
        if change.abs() < Self::FAT_STABLE_PP {
            Self::FAT_STABLE_POINTS
        } else if change < 0.0 {
            Self::FAT_LOSS_POINTS
        } else {
            -(change * Self::FAT_GAIN_FACTOR).min(Self::FAT_GAIN_MAX_PENALTY)
        }
    }
}

pub struct WellnessCalculator;

impl WellnessCalculator {
    const SLEEP_WEIGHT: f64 = 0.40;
    const CONDITION_WEIGHT: f64 = 0.35;
    const BODY_WEIGHT: f64 = 0.25;

    /// Fuses whichever of sleep, condition and body scores are available.
    /// `None` only when all three are missing.
    pub fn calculate(
        sleep_score: Option<u8>,
        condition_score: Option<u8>,
        body: Option<&BodyTrend>,
    ) -> Option<WellnessScore> {
        let sleep_score = sleep_score.map(|s| s.min(100));
        let condition_score = condition_score.map(|s| s.min(100));
        let body_detail = body.and_then(BodyScorer::detail);
        let body_score = body_detail.map(|d| d.final_score);

        let components = [
            (sleep_score, Self::SLEEP_WEIGHT),
            (condition_score, Self::CONDITION_WEIGHT),
            (body_score, Self::BODY_WEIGHT),
        ]
        .into_iter()
        .filter_map(|(score, weight)| score.map(|s| (s, weight)))
        .collect::<Vec<_>>();

        let Some(score) = fuse(&components) else {
            debug!("no wellness components available");
            return None;
        };

        Some(WellnessScore {
            score,
            sleep_score,
            condition_score,
            body_score,
            body_detail,
        })
    }
}
