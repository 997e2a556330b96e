use openvitals_types::sleep::SleepSummary;

use crate::helpers::stats::round_score;

pub struct SleepScorer;

impl SleepScorer {
    /// Score when duration is missing or implausible.
    pub const FALLBACK: u8 = 50;

    const TARGET_HOURS: f64 = 7.5;
    const MAX_DURATION_RATIO: f64 = 1.3;
    const DURATION_POINTS: f64 = 70.0;
    const MAX_MINUTES: f64 = 1440.0;

    const GOOD_STAGE_RATIO: f64 = 0.20;
    const POOR_STAGE_RATIO: f64 = 0.10;
    const STAGE_POINTS: f64 = 5.0;

    /// Duration part: `min(hours / 7.5, 1.3) * 70`, then +-5 each for deep
    /// and REM ratios (>= 20% bonus, < 10% penalty).
    pub fn score(summary: &SleepSummary) -> u8 {
        let Some(minutes) = summary
            .total_minutes
            .filter(|m| m.is_finite() && (0.0..=Self::MAX_MINUTES).contains(m))
        else {
            debug!(
                "sleep duration missing or implausible: {:?}",
                summary.total_minutes
            );
            return Self::FALLBACK;
        };

        let hours = minutes / 60.0;
        let duration =
            (hours / Self::TARGET_HOURS).min(Self::MAX_DURATION_RATIO) * Self::DURATION_POINTS;

        let raw = duration
            + Self::stage_points(summary.deep_ratio)
            + Self::stage_points(summary.rem_ratio);
        round_score(raw).unwrap_or(Self::FALLBACK)
    }

    fn stage_points(ratio: Option<f64>) -> f64 {
        let Some(ratio) = ratio else {
            return 0.0;
        };

        if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
            warn!("ignoring impossible sleep stage ratio {}", ratio);
            return 0.0;
        }

        if ratio >= Self::GOOD_STAGE_RATIO {
            Self::STAGE_POINTS
        } else if ratio < Self::POOR_STAGE_RATIO {
            -Self::STAGE_POINTS
        } else {
            0.0
        }
    }
}
