use chrono::{DateTime, Utc};
use openvitals_types::fatigue::MuscleFatigueState;

use crate::helpers::stats::round_score;

pub struct FatigueScorer;

/// Fatigue score is the inverse of recency-weighted muscle fatigue.
/// Each muscle's level (0-10) is scaled by how recently it was trained:
///
/// | hours since trained | weight |
/// |---------------------|--------|
/// | < 24                | 1.0    |
/// | 24 - 48             | 0.7    |
/// | 48 - 72             | 0.4    |
/// | >= 72 or unknown    | 0.1    |
///
/// `score = 100 - mean(level * weight) * 10`
impl FatigueScorer {
    /// No muscle data reads as mostly recovered.
    pub const NO_DATA: u8 = 80;

    /// Hours assumed when a muscle has never been trained.
    const UNKNOWN_HOURS: f64 = 168.0;

    pub fn score(states: &[MuscleFatigueState], reference: DateTime<Utc>) -> u8 {
        if states.is_empty() {
            return Self::NO_DATA;
        }

        let weighted = states
            .iter()
            .map(|state| {
                if let Err(error) = state.validate() {
                    warn!("clamping {} fatigue: {}", state.muscle, error);
                }
                let hours = Self::hours_since_trained(state, reference);
                f64::from(state.clamped_level()) * Self::recency_weight(hours)
            })
            .sum::<f64>()
            / states.len() as f64;

        round_score(100.0 - weighted * 10.0).unwrap_or(Self::NO_DATA)
    }

    fn hours_since_trained(state: &MuscleFatigueState, reference: DateTime<Utc>) -> f64 {
        match state.last_trained_date {
            Some(trained) => (reference - trained).num_minutes() as f64 / 60.0,
            None => Self::UNKNOWN_HOURS,
        }
    }

    fn recency_weight(hours: f64) -> f64 {
        if hours < 24.0 {
            1.0
        } else if hours < 48.0 {
            0.7
        } else if hours < 72.0 {
            0.4
        } else {
            0.1
        }
    }
}
