use std::fmt::Display;

use chrono::NaiveDate;

/// Progress towards a usable personal baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineStatus {
    pub days_collected: u32,
    pub days_required: u32,
}

impl BaselineStatus {
    /// Days of data every baseline-dependent score needs.
    pub const REQUIRED_DAYS: u32 = 7;

    pub fn new(days_collected: u32) -> Self {
        Self {
            days_collected,
            days_required: Self::REQUIRED_DAYS,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.days_collected >= self.days_required
    }

    pub fn remaining_days(&self) -> u32 {
        self.days_required.saturating_sub(self.days_collected)
    }

    /// Fraction of calibration completed, in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.days_required == 0 {
            return 1.0;
        }
        (f64::from(self.days_collected) / f64::from(self.days_required)).min(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionScore {
    pub score: u8,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
    Ready,
    Moderate,
    Light,
    Rest,
}

impl ReadinessStatus {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Ready,
            60..=79 => Self::Moderate,
            40..=59 => Self::Light,
            _ => Self::Rest,
        }
    }
}

impl Display for ReadinessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Ready => "Ready",
            Self::Moderate => "Moderate",
            Self::Light => "Light",
            Self::Rest => "Rest",
        };
        f.write_str(label)
    }
}

/// Per-component breakdown of a training readiness score, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessComponents {
    pub hrv: u8,
    pub rhr: u8,
    pub sleep: u8,
    pub fatigue: u8,
    pub trend_bonus: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingReadiness {
    pub score: u8,
    pub status: ReadinessStatus,
    pub components: ReadinessComponents,
    pub is_calibrating: bool,
}

/// Audit trail of how the body sub-score was built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyScoreDetail {
    pub weight_change: Option<f64>,
    pub body_fat_change: Option<f64>,
    pub weight_points: f64,
    pub body_fat_points: f64,
    pub baseline_points: f64,
    pub final_score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WellnessScore {
    pub score: u8,
    pub sleep_score: Option<u8>,
    pub condition_score: Option<u8>,
    pub body_score: Option<u8>,
    pub body_detail: Option<BodyScoreDetail>,
}
