use std::{fs, path::Path};

use anyhow::Context;
use openvitals_types::{
    biometrics::BiometricSample,
    body::{BodyMeasurement, BodyTrend},
    fatigue::MuscleFatigueState,
    sleep::{SleepStageInterval, SleepSummary},
    workouts::{StrengthEntry, WorkoutDay},
};
use serde::Deserialize;

/// Already-acquired records handed to the engine. Every field is optional
/// in the JSON document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub hrv_samples: Vec<BiometricSample>,
    pub rhr_samples: Vec<BiometricSample>,
    /// Explicit RHR history; derived from `rhr_samples` when empty.
    pub rhr_baseline: Vec<f64>,
    /// Pre-computed sleep aggregates; take precedence over `sleep_stages`.
    pub sleep: Option<SleepSummary>,
    pub sleep_stages: Vec<SleepStageInterval>,
    pub fatigue: Vec<MuscleFatigueState>,
    /// Pre-computed body trend; takes precedence over `body_measurements`.
    pub body_trend: Option<BodyTrend>,
    pub body_measurements: Vec<BodyMeasurement>,
    pub workouts: Vec<WorkoutDay>,
    pub strength: Vec<StrengthEntry>,
}

impl Snapshot {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading snapshot {}", path.display()))?;
        let snapshot = Self::from_json(&data)
            .with_context(|| format!("parsing snapshot {}", path.display()))?;

        info!(
            "loaded snapshot: {} HRV samples, {} RHR samples, {} workouts, {} strength entries",
            snapshot.hrv_samples.len(),
            snapshot.rhr_samples.len(),
            snapshot.workouts.len(),
            snapshot.strength.len()
        );
        Ok(snapshot)
    }

    pub fn from_json(data: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn sleep_summary(&self) -> Option<SleepSummary> {
        if self.sleep.is_some() {
            return self.sleep;
        }
        if self.sleep_stages.is_empty() {
            return None;
        }
        Some(SleepSummary::from_stages(&self.sleep_stages))
    }
}
