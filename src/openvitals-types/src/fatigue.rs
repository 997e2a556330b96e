use chrono::{DateTime, Utc};
use strum::{Display, EnumIter, EnumString};

use crate::InputError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Muscle {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Core,
    Quadriceps,
    Hamstrings,
    Glutes,
    Calves,
}

/// Snapshot of one muscle group's fatigue, owned by the acquisition layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuscleFatigueState {
    pub muscle: Muscle,
    pub fatigue_level: u8,
    pub last_trained_date: Option<DateTime<Utc>>,
}

impl MuscleFatigueState {
    pub const MAX_FATIGUE: u8 = 10;

    pub fn validate(&self) -> Result<(), InputError> {
        if self.fatigue_level > Self::MAX_FATIGUE {
            return Err(InputError::InvalidFatigueLevel(self.fatigue_level));
        }
        Ok(())
    }

    pub fn clamped_level(&self) -> u8 {
        self.fatigue_level.min(Self::MAX_FATIGUE)
    }
}
