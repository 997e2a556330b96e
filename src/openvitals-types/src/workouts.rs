use chrono::NaiveDate;

use crate::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub date: NaiveDate,
    pub duration_minutes: f64,
}

impl WorkoutDay {
    pub fn new(date: NaiveDate, duration_minutes: f64) -> Self {
        Self {
            date,
            duration_minutes,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutStreak {
    pub current_streak: u32,
    pub best_streak: u32,
    pub monthly_count: u32,
    pub monthly_goal: u32,
}

impl WorkoutStreak {
    /// Share of the monthly goal reached, in [0, 1].
    pub fn goal_progress(&self) -> f64 {
        if self.monthly_goal == 0 {
            return 0.0;
        }
        (f64::from(self.monthly_count) / f64::from(self.monthly_goal)).min(1.0)
    }
}

/// One completed strength session, already reduced to its heaviest set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthEntry {
    pub exercise_name: String,
    pub date: NaiveDate,
    pub max_weight: f64,
}

impl StrengthEntry {
    pub const MAX_WEIGHT: f64 = 500.0;

    pub fn new(exercise_name: impl Into<String>, date: NaiveDate, max_weight: f64) -> Self {
        Self {
            exercise_name: exercise_name.into(),
            date,
            max_weight,
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if !self.max_weight.is_finite() {
            return Err(InputError::NonFiniteValue);
        }
        if self.max_weight <= 0.0 || self.max_weight > Self::MAX_WEIGHT {
            return Err(InputError::InvalidWeight(self.max_weight));
        }
        if self.exercise_name.trim().is_empty() {
            return Err(InputError::EmptyExerciseName);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthPersonalRecord {
    pub exercise_name: String,
    pub max_weight: f64,
    pub date: NaiveDate,
    pub is_recent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    #[test]
    fn goal_progress() {
        let streak = WorkoutStreak {
            monthly_count: 8,
            monthly_goal: 16,
            ..Default::default()
        };
        assert_eq!(streak.goal_progress(), 0.5);

        let over = WorkoutStreak {
            monthly_count: 20,
            monthly_goal: 16,
            ..Default::default()
        };
        assert_eq!(over.goal_progress(), 1.0);

        assert_eq!(WorkoutStreak::default().goal_progress(), 0.0);
    }

    #[test]
    fn strength_entry_validation() {
        assert!(StrengthEntry::new("Squat", date(), 140.0).validate().is_ok());
        assert!(StrengthEntry::new("Squat", date(), 500.0).validate().is_ok());
        assert_eq!(
            StrengthEntry::new("Squat", date(), 0.0).validate(),
            Err(InputError::InvalidWeight(0.0))
        );
        assert_eq!(
            StrengthEntry::new("Squat", date(), 600.0).validate(),
            Err(InputError::InvalidWeight(600.0))
        );
        assert_eq!(
            StrengthEntry::new("Squat", date(), f64::NAN).validate(),
            Err(InputError::NonFiniteValue)
        );
        assert_eq!(
            StrengthEntry::new("   ", date(), 60.0).validate(),
            Err(InputError::EmptyExerciseName)
        );
    }
}
