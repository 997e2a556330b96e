use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("value must be positive, got {0}")]
    NonPositiveValue(f64),
    #[error("value is not finite")]
    NonFiniteValue,
    #[error("timestamp {0} is in the future")]
    FutureTimestamp(chrono::DateTime<chrono::Utc>),
    #[error("fatigue level {0} outside 0..=10")]
    InvalidFatigueLevel(u8),
    #[error("weight {0} outside (0, 500]")]
    InvalidWeight(f64),
    #[error("exercise name is empty")]
    EmptyExerciseName,
}
