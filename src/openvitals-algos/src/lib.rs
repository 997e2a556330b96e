#[macro_use]
extern crate log;

pub(crate) mod baseline;
pub use baseline::{Baseline, Domain};

pub(crate) mod daily;
pub use daily::DailyAggregator;

pub(crate) mod condition;
pub use condition::{ConditionOutput, ConditionScoreCalculator};

pub(crate) mod sleep;
pub use sleep::SleepScorer;

pub(crate) mod fatigue;
pub use fatigue::FatigueScorer;

pub(crate) mod trend;
pub use trend::TrendScorer;

pub(crate) mod readiness;
pub use readiness::{ReadinessInput, TrainingReadinessCalculator};

pub(crate) mod fusion;
pub use fusion::fuse;

pub(crate) mod wellness;
pub use wellness::{BodyScorer, WellnessCalculator};

pub(crate) mod streak;
pub use streak::StreakCalculator;

pub(crate) mod records;
pub use records::PersonalRecordExtractor;

pub mod helpers;
