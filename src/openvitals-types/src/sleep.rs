use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepStage {
    InBed,
    Awake,
    Core,
    Deep,
    Rem,
}

impl SleepStage {
    pub fn is_asleep(self) -> bool {
        matches!(self, Self::Core | Self::Deep | Self::Rem)
    }
}

/// One raw stage interval as recorded by the sleep tracker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepStageInterval {
    pub stage: SleepStage,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SleepStageInterval {
    pub fn minutes(&self) -> f64 {
        let seconds = (self.end - self.start).num_seconds();
        if seconds <= 0 {
            0.0
        } else {
            seconds as f64 / 60.0
        }
    }
}

/// Sleep aggregates for one night.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SleepSummary {
    pub total_minutes: Option<f64>,
    pub deep_ratio: Option<f64>,
    pub rem_ratio: Option<f64>,
}

impl SleepSummary {
    pub fn new(total_minutes: Option<f64>, deep_ratio: Option<f64>, rem_ratio: Option<f64>) -> Self {
        Self {
            total_minutes,
            deep_ratio,
            rem_ratio,
        }
    }

    /// Sums asleep stages into a total and derives deep/REM ratios from it.
    /// In-bed and awake intervals do not count towards sleep time.
    pub fn from_stages(intervals: &[SleepStageInterval]) -> Self {
        let mut asleep = 0.0;
        let mut deep = 0.0;
        let mut rem = 0.0;

        for interval in intervals.iter().filter(|i| i.stage.is_asleep()) {
            let minutes = interval.minutes();
            asleep += minutes;
            match interval.stage {
                SleepStage::Deep => deep += minutes,
                SleepStage::Rem => rem += minutes,
                _ => {}
            }
        }

        if asleep <= 0.0 {
            return Self {
                total_minutes: (!intervals.is_empty()).then_some(0.0),
                deep_ratio: None,
                rem_ratio: None,
            };
        }

        Self {
            total_minutes: Some(asleep),
            deep_ratio: Some(deep / asleep),
            rem_ratio: Some(rem / asleep),
        }
    }
}
