use std::fmt::Display;

use chrono::{DateTime, Utc};
use openvitals_algos::{
    ConditionScoreCalculator, DailyAggregator, PersonalRecordExtractor, ReadinessInput,
    SleepScorer, TrainingReadinessCalculator, WellnessCalculator, helpers::stats::round_float,
};
use openvitals_types::{
    biometrics::{DailyAverage, RhrReading},
    body::BodyTrend,
    scores::{BaselineStatus, ConditionScore, TrainingReadiness, WellnessScore},
    workouts::{StrengthPersonalRecord, WorkoutStreak},
};
use serde::Serialize;

use crate::{Settings, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConditionReport {
    pub baseline: BaselineStatus,
    pub score: Option<ConditionScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub reference: DateTime<Utc>,
    pub condition: ConditionReport,
    pub readiness: TrainingReadiness,
    pub wellness: Option<WellnessScore>,
    pub streak: WorkoutStreak,
    pub records: Vec<StrengthPersonalRecord>,
}

impl Report {
    pub fn build(snapshot: &Snapshot, settings: &Settings) -> Self {
        let condition = condition(snapshot, settings);
        let wellness = wellness(snapshot, settings, condition.score.map(|c| c.score));

        Self {
            reference: settings.reference,
            condition,
            readiness: readiness(snapshot, settings),
            wellness,
            streak: streak(snapshot, settings),
            records: records(snapshot, settings),
        }
    }
}

pub fn hrv_daily(snapshot: &Snapshot, settings: &Settings) -> Vec<DailyAverage> {
    DailyAggregator::aggregate(&snapshot.hrv_samples, &settings.offset, settings.reference)
}

pub fn rhr_daily(snapshot: &Snapshot, settings: &Settings) -> Vec<DailyAverage> {
    DailyAggregator::aggregate(&snapshot.rhr_samples, &settings.offset, settings.reference)
}

/// Today's and yesterday's RHR; empty unless the latest day is today.
fn rhr_reading(daily: &[DailyAverage], settings: &Settings) -> RhrReading {
    match daily.first() {
        Some(latest) if latest.day == settings.today() => RhrReading::from_daily(daily),
        _ => RhrReading::default(),
    }
}

pub fn condition(snapshot: &Snapshot, settings: &Settings) -> ConditionReport {
    let rhr = rhr_reading(&rhr_daily(snapshot, settings), settings);
    let output = ConditionScoreCalculator::calculate(&hrv_daily(snapshot, settings), rhr);

    ConditionReport {
        baseline: output.baseline,
        score: output.score,
    }
}

pub fn readiness(snapshot: &Snapshot, settings: &Settings) -> TrainingReadiness {
    let hrv = hrv_daily(snapshot, settings);
    let rhr = rhr_daily(snapshot, settings);
    let today_rhr = rhr_reading(&rhr, settings).today;

    let rhr_baseline: Vec<f64> = if snapshot.rhr_baseline.is_empty() {
        // history excludes the day being scored
        let skip = usize::from(today_rhr.is_some());
        rhr.iter().skip(skip).map(|d| d.value).collect()
    } else {
        snapshot.rhr_baseline.clone()
    };

    TrainingReadinessCalculator::calculate(&ReadinessInput {
        hrv_daily: &hrv,
        today_rhr,
        rhr_baseline: &rhr_baseline,
        sleep: snapshot.sleep_summary(),
        fatigue: &snapshot.fatigue,
        reference: settings.reference,
    })
}

/// `None` when neither weight nor body-fat change is known.
pub fn body_trend(snapshot: &Snapshot, settings: &Settings) -> Option<BodyTrend> {
    let trend = match snapshot.body_trend {
        Some(trend) => trend,
        None => BodyTrend::from_measurements(
            &snapshot.body_measurements,
            BodyTrend::DEFAULT_WINDOW_DAYS,
            settings.reference,
        ),
    };
    (!trend.is_empty()).then_some(trend)
}

pub fn wellness(
    snapshot: &Snapshot,
    settings: &Settings,
    condition_score: Option<u8>,
) -> Option<WellnessScore> {
    let sleep_score = snapshot.sleep_summary().map(|s| SleepScorer::score(&s));
    let body = body_trend(snapshot, settings);
    WellnessCalculator::calculate(sleep_score, condition_score, body.as_ref())
}

pub fn streak(snapshot: &Snapshot, settings: &Settings) -> WorkoutStreak {
    settings.streak.calculate(&snapshot.workouts, settings.today())
}

pub fn records(snapshot: &Snapshot, settings: &Settings) -> Vec<StrengthPersonalRecord> {
    PersonalRecordExtractor::extract(&snapshot.strength, settings.today())
}

fn fmt_score(score: Option<u8>) -> String {
    score.map_or_else(|| "-".to_string(), |s| s.to_string())
}

impl Display for ConditionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.score {
            Some(score) => f.write_fmt(format_args!(
                "Condition: {} ({})",
                score.score, score.date
            )),
            None => f.write_fmt(format_args!(
                "Condition: calibrating, {}/{} days ({}%), {} to go",
                self.baseline.days_collected,
                self.baseline.days_required,
                round_float(self.baseline.progress() * 100.0),
                self.baseline.remaining_days()
            )),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Reference: {}", self.reference)?;
        writeln!(f, "{}", self.condition)?;

        let readiness = &self.readiness;
        let c = readiness.components;
        writeln!(
            f,
            "Readiness: {} {}{}",
            readiness.score,
            readiness.status,
            if readiness.is_calibrating {
                " (calibrating)"
            } else {
                ""
            }
        )?;
        writeln!(
            f,
            "\tHRV: {}, RHR: {}, Sleep: {}, Fatigue: {}, Trend: {}",
            c.hrv, c.rhr, c.sleep, c.fatigue, c.trend_bonus
        )?;

        match &self.wellness {
            Some(w) => {
                writeln!(f, "Wellness: {}", w.score)?;
                writeln!(
                    f,
                    "\tSleep: {}, Condition: {}, Body: {}",
                    fmt_score(w.sleep_score),
                    fmt_score(w.condition_score),
                    fmt_score(w.body_score)
                )?;
            }
            None => writeln!(f, "Wellness: -")?,
        }

        writeln!(
            f,
            "Streak: current {}, best {}, this month {}/{} ({}%)",
            self.streak.current_streak,
            self.streak.best_streak,
            self.streak.monthly_count,
            self.streak.monthly_goal,
            round_float(self.streak.goal_progress() * 100.0)
        )?;

        writeln!(f, "Personal records:")?;
        for record in &self.records {
            writeln!(
                f,
                "\t{}: {} kg ({}){}",
                record.exercise_name,
                record.max_weight,
                record.date,
                if record.is_recent { " new" } else { "" }
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta, TimeZone};
    use openvitals_types::{
        biometrics::BiometricSample,
        body::BodyMeasurement,
        workouts::{StrengthEntry, WorkoutDay},
    };

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 10, 20, 0, 0).unwrap()
    }

    fn settings() -> Settings {
        Settings::new(0, Some(reference()), 20.0, 16).unwrap()
    }

    fn samples(values: &[f64]) -> Vec<BiometricSample> {
        // one morning sample per day, most recent first
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                BiometricSample::new(
                    reference() - TimeDelta::days(i as i64) - TimeDelta::hours(14),
                    v,
                )
            })
            .collect()
    }

    fn snapshot() -> Snapshot {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        Snapshot {
            hrv_samples: samples(&[45.0, 50.0, 48.0, 52.0, 49.0, 51.0, 47.0]),
            workouts: (0..3)
                .map(|d| WorkoutDay::new(today - TimeDelta::days(d), 30.0))
                .collect(),
            strength: vec![
                StrengthEntry::new("Bench Press", today - TimeDelta::days(20), 60.0),
                StrengthEntry::new("Bench Press", today - TimeDelta::days(2), 80.0),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn empty_snapshot() {
        let report = Report::build(&Snapshot::default(), &settings());
        assert_eq!(report.condition.baseline.days_collected, 0);
        assert!(report.condition.score.is_none());
        assert!(report.readiness.is_calibrating);
        assert_eq!(report.readiness.components.fatigue, 80);
        assert!(report.wellness.is_none());
        assert_eq!(report.streak.current_streak, 0);
        assert!(report.records.is_empty());
    }

    #[test]
    fn full_report() {
        let report = Report::build(&snapshot(), &settings());
        assert_eq!(report.condition.score.map(|c| c.score), Some(9));
        assert!(!report.readiness.is_calibrating);

        // condition is the only wellness component
        let wellness = report.wellness.unwrap();
        assert_eq!(wellness.score, 9);
        assert_eq!(wellness.condition_score, Some(9));

        assert_eq!(report.streak.current_streak, 3);
        assert_eq!(report.streak.best_streak, 3);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].max_weight, 80.0);
        assert!(report.records[0].is_recent);
    }

    #[test]
    fn rhr_from_samples_feeds_readiness() {
        let mut snapshot = snapshot();
        // today 58 against a steady 60 -> z = -2 (1 bpm floor) -> 80
        snapshot.rhr_samples = samples(&[58.0, 60.0, 60.0, 60.0, 60.0]);
        let readiness = readiness(&snapshot, &settings());
        assert_eq!(readiness.components.rhr, 80);
    }

    #[test]
    fn stale_rhr_is_not_today() {
        let mut snapshot = snapshot();
        let stale = samples(&[0.0, 0.0, 70.0, 60.0, 60.0]);
        snapshot.rhr_samples = stale.into_iter().filter(|s| s.value > 0.0).collect();
        let readiness = readiness(&snapshot, &settings());
        assert_eq!(readiness.components.rhr, 50);
    }

    #[test]
    fn body_trend_without_changes_is_absent() {
        let mut snapshot = snapshot();
        snapshot.body_measurements = vec![BodyMeasurement {
            date: reference() - TimeDelta::days(1),
            weight_kg: Some(80.0),
            body_fat_percent: Some(20.0),
        }];
        assert_eq!(body_trend(&snapshot, &settings()), None);

        snapshot.body_trend = Some(BodyTrend::default());
        assert_eq!(body_trend(&snapshot, &settings()), None);

        snapshot.body_trend = Some(BodyTrend::new(Some(-1.0), None));
        assert_eq!(
            body_trend(&snapshot, &settings()).and_then(|t| t.weight_change),
            Some(-1.0)
        );
    }

    #[test]
    fn report_renders() {
        let text = Report::build(&snapshot(), &settings()).to_string();
        assert!(text.contains("Condition: 9 (2025-06-10)"));
        assert!(text.contains("Streak: current 3, best 3, this month 3/16 (18.75%)"));
        assert!(text.contains("Bench Press: 80 kg (2025-06-08) new"));
    }

    #[test]
    fn calibrating_condition_renders_progress() {
        let report = ConditionReport {
            baseline: BaselineStatus::new(3),
            score: None,
        };
        assert_eq!(
            report.to_string(),
            "Condition: calibrating, 3/7 days (42.86%), 4 to go"
        );
    }

    #[test]
    fn report_serializes() {
        let value = serde_json::to_value(Report::build(&snapshot(), &settings())).unwrap();
        assert_eq!(value["condition"]["baseline"]["days_required"], 7);
        assert_eq!(value["readiness"]["status"], "light");
    }
}
