use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use openvitals_types::workouts::{WorkoutDay, WorkoutStreak};

#[derive(Debug, Clone, Copy)]
pub struct StreakCalculator {
    pub min_minutes: f64,
    pub monthly_goal: u32,
}

impl Default for StreakCalculator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_MINUTES, Self::DEFAULT_MONTHLY_GOAL)
    }
}

impl StreakCalculator {
    pub const DEFAULT_MIN_MINUTES: f64 = 20.0;
    pub const DEFAULT_MONTHLY_GOAL: u32 = 16;
    const MAX_MINUTES: f64 = 1440.0;

    /// `min_minutes` is clamped to a single day; non-finite falls back to the default.
    pub fn new(min_minutes: f64, monthly_goal: u32) -> Self {
        let min_minutes = if min_minutes.is_finite() {
            min_minutes.clamp(0.0, Self::MAX_MINUTES)
        } else {
            Self::DEFAULT_MIN_MINUTES
        };

        Self {
            min_minutes,
            monthly_goal,
        }
    }

    pub fn calculate(&self, workouts: &[WorkoutDay], today: NaiveDate) -> WorkoutStreak {
        let days = self.qualifying_days(workouts, today);

        let current_streak = Self::current_streak(&days, today);
        let best_streak = Self::best_streak(&days).max(current_streak);
        let monthly_count = days
            .iter()
            .filter(|d| d.year() == today.year() && d.month() == today.month())
            .count()
            .try_into()
            .unwrap_or(u32::MAX);

        WorkoutStreak {
            current_streak,
            best_streak,
            monthly_count,
            monthly_goal: self.monthly_goal,
        }
    }

    /// Distinct days with a long enough session, up to and including `today`.
    fn qualifying_days(&self, workouts: &[WorkoutDay], today: NaiveDate) -> Vec<NaiveDate> {
        workouts
            .iter()
            .filter(|w| w.duration_minutes.is_finite() && w.duration_minutes >= self.min_minutes)
            .map(|w| w.date)
            .filter(|d| *d <= today)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// `days` is sorted ascending and deduplicated. The streak only counts
    /// if the latest day is today or yesterday.
    fn current_streak(days: &[NaiveDate], today: NaiveDate) -> u32 {
        let Some(&latest) = days.last() else {
            return 0;
        };

        if today.signed_duration_since(latest).num_days() > 1 {
            return 0;
        }

        let mut streak = 1;
        let mut previous = latest;
        for &day in days.iter().rev().skip(1) {
            match previous.signed_duration_since(day).num_days() {
                0 => continue,
                1 => {
                    streak += 1;
                    previous = day;
                }
                _ => break,
            }
        }
        streak
    }

    fn best_streak(days: &[NaiveDate]) -> u32 {
        let mut best = 0;
        let mut run = 0;
        let mut previous: Option<NaiveDate> = None;

        for &day in days {
            run = match previous {
                Some(p) if day.signed_duration_since(p).num_days() == 1 => run + 1,
                _ => 1,
            };
            best = u32::max(best, run);
            previous = Some(day);
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    fn ago(days: i64, minutes: f64) -> WorkoutDay {
        WorkoutDay::new(today() - TimeDelta::days(days), minutes)
    }

    #[test]
    fn no_workouts() {
        let streak = StreakCalculator::default().calculate(&[], today());
        assert_eq!(
            streak,
            WorkoutStreak {
                current_streak: 0,
                best_streak: 0,
                monthly_count: 0,
                monthly_goal: 16,
            }
        );
    }

    #[test]
    fn three_consecutive_days() {
        let workouts = [ago(0, 30.0), ago(1, 30.0), ago(2, 30.0)];
        let streak = StreakCalculator::default().calculate(&workouts, today());
        assert_eq!(streak.current_streak, 3);
        assert_eq!(streak.best_streak, 3);
        assert_eq!(streak.monthly_count, 3);
    }

    #[test]
    fn gap_breaks_continuity() {
        let workouts = [ago(0, 45.0), ago(3, 45.0)];
        let streak = StreakCalculator::default().calculate(&workouts, today());
        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.best_streak, 1);
    }

    #[test]
    fn streak_anchored_at_yesterday() {
        let workouts = [ago(1, 30.0), ago(2, 30.0)];
        let streak = StreakCalculator::default().calculate(&workouts, today());
        assert_eq!(streak.current_streak, 2);
    }

    #[test]
    fn stale_streak_resets_current_but_keeps_best() {
        let workouts = [ago(2, 30.0), ago(3, 30.0), ago(4, 30.0), ago(5, 30.0)];
        let streak = StreakCalculator::default().calculate(&workouts, today());
        assert_eq!(streak.current_streak, 0);
        assert_eq!(streak.best_streak, 4);
    }

    #[test]
    fn short_sessions_do_not_qualify() {
        let workouts = [ago(0, 30.0), ago(1, 10.0), ago(2, 30.0)];
        let streak = StreakCalculator::default().calculate(&workouts, today());
        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.best_streak, 1);
        assert_eq!(streak.monthly_count, 2);
    }

    #[test]
    fn multiple_sessions_same_day_count_once() {
        let workouts = [ago(0, 30.0), ago(0, 60.0), ago(1, 25.0), ago(1, 5.0)];
        let streak = StreakCalculator::default().calculate(&workouts, today());
        assert_eq!(streak.current_streak, 2);
        assert_eq!(streak.monthly_count, 2);
    }

    #[test]
    fn best_streak_from_history() {
        let mut workouts = (10..15).map(|d| ago(d, 40.0)).collect::<Vec<_>>();
        workouts.push(ago(0, 40.0));
        let streak = StreakCalculator::default().calculate(&workouts, today());
        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.best_streak, 5);
    }

    #[test]
    fn monthly_count_only_current_month() {
        // March 15 back to Feb 26
        let workouts = (0..18).map(|d| ago(d, 30.0)).collect::<Vec<_>>();
        let streak = StreakCalculator::default().calculate(&workouts, today());
        assert_eq!(streak.current_streak, 18);
        assert_eq!(streak.monthly_count, 15);
    }

    #[test]
    fn future_days_are_ignored() {
        let workouts = [
            WorkoutDay::new(today() + TimeDelta::days(1), 30.0),
            ago(0, 30.0),
        ];
        let streak = StreakCalculator::default().calculate(&workouts, today());
        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.monthly_count, 1);
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(StreakCalculator::new(-5.0, 16).min_minutes, 0.0);
        assert_eq!(StreakCalculator::new(5000.0, 16).min_minutes, 1440.0);
        assert_eq!(StreakCalculator::new(f64::NAN, 16).min_minutes, 20.0);

        let zero = StreakCalculator::new(0.0, 10);
        let streak = zero.calculate(&[ago(0, 0.0)], today());
        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.monthly_goal, 10);
    }

    #[test]
    fn non_finite_duration_does_not_qualify() {
        let workouts = [ago(0, f64::NAN), ago(1, f64::INFINITY)];
        let streak = StreakCalculator::default().calculate(&workouts, today());
        assert_eq!(streak.current_streak, 0);
    }

    #[test]
    fn best_never_below_current() {
        let workouts = (0..7).map(|d| ago(d * 2, 30.0)).collect::<Vec<_>>();
        let streak = StreakCalculator::default().calculate(&workouts, today());
        assert!(streak.best_streak >= streak.current_streak);
        assert_eq!(streak.current_streak, 1);
    }
}
