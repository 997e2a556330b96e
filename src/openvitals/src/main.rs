#[macro_use]
extern crate log;

use std::{io, path::PathBuf};

use chrono::{DateTime, Utc};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use openvitals::{Report, Settings, Snapshot, report};
use openvitals_algos::{StreakCalculator, helpers::stats::round_float};
use serde::Serialize;

#[derive(Parser)]
pub struct OpenVitalsCli {
    /// Offset from UTC, in minutes, that defines calendar days
    #[arg(
        env = "OPENVITALS_UTC_OFFSET_MINUTES",
        long,
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub utc_offset_minutes: i32,
    /// Reference instant (RFC 3339), defaults to now
    #[arg(env = "OPENVITALS_REFERENCE", long)]
    pub reference: Option<DateTime<Utc>>,
    /// Minimum workout minutes for a day to count towards streaks
    #[arg(
        env = "OPENVITALS_MIN_MINUTES",
        long,
        default_value_t = StreakCalculator::DEFAULT_MIN_MINUTES
    )]
    pub min_minutes: f64,
    /// Qualifying workout days wanted per month
    #[arg(
        env = "OPENVITALS_MONTHLY_GOAL",
        long,
        default_value_t = StreakCalculator::DEFAULT_MONTHLY_GOAL
    )]
    pub monthly_goal: u32,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
    #[clap(subcommand)]
    pub subcommand: OpenVitalsCommand,
}

#[derive(Subcommand)]
pub enum OpenVitalsCommand {
    ///
    /// Compute every score from a snapshot
    ///
    Report { input: PathBuf },
    ///
    /// Condition score and baseline calibration status
    ///
    Condition { input: PathBuf },
    ///
    /// Training readiness with its component breakdown
    ///
    Readiness { input: PathBuf },
    ///
    /// Wellness score from sleep, condition and body composition
    ///
    Wellness { input: PathBuf },
    ///
    /// Current and best workout streaks
    ///
    Streak { input: PathBuf },
    ///
    /// Strength personal records
    ///
    Records { input: PathBuf },
    ///
    /// Generate shell completions
    ///
    Completions { shell: Shell },
}

fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        debug!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = OpenVitalsCli::parse();
    let settings = Settings::new(
        cli.utc_offset_minutes,
        cli.reference,
        cli.min_minutes,
        cli.monthly_goal,
    )?;
    let json = cli.json;

    match cli.subcommand {
        OpenVitalsCommand::Report { input } => {
            let snapshot = Snapshot::load(input)?;
            let report = Report::build(&snapshot, &settings);
            if json {
                print_json(&report)?;
            } else {
                print!("{}", report);
            }
            Ok(())
        }
        OpenVitalsCommand::Condition { input } => {
            let snapshot = Snapshot::load(input)?;
            let condition = report::condition(&snapshot, &settings);
            if json {
                print_json(&condition)?;
            } else {
                println!("{}", condition);
            }
            Ok(())
        }
        OpenVitalsCommand::Readiness { input } => {
            let snapshot = Snapshot::load(input)?;
            let readiness = report::readiness(&snapshot, &settings);
            if json {
                print_json(&readiness)?;
            } else {
                let c = readiness.components;
                println!("Readiness: {} {}", readiness.score, readiness.status);
                println!(
                    "HRV: {}, RHR: {}, Sleep: {}, Fatigue: {}, Trend: {}",
                    c.hrv, c.rhr, c.sleep, c.fatigue, c.trend_bonus
                );
                if readiness.is_calibrating {
                    println!("Calibrating: HRV baseline incomplete");
                }
            }
            Ok(())
        }
        OpenVitalsCommand::Wellness { input } => {
            let snapshot = Snapshot::load(input)?;
            let condition = report::condition(&snapshot, &settings);
            let wellness =
                report::wellness(&snapshot, &settings, condition.score.map(|c| c.score));
            if json {
                print_json(&wellness)?;
            } else {
                match wellness {
                    Some(w) => {
                        println!("Wellness: {}", w.score);
                        if let Some(detail) = w.body_detail {
                            println!(
                                "Body: {} (baseline {}, weight {}, body fat {})",
                                detail.final_score,
                                detail.baseline_points,
                                detail.weight_points,
                                detail.body_fat_points
                            );
                        }
                    }
                    None => println!("Wellness: not enough data"),
                }
            }
            Ok(())
        }
        OpenVitalsCommand::Streak { input } => {
            let snapshot = Snapshot::load(input)?;
            let streak = report::streak(&snapshot, &settings);
            if json {
                print_json(&streak)?;
            } else {
                println!(
                    "Current: {}\nBest: {}\nThis month: {}/{} ({}%)",
                    streak.current_streak,
                    streak.best_streak,
                    streak.monthly_count,
                    streak.monthly_goal,
                    round_float(streak.goal_progress() * 100.0)
                );
            }
            Ok(())
        }
        OpenVitalsCommand::Records { input } => {
            let snapshot = Snapshot::load(input)?;
            let records = report::records(&snapshot, &settings);
            if json {
                print_json(&records)?;
            } else {
                for record in records {
                    println!(
                        "{}: {} kg ({}){}",
                        record.exercise_name,
                        record.max_weight,
                        record.date,
                        if record.is_recent { " new" } else { "" }
                    );
                }
            }
            Ok(())
        }
        OpenVitalsCommand::Completions { shell } => {
            let mut command = OpenVitalsCli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut io::stdout());
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
