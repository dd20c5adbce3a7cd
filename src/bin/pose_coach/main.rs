// ABOUTME: pose-coach CLI - joint feedback, energy estimates, routine plans, and workout logging
// ABOUTME: Parses subcommands with clap and dispatches to the library through command modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Angle at the knee for one set of points
//! pose-coach angle --a 0.5,0.3 --b 0.5,0.6 --c 0.7,0.6
//!
//! # Feedback for a recorded landmark stream (JSON lines, "-" for stdin)
//! pose-coach feedback --input squat.jsonl --joint left-knee
//!
//! # BMI / BMR / TDEE
//! pose-coach energy --gender male --age 18 --height 170 --weight 60 --activity moderately-active
//!
//! # Calories for an activity
//! pose-coach kcal --activity jog --minutes 30 --weight 60
//!
//! # Weekly routine
//! pose-coach plan --goal strength --level intermediate
//!
//! # Workout log
//! pose-coach log add --file log.csv --exercise Squat --sets 3 --reps 10 --weight 60
//! pose-coach log summary --file log.csv --body-weight 60
//! pose-coach log volume --file log.csv
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pose_coach::config::CoachConfig;
use pose_coach::intelligence::{ActivityLevel, ExperienceLevel, Gender, MetActivity, TrainingGoal};
use pose_coach::landmarks::Joint;
use pose_coach::logging::LoggingConfig;
use pose_coach::Point2D;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pose-coach",
    version,
    about = "Joint-angle form feedback and training tools",
    long_about = "Classifies joint angles from pose landmarks into coaching cues, and provides \
                  workout logging, energy estimates, and weekly routine plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Included angle at vertex B of the points A-B-C, with its feedback category
    Angle {
        /// Proximal point as x,y (e.g. hip)
        #[arg(long, value_parser = parse_point)]
        a: Point2D,
        /// Vertex point as x,y (e.g. knee)
        #[arg(long, value_parser = parse_point)]
        b: Point2D,
        /// Distal point as x,y (e.g. ankle)
        #[arg(long, value_parser = parse_point)]
        c: Point2D,
    },

    /// Per-frame feedback for a JSON-lines landmark stream
    Feedback {
        /// Frame file, or "-" for stdin
        #[arg(long, short = 'i')]
        input: PathBuf,
        /// Joint to assess
        #[arg(long, default_value = "left-knee")]
        joint: Joint,
        /// Only print the session summary
        #[arg(long)]
        summary_only: bool,
    },

    /// BMI, BMR, and TDEE for a body profile
    Energy {
        /// male or female
        #[arg(long)]
        gender: Gender,
        /// Age in years
        #[arg(long)]
        age: u32,
        /// Height in centimeters
        #[arg(long)]
        height: f64,
        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,
        /// Activity level (sedentary .. extra-active)
        #[arg(long, default_value = "sedentary")]
        activity: ActivityLevel,
    },

    /// Calories burned for a tabulated activity
    Kcal {
        /// Activity (e.g. jog, squat, yoga)
        #[arg(long)]
        activity: MetActivity,
        /// Duration in minutes
        #[arg(long)]
        minutes: f64,
        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,
    },

    /// Weekly routine for a goal and experience level
    Plan {
        /// strength, fat-loss, endurance, or general-fitness
        #[arg(long, default_value = "general-fitness")]
        goal: TrainingGoal,
        /// beginner, intermediate, or advanced
        #[arg(long, default_value = "beginner")]
        level: ExperienceLevel,
    },

    /// Workout log management
    Log {
        #[command(subcommand)]
        action: LogCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum LogCommand {
    /// Append a workout
    Add {
        /// Log file (CSV, created if missing)
        #[arg(long, short = 'f')]
        file: PathBuf,
        /// Exercise name
        #[arg(long, default_value = "")]
        exercise: String,
        /// Training day (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Sets performed
        #[arg(long, default_value = "3")]
        sets: u32,
        /// Repetitions per set
        #[arg(long, default_value = "10")]
        reps: u32,
        /// Load in kilograms
        #[arg(long, default_value = "0")]
        weight: f64,
        /// Duration in minutes
        #[arg(long, default_value = "0")]
        minutes: u32,
        /// Rate of perceived exertion (1-10)
        #[arg(long, default_value = "7")]
        rpe: u8,
        /// Free-form note
        #[arg(long, default_value = "")]
        memo: String,
    },

    /// Minutes, sets, and estimated calories over the recent window
    Summary {
        /// Log file (CSV)
        #[arg(long, short = 'f')]
        file: PathBuf,
        /// Body weight in kilograms for the calorie estimate
        #[arg(long)]
        body_weight: f64,
        /// Reference day (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Estimated training volume per week
    Volume {
        /// Log file (CSV)
        #[arg(long, short = 'f')]
        file: PathBuf,
    },
}

fn parse_point(raw: &str) -> Result<Point2D, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{raw}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in '{raw}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in '{raw}': {e}"))?;
    Point2D::try_new(x, y).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let config = CoachConfig::load().context("invalid POSE_COACH_* configuration")?;
    let json = cli.json;

    match cli.command {
        Command::Angle { a, b, c } => commands::feedback::angle(a, b, c, &config, json)?,
        Command::Feedback {
            input,
            joint,
            summary_only,
        } => commands::feedback::run(&input, joint, summary_only, &config, json)?,
        Command::Energy {
            gender,
            age,
            height,
            weight,
            activity,
        } => commands::energy::profile(gender, age, height, weight, activity, &config, json)?,
        Command::Kcal {
            activity,
            minutes,
            weight,
        } => commands::energy::kcal(activity, minutes, weight, json)?,
        Command::Plan { goal, level } => commands::plan::show(goal, level, json)?,
        Command::Log { action } => match action {
            LogCommand::Add {
                file,
                exercise,
                date,
                sets,
                reps,
                weight,
                minutes,
                rpe,
                memo,
            } => {
                let workout = pose_coach::workout_log::NewWorkout {
                    date: date.unwrap_or_else(commands::log::today),
                    exercise,
                    sets,
                    reps,
                    weight_kg: weight,
                    minutes,
                    rpe,
                    memo,
                };
                commands::log::add(&file, workout, json)?;
            }
            LogCommand::Summary {
                file,
                body_weight,
                today,
            } => commands::log::summary(&file, body_weight, today, &config, json)?,
            LogCommand::Volume { file } => commands::log::volume(&file, &config, json)?,
        },
    }

    Ok(())
}
