// ABOUTME: Workout log commands for pose-coach
// ABOUTME: Appends entries to a CSV log and reports the recent summary and weekly volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use pose_coach::config::CoachConfig;
use pose_coach::workout_log::{NewWorkout, WorkoutLog};
use std::path::Path;
use tracing::info;

use crate::helpers::display::{display_recent, display_volume, print_json};

/// Current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn load(file: &Path) -> Result<WorkoutLog> {
    WorkoutLog::load(file).with_context(|| format!("failed to read {}", file.display()))
}

/// Append one workout and save the log
pub fn add(file: &Path, workout: NewWorkout, json: bool) -> Result<()> {
    let mut log = load(file)?;
    let entry = log.record(workout)?.clone();
    log.save(file)
        .with_context(|| format!("failed to write {}", file.display()))?;
    info!(id = %entry.id, total = log.len(), "workout recorded");

    if json {
        print_json(&entry)
    } else {
        println!(
            "Recorded {} on {} ({} entries in {})",
            entry.exercise,
            entry.date,
            log.len(),
            file.display()
        );
        Ok(())
    }
}

/// Totals over the recent window
pub fn summary(
    file: &Path,
    body_weight_kg: f64,
    today_override: Option<NaiveDate>,
    config: &CoachConfig,
    json: bool,
) -> Result<()> {
    let log = load(file)?;
    let summary = log.recent_summary(today_override.unwrap_or_else(today), body_weight_kg, config);

    if json {
        print_json(&summary)
    } else {
        display_recent(&summary);
        Ok(())
    }
}

/// Weekly volume table
pub fn volume(file: &Path, config: &CoachConfig, json: bool) -> Result<()> {
    let log = load(file)?;
    let weeks = log.weekly_volume(config.workout.volume_points_per_minute);

    if json {
        print_json(&weeks)
    } else {
        display_volume(&weeks);
        Ok(())
    }
}
