// ABOUTME: Integration tests for the workout log CSV persistence and aggregation
// ABOUTME: Exercises save/load through temp files, weekly volume, and the recent summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use pose_coach::config::CoachConfig;
use pose_coach::workout_log::{NewWorkout, WorkoutLog};
use pose_coach::ErrorCode;
use std::fs;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_log() -> WorkoutLog {
    let mut log = WorkoutLog::new();

    let mut squat = NewWorkout::on(date(2025, 3, 3), "Squat");
    squat.weight_kg = 60.0;
    log.record(squat).unwrap();

    let mut run = NewWorkout::on(date(2025, 3, 5), "Jog");
    run.sets = 1;
    run.reps = 1;
    run.minutes = 30;
    run.memo = "easy pace, felt good".into();
    log.record(run).unwrap();

    let mut bench = NewWorkout::on(date(2025, 3, 12), "Bench press");
    bench.sets = 5;
    bench.reps = 5;
    bench.weight_kg = 50.0;
    bench.rpe = 9;
    log.record(bench).unwrap();

    log
}

#[test]
fn test_save_and_load_preserves_entries() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("workouts.csv");

    let log = sample_log();
    log.save(&path).unwrap();
    let loaded = WorkoutLog::load(&path).unwrap();

    assert_eq!(loaded, log);
    assert_eq!(loaded.entries()[1].memo, "easy pace, felt good");
}

#[test]
fn test_load_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let log = WorkoutLog::load(&dir.path().join("absent.csv")).unwrap();
    assert!(log.is_empty());
}

#[test]
fn test_empty_log_round_trips_through_header_only_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");

    WorkoutLog::new().save(&path).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("id,date,exercise"));

    assert!(WorkoutLog::load(&path).unwrap().is_empty());
}

#[test]
fn test_import_without_id_column_assigns_ids() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("import.csv");
    fs::write(
        &path,
        "date,exercise,sets,reps,weight_kg,minutes,rpe,memo,extra\n\
         2025-03-03,Squat,3,10,60,,7,,ignored\n\
         2025-03-04,,,,,20,6,walk,\n",
    )
    .unwrap();

    let log = WorkoutLog::load(&path).unwrap();
    assert_eq!(log.len(), 2);
    assert_ne!(log.entries()[0].id, log.entries()[1].id);
    assert_eq!(log.entries()[0].minutes, 0);
    assert_eq!(log.entries()[1].exercise, "unspecified");
    assert_eq!(log.entries()[1].sets, 0);
}

#[test]
fn test_import_missing_columns_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.csv");
    fs::write(&path, "date,exercise,sets\n2025-03-03,Squat,3\n").unwrap();

    let err = WorkoutLog::load(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(err.message.contains("reps"));
    assert!(err.message.contains("memo"));
}

#[test]
fn test_import_out_of_range_rpe_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(
        &path,
        "date,exercise,sets,reps,weight_kg,minutes,rpe,memo\n2025-03-03,Squat,3,10,60,0,11,\n",
    )
    .unwrap();

    let err = WorkoutLog::load(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_weekly_volume_groups_by_iso_week() {
    let log = sample_log();
    let weeks = log.weekly_volume(50.0);

    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0].week, "2025-W10");
    assert_eq!(weeks[0].week_start, date(2025, 3, 3));
    // 3 x 10 x 60 + 30 min x 50
    assert!((weeks[0].volume - 3300.0).abs() < f64::EPSILON);
    assert_eq!(weeks[1].week, "2025-W11");
    assert!((weeks[1].volume - 1250.0).abs() < f64::EPSILON);
}

#[test]
fn test_recent_summary_window() {
    let log = sample_log();
    let config = CoachConfig::default();

    // 14 calendar days ending on the 18th start on the 5th
    let summary = log.recent_summary(date(2025, 3, 18), 60.0, &config);
    assert_eq!(summary.since, date(2025, 3, 5));
    assert_eq!(summary.sessions, 2);
    assert_eq!(summary.total_minutes, 30);
    assert_eq!(summary.total_sets, 6);
    // 6 MET x 3.5 x 60 kg / 200 x 30 min
    assert!((summary.estimated_kcal - 189.0).abs() < 1e-9);

    let later = log.recent_summary(date(2025, 6, 1), 60.0, &config);
    assert_eq!(later.sessions, 0);
    assert!(later.estimated_kcal.abs() < f64::EPSILON);
}

#[test]
fn test_recent_summary_excludes_day_a_full_window_back() {
    let log = sample_log();
    let config = CoachConfig::default();

    // The jog on the 5th is exactly 14 days before the 19th
    let summary = log.recent_summary(date(2025, 3, 19), 60.0, &config);
    assert_eq!(summary.since, date(2025, 3, 6));
    assert_eq!(summary.sessions, 1);
    assert_eq!(summary.total_minutes, 0);
    assert_eq!(summary.total_sets, 5);

    let mut one_day = config.clone();
    one_day.workout.recent_window_days = 1;
    let today_only = log.recent_summary(date(2025, 3, 12), 60.0, &one_day);
    assert_eq!(today_only.since, date(2025, 3, 12));
    assert_eq!(today_only.sessions, 1);
}
