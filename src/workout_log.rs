// ABOUTME: Caller-owned, append-only workout log with CSV import/export
// ABOUTME: Aggregates weekly training volume and a recent-window summary with estimated calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout log
//!
//! The log is a plain value owned by the caller: entries can be appended and
//! read back, never edited or removed. Persistence is a CSV file with one row
//! per entry.
//!
//! Estimated volume per entry is `sets x reps x weight_kg` plus a fixed number
//! of points per logged minute, so cardio sessions register alongside lifts.

use crate::config::CoachConfig;
use crate::intelligence::kcal_from_mets;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use pose_coach_core::constants::workout::{RPE_MAX, RPE_MIN, UNSPECIFIED_EXERCISE};
use pose_coach_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};
use uuid::Uuid;

/// Columns every imported CSV must carry (`id` is optional)
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "date",
    "exercise",
    "sets",
    "reps",
    "weight_kg",
    "minutes",
    "rpe",
    "memo",
];

/// A workout as entered by the user, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    /// Training day
    pub date: NaiveDate,
    /// Exercise name (blank is stored as "unspecified")
    pub exercise: String,
    /// Sets performed
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Load in kilograms
    pub weight_kg: f64,
    /// Duration in minutes
    pub minutes: u32,
    /// Rate of perceived exertion (1-10)
    pub rpe: u8,
    /// Free-form note
    pub memo: String,
}

impl NewWorkout {
    /// Workout on `date` with the form defaults (3 x 10, RPE 7, no load)
    #[must_use]
    pub fn on(date: NaiveDate, exercise: &str) -> Self {
        Self {
            date,
            exercise: exercise.to_owned(),
            sets: 3,
            reps: 10,
            weight_kg: 0.0,
            minutes: 0,
            rpe: 7,
            memo: String::new(),
        }
    }
}

/// A validated, logged workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Unique entry id
    pub id: Uuid,
    /// Training day
    pub date: NaiveDate,
    /// Exercise name
    pub exercise: String,
    /// Sets performed
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Load in kilograms
    pub weight_kg: f64,
    /// Duration in minutes
    pub minutes: u32,
    /// Rate of perceived exertion (1-10)
    pub rpe: u8,
    /// Free-form note
    pub memo: String,
}

impl WorkoutEntry {
    /// Validate a new workout and assign it an id
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if RPE is outside 1-10 or the
    /// load is negative or not finite
    pub fn new(workout: NewWorkout) -> AppResult<Self> {
        Self::with_id(Uuid::new_v4(), workout)
    }

    fn with_id(id: Uuid, workout: NewWorkout) -> AppResult<Self> {
        if !(RPE_MIN..=RPE_MAX).contains(&workout.rpe) {
            return Err(AppError::out_of_range(format!(
                "RPE must be between {RPE_MIN} and {RPE_MAX}, got {}",
                workout.rpe
            )));
        }
        if !workout.weight_kg.is_finite() || workout.weight_kg < 0.0 {
            return Err(AppError::out_of_range(format!(
                "weight must be a non-negative number of kg, got {}",
                workout.weight_kg
            )));
        }

        let exercise = workout.exercise.trim();
        let exercise = if exercise.is_empty() {
            UNSPECIFIED_EXERCISE.to_owned()
        } else {
            exercise.to_owned()
        };

        Ok(Self {
            id,
            date: workout.date,
            exercise,
            sets: workout.sets,
            reps: workout.reps,
            weight_kg: workout.weight_kg,
            minutes: workout.minutes,
            rpe: workout.rpe,
            memo: workout.memo,
        })
    }

    /// Estimated training volume for this entry
    #[must_use]
    pub fn volume(&self, points_per_minute: f64) -> f64 {
        let lifted = f64::from(self.sets) * f64::from(self.reps) * self.weight_kg;
        let timed = f64::from(self.minutes) * points_per_minute;
        lifted + timed
    }
}

/// Estimated volume for one ISO week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyVolume {
    /// ISO week label, e.g. `2025-W03`
    pub week: String,
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Summed estimated volume
    pub volume: f64,
}

/// Totals over the recent window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSummary {
    /// First day included
    pub since: NaiveDate,
    /// Entries in the window
    pub sessions: usize,
    /// Logged minutes
    pub total_minutes: u64,
    /// Logged sets
    pub total_sets: u64,
    /// Calories for the logged minutes at the default session MET
    pub estimated_kcal: f64,
}

/// Row shape used for CSV import; blank numeric cells read as zero
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    id: Option<Uuid>,
    date: NaiveDate,
    exercise: Option<String>,
    sets: Option<u32>,
    reps: Option<u32>,
    weight_kg: Option<f64>,
    minutes: Option<u32>,
    rpe: Option<u8>,
    memo: Option<String>,
}

/// Append-only sequence of workouts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    entries: Vec<WorkoutEntry>,
}

impl WorkoutLog {
    /// Empty log
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a validated entry
    pub fn append(&mut self, entry: WorkoutEntry) {
        debug!(id = %entry.id, exercise = %entry.exercise, "workout appended");
        self.entries.push(entry);
    }

    /// Validate and append a new workout, returning the stored entry
    ///
    /// # Errors
    ///
    /// Returns an error if the workout fails validation
    pub fn record(&mut self, workout: NewWorkout) -> AppResult<&WorkoutEntry> {
        let entry = WorkoutEntry::new(workout)?;
        self.append(entry);
        self.entries
            .last()
            .ok_or_else(|| AppError::internal("workout log empty after append"))
    }

    /// All entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[WorkoutEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Estimated volume per ISO week, oldest week first
    #[must_use]
    pub fn weekly_volume(&self, points_per_minute: f64) -> Vec<WeeklyVolume> {
        let mut weeks: BTreeMap<(i32, u32), f64> = BTreeMap::new();
        for entry in &self.entries {
            let iso = entry.date.iso_week();
            *weeks.entry((iso.year(), iso.week())).or_insert(0.0) +=
                entry.volume(points_per_minute);
        }

        weeks
            .into_iter()
            .filter_map(|((year, week), volume)| {
                let week_start = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)?;
                Some(WeeklyVolume {
                    week: format!("{year}-W{week:02}"),
                    week_start,
                    volume,
                })
            })
            .collect()
    }

    /// Totals over the last `recent_window_days` calendar days, `today` included
    ///
    /// With the default 14-day window and `today` = March 19 the window starts
    /// on March 6.
    #[must_use]
    pub fn recent_summary(
        &self,
        today: NaiveDate,
        body_weight_kg: f64,
        config: &CoachConfig,
    ) -> RecentSummary {
        let window = u64::try_from(config.workout.recent_window_days).unwrap_or(1);
        let since = today
            .checked_sub_days(Days::new(window.saturating_sub(1)))
            .unwrap_or(NaiveDate::MIN);

        let recent = self.entries.iter().filter(|entry| entry.date >= since);
        let (sessions, total_minutes, total_sets) =
            recent.fold((0_usize, 0_u64, 0_u64), |(count, minutes, sets), entry| {
                (
                    count + 1,
                    minutes + u64::from(entry.minutes),
                    sets + u64::from(entry.sets),
                )
            });

        RecentSummary {
            since,
            sessions,
            total_minutes,
            total_sets,
            estimated_kcal: kcal_from_mets(
                config.energy.default_session_met,
                body_weight_kg,
                total_minutes as f64,
            ),
        }
    }

    /// Write the log as CSV with an `id` column followed by [`REQUIRED_COLUMNS`]
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::StorageError` if writing fails
    pub fn write_csv<W: Write>(&self, writer: W) -> AppResult<()> {
        let mut writer = csv::Writer::from_writer(writer);
        if self.entries.is_empty() {
            writer.write_record(std::iter::once("id").chain(REQUIRED_COLUMNS))?;
        }
        for entry in &self.entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Read a log from CSV
    ///
    /// Extra columns are ignored. Rows without an `id` get a fresh one.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::MissingRequiredField` if a required column is
    /// absent, `ErrorCode::InvalidFormat` for unparseable cells, or a
    /// validation error for out-of-range values
    pub fn read_csv<R: Read>(reader: R) -> AppResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        let headers = reader.headers()?.clone();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .into_iter()
            .filter(|column| !headers.iter().any(|header| header == *column))
            .collect();
        if !missing.is_empty() {
            return Err(AppError::missing_field(missing.join(", "))
                .with_details(serde_json::json!({ "missing_columns": missing })));
        }

        let mut log = Self::new();
        for (row_number, row) in reader.deserialize::<CsvRow>().enumerate() {
            let row = row?;
            let rpe = row.rpe.ok_or_else(|| {
                AppError::invalid_format(format!("row {}: rpe is empty", row_number + 1))
            })?;
            let workout = NewWorkout {
                date: row.date,
                exercise: row.exercise.unwrap_or_default(),
                sets: row.sets.unwrap_or(0),
                reps: row.reps.unwrap_or(0),
                weight_kg: row.weight_kg.unwrap_or(0.0),
                minutes: row.minutes.unwrap_or(0),
                rpe,
                memo: row.memo.unwrap_or_default(),
            };
            let id = row.id.unwrap_or_else(Uuid::new_v4);
            log.append(WorkoutEntry::with_id(id, workout)?);
        }
        Ok(log)
    }

    /// Save the log to a CSV file, replacing it
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::StorageError` if the file cannot be written
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let file = File::create(path)?;
        self.write_csv(file)?;
        info!(path = %path.display(), entries = self.len(), "workout log saved");
        Ok(())
    }

    /// Load a log from a CSV file; a missing file is an empty log
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load(path: &Path) -> AppResult<Self> {
        match File::open(path) {
            Ok(file) => Self::read_csv(file),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no workout log yet, starting empty");
                Ok(Self::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl<'a> IntoIterator for &'a WorkoutLog {
    type Item = &'a WorkoutEntry;
    type IntoIter = std::slice::Iter<'a, WorkoutEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pose_coach_core::ErrorCode;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_blank_exercise_is_unspecified() {
        let entry = WorkoutEntry::new(NewWorkout::on(date(2025, 3, 3), "   ")).unwrap();
        assert_eq!(entry.exercise, "unspecified");
    }

    #[test]
    fn test_rpe_out_of_range_rejected() {
        let mut workout = NewWorkout::on(date(2025, 3, 3), "Squat");
        workout.rpe = 11;
        let err = WorkoutEntry::new(workout).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_entry_volume() {
        let mut workout = NewWorkout::on(date(2025, 3, 3), "Squat");
        workout.weight_kg = 60.0;
        workout.minutes = 10;
        let entry = WorkoutEntry::new(workout).unwrap();
        // 3 * 10 * 60 + 10 * 50
        assert!((entry.volume(50.0) - 2300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weekly_volume_groups_by_iso_week() {
        let mut log = WorkoutLog::new();
        // Monday and Sunday of the same week, then the following Monday
        for (day, minutes) in [(date(2025, 3, 3), 10), (date(2025, 3, 9), 20), (date(2025, 3, 10), 30)] {
            let mut workout = NewWorkout::on(day, "Jog");
            workout.sets = 0;
            workout.minutes = minutes;
            log.record(workout).unwrap();
        }

        let weeks = log.weekly_volume(50.0);
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week, "2025-W10");
        assert_eq!(weeks[0].week_start, date(2025, 3, 3));
        assert!((weeks[0].volume - 1500.0).abs() < f64::EPSILON);
        assert!((weeks[1].volume - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_csv_missing_column() {
        let csv = "date,exercise,sets,reps\n2025-03-03,Squat,3,10\n";
        let err = WorkoutLog::read_csv(csv.as_bytes()).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert!(err.message.contains("weight_kg"));
    }

    #[test]
    fn test_csv_blank_cells_read_as_zero() {
        let csv = "\u{feff}date,exercise,sets,reps,weight_kg,minutes,rpe,memo\n\
                   2025-03-03,Jog,,,,30,6,\n";
        let log = WorkoutLog::read_csv(csv.as_bytes()).unwrap();
        let entry = &log.entries()[0];
        assert_eq!(entry.sets, 0);
        assert_eq!(entry.minutes, 30);
        assert!(entry.memo.is_empty());
    }

    #[test]
    fn test_csv_padded_headers_are_matched() {
        let csv = " date , exercise,sets ,reps,weight_kg,minutes, rpe,memo \n\
                   2025-03-03,Squat,3,10,60,0,7,  slow eccentric\n";
        let log = WorkoutLog::read_csv(csv.as_bytes()).unwrap();
        let entry = &log.entries()[0];
        assert_eq!(entry.sets, 3);
        assert_eq!(entry.rpe, 7);
        // Only headers are trimmed, cell text is kept as written
        assert_eq!(entry.memo, "  slow eccentric");
    }
}
