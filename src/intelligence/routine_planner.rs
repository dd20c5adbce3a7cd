// ABOUTME: Weekly routine recommendation from a training goal and experience level
// ABOUTME: Scales base strength, cut, endurance, and mobility blocks by a level multiplier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Routine Planner Module
//!
//! Builds a Monday-to-Sunday plan out of four base blocks. Experience level
//! scales volume: sets, durations and reps are multiplied and rounded half to
//! even. Reps never scale below the base prescription. Rest periods and
//! interval patterns are fixed.

use chrono::Weekday;
use pose_coach_core::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the plan is built to improve
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingGoal {
    /// Maximal strength
    Strength,
    /// Body fat reduction
    FatLoss,
    /// Aerobic endurance
    Endurance,
    /// Balanced overall fitness
    #[default]
    GeneralFitness,
}

impl TrainingGoal {
    /// Kebab-case name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::FatLoss => "fat-loss",
            Self::Endurance => "endurance",
            Self::GeneralFitness => "general-fitness",
        }
    }
}

impl FromStr for TrainingGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "strength" => Ok(Self::Strength),
            "fat-loss" | "cut" => Ok(Self::FatLoss),
            "endurance" => Ok(Self::Endurance),
            "general-fitness" | "general" => Ok(Self::GeneralFitness),
            other => Err(AppError::invalid_input(format!(
                "Unknown training goal: '{other}'. Valid options: strength, fat-loss, endurance, general-fitness"
            ))),
        }
    }
}

/// Training experience, which scales volume
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Base volume (x1.0)
    #[default]
    Beginner,
    /// x1.3
    Intermediate,
    /// x1.6
    Advanced,
}

impl ExperienceLevel {
    /// Volume multiplier
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Beginner => 1.0,
            Self::Intermediate => 1.3,
            Self::Advanced => 1.6,
        }
    }

    /// Kebab-case name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown experience level: '{other}'. Valid options: beginner, intermediate, advanced"
            ))),
        }
    }
}

/// One prescribed exercise
///
/// Only the fields relevant to the exercise are set: a lift has sets, reps
/// and rest; a hold has sets and seconds; cardio has minutes; an interval
/// session has a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineItem {
    /// Exercise name
    pub exercise: String,
    /// Number of sets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Repetitions per set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Duration in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
    /// Hold duration per set in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u32>,
    /// Rest between sets in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
    /// Free-form interval pattern
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl RoutineItem {
    fn named(exercise: &str) -> Self {
        Self {
            exercise: exercise.to_owned(),
            sets: None,
            reps: None,
            minutes: None,
            seconds: None,
            rest_seconds: None,
            pattern: None,
        }
    }

    /// Sets x reps with rest
    #[must_use]
    pub fn lift(exercise: &str, sets: u32, reps: u32, rest_seconds: u32) -> Self {
        Self {
            sets: Some(sets),
            reps: Some(reps),
            rest_seconds: Some(rest_seconds),
            ..Self::named(exercise)
        }
    }

    /// Sets of timed holds, optionally with rest
    #[must_use]
    pub fn hold(exercise: &str, sets: u32, seconds: u32, rest_seconds: Option<u32>) -> Self {
        Self {
            sets: Some(sets),
            seconds: Some(seconds),
            rest_seconds,
            ..Self::named(exercise)
        }
    }

    /// Continuous activity for a number of minutes
    #[must_use]
    pub fn timed(exercise: &str, minutes: u32) -> Self {
        Self {
            minutes: Some(minutes),
            ..Self::named(exercise)
        }
    }

    /// Interval session described by a pattern
    #[must_use]
    pub fn interval(exercise: &str, pattern: &str) -> Self {
        Self {
            pattern: Some(pattern.to_owned()),
            ..Self::named(exercise)
        }
    }

    /// Apply a volume multiplier
    #[must_use]
    pub fn scaled(&self, multiplier: f64) -> Self {
        let scale = |value: u32, factor: f64| (f64::from(value) * factor).round_ties_even() as u32;
        Self {
            sets: self.sets.map(|sets| scale(sets, multiplier)),
            reps: self.reps.map(|reps| scale(reps, multiplier.max(1.0))),
            minutes: self.minutes.map(|minutes| scale(minutes, multiplier)),
            seconds: self.seconds.map(|seconds| scale(seconds, multiplier)),
            ..self.clone()
        }
    }
}

impl fmt::Display for RoutineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.exercise)?;
        match (self.sets, self.reps, self.seconds) {
            (Some(sets), Some(reps), _) => write!(f, " {sets}x{reps}")?,
            (Some(sets), None, Some(seconds)) => write!(f, " {sets}x{seconds}s")?,
            _ => {}
        }
        if let Some(minutes) = self.minutes {
            write!(f, " {minutes} min")?;
        }
        if let Some(pattern) = &self.pattern {
            write!(f, " ({pattern})")?;
        }
        if let Some(rest) = self.rest_seconds {
            write!(f, ", rest {rest}s")?;
        }
        Ok(())
    }
}

/// Exercises prescribed for one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day of week
    pub day: Weekday,
    /// Prescribed exercises, in order
    pub items: Vec<RoutineItem>,
}

/// A Monday-to-Sunday routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    /// Goal the plan targets
    pub goal: TrainingGoal,
    /// Level used to scale volume
    pub level: ExperienceLevel,
    /// Seven days starting on Monday
    pub days: Vec<DayPlan>,
}

impl WeeklyPlan {
    /// Items for a weekday (empty for an unplanned day)
    #[must_use]
    pub fn day(&self, day: Weekday) -> &[RoutineItem] {
        self.days
            .iter()
            .find(|plan| plan.day == day)
            .map_or(&[][..], |plan| plan.items.as_slice())
    }
}

fn base_strength() -> Vec<RoutineItem> {
    vec![
        RoutineItem::lift("Squat", 3, 10, 90),
        RoutineItem::lift("Bench press", 3, 8, 120),
        RoutineItem::lift("Barbell row / lat pulldown", 3, 10, 90),
        RoutineItem::hold("Plank", 3, 45, Some(45)),
    ]
}

fn base_cut() -> Vec<RoutineItem> {
    vec![
        RoutineItem::interval("Interval running", "1 min fast / 1 min walk x 8"),
        RoutineItem::lift("Kettlebell swing", 4, 15, 60),
        RoutineItem::lift("Burpee", 3, 12, 60),
        RoutineItem::hold("Core (dead bug / side plank)", 3, 30, Some(30)),
    ]
}

fn base_endurance() -> Vec<RoutineItem> {
    vec![
        RoutineItem::timed("Jogging", 35),
        RoutineItem::timed("Cycling", 25),
        RoutineItem::lift("Step-up / lunge", 3, 12, 60),
        RoutineItem::timed("Stretching", 10),
    ]
}

fn base_mobility() -> Vec<RoutineItem> {
    vec![
        RoutineItem::timed("Full-body dynamic stretch", 10),
        RoutineItem::hold("Hip / ankle mobility", 3, 45, None),
        RoutineItem::timed("Yoga flow", 20),
        RoutineItem::timed("Box breathing", 5),
    ]
}

/// Build the weekly plan for a goal and experience level
#[must_use]
pub fn recommend_plan(goal: TrainingGoal, level: ExperienceLevel) -> WeeklyPlan {
    let multiplier = level.multiplier();
    let scale = |block: Vec<RoutineItem>| -> Vec<RoutineItem> {
        block.iter().map(|item| item.scaled(multiplier)).collect()
    };

    let week: [Vec<RoutineItem>; 7] = match goal {
        TrainingGoal::Strength => [
            scale(base_strength()),
            scale(base_mobility()),
            scale(base_strength()),
            vec![RoutineItem::timed("Easy walk", 30)],
            scale(base_strength()),
            vec![RoutineItem::timed("Jogging", 25)],
            vec![RoutineItem::timed("Rest / stretching", 20)],
        ],
        TrainingGoal::FatLoss => [
            scale(base_cut()),
            vec![
                RoutineItem::timed("Jogging", 30),
                RoutineItem::timed("Stretching", 10),
            ],
            scale(base_cut()),
            scale(base_mobility()),
            scale(base_cut()),
            vec![RoutineItem::timed("Cycling", 40)],
            vec![RoutineItem::timed("Rest / walk", 30)],
        ],
        TrainingGoal::Endurance => [
            scale(base_endurance()),
            scale(base_mobility()),
            scale(base_endurance()),
            vec![RoutineItem::interval(
                "Interval running",
                "2 min fast / 1 min walk x 6",
            )],
            scale(base_endurance()),
            vec![RoutineItem::timed("Long walk / hike", 60)],
            vec![RoutineItem::timed("Rest / yoga", 25)],
        ],
        TrainingGoal::GeneralFitness => [
            scale(base_strength()),
            vec![
                RoutineItem::timed("Jogging", 25),
                RoutineItem::timed("Stretching", 10),
            ],
            scale(base_mobility()),
            scale(base_cut()),
            scale(base_strength()),
            vec![RoutineItem::timed("Cycling", 35)],
            vec![RoutineItem::timed("Rest / walk", 30)],
        ],
    };

    let mut day = Weekday::Mon;
    let days = week
        .into_iter()
        .map(|items| {
            let plan = DayPlan { day, items };
            day = day.succ();
            plan
        })
        .collect();

    WeeklyPlan { goal, level, days }
}
