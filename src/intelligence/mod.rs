// ABOUTME: Intelligence module grouping the coaching algorithms
// ABOUTME: Joint feedback, repetition counting, energy expenditure, and routine planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure, synchronous algorithms. Nothing here performs I/O; frame sources and
//! the workout log feed them from the outside.

/// Joint-angle feedback classification and per-joint assessment
pub mod joint_feedback;

/// Repetition counting from feedback categories
pub mod rep_counter;

/// BMI, BMR, TDEE, and MET-based calorie estimates
pub mod energy_calculator;

/// Goal- and level-based weekly routine recommendation
pub mod routine_planner;

pub use energy_calculator::{
    bmi, calculate_mifflin_st_jeor, calculate_tdee, kcal_from_mets, ActivityLevel, BodyProfile,
    EnergySnapshot, Gender, MetActivity,
};
pub use joint_feedback::{
    assess_joint, classify, classify_degrees, classify_with, FeedbackCategory, JointAssessment,
    Severity, SuppressionReason,
};
pub use rep_counter::RepCounter;
pub use routine_planner::{
    recommend_plan, DayPlan, ExperienceLevel, RoutineItem, TrainingGoal, WeeklyPlan,
};
