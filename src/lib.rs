// ABOUTME: Main library entry point for pose-coach joint-angle feedback and training tools
// ABOUTME: Exposes landmark frames, joint feedback sessions, workout logging, energy, and routine planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pose Coach
//!
//! Real-time form feedback for strength training, driven by pose landmarks
//! produced by an external pose-estimation model.
//!
//! ## Features
//!
//! - **Joint feedback**: included angle at a joint classified as extended,
//!   bending, or too deep, with confidence gating on the landmarks
//! - **Frame sources**: pull-based stream of landmark frames (still image,
//!   recording, JSON lines) consumed by a feedback session
//! - **Workout log**: append-only log with CSV import/export, weekly volume,
//!   and a recent summary
//! - **Energy**: BMI, Mifflin-St Jeor BMR, TDEE, MET calories
//! - **Routines**: weekly plan by goal and experience level
//!
//! ## Example Usage
//!
//! ```rust
//! use pose_coach::intelligence::{classify, FeedbackCategory};
//! use pose_coach::{compute_angle, Point2D};
//!
//! let hip = Point2D::new(0.5, 0.3);
//! let knee = Point2D::new(0.5, 0.6);
//! let ankle = Point2D::new(0.7, 0.6);
//!
//! let angle = compute_angle(hip, knee, ankle)?;
//! assert_eq!(classify(angle), FeedbackCategory::Bending);
//! # Ok::<(), pose_coach::AppError>(())
//! ```

/// Configuration management
pub mod config;

/// Coaching algorithms (feedback, reps, energy, routines)
pub mod intelligence;

/// Pose landmark model and joint definitions
pub mod landmarks;

/// Pull-based landmark frame sources
pub mod frames;

/// Feedback sessions over a frame source
pub mod session;

/// Overlay anchoring for angle readouts and cue banners
pub mod overlay;

/// Append-only workout log
pub mod workout_log;

/// Structured logging setup
pub mod logging;

pub use pose_coach_core::{
    compute_angle, constants, errors, AppError, AppResult, Angle, ErrorCode, Point2D,
};
