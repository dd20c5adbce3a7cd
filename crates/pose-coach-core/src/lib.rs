// ABOUTME: Core types and constants for the pose-coach workspace
// ABOUTME: Foundation crate with error handling, feedback constants, and joint geometry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pose Coach Core
//!
//! Foundation crate providing shared types and constants for pose-coach.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Feedback thresholds, overlay sizes, and energy constants
//! - **geometry**: `Point2D`, `Angle`, and the included-angle computation

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Planar joint geometry (points, angles, included-angle computation)
pub mod geometry;

pub use errors::{AppError, AppResult, ErrorCode};
pub use geometry::{compute_angle, Angle, Point2D};
