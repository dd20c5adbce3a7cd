// ABOUTME: Configuration module for analysis thresholds, energy formulas, and logging settings
// ABOUTME: Re-exports the coach configuration types consumed by the intelligence modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Coach**: feedback thresholds, landmark confidence, overlay geometry,
//!   energy formulas, workout aggregation (`POSE_COACH_*` overrides)
//! - **Logging**: see [`crate::logging::LoggingConfig`]

/// Coach analysis configuration and environment overrides
pub mod coach_config;

pub use coach_config::{
    ActivityFactorsConfig, BmrConfig, CoachConfig, ConfidenceConfig, ConfigError, EnergyConfig,
    FeedbackThresholds, OverlayConfig, WorkoutConfig,
};
