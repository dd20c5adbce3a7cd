// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Feedback thresholds, landmark layout, overlay geometry, and energy coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. Runtime-tunable values are exposed again
//! through `CoachConfig`; the values here are the defaults.

/// Joint-angle feedback thresholds (degrees)
pub mod feedback {
    /// Angles strictly above this are `Extended`
    pub const EXTENDED_ABOVE_DEG: f64 = 160.0;
    /// Angles at or below this are `DeepFlexion`
    pub const DEEP_FLEXION_AT_OR_BELOW_DEG: f64 = 70.0;
    /// Largest included angle
    pub const STRAIGHT_ANGLE_DEG: f64 = 180.0;
    /// Full turn, used to fold reflex angles
    pub const FULL_TURN_DEG: f64 = 360.0;
}

/// Pose landmark layout and confidence defaults
pub mod landmarks {
    /// Number of landmarks emitted per frame by the pose model (`BlazePose` topology)
    pub const POSE_LANDMARK_COUNT: usize = 33;
    /// Minimum visibility for a landmark to be trusted
    pub const MIN_VISIBILITY: f64 = 0.5;
}

/// Overlay anchoring defaults
pub mod overlay {
    /// Reference frame width in pixels used to place the angle label
    pub const FRAME_WIDTH_PX: u32 = 640;
    /// Reference frame height in pixels used to place the angle label
    pub const FRAME_HEIGHT_PX: u32 = 480;
    /// Banner position (pixels from the top-left corner)
    pub const BANNER_ORIGIN_PX: (i32, i32) = (30, 50);
}

/// Energy expenditure coefficients
pub mod energy {
    /// Mifflin-St Jeor weight coefficient
    pub const MSJ_WEIGHT_COEF: f64 = 10.0;
    /// Mifflin-St Jeor height coefficient
    pub const MSJ_HEIGHT_COEF: f64 = 6.25;
    /// Mifflin-St Jeor age coefficient
    pub const MSJ_AGE_COEF: f64 = -5.0;
    /// Mifflin-St Jeor male constant
    pub const MSJ_MALE_CONSTANT: f64 = 5.0;
    /// Mifflin-St Jeor female constant
    pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;
    /// Oxygen cost of one MET in ml/kg/min
    pub const MET_OXYGEN_ML_PER_KG_MIN: f64 = 3.5;
    /// Divisor converting ml O2 x kg to kcal
    pub const MET_KCAL_DIVISOR: f64 = 200.0;
    /// MET assumed for logged sessions without a specific activity
    pub const DEFAULT_SESSION_MET: f64 = 6.0;
}

/// Workout log aggregation defaults
pub mod workout {
    /// Volume points credited per logged minute
    pub const VOLUME_POINTS_PER_MINUTE: f64 = 50.0;
    /// Look-back window for the recent summary (days)
    pub const RECENT_WINDOW_DAYS: i64 = 14;
    /// Exercise name stored when none was entered
    pub const UNSPECIFIED_EXERCISE: &str = "unspecified";
    /// RPE scale bounds
    pub const RPE_MIN: u8 = 1;
    /// RPE scale bounds
    pub const RPE_MAX: u8 = 10;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Binary / service name
    pub const POSE_COACH: &str = "pose-coach";
}
