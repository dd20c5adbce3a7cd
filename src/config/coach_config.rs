// ABOUTME: Coach configuration for joint feedback thresholds, landmark confidence, and energy formulas
// ABOUTME: Defaults mirror the reference constants; POSE_COACH_* environment variables override them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coach Configuration Module
//!
//! Provides typed, validated configuration for every analysis component:
//! joint feedback thresholds, landmark confidence gating, overlay anchoring,
//! energy expenditure formulas, and workout log aggregation.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export POSE_COACH_EXTENDED_ABOVE_DEG=165
//!    export POSE_COACH_MIN_VISIBILITY=0.6
//!    ```
//!
//! 2. Default values (if env vars not set)

use pose_coach_core::constants::{energy, feedback, landmarks, overlay, workout};
use pose_coach_core::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related bounds are inverted or overlap
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment variable held an unparseable value
    #[error("Parse error: {0}")]
    Parse(String),

    /// A single value lies outside its allowed interval
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let message = error.to_string();
        let mapped = match error {
            ConfigError::Parse(_) => Self::config(message),
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => {
                Self::new(ErrorCode::ConfigInvalid, message)
            }
        };
        mapped.with_source(error)
    }
}

/// Angle thresholds separating the three feedback categories
///
/// `Extended` is strictly above `extended_above_deg`, `DeepFlexion` is at or
/// below `deep_flexion_at_or_below_deg`, everything between is `Bending`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedbackThresholds {
    /// Lower exclusive bound of `Extended` (degrees)
    pub extended_above_deg: f64,
    /// Upper inclusive bound of `DeepFlexion` (degrees)
    pub deep_flexion_at_or_below_deg: f64,
}

impl Default for FeedbackThresholds {
    fn default() -> Self {
        Self {
            extended_above_deg: feedback::EXTENDED_ABOVE_DEG,
            deep_flexion_at_or_below_deg: feedback::DEEP_FLEXION_AT_OR_BELOW_DEG,
        }
    }
}

/// Landmark confidence gating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceConfig {
    /// Minimum visibility (0-1) for each landmark of a joint triplet
    pub min_visibility: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            min_visibility: landmarks::MIN_VISIBILITY,
        }
    }
}

/// Frame size used to convert normalized coordinates into overlay pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Frame width in pixels
    pub frame_width_px: u32,
    /// Frame height in pixels
    pub frame_height_px: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            frame_width_px: overlay::FRAME_WIDTH_PX,
            frame_height_px: overlay::FRAME_HEIGHT_PX,
        }
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: energy::MSJ_WEIGHT_COEF,
            msj_height_coef: energy::MSJ_HEIGHT_COEF,
            msj_age_coef: energy::MSJ_AGE_COEF,
            msj_male_constant: energy::MSJ_MALE_CONSTANT,
            msj_female_constant: energy::MSJ_FEMALE_CONSTANT,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6+ days/week): 1.725
    pub very_active: f64,
    /// Extra active (sport or physical labor): 1.9
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

/// Energy expenditure configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// TDEE activity multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// MET assumed for logged minutes in the recent summary
    #[serde(default = "default_session_met")]
    pub default_session_met: f64,
}

fn default_session_met() -> f64 {
    energy::DEFAULT_SESSION_MET
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            bmr: BmrConfig::default(),
            activity_factors: ActivityFactorsConfig::default(),
            default_session_met: default_session_met(),
        }
    }
}

/// Workout log aggregation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutConfig {
    /// Days covered by the recent summary
    pub recent_window_days: i64,
    /// Volume points credited per logged minute
    pub volume_points_per_minute: f64,
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            recent_window_days: workout::RECENT_WINDOW_DAYS,
            volume_points_per_minute: workout::VOLUME_POINTS_PER_MINUTE,
        }
    }
}

/// Main coach configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoachConfig {
    /// Joint feedback thresholds
    pub feedback: FeedbackThresholds,
    /// Landmark confidence gating
    pub confidence: ConfidenceConfig,
    /// Overlay anchoring
    pub overlay: OverlayConfig,
    /// Energy formulas
    pub energy: EnergyConfig,
    /// Workout log aggregation
    pub workout: WorkoutConfig,
}

static COACH_CONFIG: OnceLock<CoachConfig> = OnceLock::new();

impl CoachConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        COACH_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load coach config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        let straight = feedback::STRAIGHT_ANGLE_DEG;
        let thresholds = &self.feedback;
        if !(0.0..=straight).contains(&thresholds.extended_above_deg)
            || !(0.0..=straight).contains(&thresholds.deep_flexion_at_or_below_deg)
        {
            return Err(ConfigError::ValueOutOfRange(
                "feedback thresholds must lie within [0, 180] degrees",
            ));
        }
        if thresholds.deep_flexion_at_or_below_deg >= thresholds.extended_above_deg {
            return Err(ConfigError::InvalidRange(
                "deep_flexion_at_or_below_deg must be < extended_above_deg",
            ));
        }

        if !(0.0..=1.0).contains(&self.confidence.min_visibility) {
            return Err(ConfigError::ValueOutOfRange(
                "min_visibility must be between 0 and 1",
            ));
        }

        if self.overlay.frame_width_px == 0 || self.overlay.frame_height_px == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "overlay frame dimensions must be positive",
            ));
        }

        let factors = &self.energy.activity_factors;
        let ordered = [
            factors.sedentary,
            factors.lightly_active,
            factors.moderately_active,
            factors.very_active,
            factors.extra_active,
        ];
        if ordered[0] < 1.0 || ordered.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::InvalidRange(
                "activity factors must be >= 1.0 and non-decreasing",
            ));
        }

        if self.energy.default_session_met <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_session_met must be positive",
            ));
        }

        if self.workout.recent_window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recent_window_days must be positive",
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(val) = parse_env("POSE_COACH_EXTENDED_ABOVE_DEG")? {
            self.feedback.extended_above_deg = val;
        }
        if let Some(val) = parse_env("POSE_COACH_DEEP_FLEXION_DEG")? {
            self.feedback.deep_flexion_at_or_below_deg = val;
        }
        if let Some(val) = parse_env("POSE_COACH_MIN_VISIBILITY")? {
            self.confidence.min_visibility = val;
        }
        if let Some(val) = parse_env("POSE_COACH_FRAME_WIDTH")? {
            self.overlay.frame_width_px = val;
        }
        if let Some(val) = parse_env("POSE_COACH_FRAME_HEIGHT")? {
            self.overlay.frame_height_px = val;
        }
        if let Some(val) = parse_env("POSE_COACH_SESSION_MET")? {
            self.energy.default_session_met = val;
        }
        if let Some(val) = parse_env("POSE_COACH_RECENT_WINDOW_DAYS")? {
            self.workout.recent_window_days = val;
        }
        Ok(self)
    }
}

/// Read and parse an optional environment variable
fn parse_env<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}: '{raw}'"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = CoachConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.feedback.extended_above_deg - 160.0).abs() < f64::EPSILON);
        assert!((config.feedback.deep_flexion_at_or_below_deg - 70.0).abs() < f64::EPSILON);
        assert_eq!(config.overlay.frame_width_px, 640);
        assert_eq!(config.overlay.frame_height_px, 480);
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let mut config = CoachConfig::default();
        config.feedback.deep_flexion_at_or_below_deg = 170.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_visibility_out_of_range_rejected() {
        let mut config = CoachConfig::default();
        config.confidence.min_visibility = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_decreasing_activity_factors_rejected() {
        let mut config = CoachConfig::default();
        config.energy.activity_factors.very_active = 1.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_error_maps_to_app_error() {
        let error: AppError = ConfigError::Parse("Invalid X".into()).into();
        assert_eq!(error.code, ErrorCode::ConfigError);
        assert_eq!(error.message, "Parse error: Invalid X");
        assert!(std::error::Error::source(&error).is_some());
        let error: AppError = ConfigError::InvalidRange("bad").into();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
    }
}
