// ABOUTME: Joint feedback classification: maps an included joint angle to Extended, Bending, or DeepFlexion
// ABOUTME: Assesses a named joint from a landmark frame, suppressing the cue when landmarks are missing or unsure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Joint Feedback Module
//!
//! Turns a joint angle into the coaching cue shown during a squat:
//!
//! | Angle (degrees)    | Category      | Cue                                  |
//! |--------------------|---------------|--------------------------------------|
//! | `> 160`            | `Extended`    | legs straight, ready position        |
//! | `70 < a <= 160`    | `Bending`     | knees bending, squatting             |
//! | `<= 70`            | `DeepFlexion` | squatted too deep, knee strain risk  |
//!
//! Classification is stateless and thread-safe. [`assess_joint`] adds the
//! landmark lookup and confidence gate in front of it.

use crate::config::{ConfidenceConfig, FeedbackThresholds};
use crate::landmarks::{Joint, PoseLandmark, PoseLandmarks};
use pose_coach_core::{compute_angle, AppResult, Angle};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Three-level feedback category for a joint angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    /// Joint nearly straight (angle above the extended threshold)
    Extended,
    /// Joint flexing within the safe working range
    Bending,
    /// Joint flexed at or beyond the deep threshold
    DeepFlexion,
}

/// Traffic-light color of a cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Ready / good
    Green,
    /// Working range
    Yellow,
    /// Warning
    Red,
}

impl FeedbackCategory {
    /// Every category, from straight to deepest
    pub const ALL: [Self; 3] = [Self::Extended, Self::Bending, Self::DeepFlexion];

    /// User-facing coaching cue
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Extended => "Legs are straight (ready position)",
            Self::Bending => "Knees are bending (squatting)",
            Self::DeepFlexion => "Squatted too deep, knee strain risk",
        }
    }

    /// Cue color
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Extended => Severity::Green,
            Self::Bending => Severity::Yellow,
            Self::DeepFlexion => Severity::Red,
        }
    }

    /// Snake-case name for logs and machine output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Extended => "extended",
            Self::Bending => "bending",
            Self::DeepFlexion => "deep_flexion",
        }
    }

    /// Whether the joint is flexed (anything but `Extended`)
    #[must_use]
    pub const fn is_flexed(self) -> bool {
        !matches!(self, Self::Extended)
    }
}

impl fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        })
    }
}

/// Classify an angle with custom thresholds
///
/// [`Angle`] is finite and within `[0, 180]` by construction, so every input
/// maps to exactly one category. Boundaries follow the table in the module
/// docs: the extended threshold itself is `Bending`, the deep threshold
/// itself is `DeepFlexion`.
#[must_use]
pub fn classify_with(angle: Angle, thresholds: &FeedbackThresholds) -> FeedbackCategory {
    let degrees = angle.degrees();
    if degrees > thresholds.extended_above_deg {
        FeedbackCategory::Extended
    } else if degrees > thresholds.deep_flexion_at_or_below_deg {
        FeedbackCategory::Bending
    } else {
        FeedbackCategory::DeepFlexion
    }
}

/// Classify an angle with the fixed 160° / 70° thresholds
#[must_use]
pub fn classify(angle: Angle) -> FeedbackCategory {
    classify_with(angle, &FeedbackThresholds::default())
}

/// Classify a raw reading in degrees
///
/// Out-of-range readings are clamped to `[0, 180]` first.
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` for NaN or infinite degrees
pub fn classify_degrees(
    degrees: f64,
    thresholds: &FeedbackThresholds,
) -> AppResult<FeedbackCategory> {
    Ok(classify_with(Angle::from_degrees(degrees)?, thresholds))
}

/// Why a joint could not be assessed in a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuppressionReason {
    /// No person was detected in the frame
    NoPoseDetected,
    /// The pose model did not report this landmark
    MissingLandmark {
        /// Absent landmark
        landmark: PoseLandmark,
    },
    /// The landmark was reported with visibility under the configured minimum
    LowConfidence {
        /// Uncertain landmark
        landmark: PoseLandmark,
        /// Reported visibility (0-1)
        visibility: f64,
    },
}

impl fmt::Display for SuppressionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPoseDetected => f.write_str("no pose detected"),
            Self::MissingLandmark { landmark } => write!(f, "{landmark} not detected"),
            Self::LowConfidence {
                landmark,
                visibility,
            } => write!(f, "{landmark} visibility {visibility:.2} too low"),
        }
    }
}

/// Outcome of assessing one joint in one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JointAssessment {
    /// Angle computed and classified
    Classified {
        /// Assessed joint
        joint: Joint,
        /// Included angle at the joint
        angle: Angle,
        /// Feedback category
        category: FeedbackCategory,
    },
    /// No cue for this frame
    Suppressed {
        /// Assessed joint
        joint: Joint,
        /// Why no cue was produced
        reason: SuppressionReason,
    },
}

impl JointAssessment {
    /// Joint this assessment refers to
    #[must_use]
    pub const fn joint(&self) -> Joint {
        match self {
            Self::Classified { joint, .. } | Self::Suppressed { joint, .. } => *joint,
        }
    }

    /// Category, if the joint was classified
    #[must_use]
    pub const fn category(&self) -> Option<FeedbackCategory> {
        match self {
            Self::Classified { category, .. } => Some(*category),
            Self::Suppressed { .. } => None,
        }
    }

    /// Angle, if the joint was classified
    #[must_use]
    pub const fn angle(&self) -> Option<Angle> {
        match self {
            Self::Classified { angle, .. } => Some(*angle),
            Self::Suppressed { .. } => None,
        }
    }
}

/// Assess one joint of a landmark frame
///
/// Every landmark of the joint triplet must be present and at least
/// `confidence.min_visibility` visible; otherwise the assessment is
/// `Suppressed` with the first failing landmark.
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` if a trusted landmark has non-finite
/// coordinates
pub fn assess_joint(
    landmarks: &PoseLandmarks,
    joint: Joint,
    confidence: &ConfidenceConfig,
    thresholds: &FeedbackThresholds,
) -> AppResult<JointAssessment> {
    let (proximal, vertex, distal) = joint.triplet();
    let mut points = Vec::with_capacity(3);

    for which in [proximal, vertex, distal] {
        let Some(landmark) = landmarks.get(which) else {
            return Ok(JointAssessment::Suppressed {
                joint,
                reason: SuppressionReason::MissingLandmark { landmark: which },
            });
        };
        if landmark.visibility.is_nan() || landmark.visibility < confidence.min_visibility {
            return Ok(JointAssessment::Suppressed {
                joint,
                reason: SuppressionReason::LowConfidence {
                    landmark: which,
                    visibility: landmark.visibility,
                },
            });
        }
        points.push(landmark.point());
    }

    let angle = compute_angle(points[0], points[1], points[2])?;
    let category = classify_with(angle, thresholds);
    debug!(joint = %joint, angle = angle.degrees(), category = %category, "joint classified");

    Ok(JointAssessment::Classified {
        joint,
        angle,
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::Landmark;

    fn squat_frame(hip: (f64, f64), knee: (f64, f64), ankle: (f64, f64)) -> PoseLandmarks {
        PoseLandmarks::empty()
            .with(PoseLandmark::LeftHip, Landmark::new(hip.0, hip.1))
            .with(PoseLandmark::LeftKnee, Landmark::new(knee.0, knee.1))
            .with(PoseLandmark::LeftAnkle, Landmark::new(ankle.0, ankle.1))
    }

    fn category(degrees: f64) -> FeedbackCategory {
        classify(Angle::from_degrees(degrees).unwrap())
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(category(160.0), FeedbackCategory::Bending);
        assert_eq!(category(160.0001), FeedbackCategory::Extended);
        assert_eq!(category(70.0), FeedbackCategory::DeepFlexion);
        assert_eq!(category(70.0001), FeedbackCategory::Bending);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let defaults = FeedbackThresholds::default();
        assert_eq!(
            classify_degrees(-15.0, &defaults).unwrap(),
            FeedbackCategory::DeepFlexion
        );
        assert_eq!(
            classify_degrees(400.0, &defaults).unwrap(),
            FeedbackCategory::Extended
        );
    }

    #[test]
    fn test_non_finite_reading_is_rejected() {
        let defaults = FeedbackThresholds::default();
        for reading in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = classify_degrees(reading, &defaults).unwrap_err();
            assert_eq!(err.code, pose_coach_core::ErrorCode::InvalidInput);
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = FeedbackThresholds {
            extended_above_deg: 170.0,
            deep_flexion_at_or_below_deg: 90.0,
        };
        assert_eq!(
            classify_degrees(165.0, &strict).unwrap(),
            FeedbackCategory::Bending
        );
        assert_eq!(
            classify_degrees(85.0, &strict).unwrap(),
            FeedbackCategory::DeepFlexion
        );
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(FeedbackCategory::Extended.severity(), Severity::Green);
        assert_eq!(FeedbackCategory::Bending.severity(), Severity::Yellow);
        assert_eq!(FeedbackCategory::DeepFlexion.severity(), Severity::Red);
        assert!(FeedbackCategory::DeepFlexion.message().contains("too deep"));
    }

    #[test]
    fn test_assess_standing_and_bent() {
        let thresholds = FeedbackThresholds::default();
        let confidence = ConfidenceConfig::default();

        let standing = squat_frame((0.5, 0.3), (0.5, 0.6), (0.5, 0.9));
        let result = assess_joint(&standing, Joint::LeftKnee, &confidence, &thresholds).unwrap();
        assert_eq!(result.category(), Some(FeedbackCategory::Extended));
        assert!((result.angle().unwrap().degrees() - 180.0).abs() < 1e-9);

        let bent = squat_frame((0.5, 0.3), (0.5, 0.6), (0.7, 0.6));
        let result = assess_joint(&bent, Joint::LeftKnee, &confidence, &thresholds).unwrap();
        assert_eq!(result.category(), Some(FeedbackCategory::Bending));
        assert!((result.angle().unwrap().degrees() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_landmark_suppresses() {
        let frame = PoseLandmarks::empty()
            .with(PoseLandmark::LeftHip, Landmark::new(0.5, 0.3))
            .with(PoseLandmark::LeftKnee, Landmark::new(0.5, 0.6));
        let result = assess_joint(
            &frame,
            Joint::LeftKnee,
            &ConfidenceConfig::default(),
            &FeedbackThresholds::default(),
        )
        .unwrap();
        assert_eq!(
            result,
            JointAssessment::Suppressed {
                joint: Joint::LeftKnee,
                reason: SuppressionReason::MissingLandmark {
                    landmark: PoseLandmark::LeftAnkle
                },
            }
        );
    }

    #[test]
    fn test_low_visibility_suppresses() {
        let frame = squat_frame((0.5, 0.3), (0.5, 0.6), (0.5, 0.9)).with(
            PoseLandmark::LeftKnee,
            Landmark::new(0.5, 0.6).with_visibility(0.2),
        );
        let result = assess_joint(
            &frame,
            Joint::LeftKnee,
            &ConfidenceConfig::default(),
            &FeedbackThresholds::default(),
        )
        .unwrap();
        assert!(matches!(
            result,
            JointAssessment::Suppressed {
                reason: SuppressionReason::LowConfidence {
                    landmark: PoseLandmark::LeftKnee,
                    ..
                },
                ..
            }
        ));
        assert!(result.category().is_none());
    }

    #[test]
    fn test_non_finite_landmark_is_error() {
        let frame = squat_frame((f64::NAN, 0.3), (0.5, 0.6), (0.5, 0.9));
        let result = assess_joint(
            &frame,
            Joint::LeftKnee,
            &ConfidenceConfig::default(),
            &FeedbackThresholds::default(),
        );
        assert!(result.is_err());
    }
}
