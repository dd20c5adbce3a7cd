// ABOUTME: Overlay anchoring for the angle readout and feedback banner shown over a video frame
// ABOUTME: Converts normalized landmark coordinates to pixels; drawing is left to the display layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Overlay placement
//!
//! The angle is drawn as a whole number next to the vertex joint; the
//! coaching cue is drawn as a fixed banner in the top-left corner.

use crate::config::OverlayConfig;
use crate::intelligence::{JointAssessment, Severity};
use crate::landmarks::PoseLandmarks;
use pose_coach_core::constants::overlay::BANNER_ORIGIN_PX;
use serde::{Deserialize, Serialize};

/// A piece of text anchored at a pixel position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayLabel {
    /// Text to draw
    pub text: String,
    /// Horizontal pixel position (may fall outside the frame)
    pub pixel_x: i32,
    /// Vertical pixel position (may fall outside the frame)
    pub pixel_y: i32,
}

/// Everything drawn for one classified frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameOverlay {
    /// Angle readout at the vertex joint
    pub angle: OverlayLabel,
    /// Coaching cue banner
    pub banner: OverlayLabel,
    /// Banner color
    pub severity: Severity,
}

/// Scale a normalized coordinate to pixels, truncating toward zero
fn to_pixel(normalized: f64, extent_px: u32) -> i32 {
    (normalized * f64::from(extent_px)) as i32
}

/// Build the overlay for an assessment
///
/// Returns `None` for a suppressed assessment: nothing is drawn when the
/// joint could not be trusted.
#[must_use]
pub fn frame_overlay(
    landmarks: &PoseLandmarks,
    assessment: &JointAssessment,
    config: &OverlayConfig,
) -> Option<FrameOverlay> {
    let JointAssessment::Classified {
        joint,
        angle,
        category,
    } = assessment
    else {
        return None;
    };
    let (_, vertex, _) = joint.triplet();
    let anchor = landmarks.get(vertex)?;

    let (banner_x, banner_y) = BANNER_ORIGIN_PX;
    Some(FrameOverlay {
        angle: OverlayLabel {
            text: angle.whole_degrees().to_string(),
            pixel_x: to_pixel(anchor.x, config.frame_width_px),
            pixel_y: to_pixel(anchor.y, config.frame_height_px),
        },
        banner: OverlayLabel {
            text: category.message().to_owned(),
            pixel_x: banner_x,
            pixel_y: banner_y,
        },
        severity: category.severity(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::FeedbackCategory;
    use crate::landmarks::{Joint, Landmark, PoseLandmark};
    use pose_coach_core::Angle;

    #[test]
    fn test_angle_label_at_knee_pixels() {
        let landmarks =
            PoseLandmarks::empty().with(PoseLandmark::LeftKnee, Landmark::new(0.5, 0.6));
        let assessment = JointAssessment::Classified {
            joint: Joint::LeftKnee,
            angle: Angle::from_degrees(89.97).unwrap(),
            category: FeedbackCategory::Bending,
        };

        let overlay =
            frame_overlay(&landmarks, &assessment, &OverlayConfig::default()).unwrap();
        assert_eq!(overlay.angle.text, "89");
        assert_eq!((overlay.angle.pixel_x, overlay.angle.pixel_y), (320, 288));
        assert_eq!((overlay.banner.pixel_x, overlay.banner.pixel_y), (30, 50));
        assert_eq!(overlay.severity, Severity::Yellow);
    }

    #[test]
    fn test_suppressed_draws_nothing() {
        let assessment = JointAssessment::Suppressed {
            joint: Joint::LeftKnee,
            reason: crate::intelligence::SuppressionReason::MissingLandmark {
                landmark: PoseLandmark::LeftKnee,
            },
        };
        assert!(
            frame_overlay(&PoseLandmarks::empty(), &assessment, &OverlayConfig::default())
                .is_none()
        );
    }
}
