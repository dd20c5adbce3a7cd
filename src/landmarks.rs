// ABOUTME: Pose landmark model: 33-point body topology, per-frame landmark sets, and joint triplets
// ABOUTME: Maps a named joint (left knee, right elbow, ...) to its proximal, vertex, and distal landmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pose landmarks
//!
//! The pose-estimation model is an external collaborator. This module only
//! describes the shape of its output: 33 landmarks per frame in normalized
//! image coordinates, each with an optional visibility score. A landmark the
//! model did not report is stored as `None`.

use pose_coach_core::constants::landmarks::POSE_LANDMARK_COUNT;
use pose_coach_core::{AppError, AppResult, Point2D};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single body landmark in normalized image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, fraction of image width
    pub x: f64,
    /// Vertical position, fraction of image height
    pub y: f64,
    /// Relative depth (unused by the planar angle)
    #[serde(default)]
    pub z: f64,
    /// Model confidence that the landmark is visible (0-1)
    #[serde(default = "full_visibility")]
    pub visibility: f64,
}

const fn full_visibility() -> f64 {
    1.0
}

impl Landmark {
    /// Fully visible landmark at `(x, y)`
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: 0.0,
            visibility: 1.0,
        }
    }

    /// Same landmark with a different visibility score
    #[must_use]
    pub const fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = visibility;
        self
    }

    /// Planar position
    #[must_use]
    pub const fn point(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Landmark indices of the 33-point pose topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum PoseLandmark {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl PoseLandmark {
    /// Position in the model's output array
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PoseLandmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// All landmarks reported for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<Landmark>>", into = "Vec<Option<Landmark>>")]
pub struct PoseLandmarks {
    points: Vec<Option<Landmark>>,
}

impl PoseLandmarks {
    /// Build from the model's 33-element output
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidFormat` if the slot count is not 33
    pub fn new(points: Vec<Option<Landmark>>) -> AppResult<Self> {
        if points.len() != POSE_LANDMARK_COUNT {
            return Err(AppError::invalid_format(format!(
                "expected {POSE_LANDMARK_COUNT} pose landmarks, got {}",
                points.len()
            )));
        }
        Ok(Self { points })
    }

    /// A frame where every landmark is missing
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: vec![None; POSE_LANDMARK_COUNT],
        }
    }

    /// Set one landmark, returning the updated frame
    #[must_use]
    pub fn with(mut self, which: PoseLandmark, landmark: Landmark) -> Self {
        self.points[which.index()] = Some(landmark);
        self
    }

    /// Look up a landmark
    #[must_use]
    pub fn get(&self, which: PoseLandmark) -> Option<&Landmark> {
        self.points.get(which.index()).and_then(Option::as_ref)
    }

    /// Number of landmarks the model reported
    #[must_use]
    pub fn reported_count(&self) -> usize {
        self.points.iter().filter(|point| point.is_some()).count()
    }
}

impl TryFrom<Vec<Option<Landmark>>> for PoseLandmarks {
    type Error = AppError;

    fn try_from(points: Vec<Option<Landmark>>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<PoseLandmarks> for Vec<Option<Landmark>> {
    fn from(landmarks: PoseLandmarks) -> Self {
        landmarks.points
    }
}

/// A body joint whose included angle can be assessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    /// Hip → knee → ankle (squat depth)
    #[default]
    LeftKnee,
    /// Hip → knee → ankle, right side
    RightKnee,
    /// Shoulder → elbow → wrist (push-up / curl range)
    LeftElbow,
    /// Shoulder → elbow → wrist, right side
    RightElbow,
    /// Shoulder → hip → knee (hinge / trunk lean)
    LeftHip,
    /// Shoulder → hip → knee, right side
    RightHip,
    /// Elbow → shoulder → hip (arm raise)
    LeftShoulder,
    /// Elbow → shoulder → hip, right side
    RightShoulder,
}

impl Joint {
    /// Every supported joint
    pub const ALL: [Self; 8] = [
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftShoulder,
        Self::RightShoulder,
    ];

    /// Landmarks `(proximal, vertex, distal)` forming this joint
    #[must_use]
    pub const fn triplet(self) -> (PoseLandmark, PoseLandmark, PoseLandmark) {
        use PoseLandmark as L;
        match self {
            Self::LeftKnee => (L::LeftHip, L::LeftKnee, L::LeftAnkle),
            Self::RightKnee => (L::RightHip, L::RightKnee, L::RightAnkle),
            Self::LeftElbow => (L::LeftShoulder, L::LeftElbow, L::LeftWrist),
            Self::RightElbow => (L::RightShoulder, L::RightElbow, L::RightWrist),
            Self::LeftHip => (L::LeftShoulder, L::LeftHip, L::LeftKnee),
            Self::RightHip => (L::RightShoulder, L::RightHip, L::RightKnee),
            Self::LeftShoulder => (L::LeftElbow, L::LeftShoulder, L::LeftHip),
            Self::RightShoulder => (L::RightElbow, L::RightShoulder, L::RightHip),
        }
    }

    /// Kebab-case name used on the command line and in logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftKnee => "left-knee",
            Self::RightKnee => "right-knee",
            Self::LeftElbow => "left-elbow",
            Self::RightElbow => "right-elbow",
            Self::LeftHip => "left-hip",
            Self::RightHip => "right-hip",
            Self::LeftShoulder => "left-shoulder",
            Self::RightShoulder => "right-shoulder",
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Joint {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|joint| joint.name() == normalized)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|joint| joint.name()).collect();
                AppError::invalid_input(format!(
                    "Unknown joint: '{s}'. Valid options: {}",
                    valid.join(", ")
                ))
            })
    }
}
