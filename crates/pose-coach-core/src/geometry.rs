// ABOUTME: Planar joint geometry: validated points, bounded angles, and the included-angle formula
// ABOUTME: Computes the angle at a vertex joint from two atan2 ray directions, folded into [0, 180]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Joint geometry
//!
//! The included angle at vertex `b` is the difference of the two ray
//! directions `b→c` and `b→a`, each taken with `atan2`:
//!
//! ```text
//! raw = atan2(c.y - b.y, c.x - b.x) - atan2(a.y - b.y, a.x - b.x)
//! deg = |raw| * 180 / π
//! deg = 360 - deg   if deg > 180
//! ```
//!
//! The signed difference of two `atan2` values spans `[-360°, 360°]`, so the
//! fold maps reflex readings back into `[0°, 180°]`.

use crate::constants::feedback::{FULL_TURN_DEG, STRAIGHT_ANGLE_DEG};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D coordinate in a caller-chosen frame (typically normalized image fractions)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate (image convention: grows downward)
    pub y: f64,
}

impl Point2D {
    /// Create a point without validation
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a point, rejecting NaN and infinite coordinates
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if either coordinate is not finite
    pub fn try_new(x: f64, y: f64) -> AppResult<Self> {
        let point = Self { x, y };
        point.validate("point")?;
        Ok(point)
    }

    /// Whether both coordinates are finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Reject non-finite coordinates, naming the offending point in the error
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if either coordinate is not finite
    pub fn validate(&self, name: &str) -> AppResult<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(AppError::invalid_input(format!(
                "{name} has non-finite coordinates ({}, {})",
                self.x, self.y
            ))
            .with_details(serde_json::json!({ "point": name })))
        }
    }

    /// Direction of the ray `self → to` in radians
    ///
    /// A zero-length ray has no direction; it is reported as 0 rather than
    /// relying on `atan2(0, 0)`.
    #[must_use]
    pub fn direction_to(&self, to: &Self) -> f64 {
        let dx = to.x - self.x;
        let dy = to.y - self.y;
        if dx == 0.0 && dy == 0.0 {
            0.0
        } else {
            dy.atan2(dx)
        }
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// An included angle in degrees, always within `[0, 180]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f64);

impl Angle {
    /// Straight (fully extended) angle
    pub const STRAIGHT: Self = Self(STRAIGHT_ANGLE_DEG);

    /// Zero angle
    pub const ZERO: Self = Self(0.0);

    /// Build an angle, clamping into `[0, 180]`
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` for NaN or infinite degrees
    pub fn from_degrees(degrees: f64) -> AppResult<Self> {
        if !degrees.is_finite() {
            return Err(AppError::invalid_input(format!(
                "angle must be finite, got {degrees}"
            )));
        }
        Ok(Self(degrees.clamp(0.0, STRAIGHT_ANGLE_DEG)))
    }

    /// Value in degrees
    #[must_use]
    pub const fn degrees(self) -> f64 {
        self.0
    }

    /// The smaller of two angles
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// The larger of two angles
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Whole degrees, truncated toward zero (as shown on overlays)
    #[must_use]
    pub fn whole_degrees(self) -> u8 {
        // Bounded to [0, 180] by construction
        self.0.trunc() as u8
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

/// Compute the included angle at vertex `b` formed by rays `b→a` and `b→c`
///
/// `a` is the proximal joint (e.g. hip), `b` the vertex (knee), `c` the distal
/// joint (ankle). The result is symmetric in `a` and `c`.
///
/// Degenerate geometry never fails: a zero-length ray contributes direction 0,
/// so coincident points yield a defined angle.
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` if any coordinate is NaN or infinite
pub fn compute_angle(a: Point2D, b: Point2D, c: Point2D) -> AppResult<Angle> {
    a.validate("proximal point")?;
    b.validate("vertex point")?;
    c.validate("distal point")?;

    let raw = b.direction_to(&c) - b.direction_to(&a);
    let mut degrees = raw.to_degrees().abs();
    if degrees > STRAIGHT_ANGLE_DEG {
        degrees = FULL_TURN_DEG - degrees;
    }

    Angle::from_degrees(degrees)
}
