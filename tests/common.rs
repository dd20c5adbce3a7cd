// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging setup and landmark frame builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pose_coach`

use pose_coach::frames::PoseFrame;
use pose_coach::landmarks::{Landmark, PoseLandmark, PoseLandmarks};
use std::io::Write;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standing hip/knee/ankle positions (180° at the left knee)
pub const STANDING: [(f64, f64); 3] = [(0.5, 0.3), (0.5, 0.6), (0.5, 0.9)];
/// Half squat (90° at the left knee)
pub const HALF_SQUAT: [(f64, f64); 3] = [(0.5, 0.3), (0.5, 0.6), (0.7, 0.6)];
/// Deep squat (about 27° at the left knee)
pub const DEEP_SQUAT: [(f64, f64); 3] = [(0.5, 0.3), (0.5, 0.6), (0.6, 0.4)];

/// Landmarks with only the left leg populated
pub fn left_leg(points: [(f64, f64); 3]) -> PoseLandmarks {
    let [hip, knee, ankle] = points;
    PoseLandmarks::empty()
        .with(PoseLandmark::LeftHip, Landmark::new(hip.0, hip.1))
        .with(PoseLandmark::LeftKnee, Landmark::new(knee.0, knee.1))
        .with(PoseLandmark::LeftAnkle, Landmark::new(ankle.0, ankle.1))
}

/// A frame with the left leg in the given position
pub fn leg_frame(index: u64, points: [(f64, f64); 3]) -> PoseFrame {
    PoseFrame::detected(index, left_leg(points)).at(index * 33)
}

/// Serialize frames as JSON lines (without their index)
pub fn write_json_lines<W: Write>(mut writer: W, frames: &[PoseFrame]) {
    for frame in frames {
        let line = serde_json::json!({
            "timestamp_ms": frame.timestamp_ms,
            "landmarks": frame.landmarks,
        });
        writeln!(writer, "{line}").unwrap();
    }
}
