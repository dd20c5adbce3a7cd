// ABOUTME: Integration tests for the joint angle computation and feedback classification
// ABOUTME: Covers range, symmetry, collinear and right-angle cases, thresholds, and squat positions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pose_coach::config::{ConfidenceConfig, FeedbackThresholds};
use pose_coach::intelligence::{
    assess_joint, classify, classify_degrees, FeedbackCategory, Severity,
};
use pose_coach::landmarks::Joint;
use pose_coach::{compute_angle, Angle, ErrorCode, Point2D};

const EPS: f64 = 1e-9;

fn category_of(degrees: f64) -> FeedbackCategory {
    classify(Angle::from_degrees(degrees).unwrap())
}

fn angle_of(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    compute_angle(a.into(), b.into(), c.into())
        .unwrap()
        .degrees()
}

#[test]
fn test_angle_always_within_range() {
    // Sweep a grid of point triples, including reflex and degenerate layouts
    let coords = [-1.0, -0.3, 0.0, 0.2, 0.5, 1.0];
    for &ax in &coords {
        for &ay in &coords {
            for &cx in &coords {
                for &cy in &coords {
                    let angle = angle_of((ax, ay), (0.0, 0.0), (cx, cy));
                    assert!(
                        (0.0..=180.0).contains(&angle),
                        "angle {angle} out of range for ({ax},{ay}) ({cx},{cy})"
                    );
                }
            }
        }
    }
}

#[test]
fn test_angle_is_symmetric_in_outer_points() {
    let cases = [
        ((0.1, 0.9), (0.4, 0.4), (0.8, 0.7)),
        ((-0.5, 0.2), (0.0, 0.0), (0.3, -0.9)),
        ((0.5, 0.3), (0.5, 0.6), (0.6, 0.4)),
    ];
    for (a, b, c) in cases {
        assert!((angle_of(a, b, c) - angle_of(c, b, a)).abs() < EPS);
    }
}

#[test]
fn test_collinear_with_vertex_between_is_straight() {
    assert!((angle_of((0.0, 0.0), (1.0, 1.0), (2.0, 2.0)) - 180.0).abs() < EPS);
    assert!((angle_of((0.2, 0.5), (0.4, 0.5), (0.9, 0.5)) - 180.0).abs() < EPS);
}

#[test]
fn test_right_angle_reference() {
    assert!((angle_of((0.0, 1.0), (0.0, 0.0), (1.0, 0.0)) - 90.0).abs() < EPS);
}

#[test]
fn test_threshold_boundaries() {
    assert_eq!(category_of(160.0), FeedbackCategory::Bending);
    assert_eq!(category_of(160.0001), FeedbackCategory::Extended);
    assert_eq!(category_of(70.0), FeedbackCategory::DeepFlexion);
    assert_eq!(category_of(70.0001), FeedbackCategory::Bending);
    assert_eq!(category_of(0.0), FeedbackCategory::DeepFlexion);
    assert_eq!(category_of(180.0), FeedbackCategory::Extended);
}

#[test]
fn test_non_finite_reading_has_no_category() {
    let thresholds = FeedbackThresholds::default();

    let err = classify_degrees(f64::NAN, &thresholds).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(classify_degrees(f64::INFINITY, &thresholds).is_err());
    assert!(Angle::from_degrees(f64::NAN).is_err());

    // Out-of-range finite readings are clamped, not rejected
    assert_eq!(
        classify_degrees(-5.0, &thresholds).unwrap(),
        FeedbackCategory::DeepFlexion
    );
    assert_eq!(
        classify_degrees(200.0, &thresholds).unwrap(),
        FeedbackCategory::Extended
    );
}

#[test]
fn test_standing_knee_is_extended() {
    let hip = Point2D::new(0.5, 0.3);
    let knee = Point2D::new(0.5, 0.6);
    let ankle = Point2D::new(0.5, 0.9);

    let angle = compute_angle(hip, knee, ankle).unwrap();
    assert!((angle.degrees() - 180.0).abs() < EPS);
    let category = classify(angle);
    assert_eq!(category, FeedbackCategory::Extended);
    assert_eq!(category.severity(), Severity::Green);
}

#[test]
fn test_half_squat_knee_is_bending() {
    let hip = Point2D::new(0.5, 0.3);
    let knee = Point2D::new(0.5, 0.6);
    let ankle = Point2D::new(0.7, 0.6);

    let angle = compute_angle(hip, knee, ankle).unwrap();
    assert!((angle.degrees() - 90.0).abs() < EPS);
    assert_eq!(classify(angle), FeedbackCategory::Bending);
}

#[test]
fn test_degenerate_geometry_is_defined() {
    // All three points coincide: both rays have direction 0
    assert!(angle_of((0.3, 0.3), (0.3, 0.3), (0.3, 0.3)).abs() < EPS);
    // Vertex coincides with the proximal point
    let angle = angle_of((0.5, 0.5), (0.5, 0.5), (0.5, 0.9));
    assert!((0.0..=180.0).contains(&angle));
}

#[test]
fn test_non_finite_input_rejected() {
    let bad = Point2D::new(f64::NAN, 0.5);
    let ok = Point2D::new(0.5, 0.5);
    let err = compute_angle(bad, ok, ok).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = compute_angle(ok, ok, Point2D::new(0.1, f64::INFINITY)).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(Point2D::try_new(f64::NEG_INFINITY, 0.0).is_err());
}

#[test]
fn test_assess_joint_on_squat_positions() {
    common::init_test_logging();
    let thresholds = FeedbackThresholds::default();
    let confidence = ConfidenceConfig::default();

    let expectations = [
        (common::STANDING, FeedbackCategory::Extended),
        (common::HALF_SQUAT, FeedbackCategory::Bending),
        (common::DEEP_SQUAT, FeedbackCategory::DeepFlexion),
    ];
    for (points, expected) in expectations {
        let assessment = assess_joint(
            &common::left_leg(points),
            Joint::LeftKnee,
            &confidence,
            &thresholds,
        )
        .unwrap();
        assert_eq!(assessment.category(), Some(expected));
        assert_eq!(assessment.joint(), Joint::LeftKnee);
    }
}

#[test]
fn test_other_side_is_suppressed_when_absent() {
    let assessment = assess_joint(
        &common::left_leg(common::STANDING),
        Joint::RightKnee,
        &ConfidenceConfig::default(),
        &FeedbackThresholds::default(),
    )
    .unwrap();
    assert!(assessment.category().is_none());
}
