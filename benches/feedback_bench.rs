// ABOUTME: Criterion benchmarks for joint-angle feedback
// ABOUTME: Measures angle computation, classification, and batch frame analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the feedback pipeline.
//!
//! Covers the per-frame hot path (angle plus classification) and the
//! sequential and parallel paths over recorded landmark streams.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pose_coach::config::CoachConfig;
use pose_coach::frames::{PoseFrame, RecordedSource};
use pose_coach::intelligence::classify;
use pose_coach::landmarks::{Joint, Landmark, PoseLandmark, PoseLandmarks};
use pose_coach::session::{analyze_frames, FeedbackSession};
use pose_coach::{compute_angle, Point2D};

/// Frame counts for the batch benchmarks
const FRAME_COUNTS: [usize; 3] = [30, 300, 3000];

/// Synthetic squat stream: the ankle swings around the knee once every 60 frames
#[allow(clippy::cast_precision_loss)]
fn generate_frames(count: usize) -> Vec<PoseFrame> {
    (0..count)
        .map(|index| {
            let phase = (index % 60) as f64 / 60.0 * std::f64::consts::TAU;
            let ankle_x = 0.5 + 0.3 * phase.sin().abs();
            let ankle_y = 0.6 + 0.3 * phase.cos();
            let landmarks = PoseLandmarks::empty()
                .with(PoseLandmark::LeftHip, Landmark::new(0.5, 0.3))
                .with(PoseLandmark::LeftKnee, Landmark::new(0.5, 0.6))
                .with(PoseLandmark::LeftAnkle, Landmark::new(ankle_x, ankle_y));
            PoseFrame::detected(index as u64, landmarks)
        })
        .collect()
}

fn bench_compute_angle(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_angle");

    let hip = Point2D::new(0.5, 0.3);
    let knee = Point2D::new(0.5, 0.6);
    let ankle = Point2D::new(0.7, 0.6);

    group.bench_function("single_triplet", |b| {
        b.iter(|| compute_angle(black_box(hip), black_box(knee), black_box(ankle)));
    });

    group.bench_function("angle_and_classify", |b| {
        b.iter(|| {
            compute_angle(black_box(hip), black_box(knee), black_box(ankle))
                .map(classify)
        });
    });

    group.finish();
}

fn bench_frame_streams(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_stream");
    let config = CoachConfig::default();

    for count in FRAME_COUNTS {
        let frames = generate_frames(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("session", count), &frames, |b, frames| {
            b.iter(|| {
                FeedbackSession::new(
                    RecordedSource::new(frames.clone()),
                    Joint::LeftKnee,
                    &config,
                )
                .run()
            });
        });

        group.bench_with_input(
            BenchmarkId::new("analyze_parallel", count),
            &frames,
            |b, frames| {
                b.iter(|| analyze_frames(black_box(frames), Joint::LeftKnee, &config));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compute_angle, bench_frame_streams);
criterion_main!(benches);
