// ABOUTME: Angle and feedback commands for pose-coach
// ABOUTME: Classifies a single point triple or runs a feedback session over a JSON-lines stream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use pose_coach::config::CoachConfig;
use pose_coach::frames::{FrameSource, JsonLinesSource};
use pose_coach::intelligence::classify_with;
use pose_coach::landmarks::Joint;
use pose_coach::session::{is_stream_fatal, FeedbackSession};
use pose_coach::{compute_angle, Point2D};
use serde_json::json;
use std::io;
use std::path::Path;
use tracing::info;

use crate::helpers::display::{display_frame_feedback, display_session_summary, print_json};

/// Angle at `b` and its category
pub fn angle(a: Point2D, b: Point2D, c: Point2D, config: &CoachConfig, json: bool) -> Result<()> {
    let angle = compute_angle(a, b, c)?;
    let category = classify_with(angle, &config.feedback);

    if json {
        print_json(&json!({
            "angle_deg": angle.degrees(),
            "category": category,
            "severity": category.severity(),
            "message": category.message(),
        }))
    } else {
        println!("{angle}  {category} ({})", category.severity());
        println!("{}", category.message());
        Ok(())
    }
}

/// Feedback session over a frame file (or stdin for "-")
pub fn run(
    input: &Path,
    joint: Joint,
    summary_only: bool,
    config: &CoachConfig,
    json: bool,
) -> Result<()> {
    info!(input = %input.display(), joint = %joint, "starting feedback session");

    if input == Path::new("-") {
        let stdin = io::stdin();
        drive(JsonLinesSource::new(stdin.lock()), joint, summary_only, config, json)
    } else {
        let source = JsonLinesSource::open(input)
            .with_context(|| format!("failed to open {}", input.display()))?;
        drive(source, joint, summary_only, config, json)
    }
}

fn drive<S: FrameSource>(
    source: S,
    joint: Joint,
    summary_only: bool,
    config: &CoachConfig,
    json: bool,
) -> Result<()> {
    let mut session = FeedbackSession::new(source, joint, config);

    while let Some(feedback) = session.next_feedback() {
        let feedback = match feedback {
            Ok(feedback) => feedback,
            Err(e) if is_stream_fatal(&e) => return Err(e.into()),
            Err(e) => {
                if !json {
                    eprintln!("skipped frame: {e}");
                }
                continue;
            }
        };
        if summary_only {
            continue;
        }
        if json {
            println!("{}", serde_json::to_string(&feedback)?);
        } else {
            display_frame_feedback(&feedback);
        }
    }

    let summary = session.summary();
    if json {
        print_json(summary)
    } else {
        display_session_summary(summary);
        Ok(())
    }
}
