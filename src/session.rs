// ABOUTME: Feedback session pulling frames from a source and assessing one joint per frame
// ABOUTME: Produces per-frame feedback with overlay anchors and an aggregate session summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Feedback sessions
//!
//! A [`FeedbackSession`] is the consumer end of a [`FrameSource`]. Each call
//! to [`FeedbackSession::next_feedback`] pulls one frame, assesses the
//! configured joint and updates the running [`SessionSummary`]. Dropping the
//! session at any point stops processing; nothing runs in the background.
//!
//! Recorded footage that is already in memory can be assessed in parallel
//! with [`analyze_frames`]; repetition counting then runs over the ordered
//! results.
//!
//! A frame that cannot be read or assessed is counted in
//! [`SessionSummary::errors`] and skipped. Only I/O failures of the source
//! end the stream (see [`is_stream_fatal`]).

use crate::config::{CoachConfig, ConfidenceConfig, FeedbackThresholds, OverlayConfig};
use crate::frames::{FrameSource, PoseFrame};
use crate::intelligence::{
    assess_joint, FeedbackCategory, JointAssessment, RepCounter, SuppressionReason,
};
use crate::landmarks::Joint;
use crate::overlay::{frame_overlay, FrameOverlay};
use pose_coach_core::{AppError, AppResult, Angle, ErrorCode};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Per-category frame counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    /// Frames classified `Extended`
    pub extended: u64,
    /// Frames classified `Bending`
    pub bending: u64,
    /// Frames classified `DeepFlexion`
    pub deep_flexion: u64,
}

impl CategoryCounts {
    fn record(&mut self, category: FeedbackCategory) {
        match category {
            FeedbackCategory::Extended => self.extended += 1,
            FeedbackCategory::Bending => self.bending += 1,
            FeedbackCategory::DeepFlexion => self.deep_flexion += 1,
        }
    }

    /// Count for one category
    #[must_use]
    pub const fn get(&self, category: FeedbackCategory) -> u64 {
        match category {
            FeedbackCategory::Extended => self.extended,
            FeedbackCategory::Bending => self.bending,
            FeedbackCategory::DeepFlexion => self.deep_flexion,
        }
    }
}

/// Aggregate results of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Joint that was tracked
    pub joint: Joint,
    /// Frames pulled from the source
    pub frames: u64,
    /// Frames with a classified angle
    pub classified: u64,
    /// Frames whose assessment was suppressed
    pub suppressed: u64,
    /// Frames skipped because they could not be read or assessed
    #[serde(default)]
    pub errors: u64,
    /// Classified frames per category
    pub categories: CategoryCounts,
    /// Smallest angle seen (deepest flexion)
    pub min_angle: Option<Angle>,
    /// Largest angle seen
    pub max_angle: Option<Angle>,
    /// Completed repetitions
    pub reps: u32,
    /// Completed repetitions that reached deep flexion
    pub reps_too_deep: u32,
    #[serde(skip)]
    counter: RepCounter,
}

impl SessionSummary {
    /// Empty summary for a joint
    #[must_use]
    pub fn new(joint: Joint) -> Self {
        Self {
            joint,
            frames: 0,
            classified: 0,
            suppressed: 0,
            errors: 0,
            categories: CategoryCounts::default(),
            min_angle: None,
            max_angle: None,
            reps: 0,
            reps_too_deep: 0,
            counter: RepCounter::new(),
        }
    }

    /// Fold one frame's assessment in; returns `true` if it completed a repetition
    pub fn record(&mut self, assessment: &JointAssessment) -> bool {
        self.frames += 1;
        let JointAssessment::Classified {
            angle, category, ..
        } = assessment
        else {
            self.suppressed += 1;
            return false;
        };

        self.classified += 1;
        self.categories.record(*category);
        self.min_angle = Some(self.min_angle.map_or(*angle, |min| min.min(*angle)));
        self.max_angle = Some(self.max_angle.map_or(*angle, |max| max.max(*angle)));

        let completed = self.counter.observe(*category);
        self.reps = self.counter.completed();
        self.reps_too_deep = self.counter.too_deep();
        completed
    }

    /// Summarize an ordered sequence of assessments
    #[must_use]
    pub fn from_assessments<'a>(
        joint: Joint,
        assessments: impl IntoIterator<Item = &'a JointAssessment>,
    ) -> Self {
        let mut summary = Self::new(joint);
        for assessment in assessments {
            summary.record(assessment);
        }
        summary
    }

    /// Fraction of frames that produced a cue
    #[must_use]
    pub fn classified_ratio(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.classified as f64 / self.frames as f64
        }
    }
}

/// Feedback produced for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameFeedback {
    /// Position of the frame in the stream
    pub frame_index: u64,
    /// Capture time, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,
    /// Joint assessment
    pub assessment: JointAssessment,
    /// Overlay anchors, absent when the assessment was suppressed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<FrameOverlay>,
    /// Whether this frame completed a repetition
    pub rep_completed: bool,
}

/// Settings a session needs from the coach configuration
#[derive(Debug, Clone, Copy, PartialEq)]
struct SessionSettings {
    thresholds: FeedbackThresholds,
    confidence: ConfidenceConfig,
    overlay: OverlayConfig,
}

impl From<&CoachConfig> for SessionSettings {
    fn from(config: &CoachConfig) -> Self {
        Self {
            thresholds: config.feedback,
            confidence: config.confidence,
            overlay: config.overlay,
        }
    }
}

/// Whether a frame error ends the stream
///
/// I/O failures of the source are fatal. Malformed lines and frames with
/// unusable landmarks only cost that one frame.
#[must_use]
pub fn is_stream_fatal(error: &AppError) -> bool {
    error.code == ErrorCode::StorageError
}

/// Assess one frame for one joint
///
/// A frame without a detected person yields a `Suppressed` assessment.
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` if a trusted landmark has non-finite coordinates
pub fn assess_frame(
    frame: &PoseFrame,
    joint: Joint,
    config: &CoachConfig,
) -> AppResult<JointAssessment> {
    assess_with(frame, joint, &SessionSettings::from(config))
}

fn assess_with(
    frame: &PoseFrame,
    joint: Joint,
    settings: &SessionSettings,
) -> AppResult<JointAssessment> {
    let Some(landmarks) = &frame.landmarks else {
        return Ok(JointAssessment::Suppressed {
            joint,
            reason: SuppressionReason::NoPoseDetected,
        });
    };
    assess_joint(landmarks, joint, &settings.confidence, &settings.thresholds)
}

/// Assess recorded frames in parallel, preserving frame order
///
/// # Errors
///
/// Returns an error if any frame has non-finite trusted landmarks
pub fn analyze_frames(
    frames: &[PoseFrame],
    joint: Joint,
    config: &CoachConfig,
) -> AppResult<Vec<JointAssessment>> {
    let settings = SessionSettings::from(config);
    debug!(frames = frames.len(), joint = %joint, "analyzing recorded frames");
    frames
        .par_iter()
        .map(|frame| assess_with(frame, joint, &settings))
        .collect()
}

/// Pulls frames from a source and assesses one joint per frame
#[derive(Debug)]
pub struct FeedbackSession<S> {
    source: S,
    joint: Joint,
    settings: SessionSettings,
    summary: SessionSummary,
}

impl<S: FrameSource> FeedbackSession<S> {
    /// Create a session over `source` tracking `joint`
    pub fn new(source: S, joint: Joint, config: &CoachConfig) -> Self {
        Self {
            source,
            joint,
            settings: SessionSettings::from(config),
            summary: SessionSummary::new(joint),
        }
    }

    /// Pull and assess the next frame; `None` at end of stream
    ///
    /// Errors are returned to the caller and, unless they end the stream,
    /// counted in the summary. The caller may keep pulling after a
    /// non-fatal error.
    pub fn next_feedback(&mut self) -> Option<AppResult<FrameFeedback>> {
        let result = self
            .source
            .next_frame()?
            .and_then(|frame| self.process(&frame));
        if let Err(e) = &result {
            if !is_stream_fatal(e) {
                self.summary.errors += 1;
                warn!(
                    line = ?e.details.get("line"),
                    code = ?e.code,
                    error = %e,
                    "skipping unreadable frame"
                );
            }
        }
        Some(result)
    }

    fn process(&mut self, frame: &PoseFrame) -> AppResult<FrameFeedback> {
        let assessment = assess_with(frame, self.joint, &self.settings)?;
        let rep_completed = self.summary.record(&assessment);

        match &assessment {
            JointAssessment::Classified {
                angle, category, ..
            } => debug!(
                frame = frame.index,
                angle = angle.degrees(),
                category = %category,
                "frame classified"
            ),
            JointAssessment::Suppressed { reason, .. } => {
                warn!(frame = frame.index, reason = %reason, "feedback suppressed");
            }
        }
        if rep_completed {
            debug!(frame = frame.index, reps = self.summary.reps, "repetition completed");
        }

        let overlay = frame
            .landmarks
            .as_ref()
            .and_then(|landmarks| frame_overlay(landmarks, &assessment, &self.settings.overlay));

        Ok(FrameFeedback {
            frame_index: frame.index,
            timestamp_ms: frame.timestamp_ms,
            assessment,
            overlay,
            rep_completed,
        })
    }

    /// Summary of the frames processed so far
    pub const fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Drain the source and return the final summary
    ///
    /// # Errors
    ///
    /// Returns the first I/O error of the source; other frame errors are
    /// counted in [`SessionSummary::errors`]
    pub fn run(mut self) -> AppResult<SessionSummary> {
        while let Some(feedback) = self.next_feedback() {
            if let Some(e) = feedback.err().filter(is_stream_fatal) {
                return Err(e);
            }
        }
        info!(
            joint = %self.joint,
            frames = self.summary.frames,
            classified = self.summary.classified,
            suppressed = self.summary.suppressed,
            errors = self.summary.errors,
            reps = self.summary.reps,
            "feedback session finished"
        );
        Ok(self.summary)
    }
}
