// ABOUTME: Pull-based frame sources feeding landmark frames to the feedback session
// ABOUTME: Static single image, in-memory recording, and JSON-lines landmark streams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Frame sources
//!
//! The consumer owns pacing: it calls [`FrameSource::next_frame`] when it is
//! ready for another frame and stops whenever it likes. `None` means the
//! source is exhausted. A camera-backed source would implement the same
//! trait around its capture loop.
//!
//! JSON-lines format, one frame per line:
//!
//! ```text
//! {"timestamp_ms": 0, "landmarks": [null, ..., {"x": 0.5, "y": 0.6, "visibility": 0.9}, ...]}
//! {"timestamp_ms": 33, "landmarks": null}
//! ```
//!
//! `landmarks` holds exactly 33 entries (or `null` when no person was
//! detected). Blank lines are skipped.

use crate::landmarks::PoseLandmarks;
use pose_coach_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// One frame of pose-model output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    /// Zero-based position in the stream
    pub index: u64,
    /// Capture time, if the producer recorded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,
    /// Detected landmarks, `None` when no person was found
    pub landmarks: Option<PoseLandmarks>,
}

impl PoseFrame {
    /// Frame with detected landmarks
    #[must_use]
    pub const fn detected(index: u64, landmarks: PoseLandmarks) -> Self {
        Self {
            index,
            timestamp_ms: None,
            landmarks: Some(landmarks),
        }
    }

    /// Frame where no person was detected
    #[must_use]
    pub const fn empty(index: u64) -> Self {
        Self {
            index,
            timestamp_ms: None,
            landmarks: None,
        }
    }

    /// Attach a capture timestamp
    #[must_use]
    pub const fn at(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }
}

/// A pull-based stream of pose frames
pub trait FrameSource {
    /// Next frame, `None` at end of stream
    ///
    /// An `Err` item reports a frame that could not be read; the source may
    /// still yield further frames afterwards.
    fn next_frame(&mut self) -> Option<AppResult<PoseFrame>>;

    /// Borrow the source as an iterator
    fn frames(&mut self) -> Frames<'_, Self>
    where
        Self: Sized,
    {
        Frames { source: self }
    }
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn next_frame(&mut self) -> Option<AppResult<PoseFrame>> {
        (**self).next_frame()
    }
}

/// Iterator adapter returned by [`FrameSource::frames`]
#[derive(Debug)]
pub struct Frames<'a, S> {
    source: &'a mut S,
}

impl<S: FrameSource> Iterator for Frames<'_, S> {
    type Item = AppResult<PoseFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        self.source.next_frame()
    }
}

/// A single still image: yields exactly one frame
#[derive(Debug, Clone)]
pub struct StaticImageSource {
    frame: Option<PoseFrame>,
}

impl StaticImageSource {
    /// Wrap the landmarks detected in one image (`None` if nobody was found)
    #[must_use]
    pub const fn new(landmarks: Option<PoseLandmarks>) -> Self {
        Self {
            frame: Some(PoseFrame {
                index: 0,
                timestamp_ms: None,
                landmarks,
            }),
        }
    }
}

impl FrameSource for StaticImageSource {
    fn next_frame(&mut self) -> Option<AppResult<PoseFrame>> {
        self.frame.take().map(Ok)
    }
}

/// Frames already held in memory
#[derive(Debug, Clone)]
pub struct RecordedSource {
    frames: std::vec::IntoIter<PoseFrame>,
}

impl RecordedSource {
    /// Replay the given frames in order
    #[must_use]
    pub fn new(frames: Vec<PoseFrame>) -> Self {
        Self {
            frames: frames.into_iter(),
        }
    }
}

impl FrameSource for RecordedSource {
    fn next_frame(&mut self) -> Option<AppResult<PoseFrame>> {
        self.frames.next().map(Ok)
    }
}

#[derive(Debug, Deserialize)]
struct FrameRecord {
    #[serde(default)]
    timestamp_ms: Option<u64>,
    #[serde(default)]
    landmarks: Option<PoseLandmarks>,
}

/// Landmark frames read line by line from any buffered reader
#[derive(Debug)]
pub struct JsonLinesSource<R> {
    reader: R,
    line_number: usize,
    next_index: u64,
    buffer: String,
}

impl<R: BufRead> JsonLinesSource<R> {
    /// Read frames from `reader`
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            next_index: 0,
            buffer: String::new(),
        }
    }

    fn parse_line(&mut self) -> AppResult<PoseFrame> {
        let record: FrameRecord = serde_json::from_str(&self.buffer).map_err(|e| {
            AppError::from(e).with_details(serde_json::json!({ "line": self.line_number }))
        })?;
        let frame = PoseFrame {
            index: self.next_index,
            timestamp_ms: record.timestamp_ms,
            landmarks: record.landmarks,
        };
        self.next_index += 1;
        Ok(frame)
    }
}

impl JsonLinesSource<BufReader<File>> {
    /// Open a JSON-lines landmark file
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` if the file does not exist, or
    /// `ErrorCode::StorageError` for other I/O failures
    pub fn open(path: &Path) -> AppResult<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("frame file {}", path.display()))
            } else {
                AppError::from(e)
            }
        })?;
        debug!(path = %path.display(), "opened frame file");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> FrameSource for JsonLinesSource<R> {
    fn next_frame(&mut self) -> Option<AppResult<PoseFrame>> {
        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    if self.buffer.trim().is_empty() {
                        continue;
                    }
                    return Some(self.parse_line());
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
