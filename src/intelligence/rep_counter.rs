// ABOUTME: Repetition counter driven by the per-frame feedback category of one joint
// ABOUTME: Counts extended -> flexed -> extended cycles and how many of them went too deep

//! A repetition starts when the joint is seen `Extended`, continues through
//! one or more flexed frames, and completes on the next `Extended` frame.
//! Suppressed frames are simply not fed in, so they neither break nor extend
//! a repetition.

use super::joint_feedback::FeedbackCategory;
use serde::{Deserialize, Serialize};

/// Counts completed repetitions from a category stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepCounter {
    armed: bool,
    in_rep: bool,
    went_deep: bool,
    completed: u32,
    deep: u32,
}

impl RepCounter {
    /// Fresh counter (waiting for the first extended frame)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one classified frame; returns `true` when it completes a repetition
    pub fn observe(&mut self, category: FeedbackCategory) -> bool {
        if category.is_flexed() {
            if self.armed {
                self.in_rep = true;
                self.went_deep |= category == FeedbackCategory::DeepFlexion;
            }
            return false;
        }

        self.armed = true;
        if !self.in_rep {
            return false;
        }
        self.completed += 1;
        if self.went_deep {
            self.deep += 1;
        }
        self.in_rep = false;
        self.went_deep = false;
        true
    }

    /// Completed repetitions
    #[must_use]
    pub const fn completed(&self) -> u32 {
        self.completed
    }

    /// Completed repetitions that reached deep flexion
    #[must_use]
    pub const fn too_deep(&self) -> u32 {
        self.deep
    }

    /// Whether a repetition is currently in progress
    #[must_use]
    pub const fn in_progress(&self) -> bool {
        self.in_rep
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeedbackCategory::{Bending, DeepFlexion, Extended};

    fn count(stream: &[FeedbackCategory]) -> RepCounter {
        let mut counter = RepCounter::new();
        for category in stream {
            counter.observe(*category);
        }
        counter
    }

    #[test]
    fn test_counts_full_cycles() {
        let counter = count(&[
            Extended, Bending, DeepFlexion, Bending, Extended, Extended, Bending, Extended,
        ]);
        assert_eq!(counter.completed(), 2);
        assert_eq!(counter.too_deep(), 1);
        assert!(!counter.in_progress());
    }

    #[test]
    fn test_starting_flexed_is_not_a_rep() {
        let counter = count(&[Bending, DeepFlexion, Extended]);
        assert_eq!(counter.completed(), 0);
    }

    #[test]
    fn test_unfinished_rep_is_not_counted() {
        let counter = count(&[Extended, Bending, Bending]);
        assert_eq!(counter.completed(), 0);
        assert!(counter.in_progress());
    }
}
