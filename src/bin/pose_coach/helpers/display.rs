// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for pose-coach
// ABOUTME: Text and JSON rendering of feedback, summaries, plans, and log aggregates

use anyhow::Result;
use pose_coach::intelligence::{EnergySnapshot, JointAssessment, WeeklyPlan};
use pose_coach::session::{FrameFeedback, SessionSummary};
use pose_coach::workout_log::{RecentSummary, WeeklyVolume};
use serde::Serialize;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One line per frame
pub fn display_frame_feedback(feedback: &FrameFeedback) {
    match &feedback.assessment {
        JointAssessment::Classified {
            angle, category, ..
        } => {
            let rep = if feedback.rep_completed { "  [rep]" } else { "" };
            println!(
                "frame {:>5}  {:>3}°  {:<8} {}{rep}",
                feedback.frame_index,
                angle.whole_degrees(),
                category.severity(),
                category.message()
            );
        }
        JointAssessment::Suppressed { reason, .. } => {
            println!("frame {:>5}  ---   skipped  {reason}", feedback.frame_index);
        }
    }
}

/// Session totals
pub fn display_session_summary(summary: &SessionSummary) {
    println!("\nSession summary ({})", summary.joint);
    println!("{}", "=".repeat(40));
    println!("   Frames:      {}", summary.frames);
    println!(
        "   Classified:  {} ({:.0}%)",
        summary.classified,
        summary.classified_ratio() * 100.0
    );
    println!("   Suppressed:  {}", summary.suppressed);
    if summary.errors > 0 {
        println!("   Skipped:     {} unreadable frame(s)", summary.errors);
    }
    println!(
        "   Extended / bending / too deep: {} / {} / {}",
        summary.categories.extended, summary.categories.bending, summary.categories.deep_flexion
    );
    if let (Some(min), Some(max)) = (summary.min_angle, summary.max_angle) {
        println!("   Angle range: {min} - {max}");
    }
    println!("   Reps:        {}", summary.reps);
    if summary.reps_too_deep > 0 {
        println!(
            "   WARNING {} rep(s) went too deep, watch knee strain",
            summary.reps_too_deep
        );
    }
}

/// BMI / BMR / TDEE
pub fn display_energy(snapshot: &EnergySnapshot) {
    println!("BMI:  {:.1}", snapshot.bmi);
    println!("BMR:  {} kcal/day", snapshot.bmr.trunc());
    println!("TDEE: {} kcal/day", snapshot.tdee.trunc());
}

/// Weekly plan, one block per day
pub fn display_plan(plan: &WeeklyPlan) {
    println!(
        "Weekly routine: {} ({})",
        plan.goal.name(),
        plan.level.name()
    );
    println!("{}", "=".repeat(50));
    for day in &plan.days {
        println!("{}:", day.day);
        if day.items.is_empty() {
            println!("   rest");
        }
        for item in &day.items {
            println!("   • {item}");
        }
    }
}

/// Recent-window totals
pub fn display_recent(summary: &RecentSummary) {
    println!("Since {} ({} sessions)", summary.since, summary.sessions);
    println!("   Minutes:   {}", summary.total_minutes);
    println!("   Sets:      {}", summary.total_sets);
    println!("   Est. kcal: {}", summary.estimated_kcal.trunc());
}

/// Weekly volume table
pub fn display_volume(weeks: &[WeeklyVolume]) {
    if weeks.is_empty() {
        println!("No workouts logged yet.");
        return;
    }
    println!("{:<10} {:<12} {:>10}", "week", "starting", "volume");
    for week in weeks {
        println!(
            "{:<10} {:<12} {:>10.0}",
            week.week,
            week.week_start.to_string(),
            week.volume
        );
    }
}
