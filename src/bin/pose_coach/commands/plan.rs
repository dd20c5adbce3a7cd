// ABOUTME: Routine plan command for pose-coach
// ABOUTME: Prints the weekly routine recommended for a goal and experience level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use pose_coach::intelligence::{recommend_plan, ExperienceLevel, TrainingGoal};

use crate::helpers::display::{display_plan, print_json};

/// Show the weekly plan
pub fn show(goal: TrainingGoal, level: ExperienceLevel, json: bool) -> Result<()> {
    let plan = recommend_plan(goal, level);
    if json {
        print_json(&plan)
    } else {
        display_plan(&plan);
        Ok(())
    }
}
