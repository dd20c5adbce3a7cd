// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for pose-coach
// ABOUTME: Provides feedback, energy, routine plan, and workout log commands

pub mod energy;
pub mod feedback;
pub mod log;
pub mod plan;
