// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for pose-coach
// ABOUTME: Output formatting shared by the command modules

pub mod display;
