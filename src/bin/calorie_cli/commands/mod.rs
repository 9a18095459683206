// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for calorie-cli
// ABOUTME: Provides access to the calculate and show commands

pub mod calculate;
pub mod show;
