// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic scale enumeration and collision detection.
//!
//! Every seven-step whole/half pattern spanning an octave is spelled from
//! every registered root spelling, and the resulting scales are compared
//! pairwise for identical note content.

pub mod analysis;
pub mod config;
pub mod music;

pub use analysis::{find_collisions, generate_scales, Analysis, Collision, CollisionMode};
pub use config::AnalysisConfig;
pub use music::{build_scale, enumerate_diatonic_intervals, Interval, Scale, ScaleError};
