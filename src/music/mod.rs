// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory module.

pub mod error;
pub mod interval;
pub mod scale;
pub mod spelling;

pub use error::ScaleError;
pub use interval::{enumerate_diatonic_intervals, Interval, CANDIDATE_COUNT, DIATONIC_SCALE_SIZE};
pub use scale::{build_scale, has_same_pitch_set, Scale};
pub use spelling::{all_root_note_names, pitch_class_of, Letter, PitchClass, ENHARMONIC_NOTES};
