// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic step patterns.
//!
//! An interval is seven whole (2) or half (1) steps that together span one
//! octave. Only patterns with exactly two half steps qualify.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::spelling::NOTES_PER_OCTAVE;

/// Steps in a diatonic interval
pub const DIATONIC_SCALE_SIZE: usize = 7;

/// Size of the {1,2}^7 candidate universe
pub const CANDIDATE_COUNT: usize = 1 << DIATONIC_SCALE_SIZE;

const HALF_STEP: u8 = 1;
const WHOLE_STEP: u8 = 2;

const MODE_NAMES: [&str; DIATONIC_SCALE_SIZE] = [
    "ionian",
    "dorian",
    "phrygian",
    "lydian",
    "mixolydian",
    "aeolian",
    "locrian",
];

/// A validated seven-step pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Interval([u8; DIATONIC_SCALE_SIZE]);

impl Interval {
    /// The major (ionian) step pattern
    pub const MAJOR: Interval = Interval([2, 2, 1, 2, 2, 2, 1]);

    /// Validate a step pattern
    ///
    /// Returns `None` unless every step is 1 or 2 and the steps sum to an
    /// octave.
    pub fn new(steps: [u8; DIATONIC_SCALE_SIZE]) -> Option<Self> {
        let in_range = steps.iter().all(|&s| s == HALF_STEP || s == WHOLE_STEP);
        let total: u32 = steps.iter().map(|&s| s as u32).sum();
        if in_range && total == NOTES_PER_OCTAVE as u32 {
            Some(Interval(steps))
        } else {
            None
        }
    }

    /// Validate a step pattern of arbitrary length
    pub fn from_slice(steps: &[u8]) -> Option<Self> {
        let steps: [u8; DIATONIC_SCALE_SIZE] = steps.try_into().ok()?;
        Self::new(steps)
    }

    /// The individual steps
    pub fn steps(&self) -> &[u8; DIATONIC_SCALE_SIZE] {
        &self.0
    }

    /// Church-mode name if this pattern is a rotation of the major scale
    pub fn mode_name(&self) -> Option<&'static str> {
        let major = Interval::MAJOR.0;
        (0..DIATONIC_SCALE_SIZE)
            .find(|&shift| {
                (0..DIATONIC_SCALE_SIZE)
                    .all(|i| self.0[i] == major[(i + shift) % DIATONIC_SCALE_SIZE])
            })
            .map(|shift| MODE_NAMES[shift])
    }
}

impl TryFrom<Vec<u8>> for Interval {
    type Error = String;

    fn try_from(steps: Vec<u8>) -> Result<Self, Self::Error> {
        Interval::from_slice(&steps)
            .ok_or_else(|| format!("{:?} is not a diatonic interval", steps))
    }
}

impl From<Interval> for Vec<u8> {
    fn from(interval: Interval) -> Self {
        interval.0.to_vec()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Every seven-step pattern of whole and half steps spanning one octave
///
/// Candidates are produced in Cartesian-product order: the last step varies
/// fastest and a half step comes before a whole step.
pub fn enumerate_diatonic_intervals() -> Vec<Interval> {
    let intervals: Vec<Interval> = (0..CANDIDATE_COUNT)
        .map(candidate_steps)
        .filter_map(Interval::new)
        .collect();

    info!(
        valid = intervals.len(),
        candidates = CANDIDATE_COUNT,
        "Found {} diatonic intervals in {} step combinations",
        intervals.len(),
        CANDIDATE_COUNT
    );
    intervals
}

/// Decode candidate `n` of the product; the high bit is the first step
fn candidate_steps(n: usize) -> [u8; DIATONIC_SCALE_SIZE] {
    let mut steps = [HALF_STEP; DIATONIC_SCALE_SIZE];
    for (i, step) in steps.iter_mut().enumerate() {
        if n & (1 << (DIATONIC_SCALE_SIZE - 1 - i)) != 0 {
            *step = WHOLE_STEP;
        }
    }
    steps
}
