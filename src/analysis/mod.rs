// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale generation and collision analysis.
//!
//! This module provides:
//! - Building every spellable scale from intervals and root spellings
//! - Pairwise collision search
//! - The textual report printed by the command-line driver

pub mod collision;

pub use collision::{find_collisions, find_collisions_with, Collision, CollisionMode, CollisionSearch};

use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::config::AnalysisConfig;
use crate::music::{
    all_root_note_names, enumerate_diatonic_intervals, Interval, Scale, ScaleError, CANDIDATE_COUNT,
};

/// Scales built from a set of intervals and roots
#[derive(Debug, Clone, Default)]
pub struct Generation {
    /// Successfully spelled scales, interval-major order
    pub scales: Vec<Scale>,
    /// Combinations dropped because they could not be spelled
    pub skipped: usize,
}

/// Build a scale for every (interval, root) pair that can be spelled
///
/// Unspellable combinations are logged at debug level and left out. Roots
/// missing from the enharmonic table are logged as warnings and are not
/// counted as skipped.
pub fn generate_scales(intervals: &[Interval], roots: &[&str]) -> Generation {
    let mut generation = Generation::default();

    for &interval in intervals {
        for &root in roots {
            match Scale::build(root, interval) {
                Ok(scale) => generation.scales.push(scale),
                Err(e @ ScaleError::Unspellable { .. }) => {
                    debug!("Scale is impossible: {}", e);
                    generation.skipped += 1;
                }
                Err(e @ ScaleError::UnknownNote { .. }) => {
                    warn!("Skipping root: {}", e);
                }
            }
        }
    }

    info!(
        generated = generation.scales.len(),
        skipped = generation.skipped,
        "Generated {} scales",
        generation.scales.len()
    );
    generation
}

/// Result of a full enumeration run
#[derive(Debug, Clone)]
pub struct Analysis {
    interval_count: usize,
    root_count: usize,
    generation: Generation,
    pairs: Vec<(usize, usize)>,
    annotate_modes: bool,
    report_skipped: bool,
}

impl Analysis {
    /// Enumerate every interval and root, build scales and search for
    /// collisions
    pub fn run(config: &AnalysisConfig) -> Self {
        let intervals = enumerate_diatonic_intervals();
        let roots = all_root_note_names();
        info!(roots = roots.len(), "Generating scales from {} enharmonic root notes", roots.len());

        let generation = generate_scales(&intervals, &roots);
        let pairs: Vec<(usize, usize)> =
            find_collisions_with(&generation.scales, config.collision_search())
                .iter()
                .map(|c| (c.first_index, c.second_index))
                .collect();
        info!(collisions = pairs.len(), "Found {} collisions", pairs.len());

        Self {
            interval_count: intervals.len(),
            root_count: roots.len(),
            generation,
            pairs,
            annotate_modes: config.annotate_modes,
            report_skipped: config.report_skipped,
        }
    }

    /// Number of valid intervals found
    pub fn interval_count(&self) -> usize {
        self.interval_count
    }

    /// Number of root spellings tried
    pub fn root_count(&self) -> usize {
        self.root_count
    }

    /// Scales that were spelled successfully
    pub fn scales(&self) -> &[Scale] {
        &self.generation.scales
    }

    /// Number of unspellable combinations
    pub fn skipped(&self) -> usize {
        self.generation.skipped
    }

    /// Collisions in search order
    pub fn collisions(&self) -> Vec<Collision<'_>> {
        let scales = &self.generation.scales;
        self.pairs
            .iter()
            .map(|&(i, j)| Collision {
                first_index: i,
                second_index: j,
                first: &scales[i],
                second: &scales[j],
            })
            .collect()
    }

    /// Write the summary and every collision
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Found {} diatonic intervals in {} step combinations",
            self.interval_count, CANDIDATE_COUNT
        )?;
        writeln!(
            out,
            "Generating scales from {} enharmonic root notes...",
            self.root_count
        )?;
        writeln!(out, "Generated {} scales", self.generation.scales.len())?;
        if self.report_skipped {
            writeln!(
                out,
                "Skipped {} unspellable combinations",
                self.generation.skipped
            )?;
        }

        for collision in self.collisions() {
            writeln!(out, "Found collision!")?;
            writeln!(out, "Scale 1: {}", self.describe(collision.first))?;
            writeln!(out, "Scale 2: {}", self.describe(collision.second))?;
        }

        writeln!(out, "Found {} collisions", self.pairs.len())
    }

    fn describe(&self, scale: &Scale) -> String {
        match scale.interval().mode_name() {
            Some(mode) if self.annotate_modes => format!("{} ({})", scale, mode),
            _ => scale.to_string(),
        }
    }
}
