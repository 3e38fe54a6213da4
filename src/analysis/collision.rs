// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pairwise collision search over generated scales.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::music::Scale;

/// What two scales must share to count as a collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionMode {
    /// Identical multiset of note spellings
    #[default]
    Spelling,
    /// Identical set of pitch classes, regardless of spelling
    PitchClass,
}

impl CollisionMode {
    /// Compare two scales under this mode
    pub fn matches(self, a: &Scale, b: &Scale) -> bool {
        match self {
            CollisionMode::Spelling => a.has_same_pitch_set(b),
            CollisionMode::PitchClass => a.has_same_pitch_classes(b),
        }
    }
}

/// Options for a collision search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionSearch {
    /// Comparison used for each pair
    pub mode: CollisionMode,
    /// Report each unordered pair once instead of in both orders
    pub deduplicate: bool,
}

/// Two distinct scales that matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision<'a> {
    /// Position of `first` in the searched slice
    pub first_index: usize,
    /// Position of `second` in the searched slice
    pub second_index: usize,
    pub first: &'a Scale,
    pub second: &'a Scale,
}

/// Every ordered pair of distinct scales with identical spellings
///
/// Scales are distinguished by position, so two equal scales at different
/// positions still collide. Each match is reported as both (a, b) and (b, a).
pub fn find_collisions(scales: &[Scale]) -> Vec<Collision<'_>> {
    find_collisions_with(scales, CollisionSearch::default())
}

/// Collision search with an explicit comparison and pair policy
pub fn find_collisions_with(scales: &[Scale], search: CollisionSearch) -> Vec<Collision<'_>> {
    let mut collisions = Vec::new();

    for (i, first) in scales.iter().enumerate() {
        for (j, second) in scales.iter().enumerate() {
            if i == j || (search.deduplicate && j < i) {
                continue;
            }

            if search.mode.matches(first, second) {
                trace!(first = %first, second = %second, "collision");
                collisions.push(Collision {
                    first_index: i,
                    second_index: j,
                    first,
                    second,
                });
            }
        }
    }

    collisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::Interval;

    fn major(root: &str) -> Scale {
        Scale::build(root, Interval::MAJOR).unwrap()
    }

    #[test]
    fn test_symmetric_pairs_reported_twice() {
        let scales = vec![major("C"), major("C"), major("C#")];
        let collisions = find_collisions(&scales);

        let pairs: Vec<(usize, usize)> = collisions
            .iter()
            .map(|c| (c.first_index, c.second_index))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (1, 0)]);
        assert!(collisions.iter().all(|c| c.first.root() == "C"));
    }

    #[test]
    fn test_no_self_collision() {
        let scales = vec![major("C")];
        assert!(find_collisions(&scales).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(find_collisions(&[]).is_empty());
    }

    #[test]
    fn test_deduplicated_pairs() {
        let scales = vec![major("C"), major("C"), major("C#")];
        let collisions = find_collisions_with(
            &scales,
            CollisionSearch {
                mode: CollisionMode::Spelling,
                deduplicate: true,
            },
        );
        assert_eq!(collisions.len(), 1);
        assert_eq!((collisions[0].first_index, collisions[0].second_index), (0, 1));
    }

    #[test]
    fn test_pitch_class_mode() {
        let a_minor = Scale::build("A", Interval::new([2, 1, 2, 2, 1, 2, 2]).unwrap()).unwrap();
        let scales = vec![major("C"), a_minor, major("D")];

        assert!(find_collisions(&scales).is_empty());

        let collisions = find_collisions_with(
            &scales,
            CollisionSearch {
                mode: CollisionMode::PitchClass,
                deduplicate: false,
            },
        );
        let pairs: Vec<(usize, usize)> = collisions
            .iter()
            .map(|c| (c.first_index, c.second_index))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_mode_deserialize() {
        let mode: CollisionMode = serde_yaml::from_str("pitch_class").unwrap();
        assert_eq!(mode, CollisionMode::PitchClass);
        assert_eq!(CollisionMode::default(), CollisionMode::Spelling);
    }
}
