// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Letter-sequential scale spelling.
//!
//! A scale starts on the given root spelling and names each following
//! pitch with the next letter in A..G order, so every letter appears exactly
//! once before the root returns at the octave. When a pitch class has no
//! registered spelling for the letter it needs, the scale cannot be written
//! and construction fails.

use std::collections::BTreeSet;
use std::fmt;

use super::error::ScaleError;
use super::interval::{Interval, DIATONIC_SCALE_SIZE};
use super::spelling::{pitch_class_of, Letter, PitchClass};

/// A spelled scale: root, step pattern and its eight notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    root: String,
    interval: Interval,
    notes: Vec<String>,
    classes: Vec<PitchClass>,
}

impl Scale {
    /// Spell the scale starting at `root`
    ///
    /// The root keeps the spelling it was given. Fails with
    /// [`ScaleError::UnknownNote`] if the root is not in the enharmonic table
    /// and with [`ScaleError::Unspellable`] if some degree has no spelling on
    /// the letter it needs.
    pub fn build(root: &str, interval: Interval) -> Result<Self, ScaleError> {
        let root_class = pitch_class_of(root)?;
        let mut letter = Letter::of(root).ok_or_else(|| ScaleError::UnknownNote {
            note: root.to_string(),
        })?;

        let mut notes = Vec::with_capacity(DIATONIC_SCALE_SIZE + 1);
        let mut classes = Vec::with_capacity(DIATONIC_SCALE_SIZE + 1);
        notes.push(root.to_string());
        classes.push(root_class);

        // The last step only leads back to the octave
        let mut cursor = root_class.index() as u32;
        for &step in &interval.steps()[..DIATONIC_SCALE_SIZE - 1] {
            cursor += step as u32;
            let class = PitchClass::new(cursor);
            let needed = letter.next();

            let Some(name) = class.spelling_for(needed) else {
                return Err(ScaleError::Unspellable {
                    needed,
                    previous: notes.last().cloned().unwrap_or_default(),
                    root: root.to_string(),
                    interval,
                    partial: notes,
                });
            };

            notes.push(name.to_string());
            classes.push(class);
            letter = needed;
        }

        notes.push(root.to_string());
        classes.push(root_class);

        Ok(Self {
            root: root.to_string(),
            interval,
            notes,
            classes,
        })
    }

    /// Root spelling as given
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Step pattern
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// The eight note spellings, root first and last
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Letter of every note
    pub fn letters(&self) -> Vec<Letter> {
        self.notes.iter().filter_map(|n| Letter::of(n)).collect()
    }

    /// Pitch class of every note
    pub fn pitch_classes(&self) -> &[PitchClass] {
        &self.classes
    }

    /// True when both scales hold the same spellings, ignoring order
    ///
    /// The comparison is on multisets, so the doubled octave note counts
    /// twice.
    pub fn has_same_pitch_set(&self, other: &Scale) -> bool {
        let mut ours: Vec<&str> = self.notes.iter().map(String::as_str).collect();
        let mut theirs: Vec<&str> = other.notes.iter().map(String::as_str).collect();
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }

    /// True when both scales sound the same pitch classes, whatever the
    /// spelling or root
    pub fn has_same_pitch_classes(&self, other: &Scale) -> bool {
        let ours: BTreeSet<PitchClass> = self.classes.iter().copied().collect();
        let theirs: BTreeSet<PitchClass> = other.classes.iter().copied().collect();
        ours == theirs
    }
}

/// Free-function form of [`Scale::build`]
pub fn build_scale(root: &str, interval: Interval) -> Result<Scale, ScaleError> {
    Scale::build(root, interval)
}

/// Free-function form of [`Scale::has_same_pitch_set`]
pub fn has_same_pitch_set(a: &Scale, b: &Scale) -> bool {
    a.has_same_pitch_set(b)
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted: Vec<String> = self.notes.iter().map(|n| format!("{:4.4}", n)).collect();
        write!(f, "{:4.4} @ {}", self.root, formatted.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(steps: [u8; 7]) -> Interval {
        Interval::new(steps).unwrap()
    }

    #[test]
    fn test_c_major() {
        let scale = Scale::build("C", Interval::MAJOR).unwrap();
        assert_eq!(scale.notes(), &["C", "D", "E", "F", "G", "A", "B", "C"]);
        assert_eq!(scale.root(), "C");
        assert_eq!(scale.interval(), Interval::MAJOR);
    }

    #[test]
    fn test_accidental_major_scales() {
        let g = Scale::build("G", Interval::MAJOR).unwrap();
        assert_eq!(g.notes(), &["G", "A", "B", "C", "D", "E", "F#", "G"]);

        let f = Scale::build("F", Interval::MAJOR).unwrap();
        assert_eq!(f.notes(), &["F", "G", "A", "Bb", "C", "D", "E", "F"]);

        let b_sharp = Scale::build("B#", Interval::MAJOR).unwrap();
        assert_eq!(
            b_sharp.notes(),
            &["B#", "C##", "D##", "E#", "F##", "G##", "A##", "B#"]
        );
    }

    #[test]
    fn test_a_natural_minor() {
        let aeolian = interval([2, 1, 2, 2, 1, 2, 2]);
        let scale = Scale::build("A", aeolian).unwrap();
        assert_eq!(scale.notes(), &["A", "B", "C", "D", "E", "F", "G", "A"]);
    }

    #[test]
    fn test_root_spelling_kept_verbatim() {
        let scale = Scale::build("Cbbb", Interval::MAJOR).unwrap();
        assert_eq!(
            scale.notes(),
            &["Cbbb", "Dbbb", "Ebbb", "Fbbb", "Gbbb", "Abbb", "Bbbb", "Cbbb"]
        );
    }

    #[test]
    fn test_unspellable_scale() {
        // G### major needs an F on pitch class 0, which has none
        let err = Scale::build("G###", Interval::MAJOR).unwrap_err();
        match err {
            ScaleError::Unspellable {
                needed,
                previous,
                root,
                partial,
                ..
            } => {
                assert_eq!(needed, Letter::F);
                assert_eq!(previous, "E###");
                assert_eq!(root, "G###");
                assert_eq!(partial, vec!["G###", "A###", "B###", "C###", "D###", "E###"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_root() {
        assert_eq!(
            Scale::build("H", Interval::MAJOR),
            Err(ScaleError::UnknownNote { note: "H".to_string() })
        );
    }

    #[test]
    fn test_letters_cycle_from_root() {
        let scale = Scale::build("E", interval([1, 2, 2, 2, 1, 2, 2])).unwrap();
        assert_eq!(
            scale.letters(),
            vec![
                Letter::E,
                Letter::F,
                Letter::G,
                Letter::A,
                Letter::B,
                Letter::C,
                Letter::D,
                Letter::E
            ]
        );
    }

    #[test]
    fn test_pitch_classes() {
        let scale = Scale::build("C", Interval::MAJOR).unwrap();
        let classes: Vec<u8> = scale.pitch_classes().iter().map(|c| c.index()).collect();
        assert_eq!(classes, vec![3, 5, 7, 8, 10, 0, 2, 3]);
    }

    #[test]
    fn test_same_pitch_set_reflexive_and_symmetric() {
        let a = Scale::build("D", Interval::MAJOR).unwrap();
        let copy = Scale::build("D", Interval::MAJOR).unwrap();
        let other = Scale::build("Eb", Interval::MAJOR).unwrap();

        assert!(has_same_pitch_set(&a, &copy));
        assert!(has_same_pitch_set(&copy, &a));
        assert!(!has_same_pitch_set(&a, &other));
        assert!(!has_same_pitch_set(&other, &a));
    }

    #[test]
    fn test_relative_keys_differ_by_spelling_multiset() {
        // Same letters, but the doubled octave note differs
        let c_major = Scale::build("C", Interval::MAJOR).unwrap();
        let a_minor = Scale::build("A", interval([2, 1, 2, 2, 1, 2, 2])).unwrap();
        assert!(!c_major.has_same_pitch_set(&a_minor));
        assert!(c_major.has_same_pitch_classes(&a_minor));
    }

    #[test]
    fn test_enharmonic_scales_share_pitch_classes() {
        let c_sharp = Scale::build("C#", Interval::MAJOR).unwrap();
        let d_flat = Scale::build("Db", Interval::MAJOR).unwrap();
        assert!(!c_sharp.has_same_pitch_set(&d_flat));
        assert!(c_sharp.has_same_pitch_classes(&d_flat));
    }

    #[test]
    fn test_display() {
        let scale = build_scale("C", Interval::MAJOR).unwrap();
        assert_eq!(
            scale.to_string(),
            "C    @ C    D    E    F    G    A    B    C   "
        );

        let scale = build_scale("Cbbb", Interval::MAJOR).unwrap();
        assert!(scale.to_string().starts_with("Cbbb @ Cbbb Dbbb "));
    }
}
