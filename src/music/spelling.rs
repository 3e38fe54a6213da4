// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Enharmonic spelling table and letter-name ordering.
//!
//! Every pitch class in the octave owns a fixed list of spellings. Pitch
//! class 0 is A, and the classes rise by one semitone from there. Table
//! order matters: when several spellings of a class share a letter, the
//! earliest one wins.

use std::fmt;

use super::error::ScaleError;

/// Number of semitones in an octave
pub const NOTES_PER_OCTAVE: u8 = 12;

/// Spellings for each pitch class, indexed by class
pub const ENHARMONIC_NOTES: [&[&str]; NOTES_PER_OCTAVE as usize] = [
    &["A", "G##", "Bbb", "Cbbb"],
    &["A#", "Bb", "G###", "Cbb"],
    &["B", "A##", "Cb", "Dbbb"],
    &["C", "B#", "A###", "Dbb"],
    &["C#", "B##", "Db", "Ebbb"],
    &["D", "C##", "B###", "Ebb", "Fbbb"],
    &["D#", "Eb", "C###", "Fbb"],
    &["E", "D##", "Fb", "Gbbb"],
    &["F", "E#", "D###", "Gbb"],
    &["F#", "E##", "Gb", "Abbb"],
    &["G", "F##", "E###", "Abb"],
    &["G#", "Ab", "F###", "Bbbb"],
];

/// A semitone offset (0-11) from A
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Build a pitch class, wrapping any offset into the octave
    pub fn new(offset: u32) -> Self {
        PitchClass((offset % NOTES_PER_OCTAVE as u32) as u8)
    }

    /// Offset from A in semitones
    pub fn index(self) -> u8 {
        self.0
    }

    /// Registered spellings for this class, in preference order
    pub fn spellings(self) -> &'static [&'static str] {
        ENHARMONIC_NOTES[self.0 as usize]
    }

    /// First registered spelling that starts with `letter`
    pub fn spelling_for(self, letter: Letter) -> Option<&'static str> {
        self.spellings()
            .iter()
            .copied()
            .find(|name| Letter::of(name) == Some(letter))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Letter names in scale order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Letter {
    /// All letters in cyclic order starting at A
    pub const ALL: [Letter; 7] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
    ];

    /// Letter of a spelling, taken from its first character
    pub fn of(note: &str) -> Option<Self> {
        match note.chars().next()? {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            _ => None,
        }
    }

    /// Position within A..G
    pub fn index(self) -> usize {
        self as usize
    }

    /// The letter that follows this one, wrapping G back to A
    pub fn next(self) -> Self {
        Letter::ALL[(self.index() + 1) % Letter::ALL.len()]
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
        };
        write!(f, "{}", c)
    }
}

/// Every registered spelling, class by class in table order
pub fn all_root_note_names() -> Vec<&'static str> {
    ENHARMONIC_NOTES
        .iter()
        .flat_map(|names| names.iter().copied())
        .collect()
}

/// Find the pitch class that owns `spelling`
pub fn pitch_class_of(spelling: &str) -> Result<PitchClass, ScaleError> {
    ENHARMONIC_NOTES
        .iter()
        .position(|names| names.contains(&spelling))
        .map(|idx| PitchClass(idx as u8))
        .ok_or_else(|| ScaleError::UnknownNote {
            note: spelling.to_string(),
        })
}
