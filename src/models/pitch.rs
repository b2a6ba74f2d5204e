//! Pitch classes, pitches, and semitone arithmetic
//!
//! Internal storage is sharp-canonical: flat spellings and unicode
//! accidental symbols are normalized on ingestion and never stored.
//! A `Pitch` converts losslessly to and from an integer pitch number
//! (MIDI convention: C4 = 60).

use serde::{Deserialize, Serialize};
use std::fmt;

/// The 12 chromatic pitch classes, always spelled with sharps
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

/// Chromatic order used for all index arithmetic
pub const CHROMATIC: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::Cs,
    PitchClass::D,
    PitchClass::Ds,
    PitchClass::E,
    PitchClass::F,
    PitchClass::Fs,
    PitchClass::G,
    PitchClass::Gs,
    PitchClass::A,
    PitchClass::As,
    PitchClass::B,
];

impl PitchClass {
    /// Index in the chromatic scale (C = 0 .. B = 11)
    pub fn chromatic_index(self) -> u8 {
        match self {
            PitchClass::C => 0,
            PitchClass::Cs => 1,
            PitchClass::D => 2,
            PitchClass::Ds => 3,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::Fs => 6,
            PitchClass::G => 7,
            PitchClass::Gs => 8,
            PitchClass::A => 9,
            PitchClass::As => 10,
            PitchClass::B => 11,
        }
    }

    /// Pitch class for a chromatic index (wraps modulo 12)
    pub fn from_index(index: i32) -> PitchClass {
        CHROMATIC[index.rem_euclid(12) as usize]
    }

    /// Canonical sharp-form name ("C", "C#", ...)
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }

    /// Normalize a pitch-class name to its sharp-canonical class
    ///
    /// Accepts sharps ("C#"), flats ("Db"), and the unicode symbols ♯/♭,
    /// in any letter case. Returns `None` on unrecognized input.
    ///
    /// Examples:
    ///   "Bb" → A#
    ///   "f♯" → F#
    ///   "Cb" → B
    pub fn from_name(name: &str) -> Option<PitchClass> {
        let cleaned = name.replace('♯', "#").replace('♭', "b").to_uppercase();

        // Flat spellings collapse onto their sharp equivalents.
        // After uppercasing, a flat reads as a trailing 'B' ("DB", "EB", ...).
        let canonical = match cleaned.as_str() {
            "CB" => "B",
            "DB" => "C#",
            "EB" => "D#",
            "FB" => "E",
            "GB" => "F#",
            "AB" => "G#",
            "BB" => "A#",
            other => other,
        };

        match canonical {
            "C" => Some(PitchClass::C),
            "C#" => Some(PitchClass::Cs),
            "D" => Some(PitchClass::D),
            "D#" => Some(PitchClass::Ds),
            "E" => Some(PitchClass::E),
            "F" => Some(PitchClass::F),
            "F#" => Some(PitchClass::Fs),
            "G" => Some(PitchClass::G),
            "G#" => Some(PitchClass::Gs),
            "A" => Some(PitchClass::A),
            "A#" => Some(PitchClass::As),
            "B" => Some(PitchClass::B),
            _ => None,
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A concrete pitch: pitch class plus octave
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pitch {
    pub class: PitchClass,
    pub octave: i8,
}

impl Pitch {
    pub fn new(class: PitchClass, octave: i8) -> Self {
        Self { class, octave }
    }

    /// Integer pitch number: `(octave + 1) * 12 + chromatic_index`
    ///
    /// This is the MIDI note-number convention (C4 = 60, A4 = 69).
    pub fn pitch_number(self) -> i32 {
        (self.octave as i32 + 1) * 12 + self.class.chromatic_index() as i32
    }

    /// Inverse of [`Pitch::pitch_number`]; exact for all integers
    pub fn from_pitch_number(n: i32) -> Pitch {
        Pitch {
            class: PitchClass::from_index(n.rem_euclid(12)),
            octave: (n.div_euclid(12) - 1) as i8,
        }
    }

    /// Parse a note name with octave ("A#3", "Bb3", "e4")
    ///
    /// The class part is normalized exactly as [`PitchClass::from_name`];
    /// the trailing digits are the octave. Returns `None` when either part
    /// fails to parse.
    pub fn parse(name: &str) -> Option<Pitch> {
        let trimmed = name.trim();
        let digit_at = trimmed.find(|c: char| c.is_ascii_digit())?;
        let class = PitchClass::from_name(&trimmed[..digit_at])?;
        let octave: i8 = trimmed[digit_at..].parse().ok()?;
        Some(Pitch { class, octave })
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class, self.octave)
    }
}

/// Semitone interval from one pitch class up to another, in `[0, 11]`
///
/// Negative differences fold up by an octave, so transposition is always
/// minimally ascending.
pub fn semitone_interval(from: PitchClass, to: PitchClass) -> u8 {
    let diff = to.chromatic_index() as i8 - from.chromatic_index() as i8;
    if diff < 0 {
        (diff + 12) as u8
    } else {
        diff as u8
    }
}
