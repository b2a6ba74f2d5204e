//! Instrument tunings and boundary normalization of tuning input
//!
//! A tuning is an ordered sequence of open-string specs, index 0 being
//! the thinnest/highest string. Legacy callers describe strings in three
//! shapes (a plain note name, a record with `open_note`, or a record with
//! `label` + `octave`); all of them are normalized into one canonical
//! [`StringSpec`] here, so the core algorithms never branch on input shape.

use super::pitch::{Pitch, PitchClass};
use crate::error::TabError;
use serde::{Deserialize, Serialize};

/// Canonical description of one open string
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StringSpec {
    /// Open-string pitch class (sharp-canonical)
    pub pitch_class: PitchClass,

    /// Open-string octave
    pub octave: i8,

    /// Display label, e.g. "e" for the high guitar string, "E" for the low
    pub label: String,
}

impl StringSpec {
    pub fn new(pitch_class: PitchClass, octave: i8, label: &str) -> Self {
        Self {
            pitch_class,
            octave,
            label: label.to_string(),
        }
    }

    /// The open-string pitch
    pub fn open_pitch(&self) -> Pitch {
        Pitch::new(self.pitch_class, self.octave)
    }

    /// Label used to key tablature rows, e.g. "e4", "B3"
    pub fn display_label(&self) -> String {
        format!("{}{}", self.label, self.octave)
    }
}

/// An instrument: its ordered open-string tuning, thinnest string first
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Tuning {
    strings: Vec<StringSpec>,
}

impl Tuning {
    pub fn new(strings: Vec<StringSpec>) -> Self {
        Self { strings }
    }

    /// Number of strings (4-7 in the supported catalog)
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn strings(&self) -> &[StringSpec] {
        &self.strings
    }

    pub fn get(&self, index: usize) -> Option<&StringSpec> {
        self.strings.get(index)
    }

    /// Build a tuning from legacy polymorphic entries, normalizing each
    /// into a canonical [`StringSpec`] and rejecting unparseable entries
    pub fn from_entries(entries: &[TuningEntry]) -> Result<Tuning, TabError> {
        let strings = entries
            .iter()
            .map(TuningEntry::normalize)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Tuning::new(strings))
    }
}

/// One tuning entry as supplied by callers, in any of the legacy shapes
///
/// Structured records may carry both `open_note` and `label`/`octave`; the
/// note fields decide the pitch, the label fields decide the display label.
#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum TuningEntry {
    /// Structured record, e.g. `{ "open_note": "E4", "label": "e", "octave": 4 }`
    Record {
        #[serde(default)]
        open_note: Option<String>,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        octave: Option<i8>,
    },

    /// Plain note name, e.g. `"E4"` or `"Bb3"`
    Plain(String),
}

impl TuningEntry {
    /// Collapse any entry shape into a canonical [`StringSpec`]
    fn normalize(&self) -> Result<StringSpec, TabError> {
        match self {
            TuningEntry::Plain(name) => {
                let pitch =
                    Pitch::parse(name).ok_or_else(|| TabError::UnknownPitch(name.clone()))?;
                Ok(StringSpec::new(pitch.class, pitch.octave, pitch.class.name()))
            }
            TuningEntry::Record {
                open_note,
                label,
                octave,
            } => {
                // open_note is authoritative for the pitch when present
                let pitch = if let Some(note) = open_note {
                    Pitch::parse(note).ok_or_else(|| TabError::UnknownPitch(note.clone()))?
                } else if let (Some(label), Some(octave)) = (label, octave) {
                    let class = PitchClass::from_name(label)
                        .ok_or_else(|| TabError::UnknownPitch(label.clone()))?;
                    Pitch::new(class, *octave)
                } else {
                    return Err(TabError::UnknownPitch("(missing)".to_string()));
                };

                let display = label.clone().unwrap_or_else(|| pitch.class.name().to_string());
                Ok(StringSpec::new(pitch.class, pitch.octave, &display))
            }
        }
    }
}
