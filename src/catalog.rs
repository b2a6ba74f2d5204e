//! Instrument tuning catalog and scale library
//!
//! Configuration data consumed by the pipelines and the JS frontend.
//! Tunings list strings thinnest-first; scale interval sets are semitone
//! offsets from the root, one entry per named scale.

use crate::models::{PitchClass, StringSpec, Tuning};
use lazy_static::lazy_static;

/// A named instrument tuning
pub struct TuningDef {
    pub name: &'static str,
    pub tuning: Tuning,
}

/// A named scale with its interval set
pub struct ScaleDef {
    pub group: &'static str,
    pub name: &'static str,
    pub intervals: &'static [u8],
}

fn string(class: PitchClass, octave: i8, label: &str) -> StringSpec {
    StringSpec::new(class, octave, label)
}

lazy_static! {
    /// Supported instruments, 4 to 7 strings
    pub static ref TUNINGS: Vec<TuningDef> = {
        use crate::models::PitchClass::*;
        vec![
            TuningDef {
                name: "Mandolin (GDAE)",
                tuning: Tuning::new(vec![
                    string(E, 5, "E"),
                    string(A, 4, "A"),
                    string(D, 4, "D"),
                    string(G, 3, "G"),
                ]),
            },
            TuningDef {
                name: "5-String Banjo (G)",
                tuning: Tuning::new(vec![
                    // Drone string (high G)
                    string(G, 4, "G"),
                    string(D, 4, "D"),
                    string(B, 3, "B"),
                    string(G, 3, "G"),
                    string(D, 3, "D"),
                ]),
            },
            TuningDef {
                name: "4-String Bass (EADG)",
                tuning: Tuning::new(vec![
                    string(G, 3, "G"),
                    string(D, 3, "D"),
                    string(A, 2, "A"),
                    string(E, 2, "E"),
                ]),
            },
            TuningDef {
                name: "5-String Bass (BEADG)",
                tuning: Tuning::new(vec![
                    string(G, 3, "G"),
                    string(D, 3, "D"),
                    string(A, 2, "A"),
                    string(E, 2, "E"),
                    string(B, 1, "B"),
                ]),
            },
            TuningDef {
                name: "6-String Guitar (EADGBe)",
                tuning: Tuning::new(vec![
                    string(E, 4, "e"),
                    string(B, 3, "B"),
                    string(G, 3, "G"),
                    string(D, 3, "D"),
                    string(A, 2, "A"),
                    string(E, 2, "E"),
                ]),
            },
            TuningDef {
                name: "7-String Guitar (BEADGBe)",
                tuning: Tuning::new(vec![
                    string(E, 4, "e"),
                    string(B, 3, "B"),
                    string(G, 3, "G"),
                    string(D, 3, "D"),
                    string(A, 2, "A"),
                    string(E, 2, "E"),
                    string(B, 1, "B"),
                ]),
            },
        ]
    };
}

/// Scale and mode library, grouped the way the UI presents it
pub static SCALES: &[ScaleDef] = &[
    // Common
    ScaleDef { group: "Common", name: "Major", intervals: &[0, 2, 4, 5, 7, 9, 11] },
    ScaleDef { group: "Common", name: "Natural Minor", intervals: &[0, 2, 3, 5, 7, 8, 10] },
    ScaleDef { group: "Common", name: "Major Pentatonic", intervals: &[0, 2, 4, 7, 9] },
    ScaleDef { group: "Common", name: "Minor Pentatonic", intervals: &[0, 3, 5, 7, 10] },
    ScaleDef { group: "Common", name: "Blues", intervals: &[0, 3, 5, 6, 7, 10] },
    // Modes
    ScaleDef { group: "Modes", name: "Ionian (Major)", intervals: &[0, 2, 4, 5, 7, 9, 11] },
    ScaleDef { group: "Modes", name: "Dorian", intervals: &[0, 2, 3, 5, 7, 9, 10] },
    ScaleDef { group: "Modes", name: "Phrygian", intervals: &[0, 1, 3, 5, 7, 8, 10] },
    ScaleDef { group: "Modes", name: "Lydian", intervals: &[0, 2, 4, 6, 7, 9, 11] },
    ScaleDef { group: "Modes", name: "Mixolydian", intervals: &[0, 2, 4, 5, 7, 9, 10] },
    ScaleDef { group: "Modes", name: "Aeolian (Minor)", intervals: &[0, 2, 3, 5, 7, 8, 10] },
    ScaleDef { group: "Modes", name: "Locrian", intervals: &[0, 1, 3, 5, 6, 8, 10] },
    // Minor
    ScaleDef { group: "Minor", name: "Harmonic Minor", intervals: &[0, 2, 3, 5, 7, 8, 11] },
    ScaleDef { group: "Minor", name: "Melodic Minor", intervals: &[0, 2, 3, 5, 7, 9, 11] },
    // Exotic & Unique
    ScaleDef { group: "Exotic & Unique", name: "Phrygian Dominant", intervals: &[0, 1, 4, 5, 7, 8, 10] },
    ScaleDef { group: "Exotic & Unique", name: "Byzantine", intervals: &[0, 1, 4, 5, 7, 8, 11] },
    ScaleDef { group: "Exotic & Unique", name: "Romanian Minor", intervals: &[0, 2, 3, 6, 7, 9, 10] },
    ScaleDef { group: "Exotic & Unique", name: "Hungarian Gypsy", intervals: &[0, 2, 3, 6, 7, 8, 11] },
    ScaleDef { group: "Exotic & Unique", name: "Whole Tone", intervals: &[0, 2, 4, 6, 8, 10] },
    ScaleDef { group: "Exotic & Unique", name: "Diminished (W-H)", intervals: &[0, 2, 3, 5, 6, 8, 9, 11] },
    ScaleDef { group: "Exotic & Unique", name: "Diminished (H-W)", intervals: &[0, 1, 3, 4, 6, 7, 9, 10] },
    ScaleDef { group: "Exotic & Unique", name: "Lydian Augmented", intervals: &[0, 2, 4, 6, 8, 9, 11] },
    ScaleDef { group: "Exotic & Unique", name: "Altered Scale", intervals: &[0, 1, 3, 4, 6, 8, 10] },
    ScaleDef { group: "Exotic & Unique", name: "Arabian", intervals: &[0, 2, 4, 5, 6, 8, 10] },
    ScaleDef { group: "Exotic & Unique", name: "Persian", intervals: &[0, 1, 4, 5, 6, 8, 11] },
    ScaleDef { group: "Exotic & Unique", name: "Oriental", intervals: &[0, 1, 4, 5, 6, 9, 10] },
    ScaleDef { group: "Exotic & Unique", name: "Hirajoshi", intervals: &[0, 2, 3, 7, 8] },
    ScaleDef { group: "Exotic & Unique", name: "Prometheus", intervals: &[0, 2, 4, 6, 9, 10] },
    ScaleDef { group: "Exotic & Unique", name: "Neapolitan Major", intervals: &[0, 1, 3, 5, 7, 9, 11] },
];

/// Look up a tuning by its catalog name
pub fn tuning_by_name(name: &str) -> Option<&'static Tuning> {
    TUNINGS.iter().find(|t| t.name == name).map(|t| &t.tuning)
}

/// Look up a scale definition by its catalog name
pub fn scale_by_name(name: &str) -> Option<&'static ScaleDef> {
    SCALES.iter().find(|s| s.name == name)
}
