//! Resolution of abstract notes onto fret positions of a target tuning
//!
//! The playable range of a string is one-directional: from the open pitch
//! upward to `max_fret`. Mapping prefers the note's source string index
//! (preserving the player's hand position across instrument changes) and
//! falls back to the first string, thinnest first, that can sound the note.

use crate::models::{MappedNoteEvent, NoteEvent, Pitch, PitchClass, Tuning};

/// Result of mapping a sequence onto an instrument
#[derive(Clone, Debug, Default)]
pub struct MapOutcome {
    pub mapped: Vec<MappedNoteEvent>,
    pub unmappable: Vec<NoteEvent>,
}

/// Fret sounding `target` on a string with open pitch `open`, if playable
pub fn find_fret(target: Pitch, open: Pitch, max_fret: u8) -> Option<u8> {
    let fret = target.pitch_number() - open.pitch_number();
    if (0..=max_fret as i32).contains(&fret) {
        Some(fret as u8)
    } else {
        None
    }
}

/// Every fret in `0..=max_fret` where a string sounds the given pitch class
///
/// Octave-agnostic; this is the position search the exercise generator
/// builds its patterns from.
pub fn fret_positions(target: PitchClass, open: PitchClass, max_fret: u8) -> Vec<u8> {
    (0..=max_fret)
        .filter(|&fret| PitchClass::from_index(open.chromatic_index() as i32 + fret as i32) == target)
        .collect()
}

/// Map a note sequence onto a tuning
///
/// Two passes per event: the source string index first, then an exhaustive
/// scan in string order where the first match wins (lowest string index,
/// not lowest fret). Unresolved events are collected, never dropped.
pub fn map_sequence(sequence: &[NoteEvent], tuning: &Tuning, max_fret: u8) -> MapOutcome {
    let mut outcome = MapOutcome::default();

    for event in sequence {
        let resolved = resolve_event(event, tuning, max_fret);
        match resolved {
            Some(mapped) => outcome.mapped.push(mapped),
            None => outcome.unmappable.push(*event),
        }
    }

    outcome
}

fn resolve_event(event: &NoteEvent, tuning: &Tuning, max_fret: u8) -> Option<MappedNoteEvent> {
    // Same-position pass
    if let Some(spec) = tuning.get(event.source_string) {
        if let Some(fret) = find_fret(event.pitch, spec.open_pitch(), max_fret) {
            return Some(MappedNoteEvent {
                beat: event.beat,
                string_index: event.source_string,
                fret,
            });
        }
    }

    // Exhaustive pass, first match wins
    for (string_index, spec) in tuning.strings().iter().enumerate() {
        if let Some(fret) = find_fret(event.pitch, spec.open_pitch(), max_fret) {
            return Some(MappedNoteEvent {
                beat: event.beat,
                string_index,
                fret,
            });
        }
    }

    None
}
