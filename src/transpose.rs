//! Key-to-key transposition of note sequences
//!
//! Transposition shifts every event's pitch number by the semitone
//! interval between two keys, always minimally ascending. Beat, string,
//! and fret metadata pass through untouched.

use crate::models::{semitone_interval, NoteEvent, Pitch, PitchClass};

/// Transpose a sequence from one key to another
///
/// A zero interval is the identity and returns the input unchanged.
pub fn transpose_sequence(sequence: Vec<NoteEvent>, from: PitchClass, to: PitchClass) -> Vec<NoteEvent> {
    let interval = semitone_interval(from, to);
    if interval == 0 {
        return sequence;
    }

    sequence
        .into_iter()
        .map(|event| NoteEvent {
            pitch: Pitch::from_pitch_number(event.pitch.pitch_number() + interval as i32),
            ..event
        })
        .collect()
}

/// Shift a whole sequence by a number of octaves (used by the mapping
/// retry heuristic)
pub fn octave_shift_sequence(sequence: &[NoteEvent], octaves: i32) -> Vec<NoteEvent> {
    sequence
        .iter()
        .map(|event| NoteEvent {
            pitch: Pitch::from_pitch_number(event.pitch.pitch_number() + 12 * octaves),
            ..*event
        })
        .collect()
}
