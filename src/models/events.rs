//! Timed note events flowing through the transformation pipeline

use super::pitch::Pitch;
use serde::{Deserialize, Serialize};

/// A note at an absolute timeline position, produced by extraction or
/// generation and consumed by transposition and mapping
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteEvent {
    /// 1-indexed absolute beat on the linear timeline (not per-measure)
    pub beat: u32,

    /// The sounding pitch
    pub pitch: Pitch,

    /// String index the note came from (0 = thinnest/highest string)
    pub source_string: usize,

    /// Fret the note was played at on the source instrument
    pub source_fret: u8,
}

/// A note resolved onto a concrete position on the target instrument
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MappedNoteEvent {
    /// 1-indexed absolute beat, carried over unchanged from the source event
    pub beat: u32,

    /// Target string index (0 = thinnest/highest string)
    pub string_index: usize,

    /// Fret on the target string, `0 ..= max_fret`
    pub fret: u8,
}
