//! Orchestration of the CSV-to-tablature pipeline
//!
//! Extraction → transposition → instrument mapping (with the octave-shift
//! retry) → grid assembly. Every step is a pure function; the pipeline
//! only sequences them and applies the retry policy.

use crate::assemble::assemble;
use crate::error::TabError;
use crate::mapping::{map_sequence, MapOutcome};
use crate::models::{NoteEvent, PitchClass, Tablature, Tuning, TOTAL_BEATS};
use crate::parse::extract_note_sequence;
use crate::transpose::{octave_shift_sequence, transpose_sequence};
use serde::Serialize;

/// Default ceiling for playable frets on the target instrument
pub const DEFAULT_MAX_FRET: u8 = 15;

/// The CSV template is authored in C major
pub const SOURCE_KEY: PitchClass = PitchClass::C;

/// Unmappable-note ratio above which the octave-shift retry kicks in
const RETRY_THRESHOLD: f64 = 0.1;

/// Final pipeline product: the grid plus the unmappable-note report
#[derive(Serialize, Clone, Debug)]
pub struct TabResult {
    pub tablature: Tablature,
    pub unmappable_count: usize,
    pub unmappable: Vec<NoteEvent>,
}

/// Convert CSV tablature text into a grid for an arbitrary instrument/key
///
/// Fails only catastrophically (empty input, zero-string tuning); bad
/// rows, bad cells, and unmappable notes degrade the result instead.
pub fn generate_tab_from_csv(
    csv_text: &str,
    tuning: &Tuning,
    target_key: PitchClass,
    max_fret: u8,
) -> Result<TabResult, TabError> {
    if csv_text.trim().is_empty() {
        return Err(TabError::EmptyInput);
    }
    if tuning.is_empty() {
        return Err(TabError::EmptyTuning);
    }

    let sequence = extract_note_sequence(csv_text);
    log::info!("extracted {} notes from template", sequence.len());

    let transposed = transpose_sequence(sequence, SOURCE_KEY, target_key);

    let outcome = map_with_octave_retry(&transposed, tuning, max_fret);
    log::info!(
        "mapped {} notes onto {} strings, {} unmappable",
        outcome.mapped.len(),
        tuning.len(),
        outcome.unmappable.len()
    );

    let tablature = assemble(&outcome.mapped, tuning, TOTAL_BEATS);

    Ok(TabResult {
        tablature,
        unmappable_count: outcome.unmappable.len(),
        unmappable: outcome.unmappable,
    })
}

/// Map a sequence, retrying with whole-octave shifts when too much of it
/// falls off the instrument
///
/// Both shifts are evaluated even if the first one already improves the
/// result; each candidate competes against the current best by raw
/// unmappable count, and ties keep the earlier result. The chosen result
/// is therefore never worse than the unshifted attempt.
fn map_with_octave_retry(sequence: &[NoteEvent], tuning: &Tuning, max_fret: u8) -> MapOutcome {
    let mut best = map_sequence(sequence, tuning, max_fret);

    if best.unmappable.len() as f64 > RETRY_THRESHOLD * sequence.len() as f64 {
        log::info!(
            "{} unmappable notes, trying octave shifts",
            best.unmappable.len()
        );
        for shift in [-1, 1] {
            let shifted = octave_shift_sequence(sequence, shift);
            let candidate = map_sequence(&shifted, tuning, max_fret);
            if candidate.unmappable.len() < best.unmappable.len() {
                log::info!("octave shift {:+} improved mapping", shift);
                best = candidate;
            }
        }
    }

    best
}
