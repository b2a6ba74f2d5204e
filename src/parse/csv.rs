//! Extraction of a timed note sequence from the fixed-layout CSV format
//!
//! The source template is guitar tablature laid out in measure blocks:
//! a header row (first cell contains a marker substring), then six string
//! rows top-to-bottom from the high e string down, whose remaining cells
//! are fret numbers or blanks. Extraction is lossy by design: malformed
//! rows and cells are skipped, never fatal.

use crate::models::{NoteEvent, Pitch, PitchClass};

/// A row is a measure header when its first cell contains one of these
const HEADER_MARKERS: [&str; 2] = ["Strings", "Beat"];

/// String-identity markers, one per row position, high e first
const STRING_MARKERS: [&str; 6] = ["e4", "B3", "G3", "D3", "A2", "E2"];

/// Open pitches of the reference guitar tuning, index 0 = high e
///
/// Accepted string rows are position-mapped onto this tuning: the first
/// accepted row is the high e string regardless of which marker matched.
const REFERENCE_OPEN: [(PitchClass, i8); 6] = [
    (PitchClass::E, 4),
    (PitchClass::B, 3),
    (PitchClass::G, 3),
    (PitchClass::D, 3),
    (PitchClass::A, 2),
    (PitchClass::E, 2),
];

struct StringRow {
    frets: Vec<String>,
}

/// Scan CSV text and extract the ordered note sequence
///
/// Beats are absolute and 1-indexed; each measure block advances the beat
/// counter by its widest accepted string row. Events come out beat-major
/// (all strings at a beat before the next beat).
pub fn extract_note_sequence(text: &str) -> Vec<NoteEvent> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut sequence = Vec::new();
    let mut current_beat: u32 = 1;

    let mut i = 0;
    while i < lines.len() {
        let first_cell = first_cell(lines[i]);
        if !HEADER_MARKERS.iter().any(|m| first_cell.contains(m)) {
            i += 1;
            continue;
        }

        // The next six rows are candidate string rows; accept a row only
        // if its first cell carries a string-identity marker.
        let mut string_rows = Vec::new();
        for j in 1..=6 {
            let Some(line) = lines.get(i + j) else { break };
            let cells: Vec<&str> = line.split(',').map(str::trim).collect();
            if STRING_MARKERS.iter().any(|m| cells[0].contains(m)) {
                string_rows.push(StringRow {
                    frets: cells[1..].iter().map(|c| c.to_string()).collect(),
                });
            }
        }

        if !string_rows.is_empty() {
            let beats_in_measure = string_rows.iter().map(|r| r.frets.len()).max().unwrap_or(0);

            for beat_idx in 0..beats_in_measure {
                for (string_idx, row) in string_rows.iter().enumerate() {
                    let Some(cell) = row.frets.get(beat_idx) else { continue };
                    // Non-numeric or blank cells produce no note
                    let Ok(fret) = cell.parse::<u8>() else { continue };

                    let (class, octave) = REFERENCE_OPEN[string_idx];
                    let open = Pitch::new(class, octave);
                    let pitch = Pitch::from_pitch_number(open.pitch_number() + fret as i32);

                    sequence.push(NoteEvent {
                        beat: current_beat + beat_idx as u32,
                        pitch,
                        source_string: string_idx,
                        source_fret: fret,
                    });
                }
            }

            current_beat += beats_in_measure as u32;
        }

        // Skip the six consumed candidate rows
        i += 7;
    }

    sequence
}

fn first_cell(line: &str) -> &str {
    line.split(',').next().unwrap_or("").trim()
}
