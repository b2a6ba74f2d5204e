//! The six measure-range pattern rules of the pedagogical exercise
//!
//! Every rule emits exactly 16 cells per string per measure, padding with
//! rest markers. A string that cannot supply the rule's minimum number of
//! notes yields an all-rest measure instead of failing.

use crate::mapping::fret_positions;
use crate::models::{PitchClass, Scale, Tuning, BEATS_PER_MEASURE, REST};

/// A measure of nothing but rests
pub fn rest_measure() -> Vec<String> {
    vec![REST.to_string(); BEATS_PER_MEASURE]
}

/// Frets on a string whose sounding pitch class belongs to the scale,
/// ascending fret order
fn scale_frets(open: PitchClass, scale: &Scale, max_fret: u8) -> Vec<u8> {
    (0..=max_fret)
        .filter(|&fret| scale.contains(PitchClass::from_index(open.chromatic_index() as i32 + fret as i32)))
        .collect()
}

fn pad_to_measure(mut pattern: Vec<String>) -> Vec<String> {
    while pattern.len() < BEATS_PER_MEASURE {
        pattern.push(REST.to_string());
    }
    pattern.truncate(BEATS_PER_MEASURE);
    pattern
}

/// Module 1: single-string linearization
///
/// A fixed 3-note permutation over the lowest scale positions on the
/// string, with degraded 2-note and 1-note shapes when the string is
/// note-poor.
pub fn single_string(open: PitchClass, scale: &Scale) -> Vec<String> {
    let notes = scale_frets(open, scale, 12);

    match notes.len() {
        0 => rest_measure(),
        1 => {
            let n1 = notes[0].to_string();
            let r = REST.to_string();
            vec![
                n1.clone(), r.clone(), n1.clone(), r.clone(),
                n1.clone(), r.clone(), r.clone(), r.clone(),
                n1.clone(), r.clone(), n1.clone(), r.clone(),
                n1.clone(), r.clone(), r.clone(), r,
            ]
        }
        2 => {
            let n1 = notes[0].to_string();
            let n2 = notes[1].to_string();
            vec![
                n1.clone(), n2.clone(), n1.clone(), n2.clone(),
                n1.clone(), n2.clone(), n2.clone(), n1.clone(),
                n2.clone(), n1.clone(), n2.clone(), n1.clone(),
                n2.clone(), n1.clone(), n1, REST.to_string(),
            ]
        }
        _ => {
            let n1 = notes[0].to_string();
            let n2 = notes[1].to_string();
            let n3 = notes[2].to_string();
            vec![
                n1.clone(), n2.clone(), n1.clone(), n3.clone(),
                n2.clone(), n3.clone(), n2.clone(), n1.clone(),
                n3.clone(), n1.clone(), n2.clone(), n1.clone(),
                n3.clone(), n1, n3, n2,
            ]
        }
    }
}

/// Module 2: positional scale fragment across all strings
///
/// Collects up to 2 scale positions per string inside a 5-fret window and
/// spreads the collected sequence evenly over the 16 beats. Returns one
/// 16-cell pattern per string, thinnest first.
pub fn positional_fragment(tuning: &Tuning, scale: &Scale, start_fret: u8) -> Vec<Vec<String>> {
    // (string index, fret) in collection order
    let mut sequence: Vec<(usize, u8)> = Vec::new();
    for (string_idx, spec) in tuning.strings().iter().enumerate() {
        let mut collected = 0;
        for fret in start_fret..=start_fret + 5 {
            let class = PitchClass::from_index(spec.pitch_class.chromatic_index() as i32 + fret as i32);
            if scale.contains(class) {
                sequence.push((string_idx, fret));
                collected += 1;
                if collected >= 2 {
                    break;
                }
            }
        }
    }

    let beats_per_note = if sequence.is_empty() {
        BEATS_PER_MEASURE
    } else {
        (BEATS_PER_MEASURE / sequence.len()).max(1)
    };

    (0..tuning.len())
        .map(|string_idx| {
            let mut pattern = rest_measure();
            for (seq_idx, &(owner, fret)) in sequence.iter().enumerate() {
                if owner == string_idx {
                    let beat = seq_idx * beats_per_note;
                    if beat < BEATS_PER_MEASURE {
                        pattern[beat] = fret.to_string();
                    }
                }
            }
            pattern
        })
        .collect()
}

/// Module 3: diatonic melodic pattern
///
/// Four skip-and-return pairs with a starting offset that rotates by
/// measure index. Needs at least 3 available notes.
pub fn melodic(open: PitchClass, scale: &Scale, measure: usize) -> Vec<String> {
    let notes = scale_frets(open, scale, 12);
    if notes.len() < 3 {
        return rest_measure();
    }

    let offset = measure % notes.len();
    let mut pattern = Vec::with_capacity(BEATS_PER_MEASURE);
    for i in 0..4 {
        let idx = (i + offset) % notes.len();
        let skip_idx = (i + offset + 2) % notes.len();
        pattern.push(notes[idx].to_string());
        pattern.push(REST.to_string());
        pattern.push(notes[skip_idx].to_string());
        pattern.push(REST.to_string());
    }
    pattern
}

/// Module 4: chord-tone arpeggio
///
/// All fret positions of the scale's root, third, and fifth within 12
/// frets, tone-major order, direction alternating with measure parity,
/// one note per 2 beats.
pub fn arpeggio(open: PitchClass, scale: &Scale, measure: usize) -> Vec<String> {
    let mut positions: Vec<u8> = scale
        .chord_tones()
        .into_iter()
        .flat_map(|tone| fret_positions(tone, open, 12))
        .collect();
    if positions.is_empty() {
        return rest_measure();
    }

    if measure % 2 != 0 {
        positions.reverse();
    }

    let mut pattern = Vec::new();
    for fret in positions {
        pattern.push(fret.to_string());
        pattern.push(REST.to_string());
    }
    pad_to_measure(pattern)
}

/// Module 5: multi-octave traversal
///
/// A sliding 6-note window over all scale positions within 15 frets; the
/// window start and run direction rotate with the local measure index.
pub fn traversal(open: PitchClass, scale: &Scale, local_measure: usize) -> Vec<String> {
    let notes = scale_frets(open, scale, 15);
    if notes.len() < 2 {
        return rest_measure();
    }

    let slice_size = notes.len().min(6);
    let window_starts = (notes.len() - slice_size + 1).max(1);
    let start = local_measure % window_starts;
    let mut run: Vec<u8> = notes[start..start + slice_size].to_vec();
    if local_measure % 2 != 0 {
        run.reverse();
    }

    pad_to_measure(run.into_iter().map(|fret| fret.to_string()).collect())
}

/// Module 6: capstone virtuoso runs
///
/// Three shapes rotating by measure index: ascending with rhythmic gaps,
/// a pure descending run, or skip-every-other. Each shape is capped at 14
/// cells before rest-padding.
pub fn virtuoso(open: PitchClass, scale: &Scale, measure: usize) -> Vec<String> {
    let notes = scale_frets(open, scale, 12);
    if notes.len() < 3 {
        return rest_measure();
    }

    let mut pattern = Vec::new();
    match measure % 3 {
        0 => {
            for (i, fret) in notes.iter().enumerate() {
                if pattern.len() >= 14 {
                    break;
                }
                pattern.push(fret.to_string());
                if i % 2 == 0 {
                    pattern.push(REST.to_string());
                }
            }
        }
        1 => {
            for fret in notes.iter().rev() {
                if pattern.len() >= 14 {
                    break;
                }
                pattern.push(fret.to_string());
            }
        }
        _ => {
            for fret in notes.iter().step_by(2) {
                if pattern.len() >= 14 {
                    break;
                }
                pattern.push(fret.to_string());
                pattern.push(REST.to_string());
            }
        }
    }

    pad_to_measure(pattern)
}
