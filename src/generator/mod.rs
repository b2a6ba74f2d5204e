//! Algorithmic generation of a complete pedagogical exercise
//!
//! No source data: the full 512-beat tablature is synthesized from a
//! tuning, a root note, and a scale definition. The 32-measure timeline
//! is partitioned into six pattern modules by measure index:
//!
//! | Measures | Module                          |
//! |----------|---------------------------------|
//! | 0-5      | single-string linearization     |
//! | 6-9      | positional scale fragment       |
//! | 10-15    | diatonic melodic pattern        |
//! | 16-25    | chord-tone arpeggio             |
//! | 26-29    | multi-octave traversal          |
//! | 30-31    | capstone virtuoso               |

pub mod patterns;

use crate::error::TabError;
use crate::models::{
    PitchClass, Scale, TabRow, Tablature, Tuning, BEATS_PER_MEASURE, MEASURE_COUNT,
};
use patterns::{
    arpeggio, melodic, positional_fragment, rest_measure, single_string, traversal, virtuoso,
};

/// Synthesize the full exercise for one instrument, root, and scale
pub fn generate_exercise(
    tuning: &Tuning,
    root: PitchClass,
    intervals: &[u8],
) -> Result<Tablature, TabError> {
    if tuning.is_empty() {
        return Err(TabError::EmptyTuning);
    }
    let scale = Scale::new(root, intervals)?;
    let string_count = tuning.len();

    log::info!(
        "generating {}-measure exercise in {} for {} strings",
        MEASURE_COUNT,
        root,
        string_count
    );

    // Module 2 works across all strings at once, so its four measures are
    // generated up front and sliced per string below.
    let fragments: Vec<Vec<Vec<String>>> = (6..10)
        .map(|measure| positional_fragment(tuning, &scale, ((measure - 6) * 3) as u8))
        .collect();

    let mut rows = Vec::with_capacity(string_count);
    for (string_idx, spec) in tuning.strings().iter().enumerate() {
        let open = spec.pitch_class;
        let mut cells = Vec::with_capacity(MEASURE_COUNT * BEATS_PER_MEASURE);

        for measure in 0..MEASURE_COUNT {
            let pattern = match measure {
                // One active string per measure, rotating
                0..=5 => {
                    if measure % string_count == string_idx {
                        single_string(open, &scale)
                    } else {
                        rest_measure()
                    }
                }
                6..=9 => fragments[measure - 6][string_idx].clone(),
                10..=15 => melodic(open, &scale, measure),
                16..=25 => arpeggio(open, &scale, measure),
                26..=29 => traversal(open, &scale, measure - 26),
                _ => virtuoso(open, &scale, measure),
            };
            debug_assert_eq!(pattern.len(), BEATS_PER_MEASURE);
            cells.extend(pattern);
        }

        rows.push(TabRow {
            label: spec.display_label(),
            cells,
        });
    }

    Ok(Tablature::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::{REST, TOTAL_BEATS};

    const MAJOR: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

    #[test]
    fn test_grid_dimensions() {
        let guitar = catalog::tuning_by_name("6-String Guitar (EADGBe)").unwrap();
        let tab = generate_exercise(guitar, PitchClass::C, &MAJOR).unwrap();
        assert_eq!(tab.string_count(), 6);
        for row in tab.rows() {
            assert_eq!(row.cells.len(), TOTAL_BEATS);
        }
    }

    #[test]
    fn test_measure_zero_rotation() {
        let guitar = catalog::tuning_by_name("6-String Guitar (EADGBe)").unwrap();
        let tab = generate_exercise(guitar, PitchClass::C, &MAJOR).unwrap();

        // Measure 0 belongs to string 0; every other string rests
        let first = &tab.rows()[0].cells[..BEATS_PER_MEASURE];
        assert!(first.iter().any(|c| c != REST));
        for row in &tab.rows()[1..] {
            assert!(row.cells[..BEATS_PER_MEASURE].iter().all(|c| c == REST));
        }

        // Measure 1 rotates to string 1
        let second = &tab.rows()[1].cells[BEATS_PER_MEASURE..2 * BEATS_PER_MEASURE];
        assert!(second.iter().any(|c| c != REST));
    }

    #[test]
    fn test_rotation_wraps_on_small_instruments() {
        let mandolin = catalog::tuning_by_name("Mandolin (GDAE)").unwrap();
        let tab = generate_exercise(mandolin, PitchClass::C, &MAJOR).unwrap();
        // Measure 4 wraps back to string 0 on a 4-string instrument
        let measure4 = &tab.rows()[0].cells[4 * BEATS_PER_MEASURE..5 * BEATS_PER_MEASURE];
        assert!(measure4.iter().any(|c| c != REST));
    }

    #[test]
    fn test_active_cells_stay_in_scale() {
        let guitar = catalog::tuning_by_name("6-String Guitar (EADGBe)").unwrap();
        let scale = Scale::new(PitchClass::C, &MAJOR).unwrap();
        let tab = generate_exercise(guitar, PitchClass::C, &MAJOR).unwrap();

        // Modules 1-3 and 5-6 draw only scale notes; module 4 draws chord
        // tones, which are scale notes too. Every sounded cell must land
        // on a scale pitch class.
        for (string_idx, row) in tab.rows().iter().enumerate() {
            let open = guitar.get(string_idx).unwrap().pitch_class;
            for cell in &row.cells {
                if cell == REST {
                    continue;
                }
                let fret: i32 = cell.parse().unwrap();
                let class = PitchClass::from_index(open.chromatic_index() as i32 + fret);
                assert!(scale.contains(class), "fret {} on string {} off-scale", fret, string_idx);
            }
        }
    }

    #[test]
    fn test_empty_tuning_rejected() {
        let empty = Tuning::new(vec![]);
        assert_eq!(
            generate_exercise(&empty, PitchClass::C, &MAJOR),
            Err(TabError::EmptyTuning)
        );
    }

    #[test]
    fn test_deterministic() {
        let guitar = catalog::tuning_by_name("6-String Guitar (EADGBe)").unwrap();
        let a = generate_exercise(guitar, PitchClass::A, &[0, 3, 5, 7, 10]).unwrap();
        let b = generate_exercise(guitar, PitchClass::A, &[0, 3, 5, 7, 10]).unwrap();
        assert_eq!(a, b);
    }
}
