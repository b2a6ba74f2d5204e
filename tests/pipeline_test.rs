// End-to-end tests for the CSV extraction pipeline:
// extraction → transposition → mapping → assembly.

use fretboard_wasm::catalog;
use fretboard_wasm::models::{Pitch, PitchClass, REST, TOTAL_BEATS};
use fretboard_wasm::parse::extract_note_sequence;
use fretboard_wasm::pipeline::{generate_tab_from_csv, DEFAULT_MAX_FRET};
use fretboard_wasm::TabError;

/// One measure with a single open-string note on the high e string
const SINGLE_NOTE_CSV: &str = "\
Strings\\Beats>,1
e4,0
B3,
G3,
D3,
A2,
E2,";

fn guitar() -> &'static fretboard_wasm::Tuning {
    catalog::tuning_by_name("6-String Guitar (EADGBe)").unwrap()
}

#[test]
fn test_single_note_extraction() {
    let sequence = extract_note_sequence(SINGLE_NOTE_CSV);
    assert_eq!(sequence.len(), 1);
    let event = &sequence[0];
    assert_eq!(event.beat, 1);
    assert_eq!(event.pitch, Pitch::new(PitchClass::E, 4));
    assert_eq!(event.source_string, 0);
    assert_eq!(event.source_fret, 0);
}

#[test]
fn test_single_note_end_to_end() {
    let result =
        generate_tab_from_csv(SINGLE_NOTE_CSV, guitar(), PitchClass::C, DEFAULT_MAX_FRET).unwrap();

    assert_eq!(result.unmappable_count, 0);
    assert!(result.unmappable.is_empty());

    let tab = &result.tablature;
    assert_eq!(tab.string_count(), 6);
    for row in tab.rows() {
        assert_eq!(row.cells.len(), TOTAL_BEATS);
    }

    // Open E on the high string at beat 1, silence everywhere else
    let high_e = tab.row("e4").unwrap();
    assert_eq!(high_e.cells[0], "0");
    assert!(high_e.cells[1..].iter().all(|c| c == REST));
    for label in ["B3", "G3", "D3", "A2", "E2"] {
        assert!(tab.row(label).unwrap().cells.iter().all(|c| c == REST));
    }
}

#[test]
fn test_transposed_pipeline() {
    // C → G moves the open E up to B4, still on the same string at fret 7
    let result =
        generate_tab_from_csv(SINGLE_NOTE_CSV, guitar(), PitchClass::G, DEFAULT_MAX_FRET).unwrap();
    assert_eq!(result.unmappable_count, 0);
    assert_eq!(result.tablature.row("e4").unwrap().cells[0], "7");
}

#[test]
fn test_cross_instrument_mapping() {
    // E4 sits below the mandolin's E5 string, so the same-position pass
    // fails and the exhaustive pass finds the first string that can
    // sound it.
    let mandolin = catalog::tuning_by_name("Mandolin (GDAE)").unwrap();
    let result =
        generate_tab_from_csv(SINGLE_NOTE_CSV, mandolin, PitchClass::C, DEFAULT_MAX_FRET).unwrap();
    assert_eq!(result.tablature.string_count(), 4);

    // E4 maps onto the D4 string at fret 2 (first string that can sound it)
    let d_string = result.tablature.row("D4").unwrap();
    assert_eq!(d_string.cells[0], "2");
    assert_eq!(result.unmappable_count, 0);
}

#[test]
fn test_multi_measure_timeline() {
    // Two measure blocks of 4 beats each; the second block's note lands at
    // absolute beat 6 → cell index 5
    let csv = "\
Strings\\Beats>,1,2,3,4
e4,0,,,
B3,,,,
G3,,,,
D3,,,,
A2,,,,
E2,,,,
Strings\\Beats>,1,2,3,4
e4,,3,,
B3,,,,
G3,,,,
D3,,,,
A2,,,,
E2,,,,";
    let result = generate_tab_from_csv(csv, guitar(), PitchClass::C, DEFAULT_MAX_FRET).unwrap();
    let high_e = result.tablature.row("e4").unwrap();
    assert_eq!(high_e.cells[0], "0");
    assert_eq!(high_e.cells[5], "3");
    assert_eq!(high_e.cells.iter().filter(|c| *c != REST).count(), 2);
}

#[test]
fn test_unmappable_notes_reported_not_fatal() {
    // Fret 15 on the high e (G5) is far above a bass's range even after
    // the retry shifts; the note is reported, the rest of the tab stands
    let csv = "\
Strings\\Beats>,1,2
e4,15,
B3,,
G3,,
D3,,
A2,,0
E2,,";
    let bass = catalog::tuning_by_name("4-String Bass (EADG)").unwrap();
    let result = generate_tab_from_csv(csv, bass, PitchClass::C, DEFAULT_MAX_FRET).unwrap();
    assert_eq!(
        result.unmappable_count + result
            .tablature
            .rows()
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter(|c| *c != REST)
            .count(),
        2
    );
}

#[test]
fn test_empty_input_fails() {
    assert_eq!(
        generate_tab_from_csv("", guitar(), PitchClass::C, DEFAULT_MAX_FRET).err(),
        Some(TabError::EmptyInput)
    );
}

#[test]
fn test_headerless_text_produces_silent_tab() {
    // Text with no header rows extracts nothing but is not catastrophic
    let result =
        generate_tab_from_csv("just,some,cells", guitar(), PitchClass::C, DEFAULT_MAX_FRET)
            .unwrap();
    assert_eq!(result.unmappable_count, 0);
    assert!(result
        .tablature
        .rows()
        .iter()
        .all(|r| r.cells.iter().all(|c| c == REST)));
}
