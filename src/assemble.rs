//! Assembly of mapped events into the fixed-length beat grid

use crate::models::{MappedNoteEvent, Tablature, Tuning};

/// Lay mapped events into a rest-filled grid of `total_beats` cells per string
///
/// Beats are 1-indexed; a beat outside `[1, total_beats]` is silently
/// dropped. Later events overwrite earlier ones at the same cell.
pub fn assemble(mapped: &[MappedNoteEvent], tuning: &Tuning, total_beats: usize) -> Tablature {
    let labels = tuning.strings().iter().map(|s| s.display_label());
    let mut tablature = Tablature::new(labels, total_beats);

    for event in mapped {
        if event.beat == 0 {
            continue;
        }
        tablature.set(event.string_index, (event.beat - 1) as usize, event.fret.to_string());
    }

    tablature
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::REST;

    fn mapped(beat: u32, string_index: usize, fret: u8) -> MappedNoteEvent {
        MappedNoteEvent {
            beat,
            string_index,
            fret,
        }
    }

    #[test]
    fn test_grid_shape() {
        let guitar = catalog::tuning_by_name("6-String Guitar (EADGBe)").unwrap();
        let tab = assemble(&[], guitar, 512);
        assert_eq!(tab.string_count(), 6);
        for row in tab.rows() {
            assert_eq!(row.cells.len(), 512);
            assert!(row.cells.iter().all(|c| c == REST));
        }
    }

    #[test]
    fn test_one_indexed_beat_placement() {
        let guitar = catalog::tuning_by_name("6-String Guitar (EADGBe)").unwrap();
        let tab = assemble(&[mapped(1, 0, 0), mapped(3, 1, 7)], guitar, 8);
        assert_eq!(tab.row("e4").unwrap().cells[0], "0");
        assert_eq!(tab.row("B3").unwrap().cells[2], "7");
        assert_eq!(tab.row("B3").unwrap().cells[0], REST);
    }

    #[test]
    fn test_out_of_range_beats_dropped() {
        let guitar = catalog::tuning_by_name("6-String Guitar (EADGBe)").unwrap();
        let tab = assemble(&[mapped(0, 0, 1), mapped(9, 0, 2)], guitar, 8);
        assert!(tab.row("e4").unwrap().cells.iter().all(|c| c == REST));
    }

    #[test]
    fn test_last_write_wins() {
        let guitar = catalog::tuning_by_name("6-String Guitar (EADGBe)").unwrap();
        let tab = assemble(&[mapped(2, 0, 3), mapped(2, 0, 5)], guitar, 8);
        assert_eq!(tab.row("e4").unwrap().cells[1], "5");
    }
}
