//! The fixed-size per-string beat grid
//!
//! A tablature is an ordered set of string rows, each holding exactly
//! `total_beats` text cells: a fret number or the rest marker. Rows keep
//! the tuning's order (thinnest string first) and serialize as a map from
//! display label to cell array, which is the shape the renderer consumes.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Rest marker for an empty beat cell
pub const REST: &str = "-";

/// Beats per measure in the fixed grid
pub const BEATS_PER_MEASURE: usize = 16;

/// Measures in a generated exercise
pub const MEASURE_COUNT: usize = 32;

/// Default timeline length: 32 measures of 16 beats
pub const TOTAL_BEATS: usize = MEASURE_COUNT * BEATS_PER_MEASURE;

/// One string's row of beat cells
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TabRow {
    /// Display label from the tuning, e.g. "e4", "B3"
    pub label: String,

    /// Exactly `total_beats` cells, each a fret number string or [`REST`]
    pub cells: Vec<String>,
}

/// Fixed-length per-string beat grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tablature {
    rows: Vec<TabRow>,
}

impl Tablature {
    /// Create a rest-filled grid with one row per label, in label order
    pub fn new(labels: impl IntoIterator<Item = String>, total_beats: usize) -> Self {
        let rows = labels
            .into_iter()
            .map(|label| TabRow {
                label,
                cells: vec![REST.to_string(); total_beats],
            })
            .collect();
        Self { rows }
    }

    /// Assemble from pre-built rows (generator path)
    pub fn from_rows(rows: Vec<TabRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TabRow] {
        &self.rows
    }

    /// Row lookup by display label
    pub fn row(&self, label: &str) -> Option<&TabRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    /// Write a cell by string index and 0-based beat index
    ///
    /// Out-of-range positions are ignored; a later write to the same cell
    /// overwrites an earlier one.
    pub fn set(&mut self, string_index: usize, beat_index: usize, cell: String) {
        if let Some(row) = self.rows.get_mut(string_index) {
            if let Some(slot) = row.cells.get_mut(beat_index) {
                *slot = cell;
            }
        }
    }

    pub fn string_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell count of the first row (all rows are equal length by construction)
    pub fn total_beats(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }
}

// Serialized shape is `{ "e4": ["0", "-", ...], "B3": [...] }`, preserving
// row order. serde_json and serde-wasm-bindgen both stream the map in
// iteration order, so the JS side sees strings thinnest-first.
impl Serialize for Tablature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for row in &self.rows {
            map.serialize_entry(&row.label, &row.cells)?;
        }
        map.end()
    }
}
