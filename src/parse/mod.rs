//! Parsers for source tablature text formats

pub mod csv;

pub use csv::extract_note_sequence;
