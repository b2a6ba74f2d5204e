//! Shared types for the WASM API
//!
//! Argument shapes accepted from JavaScript and the catalog views
//! returned to it.

use crate::models::TuningEntry;
use serde::{Deserialize, Serialize};

/// A tuning argument: either a catalog name or explicit string entries
#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum TuningArg {
    /// Explicit entries in any legacy shape ("E4", { open_note }, { label, octave })
    Entries(Vec<TuningEntry>),

    /// A catalog tuning name, e.g. "6-String Guitar (EADGBe)"
    Name(String),
}

/// A scale argument: either a catalog name or explicit intervals
#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum ScaleArg {
    /// Explicit semitone intervals, ascending from 0
    Intervals(Vec<u8>),

    /// A catalog scale name, e.g. "Harmonic Minor"
    Name(String),
}

/// Catalog view of one tuning, returned by `list_tunings`
#[derive(Serialize, Clone, Debug)]
pub struct TuningInfo {
    pub name: String,
    pub string_count: usize,
    /// Display labels thinnest-first, e.g. ["e4", "B3", ...]
    pub strings: Vec<String>,
}

/// Catalog view of one scale, returned by `list_scales`
#[derive(Serialize, Clone, Debug)]
pub struct ScaleInfo {
    pub group: String,
    pub name: String,
    pub intervals: Vec<u8>,
}
