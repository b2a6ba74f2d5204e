//! Fretboard Tablature Engine WASM Module
//!
//! Deterministic music-notation transformation engine: converts guitar
//! tablature CSV (or an abstract scale/key description) into fretboard
//! positions for arbitrary stringed instruments. The core is a chain of
//! pure transformations (pitch arithmetic, sequence extraction,
//! transposition, instrument mapping, grid assembly, and an algorithmic
//! exercise generator) exposed to JavaScript through the `api` module.

pub mod api;
pub mod assemble;
pub mod catalog;
pub mod error;
pub mod generator;
pub mod mapping;
pub mod models;
pub mod parse;
pub mod pipeline;
pub mod transpose;

// Re-export commonly used types
pub use error::TabError;
pub use models::{
    MappedNoteEvent, NoteEvent, Pitch, PitchClass, Scale, StringSpec, TabRow, Tablature, Tuning,
    TuningEntry,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Fretboard tablature engine WASM module initialized");
}
