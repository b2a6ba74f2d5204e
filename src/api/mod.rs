//! WASM API for the tablature engine
//!
//! This module is the JavaScript-facing boundary: argument resolution,
//! serialization, validation, and console logging live here. The core
//! transformation modules never touch `JsValue`.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, validation, error handling, and logging
//! - `types`: argument shapes and catalog views exchanged with JS
//! - `core`: the exported API functions

pub mod core;
pub mod helpers;
pub mod types;

pub use core::{
    generate_pedagogical_tab, generate_tab_from_csv, list_scales, list_tunings, scale_by_name,
    tuning_by_name,
};
