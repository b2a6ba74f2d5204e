//! JavaScript-facing API for the tablature engine
//!
//! Entry points take plain text or structured `JsValue`s, run one of the
//! pure pipelines, and hand the grid back as a label-keyed object. All
//! failures come back as `JsValue` error strings; nothing here panics on
//! bad input.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, serialize, validate_max_fret, validation_error};
use super::types::{ScaleArg, ScaleInfo, TuningArg, TuningInfo};
use crate::catalog;
use crate::generator::generate_exercise;
use crate::models::{PitchClass, Tuning};
use crate::pipeline::{self, DEFAULT_MAX_FRET};
use crate::wasm_log;

// ============================================================================
// Argument resolution
// ============================================================================

fn resolve_tuning(value: JsValue) -> Result<Tuning, JsValue> {
    let arg: TuningArg = deserialize(value, "Failed to parse tuning argument")?;
    match arg {
        TuningArg::Name(name) => catalog::tuning_by_name(&name)
            .cloned()
            .ok_or_else(|| validation_error(format!("unknown tuning: '{}'", name))),
        TuningArg::Entries(entries) => {
            Tuning::from_entries(&entries).map_err(|e| validation_error(e.to_string()))
        }
    }
}

fn resolve_intervals(value: JsValue) -> Result<Vec<u8>, JsValue> {
    let arg: ScaleArg = deserialize(value, "Failed to parse scale argument")?;
    match arg {
        ScaleArg::Name(name) => catalog::scale_by_name(&name)
            .map(|def| def.intervals.to_vec())
            .ok_or_else(|| validation_error(format!("unknown scale: '{}'", name))),
        ScaleArg::Intervals(intervals) => Ok(intervals),
    }
}

fn resolve_key(name: &str) -> Result<PitchClass, JsValue> {
    PitchClass::from_name(name)
        .ok_or_else(|| validation_error(format!("unrecognized pitch name: '{}'", name)))
}

// ============================================================================
// Tab generation entry points
// ============================================================================

/// Convert CSV tablature text to a tab for any instrument and key
///
/// `tuning` is a catalog name or an array of string entries; `target_key`
/// defaults to "C" and `max_fret` to 15. Returns
/// `{ tablature, unmappable_count, unmappable }`.
#[wasm_bindgen]
pub fn generate_tab_from_csv(
    csv_text: &str,
    tuning: JsValue,
    target_key: Option<String>,
    max_fret: Option<u8>,
) -> Result<JsValue, JsValue> {
    let tuning = resolve_tuning(tuning)?;
    let key = resolve_key(target_key.as_deref().unwrap_or("C"))?;
    let max_fret = max_fret.unwrap_or(DEFAULT_MAX_FRET);
    validate_max_fret(max_fret).map_err(validation_error)?;

    wasm_log!(
        "generate_tab_from_csv: {} strings, key {}, max fret {}",
        tuning.len(),
        key,
        max_fret
    );

    let result = pipeline::generate_tab_from_csv(csv_text, &tuning, key, max_fret)
        .map_err(|e| validation_error(e.to_string()))?;

    serialize(&result, "Failed to serialize tab result")
}

/// Generate the complete 512-beat pedagogical exercise
///
/// No source data: `tuning` and `scale` are catalog names or explicit
/// values, `root_note` is a pitch-class name. Returns the label-keyed
/// tablature object.
#[wasm_bindgen]
pub fn generate_pedagogical_tab(
    tuning: JsValue,
    root_note: &str,
    scale: JsValue,
) -> Result<JsValue, JsValue> {
    let tuning = resolve_tuning(tuning)?;
    let root = resolve_key(root_note)?;
    let intervals = resolve_intervals(scale)?;

    wasm_log!(
        "generate_pedagogical_tab: {} strings, root {}, {} intervals",
        tuning.len(),
        root,
        intervals.len()
    );

    let tablature = generate_exercise(&tuning, root, &intervals)
        .map_err(|e| validation_error(e.to_string()))?;

    serialize(&tablature, "Failed to serialize tablature")
}

// ============================================================================
// Catalog queries
// ============================================================================

/// List the supported instrument tunings
#[wasm_bindgen]
pub fn list_tunings() -> Result<JsValue, JsValue> {
    let infos: Vec<TuningInfo> = catalog::TUNINGS
        .iter()
        .map(|def| TuningInfo {
            name: def.name.to_string(),
            string_count: def.tuning.len(),
            strings: def.tuning.strings().iter().map(|s| s.display_label()).collect(),
        })
        .collect();
    serialize(&infos, "Failed to serialize tuning list")
}

/// List the scale library
#[wasm_bindgen]
pub fn list_scales() -> Result<JsValue, JsValue> {
    let infos: Vec<ScaleInfo> = catalog::SCALES
        .iter()
        .map(|def| ScaleInfo {
            group: def.group.to_string(),
            name: def.name.to_string(),
            intervals: def.intervals.to_vec(),
        })
        .collect();
    serialize(&infos, "Failed to serialize scale list")
}

/// Fetch one catalog tuning as canonical string specs
#[wasm_bindgen]
pub fn tuning_by_name(name: &str) -> Result<JsValue, JsValue> {
    let tuning = catalog::tuning_by_name(name)
        .ok_or_else(|| validation_error(format!("unknown tuning: '{}'", name)))?;
    serialize(tuning, "Failed to serialize tuning")
}

/// Fetch one catalog scale's intervals
#[wasm_bindgen]
pub fn scale_by_name(name: &str) -> Result<JsValue, JsValue> {
    let def = catalog::scale_by_name(name)
        .ok_or_else(|| validation_error(format!("unknown scale: '{}'", name)))?;
    serialize(&def.intervals.to_vec(), "Failed to serialize scale")
}
