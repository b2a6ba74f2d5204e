//! WASM build test
//!
//! This module tests that the WASM module can be built and the JS-facing
//! entry points work through `JsValue`.

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use fretboard_wasm::api;

wasm_bindgen_test_configure!(run_in_browser);

fn js(value: &impl serde::Serialize) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap()
}

#[wasm_bindgen_test]
fn test_list_tunings() {
    let result = api::list_tunings();
    assert!(result.is_ok());
    let infos: Vec<serde_json::Value> = serde_wasm_bindgen::from_value(result.unwrap()).unwrap();
    assert_eq!(infos.len(), 6);
}

#[wasm_bindgen_test]
fn test_list_scales() {
    let result = api::list_scales();
    assert!(result.is_ok());
}

#[wasm_bindgen_test]
fn test_generate_tab_from_csv_by_catalog_name() {
    let csv = "Strings\\Beats>,1\ne4,0\nB3,\nG3,\nD3,\nA2,\nE2,";
    let result = api::generate_tab_from_csv(
        csv,
        js(&"6-String Guitar (EADGBe)"),
        Some("G".to_string()),
        None,
    );
    assert!(result.is_ok());
}

#[wasm_bindgen_test]
fn test_generate_pedagogical_tab_by_names() {
    let result =
        api::generate_pedagogical_tab(js(&"Mandolin (GDAE)"), "A", js(&"Minor Pentatonic"));
    assert!(result.is_ok());
}

#[wasm_bindgen_test]
fn test_generate_pedagogical_tab_with_explicit_arguments() {
    let tuning = js(&vec!["E4", "B3", "G3", "D3", "A2", "E2"]);
    let intervals = js(&vec![0u8, 2, 4, 5, 7, 9, 11]);
    let result = api::generate_pedagogical_tab(tuning, "C", intervals);
    assert!(result.is_ok());
}

#[wasm_bindgen_test]
fn test_bad_arguments_are_rejected() {
    let result = api::generate_pedagogical_tab(js(&"No Such Tuning"), "C", js(&"Major"));
    assert!(result.is_err());

    let result = api::generate_pedagogical_tab(js(&"Mandolin (GDAE)"), "H", js(&"Major"));
    assert!(result.is_err());
}
