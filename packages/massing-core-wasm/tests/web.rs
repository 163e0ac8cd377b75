//! Tests for the wasm exports, run with `wasm-pack test --node`.
#![cfg(target_arch = "wasm32")]

use massing_core_wasm::*;
use wasm_bindgen_test::*;

const PLOT: &str = r#"{"type":"MultiPolygon","coordinates":[[[
    [6.6105,46.5152,0],[6.6112,46.5151,0],[6.6113,46.5156,0],[6.6106,46.5157,0],[6.6105,46.5152,0]
]]]}"#;
const PLOT_AREA: f64 = 3069.9696761913397;

fn fresh_session() {
    configure_engine("{}").expect("default config");
}

#[wasm_bindgen_test]
fn upload_returns_fly_to_view_state() {
    fresh_session();
    let view: ViewState = serde_wasm_bindgen::from_value(upload_footprint_json(PLOT).unwrap()).unwrap();
    assert!((view.longitude - 6.6109).abs() < 1e-9);
    assert!((view.latitude - 46.5154).abs() < 1e-9);
    assert_eq!(view.transition_duration, Some(4000));
}

#[wasm_bindgen_test]
fn slider_changes_return_fresh_snapshots() {
    fresh_session();
    upload_footprint_json(PLOT).unwrap();
    set_floor_count(3.0).unwrap();
    let snapshot: MassingSnapshot =
        serde_wasm_bindgen::from_value(set_floor_height(4.0).unwrap()).unwrap();

    assert_eq!(snapshot.floors.len(), 3);
    assert_eq!(snapshot.metrics.building_height, 12.0);
    assert!((snapshot.metrics.land_area - PLOT_AREA).abs() / PLOT_AREA < 1e-9);
    assert!((snapshot.metrics.building_area - PLOT_AREA / 4.0).abs() / PLOT_AREA < 1e-6);
}

#[wasm_bindgen_test]
fn out_of_range_parameter_is_an_error() {
    fresh_session();
    upload_footprint_json(PLOT).unwrap();
    let before: Metrics = serde_wasm_bindgen::from_value(get_metrics().unwrap()).unwrap();
    let err = set_floor_count(500.0).unwrap_err();
    assert!(err.as_string().unwrap().contains("Number of floors"));
    let after: Metrics = serde_wasm_bindgen::from_value(get_metrics().unwrap()).unwrap();
    assert_eq!(before, after);
}

#[wasm_bindgen_test]
fn malformed_upload_keeps_previous_plot() {
    fresh_session();
    upload_footprint_json(PLOT).unwrap();
    assert!(upload_footprint_json(r#"{"type":"Point","coordinates":[]}"#).is_err());
    assert!(upload_footprint_json("not json").is_err());
    let metrics: Metrics = serde_wasm_bindgen::from_value(get_metrics().unwrap()).unwrap();
    assert!(metrics.land_area > 0.0);
}

#[wasm_bindgen_test]
fn stateless_helpers_agree_with_session() {
    let area = compute_plot_area(PLOT).unwrap();
    assert!((area - PLOT_AREA).abs() / PLOT_AREA < 1e-9);

    let snapshot: MassingSnapshot = serde_wasm_bindgen::from_value(
        compute_massing(PLOT, r#"{"scalePercent":50,"floorCount":2,"floorHeight":3}"#).unwrap(),
    )
    .unwrap();
    assert_eq!(snapshot.floors.len(), 2);
    assert_eq!(snapshot.metrics.building_height, 6.0);
}

#[wasm_bindgen_test]
fn stateless_helpers_hold_parameters_to_bounds() {
    fresh_session();
    assert!(generate_floor_stack(PLOT, 4_000_000_000.0, 3.0).is_err());
    assert!(generate_floor_stack(PLOT, 2.5, 3.0).is_err());
    let floors: Vec<serde_json::Value> =
        serde_wasm_bindgen::from_value(generate_floor_stack(PLOT, 3.0, 3.0).unwrap()).unwrap();
    assert_eq!(floors.len(), 3);

    let err = compute_massing(PLOT, r#"{"floorCount":500}"#).unwrap_err();
    assert!(err.as_string().unwrap().contains("Number of floors"));
    let err = compute_massing(PLOT, "not json").unwrap_err();
    assert!(err.as_string().unwrap().starts_with("Invalid massing parameters"));
}

#[wasm_bindgen_test]
fn partial_initial_config_keeps_slider_defaults() {
    configure_engine(r#"{"initial":{"floorCount":2}}"#).unwrap();
    let snapshot: MassingSnapshot = serde_wasm_bindgen::from_value(get_snapshot().unwrap()).unwrap();
    assert_eq!(snapshot.parameters.floor_count, 2);
    assert_eq!(snapshot.parameters.scale_percent, 50.0);
    assert_eq!(snapshot.parameters.floor_height, 4.0);
    fresh_session();
}
