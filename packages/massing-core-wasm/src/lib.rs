use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

// Create a console module for logging
pub mod console;
// Boundary errors
pub mod error;
// Engine configuration
pub mod config;
// Uploaded GeoJSON and its typed form
pub mod footprint;
// Geometry engine
pub mod area;
pub mod centroid;
pub mod scale;
pub mod floors;
pub mod metrics;
pub mod engine;
// Outputs for the camera, the map layers and the metrics panel
pub mod view_state;
pub mod layers;
pub mod report;
// Stateful session driven by the front-end
pub mod session;
mod module_state;
mod models;

#[cfg(test)]
mod test_support;

pub use config::{MassingConfig, ParameterBounds};
pub use engine::{recompute, MassingParameters, MassingSnapshot};
pub use error::MassingError;
pub use footprint::{parse_footprint, Coordinate, Footprint, FootprintDocument};
pub use metrics::Metrics;
pub use session::Session;
pub use view_state::ViewState;

use module_state::ModuleState;
use models::EngineInfo;

// Enable better panic messages in console during development
#[cfg(feature = "console_error_panic_hook")]
pub use console_error_panic_hook::set_once as set_panic_hook;

// Use the macro from our console module
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => ($crate::console::log(&format!($($t)*)))
}

// Errors crossing into JS are plain strings
type JsResult<T> = std::result::Result<T, JsValue>;

use std::sync::Once;
static INIT: Once = Once::new();

// This sets up the wasm_bindgen start functionality
#[wasm_bindgen(start)]
pub fn start() {
    INIT.call_once(|| {
        // Set the panic hook for better error messages
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        ModuleState::with_mut(|state| state.reset());

        console_log!("Massing WASM module initialized successfully");
    });
}

/// Replace the engine configuration from a JSON string. Resets the session.
#[wasm_bindgen]
pub fn configure_engine(config_json: &str) -> JsResult<()> {
    let config = MassingConfig::from_json(config_json)?;
    ModuleState::with_mut(|state| state.configure(config));
    console_log!(
        "Engine configured: scale {}%, {} floor(s) at {} m",
        config.initial.scale_percent,
        config.initial.floor_count,
        config.initial.floor_height
    );
    Ok(())
}

fn upload(footprint: Footprint) -> JsResult<JsValue> {
    ModuleState::with_mut(|state| -> JsResult<JsValue> {
        state.uploads += 1;
        state.recomputes += 1;
        let view = state.session.upload(footprint);
        Ok(to_value(view)?)
    })
}

/// Upload an already parsed GeoJSON `MultiPolygon`. Returns the new view state.
#[wasm_bindgen]
pub fn upload_footprint(data: JsValue) -> JsResult<JsValue> {
    let footprint: Footprint = serde_wasm_bindgen::from_value(data)
        .map_err(|e| MassingError::InvalidObject(e.to_string()))?;
    upload(footprint)
}

/// Upload GeoJSON text. Returns the new view state.
#[wasm_bindgen]
pub fn upload_footprint_json(json: &str) -> JsResult<JsValue> {
    let footprint = parse_footprint(json)?;
    upload(footprint)
}

#[wasm_bindgen]
pub fn set_plot_scale(value: f64) -> JsResult<JsValue> {
    ModuleState::with_mut(|state| -> JsResult<JsValue> {
        let snapshot = state.session.set_scale_percent(value)?;
        let js = to_value(snapshot)?;
        state.recomputes += 1;
        Ok(js)
    })
}

#[wasm_bindgen]
pub fn set_floor_count(value: f64) -> JsResult<JsValue> {
    ModuleState::with_mut(|state| -> JsResult<JsValue> {
        let snapshot = state.session.set_floor_count(value)?;
        let js = to_value(snapshot)?;
        state.recomputes += 1;
        Ok(js)
    })
}

#[wasm_bindgen]
pub fn set_floor_height(value: f64) -> JsResult<JsValue> {
    ModuleState::with_mut(|state| -> JsResult<JsValue> {
        let snapshot = state.session.set_floor_height(value)?;
        let js = to_value(snapshot)?;
        state.recomputes += 1;
        Ok(js)
    })
}

#[wasm_bindgen]
pub fn get_snapshot() -> JsResult<JsValue> {
    ModuleState::with(|state| -> JsResult<JsValue> { Ok(to_value(state.session.snapshot())?) })
}

#[wasm_bindgen]
pub fn get_metrics() -> JsResult<JsValue> {
    ModuleState::with(|state| -> JsResult<JsValue> { Ok(to_value(state.session.metrics())?) })
}

#[wasm_bindgen]
pub fn get_floors() -> JsResult<JsValue> {
    ModuleState::with(|state| -> JsResult<JsValue> { Ok(to_value(state.session.floors())?) })
}

#[wasm_bindgen]
pub fn get_view_state() -> JsResult<JsValue> {
    ModuleState::with(|state| -> JsResult<JsValue> { Ok(to_value(state.session.view_state())?) })
}

/// Base outline plus one extruded layer per floor, ready for the map renderer
#[wasm_bindgen]
pub fn get_render_layers() -> JsResult<JsValue> {
    ModuleState::with(|state| -> JsResult<JsValue> { Ok(to_value(&state.session.layers())?) })
}

#[wasm_bindgen]
pub fn get_metrics_report() -> JsResult<JsValue> {
    ModuleState::with(|state| -> JsResult<JsValue> { Ok(to_value(&state.session.report())?) })
}

// Function to drop the plot and restore the configured parameters
#[wasm_bindgen]
pub fn reset_session() -> bool {
    ModuleState::with_mut(|state| state.reset());
    console_log!("Session reset");
    true
}

// Stateless helpers: same engine, no session involved

fn configured_bounds() -> ParameterBounds {
    ModuleState::with(|state| state.session.config().bounds)
}

#[wasm_bindgen]
pub fn compute_plot_area(json: &str) -> JsResult<f64> {
    let footprint = parse_footprint(json)?;
    Ok(area::footprint_area(&footprint))
}

#[wasm_bindgen]
pub fn compute_plot_center(json: &str) -> JsResult<JsValue> {
    let footprint = parse_footprint(json)?;
    Ok(to_value(&centroid::footprint_center(&footprint))?)
}

#[wasm_bindgen]
pub fn scale_plot(json: &str, scale_percent: f64) -> JsResult<JsValue> {
    let footprint = parse_footprint(json)?;
    Ok(to_value(&scale::scale_footprint(&footprint, scale_percent))?)
}

/// Floor stack for a plot, with the count and height held to the configured bounds
#[wasm_bindgen]
pub fn generate_floor_stack(json: &str, floor_count: f64, floor_height: f64) -> JsResult<JsValue> {
    let footprint = parse_footprint(json)?;
    let bounds = configured_bounds();
    let floor_count = bounds.check_floor_count(floor_count)?;
    let floor_height = bounds.check_floor_height(floor_height)?;
    Ok(to_value(&floors::generate_floors(&footprint, floor_count, floor_height))?)
}

/// Full recompute pass for a plot and a parameter record, both as JSON
#[wasm_bindgen]
pub fn compute_massing(json: &str, params_json: &str) -> JsResult<JsValue> {
    let footprint = parse_footprint(json)?;
    let params = configured_bounds().parse_parameters(params_json)?;
    Ok(to_value(&recompute(Some(&footprint), &params))?)
}

// Get information about the engine and its current session
#[wasm_bindgen]
pub fn get_engine_info() -> JsResult<JsValue> {
    ModuleState::with(|state| -> JsResult<JsValue> {
        let info = EngineInfo {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            has_footprint: state.session.document().is_some(),
            parameters: *state.session.parameters(),
            config: *state.session.config(),
            uploads: state.uploads,
            recomputes: state.recomputes,
        };
        Ok(to_value(&info)?)
    })
}
