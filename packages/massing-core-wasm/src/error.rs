use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result type for boundary operations (parsing, configuration, parameter changes)
pub type Result<T> = std::result::Result<T, MassingError>;

/// Errors raised before anything reaches the geometry engine.
///
/// The engine itself never fails: degenerate input produces degenerate numbers.
#[derive(Error, Debug)]
pub enum MassingError {
    #[error("Invalid footprint JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid footprint object: {0}")]
    InvalidObject(String),

    #[error("Unsupported geometry type '{0}', expected 'MultiPolygon'")]
    UnsupportedGeometry(String),

    #[error("Footprint has no coordinates")]
    EmptyCoordinates,

    #[error("Invalid position at polygon {polygon}, ring {ring}, vertex {vertex}: expected at least [lon, lat]")]
    InvalidPosition {
        polygon: usize,
        ring: usize,
        vertex: usize,
    },

    #[error("{name} must be within [{min}, {max}], got {value}")]
    ParameterOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Floor count must be a non-negative whole number, got {0}")]
    InvalidFloorCount(f64),

    #[error("Invalid massing parameters: {0}")]
    InvalidParameters(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<MassingError> for JsValue {
    fn from(err: MassingError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
