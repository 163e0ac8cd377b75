use serde::{Deserialize, Serialize};

use crate::floors::{FloorRecord, Rgb};
use crate::footprint::Footprint;

pub const BASE_LAYER_ID: &str = "base-plot";

const BASE_FILL: Rgb = Rgb([245, 245, 245]);
const BASE_LINE: Rgb = Rgb([180, 180, 180]);
const BASE_LINE_WIDTH: f64 = 0.5;
const BASE_DASH: [f64; 2] = [5.0, 2.0];
const BASE_ELEVATION: f64 = 1.0;

/// A GeoJSON layer description for the map renderer.
///
/// Field names follow the renderer's layer props so the front-end can spread them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderLayer {
    pub id: String,
    pub data: Footprint,
    pub opacity: f64,
    pub stroked: bool,
    pub filled: bool,
    pub extruded: bool,
    pub wireframe: bool,
    pub fill_color: Rgb,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<[f64; 2]>,
    pub elevation: f64,
}

/// Flat dashed outline of the plot as uploaded
pub fn base_layer(original: &Footprint) -> RenderLayer {
    RenderLayer {
        id: BASE_LAYER_ID.to_string(),
        data: original.clone(),
        opacity: 1.0,
        stroked: true,
        filled: true,
        extruded: false,
        wireframe: true,
        fill_color: BASE_FILL,
        line_color: Some(BASE_LINE),
        line_width: Some(BASE_LINE_WIDTH),
        dash_array: Some(BASE_DASH),
        elevation: BASE_ELEVATION,
    }
}

/// One slab extruded by the record's nominal height from its base elevation
pub fn floor_layer(floor: &FloorRecord) -> RenderLayer {
    RenderLayer {
        id: format!("{}-poly-2", floor.index),
        data: floor.geometry.clone(),
        opacity: 1.0,
        stroked: true,
        filled: true,
        extruded: true,
        wireframe: true,
        fill_color: floor.color,
        line_color: None,
        line_width: None,
        dash_array: None,
        elevation: floor.nominal_slab_height,
    }
}

pub fn build_layers(original: Option<&Footprint>, floors: &[FloorRecord]) -> Vec<RenderLayer> {
    let mut layers = Vec::with_capacity(floors.len() + 1);
    if let Some(footprint) = original {
        layers.push(base_layer(footprint));
    }
    layers.extend(floors.iter().map(floor_layer));
    layers
}
