use serde::{Deserialize, Serialize};

use crate::centroid::footprint_center;
use crate::config::ViewConfig;
use crate::footprint::Footprint;

/// Interpolator hint the front-end maps onto its own fly-to transition
pub const FLY_TO_INTERPOLATOR: &str = "flyTo";

/// Camera parameters for the map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    pub bearing: f64,
    pub pitch: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_interpolator: Option<String>,
}

impl ViewState {
    /// Camera before anything was uploaded
    pub fn initial(config: &ViewConfig) -> Self {
        Self {
            longitude: config.initial_longitude,
            latitude: config.initial_latitude,
            zoom: config.zoom,
            bearing: config.bearing,
            pitch: config.pitch,
            transition_duration: None,
            transition_interpolator: None,
        }
    }

    /// Fly to the center of a freshly uploaded plot
    pub fn framing(footprint: &Footprint, config: &ViewConfig) -> Option<Self> {
        let center = footprint_center(footprint)?;
        Some(Self {
            longitude: center.longitude,
            latitude: center.latitude,
            zoom: config.zoom,
            bearing: config.bearing,
            pitch: config.pitch,
            transition_duration: Some(config.transition_duration_ms),
            transition_interpolator: Some(FLY_TO_INTERPOLATOR.to_string()),
        })
    }
}
