use serde::{Deserialize, Deserializer, Serialize};

use crate::engine::MassingParameters;
use crate::error::{MassingError, Result};

/// Inclusive slider range for one parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self, name: &'static str, value: f64) -> Result<f64> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(MassingError::ParameterOutOfRange {
                name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Ranges the control sliders allow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterBounds {
    pub scale_percent: Bounds,
    pub floor_count: Bounds,
    pub floor_height: Bounds,
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self {
            scale_percent: Bounds::new(1.0, 100.0),
            floor_count: Bounds::new(1.0, 100.0),
            floor_height: Bounds::new(1.0, 100.0),
        }
    }
}

impl ParameterBounds {
    pub fn check_scale_percent(&self, value: f64) -> Result<f64> {
        self.scale_percent.check("Plot scale", value)
    }

    /// Floor counts arrive from JS as plain numbers
    pub fn check_floor_count(&self, value: f64) -> Result<u32> {
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
            return Err(MassingError::InvalidFloorCount(value));
        }
        self.floor_count.check("Number of floors", value)?;
        Ok(value as u32)
    }

    pub fn check_floor_height(&self, value: f64) -> Result<f64> {
        self.floor_height.check("Floor height", value)
    }

    pub fn check(&self, params: &MassingParameters) -> Result<()> {
        self.check_scale_percent(params.scale_percent)?;
        self.check_floor_count(params.floor_count as f64)?;
        self.check_floor_height(params.floor_height)?;
        Ok(())
    }

    /// Read a parameter record from JSON and hold it to these bounds.
    /// Missing fields take the `MassingParameters` defaults.
    pub fn parse_parameters(&self, json: &str) -> Result<MassingParameters> {
        let params: MassingParameters = serde_json::from_str(json)
            .map_err(|e| MassingError::InvalidParameters(e.to_string()))?;
        self.check(&params)?;
        Ok(params)
    }
}

/// Camera settings for the map view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewConfig {
    pub initial_longitude: f64,
    pub initial_latitude: f64,
    pub zoom: f64,
    pub bearing: f64,
    pub pitch: f64,
    pub transition_duration_ms: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial_longitude: 6.610821795,
            initial_latitude: 46.515356291,
            zoom: 18.0,
            bearing: 9.0,
            pitch: 90.0,
            transition_duration_ms: 4000,
        }
    }
}

/// Engine configuration, loadable from JSON with every field optional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MassingConfig {
    /// Parameters the session starts (and resets) with
    #[serde(deserialize_with = "initial_over_defaults")]
    pub initial: MassingParameters,
    pub bounds: ParameterBounds,
    pub view: ViewConfig,
}

// Front-end defaults: half-size building, one floor of 4 m
const INITIAL_PARAMETERS: MassingParameters = MassingParameters {
    scale_percent: 50.0,
    floor_count: 1,
    floor_height: 4.0,
};

impl Default for MassingConfig {
    fn default() -> Self {
        Self {
            initial: INITIAL_PARAMETERS,
            bounds: ParameterBounds::default(),
            view: ViewConfig::default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InitialOverrides {
    scale_percent: Option<f64>,
    floor_count: Option<u32>,
    floor_height: Option<f64>,
}

// A partial `initial` object only overrides the fields it names
fn initial_over_defaults<'de, D>(deserializer: D) -> std::result::Result<MassingParameters, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = InitialOverrides::deserialize(deserializer)?;
    Ok(MassingParameters {
        scale_percent: overrides.scale_percent.unwrap_or(INITIAL_PARAMETERS.scale_percent),
        floor_count: overrides.floor_count.unwrap_or(INITIAL_PARAMETERS.floor_count),
        floor_height: overrides.floor_height.unwrap_or(INITIAL_PARAMETERS.floor_height),
    })
}

impl MassingConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: MassingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let bounds = &self.bounds;
        for (name, b) in [
            ("scalePercent", bounds.scale_percent),
            ("floorCount", bounds.floor_count),
            ("floorHeight", bounds.floor_height),
        ] {
            if !(b.min.is_finite() && b.max.is_finite()) || b.min > b.max {
                return Err(MassingError::InvalidConfig(format!(
                    "bounds.{} has min {} above max {}",
                    name, b.min, b.max
                )));
            }
        }
        if bounds.floor_count.min < 0.0 {
            return Err(MassingError::InvalidConfig(
                "bounds.floorCount cannot go below zero".to_string(),
            ));
        }
        if bounds.floor_height.min <= 0.0 || bounds.scale_percent.min <= 0.0 {
            return Err(MassingError::InvalidConfig(
                "bounds.floorHeight and bounds.scalePercent must stay positive".to_string(),
            ));
        }
        bounds
            .check(&self.initial)
            .map_err(|e| MassingError::InvalidConfig(format!("initial parameters: {}", e)))
    }
}
