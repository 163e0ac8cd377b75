use serde::{Deserialize, Serialize};

use crate::area::footprint_area;
use crate::floors::FloorRecord;
use crate::footprint::Footprint;

/// The five figures reported for the current massing.
///
/// Areas are in m², height in m and volume in m³.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Area of the plot as uploaded
    pub land_area: f64,
    /// Area of one floor at the current scale
    pub building_area: f64,
    /// Floor area summed over all floors
    pub building_floor_area: f64,
    pub building_height: f64,
    pub volume: f64,
}

/// Derive all metrics from the uploaded plot and the current floor stack.
///
/// Every floor shares the first floor's planar shape, so only that one is measured.
pub fn aggregate_metrics(
    original: Option<&Footprint>,
    floors: &[FloorRecord],
    floor_height: f64,
) -> Metrics {
    let land_area = original.map(footprint_area).unwrap_or(0.0);

    let first = match floors.first() {
        Some(floor) => floor,
        None => {
            return Metrics {
                land_area,
                ..Metrics::default()
            }
        }
    };

    let floor_count = floors.len() as f64;
    let building_area = footprint_area(&first.geometry);
    Metrics {
        land_area,
        building_area,
        building_floor_area: building_area * floor_count,
        building_height: floor_count * floor_height,
        volume: building_area * floor_count * floor_height,
    }
}
