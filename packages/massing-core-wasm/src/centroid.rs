use geo::BoundingRect;
use serde::{Deserialize, Serialize};

use crate::footprint::Footprint;

/// A planar (longitude, latitude) position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub longitude: f64,
    pub latitude: f64,
}

/// Representative center of a footprint: the midpoint of its bounding extent.
///
/// The camera frames this point on upload and scaling is anchored on it. Not the
/// area-weighted centroid. Returns `None` for a footprint without vertices.
pub fn footprint_center(footprint: &Footprint) -> Option<LngLat> {
    let rect = footprint.to_geo().bounding_rect()?;
    let center = rect.center();
    Some(LngLat {
        longitude: center.x,
        latitude: center.y,
    })
}
