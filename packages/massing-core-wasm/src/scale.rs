use crate::centroid::footprint_center;
use crate::footprint::Footprint;

/// Scale percent that leaves a footprint untouched
pub const DEFAULT_SCALE_PERCENT: f64 = 100.0;

/// Scale a footprint about its own center by `scale_percent` / 100.
///
/// Longitude and latitude are scaled uniformly around [`footprint_center`]; elevation is
/// copied as-is. The input is left alone and a new footprint is returned.
pub fn scale_footprint(footprint: &Footprint, scale_percent: f64) -> Footprint {
    let anchor = match footprint_center(footprint) {
        Some(center) => center,
        None => return footprint.clone(),
    };
    let factor = scale_percent / 100.0;

    footprint.map_coordinates(|c| {
        let mut scaled = *c;
        scaled.lon = anchor.longitude + (c.lon - anchor.longitude) * factor;
        scaled.lat = anchor.latitude + (c.lat - anchor.latitude) * factor;
        scaled
    })
}
