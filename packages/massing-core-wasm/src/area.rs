use geo::ChamberlainDuquetteArea;
use geo_types::Polygon as GeoPolygon;

use crate::footprint::{Footprint, Polygon, Ring};

// Spherical ring area on the WGS84 equatorial radius, same convention as turf's `area`.
fn ring_area(ring: &Ring) -> f64 {
    GeoPolygon::new(ring.to_line_string(), Vec::new()).chamberlain_duquette_unsigned_area()
}

/// Area of a single polygon in square meters: outer ring minus its holes.
///
/// An outer ring with fewer than three distinct vertices has no area, whatever the holes say.
pub fn polygon_area(polygon: &Polygon) -> f64 {
    let exterior = match polygon.exterior() {
        Some(ring) if ring.distinct_planar_count(3) >= 3 => ring,
        _ => return 0.0,
    };
    let holes: f64 = polygon.rings[1..].iter().map(ring_area).sum();
    (ring_area(exterior) - holes).max(0.0)
}

/// Area of a footprint in square meters, summed over its polygons.
pub fn footprint_area(footprint: &Footprint) -> f64 {
    footprint.polygons.iter().map(polygon_area).sum()
}
