// Shared fixtures for unit tests: a small quadrilateral plot in Lausanne.

use crate::footprint::{Coordinate, Footprint, Polygon, Ring};

pub const PLOT_JSON: &str = r#"{
    "type": "MultiPolygon",
    "coordinates": [[[
        [6.6105, 46.5152, 0.0],
        [6.6112, 46.5151, 0.0],
        [6.6113, 46.5156, 0.0],
        [6.6106, 46.5157, 0.0],
        [6.6105, 46.5152, 0.0]
    ]]]
}"#;

/// Geodesic area of [`plot`] in square meters
pub const PLOT_AREA: f64 = 3069.9696761913397;

/// Bounding-extent midpoint of [`plot`]
pub const PLOT_CENTER: (f64, f64) = (6.6109, 46.5154);

pub fn plot() -> Footprint {
    let ring = [
        [6.6105, 46.5152],
        [6.6112, 46.5151],
        [6.6113, 46.5156],
        [6.6106, 46.5157],
        [6.6105, 46.5152],
    ]
    .iter()
    .map(|p| Coordinate::new(p[0], p[1], 0.0))
    .collect();
    Footprint::new(vec![Polygon {
        rings: vec![Ring(ring)],
    }])
}

/// Axis-aligned square footprint with an optional square hole, planar units in degrees.
pub fn square(min: (f64, f64), size: f64, hole: Option<((f64, f64), f64)>) -> Footprint {
    let ring_of = |(x, y): (f64, f64), s: f64| {
        Ring(vec![
            Coordinate::new(x, y, 0.0),
            Coordinate::new(x + s, y, 0.0),
            Coordinate::new(x + s, y + s, 0.0),
            Coordinate::new(x, y + s, 0.0),
            Coordinate::new(x, y, 0.0),
        ])
    };
    let mut rings = vec![ring_of(min, size)];
    if let Some((origin, s)) = hole {
        rings.push(ring_of(origin, s));
    }
    Footprint::new(vec![Polygon { rings }])
}
