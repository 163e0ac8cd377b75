use geo_types::{Coord, LineString, MultiPolygon, Polygon as GeoPolygon};
use serde::{Deserialize, Serialize};

use crate::error::{MassingError, Result};

/// The only geometry type the uploader hands us
pub const MULTI_POLYGON: &str = "MultiPolygon";

/// A vertex as (longitude, latitude, elevation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
    pub elevation: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64, elevation: f64) -> Self {
        Self { lon, lat, elevation }
    }

    /// Same planar position, different elevation
    pub fn with_elevation(&self, elevation: f64) -> Self {
        Self { elevation, ..*self }
    }
}

impl From<[f64; 3]> for Coordinate {
    fn from(p: [f64; 3]) -> Self {
        Coordinate::new(p[0], p[1], p[2])
    }
}

impl From<Coordinate> for [f64; 3] {
    fn from(c: Coordinate) -> Self {
        [c.lon, c.lat, c.elevation]
    }
}

/// Ordered vertices of one ring. Closure (first == last) is assumed, never checked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ring(pub Vec<Coordinate>);

impl Ring {
    pub fn coords(&self) -> impl Iterator<Item = &Coordinate> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct (lon, lat) positions, ignoring elevation, counted up to `limit`.
    pub fn distinct_planar_count(&self, limit: usize) -> usize {
        let mut seen: Vec<(f64, f64)> = Vec::with_capacity(limit);
        for c in &self.0 {
            if seen.len() >= limit {
                break;
            }
            if !seen.iter().any(|&(lon, lat)| lon == c.lon && lat == c.lat) {
                seen.push((c.lon, c.lat));
            }
        }
        seen.len()
    }

    pub fn to_line_string(&self) -> LineString<f64> {
        LineString::new(self.0.iter().map(|c| Coord { x: c.lon, y: c.lat }).collect())
    }
}

/// Outer ring followed by optional holes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub rings: Vec<Ring>,
}

impl Polygon {
    pub fn exterior(&self) -> Option<&Ring> {
        self.rings.first()
    }

    pub fn to_geo(&self) -> GeoPolygon<f64> {
        let mut rings = self.rings.iter().map(Ring::to_line_string);
        let exterior = rings.next().unwrap_or_else(|| LineString::new(Vec::new()));
        GeoPolygon::new(exterior, rings.collect())
    }
}

/// Strongly typed multi-polygon built once from an uploaded document.
///
/// Everything past the upload boundary works on this type; the GeoJSON type tag is
/// checked during conversion and never looked at again.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "FootprintDocument", try_from = "FootprintDocument")]
pub struct Footprint {
    pub polygons: Vec<Polygon>,
}

impl Footprint {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    pub fn coords(&self) -> impl Iterator<Item = &Coordinate> {
        self.polygons
            .iter()
            .flat_map(|p| p.rings.iter())
            .flat_map(|r| r.coords())
    }

    pub fn vertex_count(&self) -> usize {
        self.coords().count()
    }

    /// Build a new footprint of the same shape with every vertex passed through `f`.
    pub fn map_coordinates<F>(&self, mut f: F) -> Footprint
    where
        F: FnMut(&Coordinate) -> Coordinate,
    {
        let mut polygons = Vec::with_capacity(self.polygons.len());
        for polygon in &self.polygons {
            let rings = polygon
                .rings
                .iter()
                .map(|ring| Ring(ring.coords().map(&mut f).collect()))
                .collect();
            polygons.push(Polygon { rings });
        }
        Footprint { polygons }
    }

    /// Planar projection for the `geo` algorithms. Elevation is dropped.
    pub fn to_geo(&self) -> MultiPolygon<f64> {
        MultiPolygon::new(self.polygons.iter().map(Polygon::to_geo).collect())
    }
}

/// Uploaded GeoJSON geometry as it arrives from the front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootprintDocument {
    #[serde(rename = "type")]
    pub r#type: String,
    pub coordinates: Vec<Vec<Vec<Vec<f64>>>>,
}

impl TryFrom<FootprintDocument> for Footprint {
    type Error = MassingError;

    fn try_from(document: FootprintDocument) -> Result<Self> {
        if document.r#type != MULTI_POLYGON {
            return Err(MassingError::UnsupportedGeometry(document.r#type));
        }

        let mut polygons = Vec::with_capacity(document.coordinates.len());
        for (p, polygon) in document.coordinates.iter().enumerate() {
            let mut rings = Vec::with_capacity(polygon.len());
            for (r, ring) in polygon.iter().enumerate() {
                let mut coords = Vec::with_capacity(ring.len());
                for (v, position) in ring.iter().enumerate() {
                    // GeoJSON positions may carry more members; we only read the first three
                    match position.as_slice() {
                        [lon, lat] => coords.push(Coordinate::new(*lon, *lat, 0.0)),
                        [lon, lat, elevation, ..] => {
                            coords.push(Coordinate::new(*lon, *lat, *elevation))
                        }
                        _ => {
                            return Err(MassingError::InvalidPosition {
                                polygon: p,
                                ring: r,
                                vertex: v,
                            })
                        }
                    }
                }
                rings.push(Ring(coords));
            }
            polygons.push(Polygon { rings });
        }

        let footprint = Footprint { polygons };
        if footprint.vertex_count() == 0 {
            return Err(MassingError::EmptyCoordinates);
        }
        Ok(footprint)
    }
}

impl From<Footprint> for FootprintDocument {
    fn from(footprint: Footprint) -> Self {
        let coordinates = footprint
            .polygons
            .iter()
            .map(|polygon| {
                polygon
                    .rings
                    .iter()
                    .map(|ring| ring.coords().map(|c| vec![c.lon, c.lat, c.elevation]).collect())
                    .collect()
            })
            .collect();
        FootprintDocument {
            r#type: MULTI_POLYGON.to_string(),
            coordinates,
        }
    }
}

/// Parse an uploaded GeoJSON `MultiPolygon` into a [`Footprint`].
pub fn parse_footprint(json: &str) -> Result<Footprint> {
    let document: FootprintDocument = serde_json::from_str(json)?;
    Footprint::try_from(document)
}
