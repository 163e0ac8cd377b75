use serde::{Deserialize, Serialize};

use crate::footprint::Footprint;

pub const DEFAULT_FLOOR_COUNT: u32 = 1;
pub const DEFAULT_FLOOR_HEIGHT: f64 = 3.0;

/// Zebra palette: odd floors get the darker teal
pub const ODD_FLOOR_COLOR: Rgb = Rgb([45, 212, 191]);
pub const EVEN_FLOOR_COLOR: Rgb = Rgb([153, 246, 228]);

/// 8-bit RGB triple, serialized as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

/// Color of the floor at `index`, alternating with period two.
pub fn floor_color(index: u32) -> Rgb {
    if index % 2 == 1 {
        ODD_FLOOR_COLOR
    } else {
        EVEN_FLOOR_COLOR
    }
}

/// One generated floor of the massing.
///
/// `geometry` carries the floor's base elevation on every vertex (`index * floor_height`),
/// while `nominal_slab_height` is the thickness a renderer extrudes it by. They are
/// different quantities even though the slab height is constant across the stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorRecord {
    pub index: u32,
    pub geometry: Footprint,
    pub nominal_slab_height: f64,
    pub color: Rgb,
}

impl FloorRecord {
    pub fn base_elevation(&self) -> f64 {
        self.index as f64 * self.nominal_slab_height
    }
}

/// Floors ordered bottom-up, indexed by floor number
pub type FloorStack = Vec<FloorRecord>;

/// Stack `floor_count` copies of `footprint`, each lifted to `index * floor_height`.
///
/// Always builds the whole stack from scratch; zero floors gives an empty stack.
pub fn generate_floors(footprint: &Footprint, floor_count: u32, floor_height: f64) -> FloorStack {
    (0..floor_count)
        .map(|index| {
            let elevation = index as f64 * floor_height;
            FloorRecord {
                index,
                geometry: footprint.map_coordinates(|c| c.with_elevation(elevation)),
                nominal_slab_height: floor_height,
                color: floor_color(index),
            }
        })
        .collect()
}
