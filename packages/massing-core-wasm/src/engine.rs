use serde::{Deserialize, Serialize};

use crate::floors::{generate_floors, FloorStack, DEFAULT_FLOOR_COUNT, DEFAULT_FLOOR_HEIGHT};
use crate::footprint::Footprint;
use crate::metrics::{aggregate_metrics, Metrics};
use crate::scale::{scale_footprint, DEFAULT_SCALE_PERCENT};

/// Everything the user can change besides the uploaded plot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MassingParameters {
    pub scale_percent: f64,
    pub floor_count: u32,
    pub floor_height: f64,
}

impl Default for MassingParameters {
    fn default() -> Self {
        Self {
            scale_percent: DEFAULT_SCALE_PERCENT,
            floor_count: DEFAULT_FLOOR_COUNT,
            floor_height: DEFAULT_FLOOR_HEIGHT,
        }
    }
}

/// Derived state of one recompute pass
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MassingSnapshot {
    pub parameters: MassingParameters,
    pub floors: FloorStack,
    pub metrics: Metrics,
}

/// Rebuild the floor stack and metrics for `original` under `params`.
///
/// Pure: nothing from a previous snapshot is reused. Without an uploaded plot the
/// stack is empty and every metric is zero.
pub fn recompute(original: Option<&Footprint>, params: &MassingParameters) -> MassingSnapshot {
    let floors = match original {
        Some(footprint) => {
            let scaled = scale_footprint(footprint, params.scale_percent);
            generate_floors(&scaled, params.floor_count, params.floor_height)
        }
        None => Vec::new(),
    };
    let metrics = aggregate_metrics(original, &floors, params.floor_height);

    MassingSnapshot {
        parameters: *params,
        floors,
        metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{plot, PLOT_AREA};
    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_plain_helpers() {
        let params = MassingParameters::default();
        assert_eq!(params.scale_percent, 100.0);
        assert_eq!(params.floor_count, 1);
        assert_eq!(params.floor_height, 3.0);
    }

    #[test]
    fn full_pass_scales_stacks_and_measures() {
        let params = MassingParameters {
            scale_percent: 50.0,
            floor_count: 3,
            floor_height: 4.0,
        };
        let snapshot = recompute(Some(&plot()), &params);

        assert_eq!(snapshot.parameters, params);
        assert_eq!(snapshot.floors.len(), 3);
        let elevations: Vec<f64> = snapshot
            .floors
            .iter()
            .map(|f| f.geometry.coords().next().unwrap().elevation)
            .collect();
        assert_eq!(elevations, vec![0.0, 4.0, 8.0]);

        let m = snapshot.metrics;
        assert_relative_eq!(m.land_area, PLOT_AREA, max_relative = 1e-9);
        assert_relative_eq!(m.building_area, PLOT_AREA / 4.0, max_relative = 1e-6);
        assert_eq!(m.building_height, 12.0);
        assert_relative_eq!(m.volume, m.building_area * 12.0, max_relative = 1e-12);
    }

    #[test]
    fn no_plot_means_no_floors() {
        let snapshot = recompute(None, &MassingParameters::default());
        assert!(snapshot.floors.is_empty());
        assert_eq!(snapshot.metrics, Metrics::default());
    }

    #[test]
    fn zero_floors_keeps_land_area() {
        let params = MassingParameters {
            floor_count: 0,
            ..MassingParameters::default()
        };
        let snapshot = recompute(Some(&plot()), &params);
        assert!(snapshot.floors.is_empty());
        assert_relative_eq!(snapshot.metrics.land_area, PLOT_AREA, max_relative = 1e-9);
        assert_eq!(snapshot.metrics.volume, 0.0);
        assert_eq!(snapshot.metrics.building_height, 0.0);
    }

    #[test]
    fn same_inputs_same_snapshot() {
        let params = MassingParameters {
            scale_percent: 70.0,
            floor_count: 5,
            floor_height: 3.2,
        };
        assert_eq!(recompute(Some(&plot()), &params), recompute(Some(&plot()), &params));
    }
}
