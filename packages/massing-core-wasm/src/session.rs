use crate::config::MassingConfig;
use crate::console_log;
use crate::engine::{recompute, MassingParameters, MassingSnapshot};
use crate::error::{MassingError, Result};
use crate::floors::FloorRecord;
use crate::footprint::Footprint;
use crate::layers::{build_layers, RenderLayer};
use crate::metrics::Metrics;
use crate::report::{metrics_report, ReportRow};
use crate::view_state::ViewState;

/// The uploaded plot, the slider values and everything derived from them.
///
/// Each change stores the new input and replaces the snapshot wholesale through
/// [`recompute`]. Rejected changes leave every field as it was.
#[derive(Debug, Clone)]
pub struct Session {
    config: MassingConfig,
    document: Option<Footprint>,
    params: MassingParameters,
    snapshot: MassingSnapshot,
    view_state: ViewState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MassingConfig::default())
    }
}

impl Session {
    pub fn new(config: MassingConfig) -> Self {
        let params = config.initial;
        Self {
            document: None,
            snapshot: recompute(None, &params),
            view_state: ViewState::initial(&config.view),
            params,
            config,
        }
    }

    /// Replace the plot and fly the camera to it.
    pub fn upload(&mut self, footprint: Footprint) -> &ViewState {
        if let Some(view) = ViewState::framing(&footprint, &self.config.view) {
            self.view_state = view;
        }
        console_log!(
            "Footprint uploaded: {} polygon(s), {} vertices, centered at ({:.6}, {:.6})",
            footprint.polygon_count(),
            footprint.vertex_count(),
            self.view_state.longitude,
            self.view_state.latitude
        );
        self.document = Some(footprint);
        self.refresh();
        &self.view_state
    }

    pub fn set_scale_percent(&mut self, value: f64) -> Result<&MassingSnapshot> {
        let scale_percent = self.config.bounds.check_scale_percent(value).map_err(rejected)?;
        self.params.scale_percent = scale_percent;
        self.refresh();
        Ok(&self.snapshot)
    }

    pub fn set_floor_count(&mut self, value: f64) -> Result<&MassingSnapshot> {
        let floor_count = self.config.bounds.check_floor_count(value).map_err(rejected)?;
        self.params.floor_count = floor_count;
        self.refresh();
        Ok(&self.snapshot)
    }

    pub fn set_floor_height(&mut self, value: f64) -> Result<&MassingSnapshot> {
        let floor_height = self.config.bounds.check_floor_height(value).map_err(rejected)?;
        self.params.floor_height = floor_height;
        self.refresh();
        Ok(&self.snapshot)
    }

    /// Drop the plot and return to the configured starting parameters
    pub fn reset(&mut self) {
        *self = Session::new(self.config);
    }

    pub fn config(&self) -> &MassingConfig {
        &self.config
    }

    pub fn document(&self) -> Option<&Footprint> {
        self.document.as_ref()
    }

    pub fn parameters(&self) -> &MassingParameters {
        &self.params
    }

    pub fn snapshot(&self) -> &MassingSnapshot {
        &self.snapshot
    }

    pub fn floors(&self) -> &[FloorRecord] {
        &self.snapshot.floors
    }

    pub fn metrics(&self) -> &Metrics {
        &self.snapshot.metrics
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn layers(&self) -> Vec<RenderLayer> {
        build_layers(self.document.as_ref(), &self.snapshot.floors)
    }

    pub fn report(&self) -> Vec<ReportRow> {
        metrics_report(&self.snapshot.metrics)
    }

    fn refresh(&mut self) {
        self.snapshot = recompute(self.document.as_ref(), &self.params);
        console_log!(
            "Recomputed massing: {} floor(s) at {} m, scale {}%, footprint {:.2} m2",
            self.snapshot.floors.len(),
            self.params.floor_height,
            self.params.scale_percent,
            self.snapshot.metrics.building_area
        );
    }
}

fn rejected(err: MassingError) -> MassingError {
    console_log!("Rejected parameter change: {}", err);
    err
}
