// Response shapes returned to JS that don't belong to a single engine module
use serde::{Deserialize, Serialize};

use crate::config::MassingConfig;
use crate::engine::MassingParameters;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineInfo {
    pub name: String,
    pub version: String,
    pub has_footprint: bool,
    pub parameters: MassingParameters,
    pub config: MassingConfig,
    pub uploads: usize,
    pub recomputes: usize,
}
