use serde::{Deserialize, Serialize};

use crate::core::{Color, DataPoint, Viewport};
use crate::encode::BarDescriptor;
use crate::error::{ChartError, ChartResult};
use crate::interaction::EditMode;
use crate::render::Renderer;

use super::{ChartAccessibilityElement, ChartView};

pub const VIEW_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view state used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub viewport: Viewport,
    pub edit_mode: EditMode,
    pub pending_color: Color,
    pub pending_height: f64,
    pub commit_count: u64,
    pub points: Vec<DataPoint>,
    pub bars: Vec<BarDescriptor>,
    pub accessibility: ChartAccessibilityElement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ViewSnapshot,
}

impl ViewSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ViewSnapshotJsonContractV1 {
            schema_version: VIEW_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ViewSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ViewSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != VIEW_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> ChartView<R> {
    pub fn snapshot(&self) -> ChartResult<ViewSnapshot> {
        Ok(ViewSnapshot {
            viewport: self.config.viewport,
            edit_mode: self.session.mode(),
            pending_color: self.state.pending_color(),
            pending_height: self.state.pending_height().get(),
            commit_count: self.session.commits(),
            points: self.state.points().to_vec(),
            bars: self.bars()?,
            accessibility: self.accessibility_element(),
        })
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot()?.to_json_contract_v1_pretty()
    }
}
