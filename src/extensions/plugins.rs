use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::interaction::EditMode;

/// Read-only view summary passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub points_len: usize,
    pub value_range: (f64, f64),
    pub edit_mode: EditMode,
    pub pending_color: Color,
    pub pending_height: f64,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    PendingHeightChanged { height: f64 },
    PendingColorChanged { color: Color },
    Committed { points_len: usize, value: f64 },
    Rendered { rects: usize, texts: usize },
}

/// Extension hook interface.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
