mod layout;
mod plugin_registry;
mod snapshot;
mod view;
mod view_config;

pub use snapshot::{VIEW_SNAPSHOT_JSON_SCHEMA_V1, ViewSnapshot, ViewSnapshotJsonContractV1};
pub use view::{AccessibilityRole, ChartAccessibilityElement, ChartView};
pub use view_config::{BarVerticalAlignment, ChartViewConfig};
