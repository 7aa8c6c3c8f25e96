//! Optional hooks for host-side observers of the chart view.
//!
//! Plugins observe view events without reaching into the dataset directly.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
