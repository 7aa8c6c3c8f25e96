//! bar-chart-rs: a single bar-chart view with matching accessibility output.
//!
//! A small labeled dataset is encoded two ways from the same state: as
//! proportionally sized bars for a renderer, and as a structured descriptor
//! for assistive technology. Controls stage a color and a height that are
//! committed to every point at once.

pub mod api;
pub mod core;
pub mod encode;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartView, ChartViewConfig};
pub use error::{ChartError, ChartResult};
