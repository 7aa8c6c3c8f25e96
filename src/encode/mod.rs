//! Pure projections from a [`ChartState`](crate::core::ChartState) to what the
//! host draws and what assistive technology reads.
//!
//! Nothing here caches: every call re-derives from the current dataset, so a
//! commit can never leave a stale bar or descriptor behind.

pub mod accessibility;
pub mod bars;

pub use accessibility::{
    AccessibilityDescriptor, CHART_ACCESSIBILITY_LABEL, CategoricalAxisDescriptor,
    ChartDescriptorProvider, DataSeriesDescriptor, NumericAxisDescriptor, SeriesPoint,
    ValueFormatterFn, encode_accessibility, format_points,
};
pub use bars::{BarDescriptor, DEFAULT_BAR_WIDTH_PX, encode_bars, encode_bars_with_width};
