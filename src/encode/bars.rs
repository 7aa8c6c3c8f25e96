use serde::{Deserialize, Serialize};

use crate::core::{ChartState, Color, PointId};
use crate::error::{ChartError, ChartResult};

/// Fixed horizontal size of every bar.
pub const DEFAULT_BAR_WIDTH_PX: f64 = 30.0;

/// Size, fill and label of one bar, before horizontal placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDescriptor {
    pub id: PointId,
    pub label: String,
    pub pixel_height: f64,
    pub color: Color,
    pub width: f64,
}

/// Encodes every point as a bar `value * unit_height` pixels tall.
///
/// Output order is dataset order (left to right). The scaling is a plain
/// multiply: no clamping, no rounding.
pub fn encode_bars(state: &ChartState, unit_height: f64) -> ChartResult<Vec<BarDescriptor>> {
    encode_bars_with_width(state, unit_height, DEFAULT_BAR_WIDTH_PX)
}

pub fn encode_bars_with_width(
    state: &ChartState,
    unit_height: f64,
    bar_width: f64,
) -> ChartResult<Vec<BarDescriptor>> {
    if !unit_height.is_finite() || unit_height < 0.0 {
        return Err(ChartError::InvalidData(
            "unit height must be finite and >= 0".to_owned(),
        ));
    }
    if !bar_width.is_finite() || bar_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "bar width must be finite and > 0".to_owned(),
        ));
    }

    Ok(state
        .points()
        .iter()
        .map(|point| BarDescriptor {
            id: point.id(),
            label: point.label().to_owned(),
            pixel_height: point.value() * unit_height,
            color: point.color(),
            width: bar_width,
        })
        .collect())
}
