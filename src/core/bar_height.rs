use serde::{Deserialize, Serialize};

use crate::core::VALUE_UNIT_HEIGHT_PX;
use crate::error::{ChartError, ChartResult};

/// Pending bar-height scalar staged by the height slider.
///
/// Always inside `[BarHeight::MIN, BarHeight::MAX]`, so committing it can never
/// produce a negative point value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct BarHeight(f64);

impl BarHeight {
    pub const MIN: f64 = 10.0;
    pub const MAX: f64 = 100.0;
    pub const STEP: f64 = 1.0;

    pub fn new(value: f64) -> ChartResult<Self> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ChartError::HeightOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Data value a committed point receives for this height.
    #[must_use]
    pub fn value_units(self) -> f64 {
        self.0 / VALUE_UNIT_HEIGHT_PX
    }
}

impl Default for BarHeight {
    fn default() -> Self {
        Self(50.0)
    }
}

impl TryFrom<f64> for BarHeight {
    type Error = ChartError;

    fn try_from(value: f64) -> ChartResult<Self> {
        Self::new(value)
    }
}

impl From<BarHeight> for f64 {
    fn from(height: BarHeight) -> Self {
        height.0
    }
}

#[cfg(test)]
mod tests {
    use super::BarHeight;

    #[test]
    fn value_units_uses_fifty_pixels_per_unit() {
        let height = BarHeight::new(100.0).expect("in range");
        assert_eq!(height.value_units(), 2.0);
    }
}
