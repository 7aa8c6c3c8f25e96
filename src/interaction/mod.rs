use serde::{Deserialize, Serialize};

use crate::core::BarHeight;
use crate::error::{ChartError, ChartResult};

/// Whether the controls hold an edit that has not been committed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditMode {
    /// Showing the committed dataset; controls mirror it.
    #[default]
    Idle,
    /// Slider or color picker moved since the last confirm.
    PendingEdit,
}

/// Bounds and step of the height range input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightSliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for HeightSliderConfig {
    fn default() -> Self {
        Self {
            min: BarHeight::MIN,
            max: BarHeight::MAX,
            step: BarHeight::STEP,
        }
    }
}

impl HeightSliderConfig {
    /// Slider bounds must sit inside the range `BarHeight` accepts.
    pub fn validate(self) -> ChartResult<Self> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ChartError::InvalidData(
                "height slider bounds must be finite with min <= max".to_owned(),
            ));
        }
        if self.min < BarHeight::MIN || self.max > BarHeight::MAX {
            return Err(ChartError::InvalidData(format!(
                "height slider bounds must lie within [{}, {}]",
                BarHeight::MIN,
                BarHeight::MAX
            )));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ChartError::InvalidData(
                "height slider step must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Maps a raw slider position to the height it selects.
    pub fn snap(self, raw: f64) -> ChartResult<BarHeight> {
        if raw.is_nan() {
            return Err(ChartError::InvalidData(
                "height slider value must not be NaN".to_owned(),
            ));
        }
        let stepped = ((raw - self.min) / self.step).round() * self.step + self.min;
        BarHeight::new(stepped.clamp(self.min, self.max))
    }
}

/// Two-state edit tracker behind the controls.
///
/// Control changes only move to `PendingEdit`; confirming is the single way
/// back to `Idle`. There is no cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditSession {
    mode: EditMode,
    commits: u64,
}

impl EditSession {
    #[must_use]
    pub fn mode(self) -> EditMode {
        self.mode
    }

    #[must_use]
    pub fn commits(self) -> u64 {
        self.commits
    }

    pub fn on_height_changed(&mut self) {
        self.mode = EditMode::PendingEdit;
    }

    pub fn on_color_changed(&mut self) {
        self.mode = EditMode::PendingEdit;
    }

    pub fn on_confirm(&mut self) {
        self.mode = EditMode::Idle;
        self.commits = self.commits.saturating_add(1);
    }
}
