use serde::{Deserialize, Serialize};

use crate::core::{Color, VALUE_UNIT_HEIGHT_PX, Viewport};
use crate::encode::DEFAULT_BAR_WIDTH_PX;
use crate::error::{ChartError, ChartResult};
use crate::interaction::HeightSliderConfig;

/// Vertical placement of bars inside the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BarVerticalAlignment {
    /// Bars grow upward from a shared baseline.
    #[default]
    Bottom,
    /// Bars are centered on the viewport's horizontal midline.
    Center,
}

/// Public view bootstrap configuration.
///
/// Serializable so hosts can persist/load chart setup as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartViewConfig {
    pub viewport: Viewport,
    #[serde(default = "default_unit_height")]
    pub unit_height: f64,
    #[serde(default = "default_bar_width")]
    pub bar_width: f64,
    #[serde(default = "default_bar_spacing")]
    pub bar_spacing: f64,
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,
    #[serde(default = "default_label_font_size")]
    pub label_font_size_px: f64,
    #[serde(default = "default_label_top_padding")]
    pub label_top_padding_px: f64,
    #[serde(default = "default_content_padding")]
    pub content_padding_px: f64,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default)]
    pub vertical_alignment: BarVerticalAlignment,
    #[serde(default)]
    pub height_slider: HeightSliderConfig,
}

impl ChartViewConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            unit_height: default_unit_height(),
            bar_width: default_bar_width(),
            bar_spacing: default_bar_spacing(),
            corner_radius: default_corner_radius(),
            label_font_size_px: default_label_font_size(),
            label_top_padding_px: default_label_top_padding(),
            content_padding_px: default_content_padding(),
            label_color: default_label_color(),
            vertical_alignment: BarVerticalAlignment::default(),
            height_slider: HeightSliderConfig::default(),
        }
    }

    #[must_use]
    pub fn with_unit_height(mut self, unit_height: f64) -> Self {
        self.unit_height = unit_height;
        self
    }

    #[must_use]
    pub fn with_bar_geometry(mut self, bar_width: f64, bar_spacing: f64, corner_radius: f64) -> Self {
        self.bar_width = bar_width;
        self.bar_spacing = bar_spacing;
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub fn with_vertical_alignment(mut self, alignment: BarVerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    #[must_use]
    pub fn with_height_slider(mut self, slider: HeightSliderConfig) -> Self {
        self.height_slider = slider;
        self
    }

    /// Width a row of `point_count` bars needs, padding included.
    #[must_use]
    pub fn content_width(&self, point_count: usize) -> f64 {
        let count = point_count as f64;
        let gaps = (count - 1.0).max(0.0);
        2.0 * self.content_padding_px + count * self.bar_width + gaps * self.bar_spacing
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for (name, value) in [
            ("unit_height", self.unit_height),
            ("bar_spacing", self.bar_spacing),
            ("corner_radius", self.corner_radius),
            ("label_top_padding_px", self.label_top_padding_px),
            ("content_padding_px", self.content_padding_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("bar_width", self.bar_width),
            ("label_font_size_px", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        self.label_color.validate()?;
        self.height_slider.validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize view config: {e}")))
    }

    /// Parses and validates a config; omitted fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse view config: {e}")))?;
        config.validate()
    }
}

fn default_unit_height() -> f64 {
    VALUE_UNIT_HEIGHT_PX
}

fn default_bar_width() -> f64 {
    DEFAULT_BAR_WIDTH_PX
}

fn default_bar_spacing() -> f64 {
    10.0
}

fn default_corner_radius() -> f64 {
    8.0
}

fn default_label_font_size() -> f64 {
    13.0
}

fn default_label_top_padding() -> f64 {
    4.0
}

fn default_content_padding() -> f64 {
    16.0
}

fn default_label_color() -> Color {
    Color::BLACK
}
