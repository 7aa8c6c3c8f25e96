use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const RED: Self = Self::rgb(1.0, 0.231, 0.188);
    pub const BLUE: Self = Self::rgb(0.0, 0.478, 1.0);
    pub const GREEN: Self = Self::rgb(0.204, 0.78, 0.349);
    pub const ORANGE: Self = Self::rgb(1.0, 0.584, 0.0);
    pub const PURPLE: Self = Self::rgb(0.686, 0.322, 0.871);
    pub const PINK: Self = Self::rgb(1.0, 0.176, 0.333);
    pub const YELLOW: Self = Self::rgb(1.0, 0.8, 0.0);
    pub const CYAN: Self = Self::rgb(0.196, 0.678, 0.902);
    pub const GRAY: Self = Self::rgb(0.557, 0.557, 0.576);
    pub const BROWN: Self = Self::rgb(0.635, 0.518, 0.369);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Cyclic fill palette used by the seed dataset.
pub const SEED_PALETTE: [Color; 10] = [
    Color::RED,
    Color::BLUE,
    Color::GREEN,
    Color::ORANGE,
    Color::PURPLE,
    Color::PINK,
    Color::YELLOW,
    Color::CYAN,
    Color::GRAY,
    Color::BROWN,
];
