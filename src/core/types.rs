use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::Color;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Opaque point identity, only guaranteed unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(Uuid);

impl PointId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One labeled sample of the bar chart.
///
/// `value` is guaranteed finite and non-negative: both the constructor and
/// deserialization reject anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DataPointRecord")]
pub struct DataPoint {
    id: PointId,
    label: String,
    value: f64,
    color: Color,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64, color: Color) -> ChartResult<Self> {
        Self::with_id(PointId::generate(), label, value, color)
    }

    pub fn with_id(
        id: PointId,
        label: impl Into<String>,
        value: f64,
        color: Color,
    ) -> ChartResult<Self> {
        let label = label.into();
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidValue { label, value });
        }
        color.validate()?;
        Ok(Self {
            id,
            label,
            value,
            color,
        })
    }

    #[must_use]
    pub fn id(&self) -> PointId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Builds a point from constants already known to be valid.
    pub(crate) fn trusted(label: String, value: f64, color: Color) -> Self {
        debug_assert!(value.is_finite() && value >= 0.0);
        Self {
            id: PointId::generate(),
            label,
            value,
            color,
        }
    }

    /// Rebuilds the point with a new value and fill, keeping identity and label.
    ///
    /// Callers guarantee `value` is already valid.
    pub(crate) fn overwritten(self, value: f64, color: Color) -> Self {
        debug_assert!(value.is_finite() && value >= 0.0);
        Self {
            value,
            color,
            ..self
        }
    }
}

#[derive(Deserialize)]
struct DataPointRecord {
    #[serde(default = "PointId::generate")]
    id: PointId,
    label: String,
    value: f64,
    color: Color,
}

impl TryFrom<DataPointRecord> for DataPoint {
    type Error = ChartError;

    fn try_from(record: DataPointRecord) -> ChartResult<Self> {
        Self::with_id(record.id, record.label, record.value, record.color)
    }
}
