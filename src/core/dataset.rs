use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{BarHeight, Color, DataPoint, SEED_PALETTE};
use crate::error::{ChartError, ChartResult};

/// Pixels drawn per data-value unit.
pub const VALUE_UNIT_HEIGHT_PX: f64 = 50.0;

/// Values of the seed dataset, labeled `"1"` through `"18"`.
pub const SEED_VALUES: [f64; 18] = [
    3.0, 5.0, 2.0, 4.0, 6.0, 7.0, 4.0, 3.0, 8.0, 5.0, 6.0, 3.0, 2.0, 4.0, 6.0, 7.0, 4.0, 3.0,
];

/// Committed dataset plus the color/height edits staged by the controls.
///
/// Points are only ever replaced wholesale through [`ChartState::commit`];
/// staging a pending field never touches them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChartStateRecord")]
pub struct ChartState {
    points: Vec<DataPoint>,
    pending_color: Color,
    pending_height: BarHeight,
}

#[derive(Deserialize)]
struct ChartStateRecord {
    points: Vec<DataPoint>,
    pending_color: Color,
    #[serde(default)]
    pending_height: BarHeight,
}

impl TryFrom<ChartStateRecord> for ChartState {
    type Error = ChartError;

    fn try_from(record: ChartStateRecord) -> ChartResult<Self> {
        record.pending_color.validate()?;
        Ok(Self {
            points: record.points,
            pending_color: record.pending_color,
            pending_height: record.pending_height,
        })
    }
}

impl ChartState {
    /// Builds the fixed 18-point seed dataset with fresh point identities.
    #[must_use]
    pub fn initialize() -> Self {
        let points = SEED_VALUES
            .iter()
            .zip(SEED_PALETTE.iter().cycle())
            .enumerate()
            .map(|(index, (&value, &color))| {
                DataPoint::trusted((index + 1).to_string(), value, color)
            })
            .collect();
        Self::from_points(points)
    }

    #[must_use]
    pub fn from_points(points: Vec<DataPoint>) -> Self {
        Self {
            points,
            pending_color: Color::BLUE,
            pending_height: BarHeight::default(),
        }
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(DataPoint::label)
    }

    #[must_use]
    pub fn pending_color(&self) -> Color {
        self.pending_color
    }

    #[must_use]
    pub fn pending_height(&self) -> BarHeight {
        self.pending_height
    }

    pub fn set_pending_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        trace!(?color, "stage pending color");
        self.pending_color = color;
        Ok(())
    }

    pub fn set_pending_height(&mut self, height: BarHeight) {
        trace!(height = height.get(), "stage pending height");
        self.pending_height = height;
    }

    /// Overwrites every point with `height / 50` and `color`.
    ///
    /// Labels, identities, order and count are preserved. The prior state is
    /// consumed; the returned state keeps `color`/`height` as its pending edit.
    /// An invalid `color` is rejected before any point is rewritten.
    pub fn commit(self, color: Color, height: BarHeight) -> ChartResult<Self> {
        color.validate()?;
        let value = height.value_units();
        debug!(
            points = self.points.len(),
            height = height.get(),
            value,
            "commit uniform overwrite"
        );
        let points = self
            .points
            .into_iter()
            .map(|point| point.overwritten(value, color))
            .collect();
        Ok(Self {
            points,
            pending_color: color,
            pending_height: height,
        })
    }

    /// Commits whatever the controls currently have staged.
    pub fn commit_pending(self) -> ChartResult<Self> {
        let (color, height) = (self.pending_color, self.pending_height);
        self.commit(color, height)
    }

    /// Smallest and largest point value, `(0, 0)` for an empty dataset.
    #[must_use]
    pub fn value_range(&self) -> (f64, f64) {
        let mut values = self.points.iter().map(DataPoint::value);
        let Some(first) = values.next() else {
            return (0.0, 0.0);
        };
        values.fold((first, first), |(min, max), value| {
            (min.min(value), max.max(value))
        })
    }
}

impl Default for ChartState {
    fn default() -> Self {
        Self::initialize()
    }
}
