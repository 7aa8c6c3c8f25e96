pub mod bar_height;
pub mod color;
pub mod dataset;
pub mod types;

pub use bar_height::BarHeight;
pub use color::{Color, SEED_PALETTE};
pub use dataset::{ChartState, SEED_VALUES, VALUE_UNIT_HEIGHT_PX};
pub use types::{DataPoint, PointId, Viewport};
