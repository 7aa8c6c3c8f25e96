mod frame;
mod null_renderer;
mod primitives;

pub use crate::core::Color;
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{RectPrimitive, TextPrimitive};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from the dataset model and the edit controls.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
