use crate::error::ChartResult;
use crate::render::{RectPrimitive, RenderFrame, Renderer, TextPrimitive};

use super::{BarVerticalAlignment, ChartView};

impl<R: Renderer> ChartView<R> {
    /// Materializes bars as rounded rects laid out left to right with fixed
    /// spacing, each with its label drawn over the bar's center.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let config = self.config;
        let bars = self.bars()?;
        let viewport_height = f64::from(config.viewport.height);
        let baseline = viewport_height - config.content_padding_px;
        let midline = viewport_height / 2.0;

        let mut frame = RenderFrame::new(config.viewport);
        for (index, bar) in bars.iter().enumerate() {
            let x = config.content_padding_px + index as f64 * (bar.width + config.bar_spacing);
            let top = match config.vertical_alignment {
                BarVerticalAlignment::Bottom => baseline - bar.pixel_height,
                BarVerticalAlignment::Center => midline - bar.pixel_height / 2.0,
            };
            frame = frame.with_rect(
                RectPrimitive::new(x, top, bar.width, bar.pixel_height, bar.color)
                    .with_corner_radius(config.corner_radius),
            );

            if bar.label.is_empty() {
                continue;
            }
            let label_y = top + bar.pixel_height / 2.0 - config.label_font_size_px / 2.0
                + config.label_top_padding_px / 2.0;
            frame = frame.with_text(TextPrimitive::new(
                bar.label.clone(),
                x + bar.width / 2.0,
                label_y,
                config.label_font_size_px,
                config.label_color,
            ));
        }

        Ok(frame)
    }

    /// Width the bar row needs, including padding on both sides.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.config.content_width(self.state.len())
    }
}
