use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless views.
///
/// It still validates frame content so invalid geometry surfaces without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        self.frames_rendered += 1;
        Ok(())
    }
}
