use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{BarHeight, ChartState, Color};
use crate::encode::{
    AccessibilityDescriptor, BarDescriptor, CHART_ACCESSIBILITY_LABEL, ChartDescriptorProvider,
    encode_accessibility, encode_bars_with_width,
};
use crate::error::ChartResult;
use crate::extensions::{ChartPlugin, PluginEvent};
use crate::interaction::{EditMode, EditSession};
use crate::render::Renderer;

use super::ChartViewConfig;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessibilityRole {
    Chart,
}

/// The one accessibility element the view exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAccessibilityElement {
    pub role: AccessibilityRole,
    pub label: String,
    pub descriptor: AccessibilityDescriptor,
}

/// Single bar-chart view: owns the dataset, the staged control edits and the
/// renderer.
///
/// Bars and the accessibility descriptor are re-derived from the state on
/// every call; nothing is cached between commits.
pub struct ChartView<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartViewConfig,
    pub(super) state: ChartState,
    pub(super) session: EditSession,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
}

impl<R: Renderer> ChartView<R> {
    /// Creates a view over the 18-point seed dataset.
    pub fn new(renderer: R, config: ChartViewConfig) -> ChartResult<Self> {
        Self::with_state(renderer, config, ChartState::initialize())
    }

    pub fn with_state(renderer: R, config: ChartViewConfig, state: ChartState) -> ChartResult<Self> {
        let config = config.validate()?;
        debug!(
            points = state.len(),
            width = config.viewport.width,
            height = config.viewport.height,
            "chart view initialized"
        );
        Ok(Self {
            renderer,
            config,
            state,
            session: EditSession::default(),
            plugins: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> ChartViewConfig {
        self.config
    }

    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn mode(&self) -> EditMode {
        self.session.mode()
    }

    #[must_use]
    pub fn commit_count(&self) -> u64 {
        self.session.commits()
    }

    /// Stages a raw slider position; snapped to the slider step and bounds.
    pub fn set_pending_height(&mut self, raw: f64) -> ChartResult<BarHeight> {
        let height = self.config.height_slider.snap(raw)?;
        self.state.set_pending_height(height);
        self.session.on_height_changed();
        self.emit_plugin_event(PluginEvent::PendingHeightChanged {
            height: height.get(),
        });
        Ok(height)
    }

    pub fn set_pending_color(&mut self, color: Color) -> ChartResult<()> {
        self.state.set_pending_color(color)?;
        self.session.on_color_changed();
        self.emit_plugin_event(PluginEvent::PendingColorChanged { color });
        Ok(())
    }

    /// Commits the staged color/height to every point and re-renders.
    ///
    /// A rejected commit leaves the dataset, the mode and the commit count
    /// untouched.
    pub fn confirm(&mut self) -> ChartResult<()> {
        self.state = self.state.clone().commit_pending()?;
        self.session.on_confirm();

        let value = self.state.pending_height().value_units();
        debug!(
            points = self.state.len(),
            value,
            commits = self.session.commits(),
            "chart edit confirmed"
        );
        self.emit_plugin_event(PluginEvent::Committed {
            points_len: self.state.len(),
            value,
        });
        self.render()
    }

    pub fn bars(&self) -> ChartResult<Vec<BarDescriptor>> {
        encode_bars_with_width(&self.state, self.config.unit_height, self.config.bar_width)
    }

    #[must_use]
    pub fn accessibility_element(&self) -> ChartAccessibilityElement {
        ChartAccessibilityElement {
            role: AccessibilityRole::Chart,
            label: CHART_ACCESSIBILITY_LABEL.to_owned(),
            descriptor: self.accessibility_descriptor(),
        }
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        trace!(rects = frame.rects.len(), texts = frame.texts.len(), "chart rendered");
        self.emit_plugin_event(PluginEvent::Rendered {
            rects: frame.rects.len(),
            texts: frame.texts.len(),
        });
        Ok(())
    }

    /// Renders into an external cairo context, e.g. from a GTK draw callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_plugin_event(PluginEvent::Rendered {
            rects: frame.rects.len(),
            texts: frame.texts.len(),
        });
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl<R: Renderer> ChartDescriptorProvider for ChartView<R> {
    fn accessibility_descriptor(&self) -> AccessibilityDescriptor {
        encode_accessibility(&self.state)
    }
}
