use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartPlugin, PluginContext, PluginEvent};
use crate::render::Renderer;

use super::ChartView;

impl<R: Renderer> ChartView<R> {
    /// Registers a plugin with unique identifier.
    pub fn register_plugin(&mut self, plugin: Box<dyn ChartPlugin>) -> ChartResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.plugins.iter().any(|entry| entry.id() == plugin_id) {
            return Err(ChartError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.plugins.push(plugin);
        Ok(())
    }

    /// Removes a plugin by id. Returns `true` when one was removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|entry| entry.id() != plugin_id);
        before != self.plugins.len()
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|entry| entry.id() == plugin_id)
    }

    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            points_len: self.state.len(),
            value_range: self.state.value_range(),
            edit_mode: self.session.mode(),
            pending_color: self.state.pending_color(),
            pending_height: self.state.pending_height().get(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
