use crate::action::{ActionRegistry, ToolAction};
use crate::error::ToolError;
use crate::settings::ToolSettings;
use crate::stack::ToolStack;

/// Receives the side effects of tool stack changes: actions to run and
/// status-bar messages.
pub trait ToolEventSink {
    /// Queue `action` for execution by the host's dispatcher.
    fn post_action(&mut self, action: &ToolAction);

    fn display_tool_msg(&mut self, msg: &str);

    fn refresh_canvas(&mut self) {}
}

/// Owns the user-level tool stack of one editor together with the
/// preferences that govern interactive tools.
pub struct ToolsHolder<S: ToolEventSink> {
    stack: ToolStack,
    settings: ToolSettings,
    actions: ActionRegistry,
    sink: S,
}

impl<S: ToolEventSink> ToolsHolder<S> {
    pub fn new(sink: S) -> Self {
        Self::with_settings(sink, ToolSettings::default())
    }

    pub fn with_settings(sink: S, settings: ToolSettings) -> Self {
        let mut holder = Self {
            stack: ToolStack::new(),
            settings: ToolSettings::default(),
            actions: ActionRegistry::new(),
            sink,
        };
        holder.common_settings_changed(settings);
        holder
    }

    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    pub fn register_action(&mut self, action: ToolAction) {
        self.actions.register(action);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn tool_stack(&self) -> &ToolStack {
        &self.stack
    }

    // ── Tool stack ───────────────────────────────────────────────────

    /// Make `name` the active tool and show its label.
    pub fn push_tool(&mut self, name: &str) {
        self.stack.push_tool(name);
        let label = self.actions.label_for(name);
        self.sink.display_tool_msg(label);
    }

    /// Leave tool `name`. The tool exposed underneath is re-posted so it
    /// resumes; an emptied stack falls back to the selection tool.
    pub fn pop_tool(&mut self, name: &str) -> bool {
        if !self.stack.pop_tool(name) {
            return false;
        }

        if self.stack.is_empty() {
            let selection = ToolAction::selection_tool();
            let label = self.actions.label_for(selection.name());
            self.sink.display_tool_msg(label);
            return true;
        }

        let top = self.stack.current_tool_name();
        match self.actions.find(top) {
            Some(action) => {
                log::debug!("Resuming tool {}", top);
                self.sink.post_action(action);
            }
            None => log::warn!("Cannot resume unregistered tool {}", top),
        }
        true
    }

    pub fn current_tool_name(&self) -> &str {
        self.stack.current_tool_name()
    }

    pub fn is_current_tool(&self, action: &ToolAction) -> bool {
        self.stack.is_current_tool(action)
    }

    pub fn tool_stack_is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Hand a registered action to the host dispatcher by name.
    pub fn run_action(&mut self, name: &str) -> Result<(), ToolError> {
        let action = self.actions.get(name)?;
        self.sink.post_action(action);
        Ok(())
    }

    // ── Preferences ──────────────────────────────────────────────────

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn do_immediate_actions(&self) -> bool {
        self.settings.immediate_actions
    }

    pub fn drag_selects(&self) -> bool {
        self.settings.drag_selects
    }

    pub fn move_warps_cursor(&self) -> bool {
        self.settings.move_warps_cursor
    }

    /// Apply new suite-wide preferences.
    pub fn common_settings_changed(&mut self, settings: ToolSettings) {
        self.stack.set_policy(settings.pop_policy);
        self.stack.set_max_depth(settings.max_stack_depth);
        log::info!(
            "Tool settings updated (immediate actions: {}, drag selects: {}, warp cursor: {})",
            settings.immediate_actions,
            settings.drag_selects,
            settings.move_warps_cursor
        );
        self.settings = settings;
        self.sink.refresh_canvas();
    }

    /// Parse a preferences document and apply it.
    pub fn load_settings(&mut self, json: &str) -> Result<(), ToolError> {
        let settings = ToolSettings::from_json(json)?;
        self.common_settings_changed(settings);
        Ok(())
    }
}
