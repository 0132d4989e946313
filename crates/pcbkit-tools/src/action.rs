use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ToolError;

/// Name of the selection tool, reported whenever no other tool is active.
pub const SELECTION_TOOL_NAME: &str = "common.InteractiveSelection";

/// A user-level tool. One interactive tool implementation may provide
/// several of these (rectangle and circle, wire and bus), so the stack
/// tracks actions rather than tool objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolAction {
    name: String,
    label: String,
    #[serde(default)]
    tooltip: String,
}

impl ToolAction {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            tooltip: String::new(),
        }
    }

    pub fn with_tooltip(mut self, tooltip: &str) -> Self {
        self.tooltip = tooltip.to_string();
        self
    }

    /// The interactive selection tool.
    pub fn selection_tool() -> Self {
        Self::new(SELECTION_TOOL_NAME, "Select item(s)")
    }

    /// Dotted identifier, e.g. `pcbnew.InteractiveRouter.SingleTrack`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }
}

/// Known actions by name. Always contains the selection tool.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    actions: HashMap<String, ToolAction>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            actions: HashMap::new(),
        };
        registry.register(ToolAction::selection_tool());
        registry
    }

    /// Add an action, returning the one it replaced.
    pub fn register(&mut self, action: ToolAction) -> Option<ToolAction> {
        log::trace!("Registering tool action {}", action.name());
        self.actions.insert(action.name.clone(), action)
    }

    pub fn find(&self, name: &str) -> Option<&ToolAction> {
        self.actions.get(name)
    }

    pub fn get(&self, name: &str) -> Result<&ToolAction, ToolError> {
        self.find(name)
            .ok_or_else(|| ToolError::UnknownAction(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Human-readable label, or the raw name for unregistered actions.
    pub fn label_for<'a>(&'a self, name: &'a str) -> &'a str {
        self.find(name).map_or(name, ToolAction::label)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
