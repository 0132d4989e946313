use serde::{Deserialize, Serialize};

use crate::error::ToolError;
use crate::stack::PopPolicy;

/// User preferences shared by every editor that hosts a tool stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Hotkeys act immediately even while another tool is running. When
    /// false the first hotkey press only selects the tool.
    pub immediate_actions: bool,
    /// Dragging draws a selection rectangle, even when started over an item.
    pub drag_selects: bool,
    /// Move operations warp the pointer to the origin of the moved item.
    pub move_warps_cursor: bool,
    pub pop_policy: PopPolicy,
    /// Deeper stacks drop their oldest tool. `None` means unbounded.
    pub max_stack_depth: Option<usize>,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            immediate_actions: true,
            drag_selects: true,
            move_warps_cursor: true,
            pop_policy: PopPolicy::IgnoreMismatch,
            max_stack_depth: Some(3),
        }
    }
}

impl ToolSettings {
    /// Parse a preferences document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ToolError> {
        let settings = serde_json::from_str(json)?;
        log::debug!("Loaded tool settings: {:?}", settings);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ToolError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
