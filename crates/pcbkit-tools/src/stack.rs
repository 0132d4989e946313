use serde::{Deserialize, Serialize};

use crate::action::{ToolAction, SELECTION_TOOL_NAME};

/// What `pop_tool` does when the named tool is not on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopPolicy {
    /// Pop only a matching top entry; anything else is a no-op.
    #[default]
    IgnoreMismatch,
    /// Pop the topmost matching entry together with everything above it.
    UnwindToMatch,
}

/// Stack of user-level tool names. The top entry is the active tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolStack {
    entries: Vec<String>,
    policy: PopPolicy,
    max_depth: Option<usize>,
}

impl ToolStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: PopPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> PopPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: PopPolicy) {
        self.policy = policy;
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Limit the stack depth; the oldest entries are dropped first. A limit
    /// of zero is treated as one.
    pub fn set_max_depth(&mut self, max_depth: Option<usize>) {
        self.max_depth = max_depth.map(|d| d.max(1));
        self.trim();
    }

    pub fn push_tool(&mut self, name: &str) {
        self.entries.push(name.to_string());
        self.trim();
        log::trace!("Pushed tool {} (depth {})", name, self.entries.len());
    }

    /// Pop `name` according to the pop policy. Returns whether anything was
    /// removed.
    pub fn pop_tool(&mut self, name: &str) -> bool {
        let popped = match self.policy {
            PopPolicy::IgnoreMismatch => {
                if self.entries.last().map(String::as_str) == Some(name) {
                    self.entries.pop();
                    true
                } else {
                    false
                }
            }
            PopPolicy::UnwindToMatch => match self.entries.iter().rposition(|e| e == name) {
                Some(index) => {
                    self.entries.truncate(index);
                    true
                }
                None => false,
            },
        };
        if popped {
            log::trace!("Popped tool {} (depth {})", name, self.entries.len());
        } else {
            log::debug!(
                "Ignoring pop of {}: active tool is {}",
                name,
                self.current_tool_name()
            );
        }
        popped
    }

    /// Active tool, or the selection tool when the stack is empty.
    pub fn current_tool_name(&self) -> &str {
        self.entries
            .last()
            .map_or(SELECTION_TOOL_NAME, String::as_str)
    }

    pub fn is_current_tool(&self, action: &ToolAction) -> bool {
        self.current_tool_name() == action.name()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Entries from bottom to top.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn trim(&mut self) {
        if let Some(max) = self.max_depth {
            if self.entries.len() > max {
                let excess = self.entries.len() - max;
                self.entries.drain(..excess);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_discipline() {
        let mut stack = ToolStack::new();
        stack.push_tool("A");
        stack.push_tool("B");
        assert_eq!(stack.current_tool_name(), "B");
        assert!(stack.pop_tool("B"));
        assert_eq!(stack.current_tool_name(), "A");
        assert!(!stack.pop_tool("Z"));
        assert_eq!(stack.current_tool_name(), "A");
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_ignore_mismatch_keeps_buried_entries() {
        let mut stack = ToolStack::with_policy(PopPolicy::IgnoreMismatch);
        stack.push_tool("A");
        stack.push_tool("B");
        assert!(!stack.pop_tool("A"));
        assert_eq!(stack.entries(), ["A", "B"]);
    }

    #[test]
    fn test_unwind_to_match() {
        let mut stack = ToolStack::with_policy(PopPolicy::UnwindToMatch);
        for name in ["A", "B", "C", "D"] {
            stack.push_tool(name);
        }
        assert!(stack.pop_tool("B"));
        assert_eq!(stack.entries(), ["A"]);
        assert!(!stack.pop_tool("Z"));
        assert_eq!(stack.current_tool_name(), "A");
    }

    #[test]
    fn test_unwind_stops_at_topmost_match() {
        let mut stack = ToolStack::with_policy(PopPolicy::UnwindToMatch);
        for name in ["A", "B", "A", "C"] {
            stack.push_tool(name);
        }
        assert!(stack.pop_tool("A"));
        assert_eq!(stack.entries(), ["A", "B"]);
    }

    #[test]
    fn test_empty_stack_reports_selection_tool() {
        let mut stack = ToolStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.current_tool_name(), SELECTION_TOOL_NAME);
        assert!(stack.is_current_tool(&ToolAction::selection_tool()));
        assert!(!stack.is_current_tool(&ToolAction::new("A", "A")));
        assert!(!stack.pop_tool(SELECTION_TOOL_NAME));
    }

    #[test]
    fn test_is_current_tool_compares_names() {
        let mut stack = ToolStack::new();
        stack.push_tool("pcbnew.PlaceFootprint");
        assert!(stack.is_current_tool(&ToolAction::new("pcbnew.PlaceFootprint", "Add Footprint")));
        assert!(!stack.is_current_tool(&ToolAction::selection_tool()));
    }

    #[test]
    fn test_max_depth_drops_oldest() {
        let mut stack = ToolStack::new();
        stack.set_max_depth(Some(3));
        for name in ["A", "B", "C", "D"] {
            stack.push_tool(name);
        }
        assert_eq!(stack.entries(), ["B", "C", "D"]);
        stack.set_max_depth(Some(0));
        assert_eq!(stack.entries(), ["D"]);
        stack.set_max_depth(None);
        stack.push_tool("E");
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let mut stack = ToolStack::new();
        stack.push_tool("A");
        stack.push_tool("A");
        assert!(stack.pop_tool("A"));
        assert_eq!(stack.current_tool_name(), "A");
    }
}
