//! # PCBKit Tools
//!
//! The user-level tool stack of an interactive editor: which command is
//! active, what resumes when it ends, and the preferences that shape how
//! tools behave.

pub mod action;
pub mod error;
pub mod holder;
pub mod settings;
pub mod stack;

pub use action::{ActionRegistry, ToolAction, SELECTION_TOOL_NAME};
pub use error::ToolError;
pub use holder::{ToolEventSink, ToolsHolder};
pub use settings::ToolSettings;
pub use stack::{PopPolicy, ToolStack};
