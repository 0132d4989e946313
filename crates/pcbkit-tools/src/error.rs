use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Invalid tool settings document: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("Unknown tool action '{0}'")]
    UnknownAction(String),
}
