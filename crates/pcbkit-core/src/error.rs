use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid footprint library name '{name}': contains {invalid}")]
    InvalidLibName { name: String, invalid: String },

    #[error("Footprint '{0}' not found")]
    FootprintNotFound(String),

    #[error("Invalid settings document: {0}")]
    Settings(#[from] serde_json::Error),
}
