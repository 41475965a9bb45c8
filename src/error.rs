//! Structured error types for ordergrid.
//!
//! Interaction anomalies (stale timers, invalid numeric input, drops outside
//! any row) degrade to no-ops and never reach this type; `GridError` covers
//! the genuine failure points at the JS boundary.

/// All errors that can occur while loading data into or driving the grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Row list or settings payload could not be deserialized.
    #[error("Invalid payload: {0}")]
    Payload(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A caller-supplied callback threw when invoked.
    #[error("Callback failed: {0}")]
    Callback(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
