//! Error types for parsing and emission.

use thiserror::Error;

/// Errors produced by the JSON parser and the TOML emitter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecastError {
    /// The input was not valid JSON. `position` is the byte offset where the
    /// parser gave up and `snippet` is a short window of the remaining input.
    #[error("JSON parse error at byte {position}: {message} (near {snippet:?})")]
    Parse {
        position: usize,
        message: String,
        snippet: String,
    },

    /// The nesting guard tripped before the input's structure bottomed out.
    #[error("nesting depth limit of {limit} exceeded at byte {position}")]
    DepthExceeded { limit: usize, position: usize },

    /// The emitter was handed a value shape its target format cannot
    /// represent (e.g. a non-object TOML root).
    #[error("unsupported value: {0}")]
    Unsupported(String),
}

/// Convenience alias used throughout recast-core.
pub type Result<T> = std::result::Result<T, RecastError>;
