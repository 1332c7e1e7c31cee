//! Error types for the core library

use thiserror::Error;

/// Core errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input action name not in the action table
    #[error("Unknown input action: {0}")]
    UnknownInputAction(String),

    /// Tag name not in the tag table
    #[error("Unknown tag: {0}")]
    UnknownTag(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
