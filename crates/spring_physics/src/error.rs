//! Error types for the physics world

use spring_core::ObjectId;
use thiserror::Error;

/// Physics world errors
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// Rigid body not found
    #[error("Rigid body not found: {0}")]
    BodyNotFound(ObjectId),

    /// Body already driven by a hinge
    #[error("Body {0} already has a hinge")]
    HingeExists(ObjectId),

    /// Invalid configuration
    #[error("Invalid physics configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for physics operations
pub type Result<T> = std::result::Result<T, PhysicsError>;
