//! # Scene Errors
//!
//! Error types for scene-tree manipulation.

use thiserror::Error;

/// Result type for scene operations
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors produced by scene-tree operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// Adding a shape under a name that is already taken
    #[error("Shape '{shape}' already exists in component '{component}'")]
    ShapeExists { component: String, shape: String },

    /// Updating a shape that was never added
    #[error("Shape '{shape}' does not exist in component '{component}'")]
    ShapeMissing { component: String, shape: String },

    /// Adding a child under a name that is already taken
    #[error("Child '{child}' already exists in component '{component}'")]
    ChildExists { component: String, child: String },

    /// Updating a child that was never added
    #[error("Child '{child}' does not exist in component '{component}'")]
    ChildMissing { component: String, child: String },
}
