//! Error types for blueprint lookup and loading

use std::path::PathBuf;
use thiserror::Error;

/// Result type for blueprint operations
pub type Result<T> = std::result::Result<T, BlueprintError>;

/// Errors that can occur when loading or querying blueprints
#[derive(Debug, Error)]
pub enum BlueprintError {
    /// Field not found by name
    #[error("field not found: {name}")]
    FieldNotFound { name: String },

    /// Blueprint not found by name
    #[error("blueprint not found: {name}")]
    BlueprintNotFound { name: String },

    /// Blueprint directory not found
    #[error("blueprint directory not found: {path}")]
    NotInitialized { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BlueprintError::FieldNotFound {
            name: "tags".into(),
        };
        assert_eq!(err.to_string(), "field not found: tags");
    }

    #[test]
    fn test_blueprint_not_found() {
        let err = BlueprintError::BlueprintNotFound {
            name: "article".into(),
        };
        assert!(err.to_string().contains("article"));
    }
}
