//! Merge stage errors

use crate::logging::{codes, Code};

pub type MergeResult<T> = Result<T, MergeError>;

/// Errors produced while merging parsed definitions with resolved values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    #[error("System error name {name} has no resolved value")]
    UnresolvedSystemError { name: String },
}

impl MergeError {
    /// Create an unresolved system-error-name error
    pub fn unresolved_system_error(name: &str) -> Self {
        Self::UnresolvedSystemError {
            name: name.to_string(),
        }
    }

    /// Get the diagnostic code for the global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::UnresolvedSystemError { .. } => codes::merge::UNRESOLVED_SYSTEM_ERROR,
        }
    }
}
