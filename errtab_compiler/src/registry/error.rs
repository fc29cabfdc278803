//! Registry construction errors

use crate::logging::{codes, Code};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors produced while building the subsystem registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Subsystem {name} appears more than once in the ordering")]
    DuplicateSubsystem { name: String },

    #[error("Entry group {name} has no position in the subsystem ordering")]
    UnassignedGroup { name: String },
}

impl RegistryError {
    pub fn duplicate_subsystem(name: &str) -> Self {
        Self::DuplicateSubsystem {
            name: name.to_string(),
        }
    }

    pub fn unassigned_group(name: &str) -> Self {
        Self::UnassignedGroup {
            name: name.to_string(),
        }
    }

    /// Get the diagnostic code for the global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::DuplicateSubsystem { .. } => codes::registry::DUPLICATE_SUBSYSTEM,
            Self::UnassignedGroup { .. } => codes::registry::UNASSIGNED_GROUP,
        }
    }
}
