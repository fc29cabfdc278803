//! Value resolution errors

use crate::logging::{codes, Code};

pub type ValueResolutionResult<T> = Result<T, ValueResolutionError>;

/// Errors produced while resolving symbol values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueResolutionError {
    #[error("Unresolved alias: {symbol} refers to undefined symbol {target}")]
    UnresolvedAlias { symbol: String, target: String },
}

impl ValueResolutionError {
    /// Create an unresolved alias error
    pub fn unresolved_alias(symbol: &str, target: &str) -> Self {
        Self::UnresolvedAlias {
            symbol: symbol.to_string(),
            target: target.to_string(),
        }
    }

    /// Get the diagnostic code for the global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::UnresolvedAlias { .. } => codes::value_resolution::UNRESOLVED_ALIAS,
        }
    }
}
