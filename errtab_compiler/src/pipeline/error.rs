use crate::file_processor::FileProcessorError;
use crate::logging::{codes, Code};
use crate::merge::MergeError;
use crate::registry::RegistryError;
use crate::value_resolution::ValueResolutionError;

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File processing failed: {0}")]
    FileProcessing(#[from] FileProcessorError),

    #[error("Value resolution failed: {0}")]
    ValueResolution(#[from] ValueResolutionError),

    #[error("Merge failed: {0}")]
    Merge(#[from] MergeError),

    #[error("Registry construction failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl PipelineError {
    pub fn pipeline_error(message: &str) -> Self {
        Self::Pipeline {
            message: message.to_string(),
        }
    }

    /// Get the diagnostic code of the wrapped stage error
    pub fn error_code(&self) -> Code {
        match self {
            Self::FileProcessing(e) => e.error_code(),
            Self::ValueResolution(e) => e.error_code(),
            Self::Merge(e) => e.error_code(),
            Self::Registry(e) => e.error_code(),
            Self::Pipeline { .. } => codes::pipeline::PIPELINE_ERROR,
        }
    }
}
