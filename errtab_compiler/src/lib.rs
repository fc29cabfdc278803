// Internal modules
pub mod catalog;
pub mod config;
pub mod definition_parsing;
pub mod emission;
pub mod file_processor;
#[macro_use]
pub mod logging;
pub mod merge;
pub mod model;
pub mod pipeline;
pub mod registry;
pub mod utils;
pub mod value_resolution;

// Re-export key types for library consumers
pub use config::GeneratorConfig;
pub use model::ErrorEntry;
pub use pipeline::{GeneratedArtifacts, GenerationResult, PipelineError};
