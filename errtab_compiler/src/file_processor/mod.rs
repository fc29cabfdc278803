//! Input reading and artifact writing
//!
//! All input reads happen before any model computation; artifact writes only
//! happen once the full model has been built and validated.

pub mod processor;

pub use processor::{read_source, write_artifact, FileProcessorError, SourceFile};
