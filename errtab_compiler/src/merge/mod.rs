//! Entry merging: parser triples + resolver values into canonical entries
//!
//! Codes are assigned positionally in both subsystems. For system errors the
//! resolved OS value is attached as a cross-reference only; a documented name
//! with no resolved value aborts the run.

pub mod error;
pub mod merger;

pub use error::{MergeError, MergeResult};
pub use merger::{merge_generic, merge_system};
