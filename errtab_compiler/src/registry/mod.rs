//! Subsystem registry: ordinal assignment and entry binding
//!
//! The caller-provided subsystem ordering is significant configuration: it
//! fixes the composite-code high bits and every table-of-tables position.
//! It is always passed in explicitly, never read from ambient state.

pub mod error;
pub mod table;

pub use error::{RegistryError, RegistryResult};
pub use table::{build_registry, Subsystem, SubsystemRegistry};
