//! Value resolution: symbol name to numeric value mapping
//!
//! Scans the two system header sources for `#define SYMBOL VALUE` rules and
//! resolves single-level symbol aliases in a second fix-up pass.

pub mod error;
pub mod resolver;

pub use error::{ValueResolutionError, ValueResolutionResult};
pub use resolver::{resolve_values, ValueResolver};
