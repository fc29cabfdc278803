//! Shared utilities for the errtab compiler

pub mod text;

pub use text::{collapse_whitespace, escape_quotes, is_error_symbol, normalize_description};
