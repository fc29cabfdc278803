//! Canonical taxonomy model: the merged error entry
//!
//! An [`ErrorEntry`] is the unit every downstream stage operates on. Entries
//! are constructed once per generation run by the merge stage and never
//! mutated afterwards; in particular an entry never migrates between
//! subsystems and its code is fixed at merge time.

use crate::config::constants::compile_time::taxonomy::COMPOSITE_CODE_SHIFT;
use serde::{Deserialize, Serialize};

/// One error code in the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// Identifier, unique within its subsystem (not globally).
    pub name: String,
    /// True failure condition vs. benign status code (OK, EOF).
    pub is_error: bool,
    /// Transient/critical flag bitmask; zero unless set by merge policy.
    pub flags: u8,
    /// Zero-based in-subsystem index, assigned positionally at merge time.
    pub code: u32,
    /// One-line description, already quote-escaped and collapsed.
    pub short_description: String,
    /// Extended description; may be empty.
    pub long_description: String,
    /// Resolved OS-level value for system errors. A cross-reference key used
    /// to validate the name during merging - never the emitted code.
    pub external_value: Option<i64>,
}

impl ErrorEntry {
    /// The in-subsystem code rendered in canonical 8-hex-digit form.
    pub fn formatted_code(&self) -> String {
        format_code(self.code)
    }

    /// Composite code: subsystem ordinal in the high bits, in-subsystem code
    /// in the low bits. Globally unique by construction.
    pub fn composite_code(&self, subsystem_ordinal: u8) -> u64 {
        ((subsystem_ordinal as u64) << COMPOSITE_CODE_SHIFT) | self.code as u64
    }

    /// Synonym entries denote a duplicate name for an already-tabulated
    /// value. They keep their code-space constant but are excluded from all
    /// string tables.
    pub fn is_synonym(&self) -> bool {
        self.short_description.to_lowercase().contains("synonym")
    }
}

/// Render an in-subsystem code in the canonical 8-hex-digit form used by
/// both emitted artifacts.
pub fn format_code(code: u32) -> String {
    format!("{:#010x}", code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, code: u32, short: &str) -> ErrorEntry {
        ErrorEntry {
            name: name.to_string(),
            is_error: true,
            flags: 0,
            code,
            short_description: short.to_string(),
            long_description: String::new(),
            external_value: None,
        }
    }

    #[test]
    fn test_formatted_code() {
        assert_eq!(format_code(0), "0x00000000");
        assert_eq!(format_code(11), "0x0000000b");
        assert_eq!(entry("EPERM", 17, "x").formatted_code(), "0x00000011");
    }

    #[test]
    fn test_composite_code() {
        let e = entry("EPERM", 3, "x");
        assert_eq!(e.composite_code(0), 3);
        assert_eq!(e.composite_code(1), (1u64 << 32) | 3);
    }

    #[test]
    fn test_composite_codes_distinct_across_subsystems() {
        let a = entry("OK", 0, "fine");
        let b = entry("EPERM", 0, "not permitted");
        assert_ne!(a.composite_code(0), b.composite_code(1));
    }

    #[test]
    fn test_synonym_detection_case_insensitive() {
        assert!(entry("EWOULDBLOCK", 1, "Synonym for EAGAIN").is_synonym());
        assert!(entry("EDEADLOCK", 2, "synonym of EDEADLK").is_synonym());
        assert!(!entry("EPERM", 3, "Operation not permitted").is_synonym());
    }
}
