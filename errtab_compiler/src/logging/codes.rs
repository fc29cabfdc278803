//! Consolidated error codes and classification system
//!
//! Single source of truth for all generator diagnostic codes, their metadata,
//! and classification functions.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a diagnostic code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

// ============================================================================
// CODE CONSTANTS BY STAGE
// ============================================================================

pub mod system {
    use super::Code;
    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
}

pub mod file_processing {
    use super::Code;
    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const FILE_TOO_LARGE: Code = Code::new("E006");
    pub const EMPTY_FILE: Code = Code::new("E007");
    pub const PERMISSION_DENIED: Code = Code::new("E008");
    pub const INVALID_ENCODING: Code = Code::new("E009");
    pub const IO_ERROR: Code = Code::new("E010");
    pub const WRITE_FAILED: Code = Code::new("E011");
}

pub mod value_resolution {
    use super::Code;
    pub const UNRESOLVED_ALIAS: Code = Code::new("E020");
}

pub mod merge {
    use super::Code;
    pub const UNRESOLVED_SYSTEM_ERROR: Code = Code::new("E030");
}

pub mod registry {
    use super::Code;
    pub const DUPLICATE_SUBSYSTEM: Code = Code::new("E040");
    pub const UNASSIGNED_GROUP: Code = Code::new("E041");
}

pub mod pipeline {
    use super::Code;
    pub const PIPELINE_ERROR: Code = Code::new("E090");
}

pub mod warnings {
    use super::Code;
    pub const GENERIC_WARNING: Code = Code::new("W000");
    pub const EMPTY_SUBSYSTEM: Code = Code::new("W010");
}

pub mod success {
    use super::Code;
    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const VALUES_RESOLVED: Code = Code::new("I002");
    pub const DEFINITIONS_PARSED: Code = Code::new("I003");
    pub const ENTRIES_MERGED: Code = Code::new("I004");
    pub const REGISTRY_BUILT: Code = Code::new("I005");
    pub const TABLES_EMITTED: Code = Code::new("I006");
    pub const ARTIFACTS_WRITTEN: Code = Code::new("I007");
    pub const GENERATION_COMPLETED: Code = Code::new("I008");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

fn metadata_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    static REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata {
                code: "ERR001",
                category: "System",
                severity: Severity::Critical,
                recoverable: false,
                requires_halt: true,
                description: "Internal generator error",
                recommended_action: "Report this as a generator bug",
            },
            ErrorMetadata {
                code: "E005",
                category: "FileProcessing",
                severity: Severity::High,
                recoverable: false,
                requires_halt: true,
                description: "Input file not found",
                recommended_action: "Check the declarations directory layout",
            },
            ErrorMetadata {
                code: "E006",
                category: "FileProcessing",
                severity: Severity::High,
                recoverable: false,
                requires_halt: true,
                description: "Input file exceeds the size cap",
                recommended_action: "Verify the path points at a declaration source",
            },
            ErrorMetadata {
                code: "E007",
                category: "FileProcessing",
                severity: Severity::High,
                recoverable: false,
                requires_halt: true,
                description: "Required input file is empty",
                recommended_action: "Populate the declaration source",
            },
            ErrorMetadata {
                code: "E008",
                category: "FileProcessing",
                severity: Severity::High,
                recoverable: false,
                requires_halt: true,
                description: "Permission denied reading input",
                recommended_action: "Fix file permissions on the declarations directory",
            },
            ErrorMetadata {
                code: "E009",
                category: "FileProcessing",
                severity: Severity::High,
                recoverable: false,
                requires_halt: true,
                description: "Input file is not valid UTF-8",
                recommended_action: "Re-encode the declaration source as UTF-8",
            },
            ErrorMetadata {
                code: "E010",
                category: "FileProcessing",
                severity: Severity::High,
                recoverable: false,
                requires_halt: true,
                description: "I/O error reading input",
                recommended_action: "Check the filesystem and retry",
            },
            ErrorMetadata {
                code: "E011",
                category: "FileProcessing",
                severity: Severity::High,
                recoverable: false,
                requires_halt: true,
                description: "Failed to write output artifact",
                recommended_action: "Check the output directory exists and is writable",
            },
            ErrorMetadata {
                code: "E020",
                category: "ValueResolution",
                severity: Severity::Critical,
                recoverable: false,
                requires_halt: true,
                description: "Deferred symbol alias points at an undefined target",
                recommended_action: "Define the alias target in one of the header sources",
            },
            ErrorMetadata {
                code: "E030",
                category: "Merge",
                severity: Severity::Critical,
                recoverable: false,
                requires_halt: true,
                description: "Documented error name has no resolved numeric value",
                recommended_action: "Add the symbol to the header sources or fix the doc name",
            },
            ErrorMetadata {
                code: "E040",
                category: "Registry",
                severity: Severity::Critical,
                recoverable: false,
                requires_halt: true,
                description: "Subsystem ordering names a subsystem twice",
                recommended_action: "Deduplicate the subsystem ordering",
            },
            ErrorMetadata {
                code: "E041",
                category: "Registry",
                severity: Severity::Critical,
                recoverable: false,
                requires_halt: true,
                description: "Entry group has no position in the subsystem ordering",
                recommended_action: "Add the subsystem to the ordering or drop its entries",
            },
            ErrorMetadata {
                code: "E090",
                category: "Pipeline",
                severity: Severity::Critical,
                recoverable: false,
                requires_halt: true,
                description: "Generation pipeline failure",
                recommended_action: "Inspect the wrapped stage error",
            },
            ErrorMetadata {
                code: "W010",
                category: "Registry",
                severity: Severity::Low,
                recoverable: true,
                requires_halt: false,
                description: "Subsystem has no entries",
                recommended_action: "Tables degrade to a lone sentinel; add entries if unintended",
            },
        ];
        entries.into_iter().map(|m| (m.code, m)).collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

pub fn get_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    metadata_registry().get(code)
}

pub fn get_severity(code: &str) -> Severity {
    get_metadata(code).map(|m| m.severity).unwrap_or(Severity::Medium)
}

pub fn get_category(code: &str) -> &'static str {
    get_metadata(code).map(|m| m.category).unwrap_or("Unknown")
}

pub fn get_description(code: &str) -> &'static str {
    get_metadata(code)
        .map(|m| m.description)
        .unwrap_or("Unknown error")
}

pub fn get_action(code: &str) -> &'static str {
    get_metadata(code)
        .map(|m| m.recommended_action)
        .unwrap_or("No specific action available")
}

pub fn is_recoverable(code: &str) -> bool {
    get_metadata(code).map(|m| m.recoverable).unwrap_or(true)
}

pub fn requires_halt(code: &str) -> bool {
    get_metadata(code).map(|m| m.requires_halt).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display() {
        assert_eq!(value_resolution::UNRESOLVED_ALIAS.to_string(), "E020");
        assert_eq!(merge::UNRESOLVED_SYSTEM_ERROR.as_str(), "E030");
    }

    #[test]
    fn test_fatal_codes_require_halt() {
        for code in ["E020", "E030", "E040", "E041", "E090"] {
            assert!(requires_halt(code), "{} must halt", code);
            assert!(!is_recoverable(code), "{} must not be recoverable", code);
        }
    }

    #[test]
    fn test_warning_metadata() {
        assert_eq!(get_severity("W010"), Severity::Low);
        assert!(!requires_halt("W010"));
        assert!(is_recoverable("W010"));
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_description("E999"), "Unknown error");
        assert_eq!(get_category("E999"), "Unknown");
        assert_eq!(get_severity("E999"), Severity::Medium);
        assert!(!requires_halt("E999"));
    }

    #[test]
    fn test_every_stage_code_has_metadata() {
        let codes = [
            system::INTERNAL_ERROR,
            file_processing::FILE_NOT_FOUND,
            file_processing::WRITE_FAILED,
            value_resolution::UNRESOLVED_ALIAS,
            merge::UNRESOLVED_SYSTEM_ERROR,
            registry::DUPLICATE_SUBSYSTEM,
            registry::UNASSIGNED_GROUP,
            pipeline::PIPELINE_ERROR,
        ];
        for code in codes {
            assert!(
                get_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
        }
    }
}
