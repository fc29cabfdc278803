//! View construction over the bound registry

use crate::config::constants::compile_time::taxonomy::UTILITY_SUBSYSTEM;
use crate::logging::codes;
use crate::log_success;
use crate::registry::{Subsystem, SubsystemRegistry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The three parallel string arrays of one subsystem. Arrays are sparse:
/// synonym entries leave their index absent, and absent indices render as
/// implicit NULL slots. The explicit sentinel terminates the valid range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringTable {
    pub subsystem: String,
    pub ordinal: u8,
    /// Logical array length (`max_code + 2`, or 1 when empty).
    pub table_len: u32,
    /// Index of the explicit trailing NULL sentinel (`max_code + 1`).
    pub sentinel_index: u32,
    pub short: BTreeMap<u32, String>,
    pub long: BTreeMap<u32, String>,
    pub names: BTreeMap<u32, String>,
}

/// One flat code-space constant: `(ordinal << 32) | code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeConstant {
    pub symbol: String,
    pub subsystem: String,
    pub ordinal: u8,
    pub code: u32,
    pub composite: u64,
}

/// One constructor-style definition carrying the full error identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDefinition {
    pub symbol: String,
    pub is_error: bool,
    pub flags: u8,
    pub subsystem: String,
    pub code: u32,
}

/// Both emitted views over the full entry set, in emission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSet {
    pub subsystem_names: Vec<String>,
    pub string_tables: Vec<StringTable>,
    pub code_constants: Vec<CodeConstant>,
    pub definitions: Vec<ErrorDefinition>,
}

/// Canonical entry symbol. The utility subsystem omits the subsystem infix.
fn entry_symbol(subsystem: &str, name: &str) -> String {
    if subsystem == UTILITY_SUBSYSTEM {
        format!("ERR_{}", name)
    } else {
        format!("ERR_{}_{}", subsystem, name)
    }
}

/// Flat code-space constant symbol.
fn code_symbol(subsystem: &str, name: &str) -> String {
    if subsystem == UTILITY_SUBSYSTEM {
        format!("ERR_CODE_{}", name)
    } else {
        format!("ERR_CODE_{}_{}", subsystem, name)
    }
}

fn string_table_for(subsystem: &Subsystem) -> StringTable {
    let mut table = StringTable {
        subsystem: subsystem.name.clone(),
        ordinal: subsystem.ordinal,
        table_len: subsystem.table_len(),
        sentinel_index: subsystem.sentinel_index(),
        short: BTreeMap::new(),
        long: BTreeMap::new(),
        names: BTreeMap::new(),
    };

    for entry in &subsystem.entries {
        // Synonyms keep their code-space constant but never a string slot
        if entry.is_synonym() {
            continue;
        }
        table
            .short
            .insert(entry.code, entry.short_description.clone());
        table.long.insert(entry.code, entry.long_description.clone());
        table
            .names
            .insert(entry.code, entry_symbol(&subsystem.name, &entry.name));
    }

    table
}

/// Build both views from the bound registry.
pub fn emit_tables(registry: &SubsystemRegistry) -> TableSet {
    let mut string_tables = Vec::with_capacity(registry.subsystem_count());
    let mut code_constants = Vec::new();
    let mut definitions = Vec::new();

    for subsystem in &registry.subsystems {
        string_tables.push(string_table_for(subsystem));

        for entry in &subsystem.entries {
            code_constants.push(CodeConstant {
                symbol: code_symbol(&subsystem.name, &entry.name),
                subsystem: subsystem.name.clone(),
                ordinal: subsystem.ordinal,
                code: entry.code,
                composite: entry.composite_code(subsystem.ordinal),
            });
            definitions.push(ErrorDefinition {
                symbol: entry_symbol(&subsystem.name, &entry.name),
                is_error: entry.is_error,
                flags: entry.flags,
                subsystem: subsystem.name.clone(),
                code: entry.code,
            });
        }
    }

    let table_set = TableSet {
        subsystem_names: registry
            .subsystems
            .iter()
            .map(|s| s.name.clone())
            .collect(),
        string_tables,
        code_constants,
        definitions,
    };

    log_success!(codes::success::TABLES_EMITTED, "Emission views built",
        "subsystems" => table_set.subsystem_names.len(),
        "constants" => table_set.code_constants.len()
    );
    table_set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ErrorEntry;
    use crate::registry::build_registry;
    use std::collections::{HashMap, HashSet};

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

    fn sample_registry() -> crate::registry::SubsystemRegistry {
        let groups = HashMap::from([
            (
                "UTIL".to_string(),
                vec![entry("OK", 0, "Everything is fine"), entry("FAIL", 1, "Generic Failure")],
            ),
            (
                "ERRNO".to_string(),
                vec![
                    entry("EPERM", 0, "Operation not permitted"),
                    entry("EWOULDBLOCK", 1, "Synonym for EAGAIN"),
                    entry("EAGAIN", 2, "Try again"),
                ],
            ),
        ]);
        build_registry(&["UTIL", "ERRNO"], groups).unwrap()
    }

    #[test]
    fn test_table_len_is_max_code_plus_two() {
        let tables = emit_tables(&sample_registry());
        let errno = &tables.string_tables[1];
        assert_eq!(errno.table_len, 4);
        assert_eq!(errno.sentinel_index, 3);
    }

    #[test]
    fn test_synonym_entries_excluded_from_all_string_arrays() {
        let tables = emit_tables(&sample_registry());
        let errno = &tables.string_tables[1];

        assert!(!errno.short.contains_key(&1));
        assert!(!errno.long.contains_key(&1));
        assert!(!errno.names.contains_key(&1));
        // Neighbors keep their slots
        assert!(errno.short.contains_key(&0));
        assert!(errno.short.contains_key(&2));
    }

    #[test]
    fn test_synonym_keeps_code_space_constant() {
        let tables = emit_tables(&sample_registry());
        assert!(tables
            .code_constants
            .iter()
            .any(|c| c.symbol == "ERR_CODE_ERRNO_EWOULDBLOCK"));
    }

    #[test]
    fn test_utility_subsystem_omits_infix() {
        let tables = emit_tables(&sample_registry());
        let util = &tables.string_tables[0];
        assert_eq!(util.names.get(&0).map(String::as_str), Some("ERR_OK"));

        assert!(tables.code_constants.iter().any(|c| c.symbol == "ERR_CODE_OK"));
        assert!(tables.definitions.iter().any(|d| d.symbol == "ERR_FAIL"));
        assert!(tables
            .definitions
            .iter()
            .any(|d| d.symbol == "ERR_ERRNO_EPERM"));
    }

    #[test]
    fn test_composite_codes_globally_unique() {
        let tables = emit_tables(&sample_registry());
        let composites: HashSet<u64> = tables.code_constants.iter().map(|c| c.composite).collect();
        assert_eq!(composites.len(), tables.code_constants.len());
    }

    #[test]
    fn test_composite_code_layout() {
        let tables = emit_tables(&sample_registry());
        let eagain = tables
            .code_constants
            .iter()
            .find(|c| c.symbol == "ERR_CODE_ERRNO_EAGAIN")
            .unwrap();
        assert_eq!(eagain.composite, (1u64 << 32) | 2);
    }

    #[test]
    fn test_empty_subsystem_emits_lone_sentinel_table() {
        let registry = build_registry(&["UTIL"], HashMap::new()).unwrap();
        let tables = emit_tables(&registry);
        let util = &tables.string_tables[0];
        assert_eq!(util.table_len, 1);
        assert_eq!(util.sentinel_index, 0);
        assert!(util.short.is_empty());
    }
}
