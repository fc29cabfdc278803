//! Positional entry construction for both subsystems

use super::error::{MergeError, MergeResult};
use crate::catalog::GenericCode;
use crate::definition_parsing::DefinitionTriple;
use crate::logging::codes;
use crate::model::ErrorEntry;
use crate::{log_error, log_success};
use std::collections::HashMap;

/// Build the generic (utility) entries. Value assignment is purely
/// positional - declaration order is code order - and no resolver lookup
/// occurs: these codes are caller-defined, not system-derived.
pub fn merge_generic(declarations: &[GenericCode]) -> Vec<ErrorEntry> {
    declarations
        .iter()
        .enumerate()
        .map(|(position, decl)| ErrorEntry {
            name: decl.name.to_string(),
            is_error: decl.is_error,
            flags: decl.flags,
            code: position as u32,
            short_description: decl.short_description.to_string(),
            long_description: decl.long_description.to_string(),
            external_value: decl.external_value,
        })
        .collect()
}

/// Build the system-error entries. Every documented name must resolve to an
/// OS-level value - the taxonomy must not silently drop or misnumber a
/// system error - but the emitted code is the positional discovery index,
/// never the OS value itself.
pub fn merge_system(
    triples: &[DefinitionTriple],
    values: &HashMap<String, i64>,
) -> MergeResult<Vec<ErrorEntry>> {
    let mut entries = Vec::with_capacity(triples.len());

    for (position, triple) in triples.iter().enumerate() {
        let external_value = match values.get(&triple.name) {
            Some(&value) => value,
            None => {
                let error = MergeError::unresolved_system_error(&triple.name);
                log_error!(error.error_code(), "Documented name missing from value map",
                    "name" => triple.name
                );
                return Err(error);
            }
        };

        entries.push(ErrorEntry {
            name: triple.name.clone(),
            is_error: true,
            flags: flag_profile(&triple.name),
            code: position as u32,
            short_description: triple.short_description.clone(),
            long_description: triple.long_description.clone(),
            external_value: Some(external_value),
        });
    }

    log_success!(codes::success::ENTRIES_MERGED, "System entries merged",
        "entries" => entries.len()
    );
    Ok(entries)
}

/// Merge policy hook for the flag/criticality profile of system errors.
/// No system error currently carries transient or critical markers.
fn flag_profile(_name: &str) -> u8 {
    0
}
