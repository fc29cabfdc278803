//! Registry structures binding entries to ordered subsystems

use super::error::{RegistryError, RegistryResult};
use crate::logging::codes;
use crate::model::ErrorEntry;
use crate::{log_success, log_warning};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named partition of the code space, bound for emission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subsystem {
    /// Unique short identifier (e.g. "UTIL", "ERRNO").
    pub name: String,
    /// Zero-based position in the caller-specified ordering. High bits of
    /// every composite code in this subsystem, and its index in every
    /// table-of-tables.
    pub ordinal: u8,
    /// Entries sorted by ascending code, ties in discovery order.
    pub entries: Vec<ErrorEntry>,
    /// Greatest code among the entries; `None` for an empty subsystem.
    pub max_code: Option<u32>,
}

impl Subsystem {
    /// Logical string-table length: one trailing slot past the sentinel.
    /// An empty subsystem degrades to a lone sentinel slot.
    pub fn table_len(&self) -> u32 {
        match self.max_code {
            Some(max) => max + 2,
            None => 1,
        }
    }

    /// Index of the explicit NULL sentinel terminating the valid range.
    pub fn sentinel_index(&self) -> u32 {
        match self.max_code {
            Some(max) => max + 1,
            None => 0,
        }
    }
}

/// The complete, ordered subsystem set for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubsystemRegistry {
    pub subsystems: Vec<Subsystem>,
}

impl SubsystemRegistry {
    pub fn subsystem_count(&self) -> usize {
        self.subsystems.len()
    }

    pub fn total_entry_count(&self) -> usize {
        self.subsystems.iter().map(|s| s.entries.len()).sum()
    }
}

/// Assign ordinals 0..N-1 in the given order and bind each subsystem's
/// entries. Groups not named in the ordering are an error - they would
/// otherwise vanish from the emitted taxonomy silently.
pub fn build_registry(
    ordering: &[&str],
    mut groups: HashMap<String, Vec<ErrorEntry>>,
) -> RegistryResult<SubsystemRegistry> {
    let mut subsystems = Vec::with_capacity(ordering.len());

    for (position, &name) in ordering.iter().enumerate() {
        if ordering[..position].contains(&name) {
            let error = RegistryError::duplicate_subsystem(name);
            return Err(error);
        }

        let mut entries = groups.remove(name).unwrap_or_default();
        if entries.is_empty() {
            log_warning!("Subsystem has no entries", "subsystem" => name);
        }

        // Stable: ties keep discovery order
        entries.sort_by_key(|entry| entry.code);

        let max_code = entries.iter().map(|entry| entry.code).max();
        subsystems.push(Subsystem {
            name: name.to_string(),
            ordinal: position as u8,
            entries,
            max_code,
        });
    }

    if let Some(name) = groups.keys().next() {
        return Err(RegistryError::unassigned_group(name));
    }

    let registry = SubsystemRegistry { subsystems };
    log_success!(codes::success::REGISTRY_BUILT, "Subsystem registry built",
        "subsystems" => registry.subsystem_count(),
        "entries" => registry.total_entry_count()
    );
    Ok(registry)
}
