//! Table emission: two independently indexable views over the entry set
//!
//! The code-space view (one constant and one constructor definition per
//! entry) and the string-space view (three sparse arrays per subsystem plus
//! table-of-tables registries) are built from the registry, then serialized
//! into the two C artifacts by the renderer. Emission itself cannot fail:
//! composite codes are unique by construction and duplicate names are
//! accepted as distinct slots.

pub mod render;
pub mod tables;

pub use render::{render_header, render_source};
pub use tables::{emit_tables, CodeConstant, ErrorDefinition, StringTable, TableSet};
