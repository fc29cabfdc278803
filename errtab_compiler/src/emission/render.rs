//! C artifact rendering
//!
//! Pure serialization of the emitted views into the definitions header and
//! the data source. Output is deterministic: for a fixed table set the
//! rendered text is byte-for-byte identical across runs.

use super::tables::{StringTable, TableSet};
use crate::model::format_code;

const GENERATED_BANNER: &str = "/*\n * Generated by errtab_compiler - do not edit.\n * Regenerate from the error declaration sources.\n */";

const RULE: &str =
    "/*****************************************************************************/";

fn section(title: &str) -> String {
    format!("{}\n/* {:<73} */\n{}", RULE, title, RULE)
}

fn bool_token(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

fn flags_token(flags: u8) -> String {
    if flags == 0 {
        "0".to_string()
    } else {
        format!("{:#04x}", flags)
    }
}

/// Render the definitions artifact (`error_codes.h`).
pub fn render_header(tables: &TableSet) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(GENERATED_BANNER.to_string());
    lines.push(String::new());
    lines.push("#ifndef _ERROR_CODES_H".to_string());
    lines.push("#define _ERROR_CODES_H".to_string());
    lines.push(String::new());
    lines.push(String::new());

    // Subsystem ordinals, bracketed by the invalid-range markers
    lines.push(section("Error Subsystem Definitions"));
    lines.push(String::new());
    lines.push("enum".to_string());
    lines.push("{".to_string());
    lines.push("  ERR_SUBSYS_INVALID_LOW=-1,".to_string());
    for name in &tables.subsystem_names {
        lines.push(format!("  ERR_SUBSYS_{},", name));
    }
    lines.push("  ERR_SUBSYS_INVALID_HIGH".to_string());
    lines.push("};".to_string());
    lines.push(String::new());
    lines.push(String::new());

    lines.push(section("External Static Strings"));
    lines.push(String::new());
    for family in ["SHORT", "LONG", "NAME"] {
        lines.push(format!(
            "extern char **ERROR_{}_STRINGS[ERR_SUBSYS_INVALID_HIGH+1];",
            family
        ));
    }
    lines.push(String::new());
    lines.push(String::new());

    lines.push(section("Static Codes (subsys/code) for Switch/Case Statements"));
    lines.push(String::new());
    for constant in &tables.code_constants {
        lines.push(format!(
            "#define {} ((ERR_SUBSYS_{}<<32)|{})",
            constant.symbol,
            constant.subsystem,
            format_code(constant.code)
        ));
    }
    lines.push(String::new());
    lines.push(String::new());

    lines.push(section("Error Object Definitions (err_t)"));
    lines.push(String::new());
    lines.push("#define ERR_NEW_ERROR(is_error, flags, subsys, code)    \\".to_string());
    lines.push("    ((err_t){.fields={is_error, 0, flags, subsys, code}})".to_string());
    lines.push(String::new());
    for definition in &tables.definitions {
        lines.push(format!(
            "#define {} ERR_NEW_ERROR({}, {}, ERR_SUBSYS_{}, {})",
            definition.symbol,
            bool_token(definition.is_error),
            flags_token(definition.flags),
            definition.subsystem,
            format_code(definition.code)
        ));
    }
    lines.push(String::new());
    lines.push(String::new());
    lines.push("#endif".to_string());
    lines.push(String::new());

    lines.join("\n")
}

fn push_string_array(
    lines: &mut Vec<String>,
    family: &str,
    table: &StringTable,
    values: &std::collections::BTreeMap<u32, String>,
) {
    lines.push(format!(
        "static char *__ERROR_{}_STRINGS_{}[{}] =",
        family, table.subsystem, table.table_len
    ));
    lines.push("{".to_string());
    for (&code, value) in values {
        lines.push(format!("    [{}] = \"{}\",", format_code(code), value));
    }
    lines.push(format!("    [{}] = NULL", format_code(table.sentinel_index)));
    lines.push("};".to_string());
    lines.push(String::new());
}

fn push_registry(lines: &mut Vec<String>, family: &str, tables: &TableSet) {
    lines.push(format!(
        "char **ERROR_{}_STRINGS[ERR_SUBSYS_INVALID_HIGH+1] =",
        family
    ));
    lines.push("{".to_string());
    for table in &tables.string_tables {
        lines.push(format!(
            "    [ERR_SUBSYS_{}] = __ERROR_{}_STRINGS_{},",
            table.subsystem, family, table.subsystem
        ));
    }
    lines.push("    [ERR_SUBSYS_INVALID_HIGH] = NULL".to_string());
    lines.push("};".to_string());
    lines.push(String::new());
}

/// Render the data artifact (`error_codes.c`).
pub fn render_source(tables: &TableSet) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(GENERATED_BANNER.to_string());
    lines.push(String::new());
    lines.push("#include <stdlib.h>".to_string());
    lines.push("#include <errno.h>".to_string());
    lines.push("#include \"error_codes.h\"".to_string());
    lines.push(String::new());

    for family in ["SHORT", "LONG", "NAME"] {
        for table in &tables.string_tables {
            let values = match family {
                "SHORT" => &table.short,
                "LONG" => &table.long,
                _ => &table.names,
            };
            push_string_array(&mut lines, family, table, values);
        }
        push_registry(&mut lines, family, tables);
        lines.push(String::new());
    }

    lines.join("\n")
}
