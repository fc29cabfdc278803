//! Generation pipeline orchestration
//!
//! One run moves through fixed stages: read every input source, resolve
//! symbol values, parse the documentation, merge both subsystems, bind the
//! registry, emit the table views, render the two C artifacts, and only then
//! write them. All reads complete before any computation and all writes
//! start after the full model is built, so a failing run leaves the output
//! directory untouched.

mod error;
mod output;
mod result;
mod validation;

pub use error::PipelineError;
pub use output::GeneratedArtifacts;
pub use result::GenerationResult;
pub use validation::validate_pipeline;

use crate::catalog::GENERIC_CODES;
use crate::config::constants::compile_time::taxonomy::{
    SUBSYSTEM_ORDER, SYSTEM_SUBSYSTEM, UTILITY_SUBSYSTEM,
};
use crate::config::GeneratorConfig;
use crate::emission::{emit_tables, render_header, render_source, TableSet};
use crate::file_processor::{read_source, write_artifact};
use crate::logging::codes;
use crate::model::ErrorEntry;
use std::collections::HashMap;
use std::time::Instant;

/// Run every computation stage and produce the emission views.
fn build_tables(config: &GeneratorConfig) -> Result<TableSet, PipelineError> {
    crate::log_info!("Starting error taxonomy generation",
        "decls_root" => config.decls_root.display()
    );

    // Stage 1: read every input before any computation
    let errno_base = read_source(&config.errno_base_header())?;
    let errno = read_source(&config.errno_header())?;
    let errno_doc = read_source(&config.errno_doc())?;

    // Stage 2: symbol values from both header sources
    let values =
        crate::value_resolution::resolve_values(&[&errno_base.contents, &errno.contents])?;

    // Stage 3: documentation triples
    let triples = crate::definition_parsing::parse_definitions(&errno_doc.contents);

    // Stage 4: canonical entries for both subsystems
    let generic_entries = crate::merge::merge_generic(GENERIC_CODES);
    let system_entries = crate::merge::merge_system(&triples, &values)?;

    // Stage 5: ordered registry
    let groups: HashMap<String, Vec<ErrorEntry>> = HashMap::from([
        (UTILITY_SUBSYSTEM.to_string(), generic_entries),
        (SYSTEM_SUBSYSTEM.to_string(), system_entries),
    ]);
    let registry = crate::registry::build_registry(SUBSYSTEM_ORDER, groups)?;

    // Stage 6: emit both views
    Ok(emit_tables(&registry))
}

/// Compute both artifacts without touching the output directory.
pub fn build_artifacts(config: &GeneratorConfig) -> Result<GeneratedArtifacts, PipelineError> {
    let tables = build_tables(config)?;
    Ok(GeneratedArtifacts::new(
        render_header(&tables),
        render_source(&tables),
    ))
}

/// Run one full generation and commit both artifacts.
pub fn run_generation(config: &GeneratorConfig) -> Result<GenerationResult, PipelineError> {
    let start_time = Instant::now();

    let tables = build_tables(config)?;
    let artifacts = GeneratedArtifacts::new(render_header(&tables), render_source(&tables));

    // Commit phase: the model is complete, nothing below can invalidate it
    let header_path = config.header_artifact();
    let source_path = config.source_artifact();
    write_artifact(&header_path, &artifacts.header)?;
    write_artifact(&source_path, &artifacts.source)?;

    crate::log_success!(codes::success::ARTIFACTS_WRITTEN, "Artifacts committed",
        "header" => header_path.display(),
        "source" => source_path.display()
    );

    let result = GenerationResult::new(
        header_path,
        source_path,
        tables.subsystem_names.len(),
        tables.definitions.len(),
        start_time.elapsed(),
    );
    result.log_success();
    Ok(result)
}

/// Check mode: compute both artifacts and report whether the on-disk copies
/// already match, byte for byte. Never writes.
pub fn check_artifacts(config: &GeneratorConfig) -> Result<bool, PipelineError> {
    let artifacts = build_artifacts(config)?;

    let on_disk = |path: &std::path::Path| std::fs::read_to_string(path).ok();
    let header_current = on_disk(&config.header_artifact()) == Some(artifacts.header);
    let source_current = on_disk(&config.source_artifact()) == Some(artifacts.source);

    Ok(header_current && source_current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use std::path::Path;

    const ERRNO_BASE: &str = "#define EPERM 1\n#define ENOENT 2\n#define EAGAIN 11\n";
    const ERRNO_EXT: &str = "#define EWOULDBLOCK EAGAIN\n#define EDEADLK 35\n";
    const ERRNO_DOC: &str = concat!(
        "       EPERM Operation not permitted\n",
        "\n",
        "Not super-user.\n",
        "\n",
        "       EAGAIN Try again\n",
        "\n",
        "       EWOULDBLOCK Synonym for EAGAIN\n",
    );

    fn write_inputs(root: &Path) {
        let decls = root.join("error_decls");
        fs::create_dir_all(&decls).unwrap();
        fs::write(decls.join("errno-base.h"), ERRNO_BASE).unwrap();
        fs::write(decls.join("errno.h"), ERRNO_EXT).unwrap();
        fs::write(decls.join("errno.dat"), ERRNO_DOC).unwrap();
    }

    #[test]
    fn test_end_to_end_generation() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path());
        let config = GeneratorConfig::new(dir.path());

        let result = run_generation(&config).unwrap();
        assert_eq!(result.subsystem_count, 2);

        let header = fs::read_to_string(config.header_artifact()).unwrap();
        assert!(header.contains("#define ERR_OK ERR_NEW_ERROR(FALSE, 0, ERR_SUBSYS_UTIL, 0x00000000)"));
        assert!(header.contains("#define ERR_CODE_ERRNO_EPERM ((ERR_SUBSYS_ERRNO<<32)|0x00000000)"));
        // Positional, never the OS value
        assert!(header.contains("#define ERR_CODE_ERRNO_EAGAIN ((ERR_SUBSYS_ERRNO<<32)|0x00000001)"));

        let source = fs::read_to_string(config.source_artifact()).unwrap();
        assert!(source.contains("[0x00000000] = \"Operation not permitted\","));
        // The synonym keeps its code but no string slots
        assert!(header.contains("ERR_CODE_ERRNO_EWOULDBLOCK"));
        assert!(!source.contains("Synonym for EAGAIN"));
    }

    #[test]
    fn test_regeneration_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path());
        let config = GeneratorConfig::new(dir.path());

        run_generation(&config).unwrap();
        let first_header = fs::read_to_string(config.header_artifact()).unwrap();
        let first_source = fs::read_to_string(config.source_artifact()).unwrap();

        run_generation(&config).unwrap();
        assert_eq!(fs::read_to_string(config.header_artifact()).unwrap(), first_header);
        assert_eq!(fs::read_to_string(config.source_artifact()).unwrap(), first_source);
    }

    #[test]
    fn test_failed_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path());
        // An undocumented symbol in the doc blob makes the merge fatal
        let doc_path = dir.path().join("error_decls/errno.dat");
        fs::write(&doc_path, "       EFAKE No such error\n").unwrap();

        let config = GeneratorConfig::new(dir.path());
        let result = run_generation(&config);
        assert_matches!(result, Err(PipelineError::Merge(_)));
        assert!(!config.header_artifact().exists());
        assert!(!config.source_artifact().exists());
    }

    #[test]
    fn test_missing_input_fails_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::new(dir.path());
        let result = run_generation(&config);
        assert_matches!(result, Err(PipelineError::FileProcessing(_)));
        assert!(!config.header_artifact().exists());
    }

    #[test]
    fn test_check_mode_reports_staleness() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path());
        let config = GeneratorConfig::new(dir.path());

        assert!(!check_artifacts(&config).unwrap());
        run_generation(&config).unwrap();
        assert!(check_artifacts(&config).unwrap());

        // Touching an input's content invalidates the artifacts
        let doc_path = dir.path().join("error_decls/errno.dat");
        fs::write(&doc_path, "       EPERM Operation not permitted\n").unwrap();
        assert!(!check_artifacts(&config).unwrap());
    }

    #[test]
    fn test_separate_output_directory() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_inputs(input.path());
        let config = GeneratorConfig::new(input.path()).with_output_dir(output.path());

        run_generation(&config).unwrap();
        assert!(output.path().join("error_codes.h").exists());
        assert!(output.path().join("error_codes.c").exists());
        assert!(!input.path().join("error_codes.h").exists());
    }
}
