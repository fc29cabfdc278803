use crate::logging::codes;

/// Validate that the pipeline is properly configured
pub fn validate_pipeline() -> Result<(), String> {
    crate::log_debug!("Validating generation pipeline configuration");

    // Every stage's fatal diagnostic must carry registered metadata
    let required = [
        codes::file_processing::FILE_NOT_FOUND,
        codes::file_processing::WRITE_FAILED,
        codes::value_resolution::UNRESOLVED_ALIAS,
        codes::merge::UNRESOLVED_SYSTEM_ERROR,
        codes::registry::DUPLICATE_SUBSYSTEM,
        codes::registry::UNASSIGNED_GROUP,
        codes::pipeline::PIPELINE_ERROR,
    ];
    for code in required {
        if codes::get_metadata(code.as_str()).is_none() {
            return Err(format!("Missing metadata for diagnostic code {}", code));
        }
        if !codes::requires_halt(code.as_str()) {
            return Err(format!("Fatal diagnostic code {} must require halt", code));
        }
    }

    if crate::catalog::GENERIC_CODES.is_empty() {
        return Err("Generic code catalog is empty".to_string());
    }

    crate::log_success!(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Pipeline validation succeeded",
        "stages_validated" => 5,
        "file_processing" => true,
        "value_resolution" => true,
        "merge" => true,
        "registry" => true,
        "emission" => true
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_pipeline() {
        assert!(validate_pipeline().is_ok());
    }
}
