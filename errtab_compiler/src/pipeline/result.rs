use std::path::PathBuf;
use std::time::Duration;

/// Summary of one committed generation run
#[derive(Debug)]
pub struct GenerationResult {
    pub header_path: PathBuf,
    pub source_path: PathBuf,
    pub subsystem_count: usize,
    pub entry_count: usize,
    pub processing_duration: Duration,
}

impl GenerationResult {
    pub fn new(
        header_path: PathBuf,
        source_path: PathBuf,
        subsystem_count: usize,
        entry_count: usize,
        processing_duration: Duration,
    ) -> Self {
        Self {
            header_path,
            source_path,
            subsystem_count,
            entry_count,
            processing_duration,
        }
    }

    pub fn log_success(&self) {
        crate::log_success!(
            crate::logging::codes::success::GENERATION_COMPLETED,
            "Error taxonomy generation succeeded",
            "header" => self.header_path.display(),
            "source" => self.source_path.display(),
            "subsystems" => self.subsystem_count,
            "entries" => self.entry_count,
            "duration_ms" => format!("{:.2}", self.processing_duration.as_secs_f64() * 1000.0)
        );
    }
}
