use serde::{Deserialize, Serialize};

/// The two rendered C artifacts of one generation run, held in memory until
/// the pipeline commits them. Nothing reaches the filesystem while these are
/// the only copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedArtifacts {
    pub header: String,
    pub source: String,
}

impl GeneratedArtifacts {
    pub fn new(header: String, source: String) -> Self {
        Self { header, source }
    }
}
