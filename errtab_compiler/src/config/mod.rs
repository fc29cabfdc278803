//! Configuration module for the errtab compiler
//!
//! All generation-run configuration is compiled in: input layout, output
//! artifact names, and the subsystem emission order live in
//! [`constants::compile_time`]. The only runtime state is the pair of
//! directories a particular invocation points at.

pub mod constants;

use constants::compile_time::{inputs, outputs};
use std::path::{Path, PathBuf};

/// Resolved filesystem layout for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory containing the `error_decls/` input tree.
    pub decls_root: PathBuf,
    /// Directory the two artifacts are written into.
    pub output_dir: PathBuf,
}

impl GeneratorConfig {
    /// Build a config rooted at `decls_root`, writing artifacts alongside it.
    pub fn new(decls_root: impl Into<PathBuf>) -> Self {
        let decls_root = decls_root.into();
        let output_dir = decls_root.clone();
        Self {
            decls_root,
            output_dir,
        }
    }

    /// Override the artifact output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    fn decls_dir(&self) -> PathBuf {
        self.decls_root.join(inputs::DECLS_DIR)
    }

    /// Path of the base system header input.
    pub fn errno_base_header(&self) -> PathBuf {
        self.decls_dir().join(inputs::ERRNO_BASE_HEADER)
    }

    /// Path of the extended system header input.
    pub fn errno_header(&self) -> PathBuf {
        self.decls_dir().join(inputs::ERRNO_HEADER)
    }

    /// Path of the documentation blob input.
    pub fn errno_doc(&self) -> PathBuf {
        self.decls_dir().join(inputs::ERRNO_DOC)
    }

    /// Path of the definitions artifact.
    pub fn header_artifact(&self) -> PathBuf {
        self.output_dir.join(outputs::HEADER_ARTIFACT)
    }

    /// Path of the data artifact.
    pub fn source_artifact(&self) -> PathBuf {
        self.output_dir.join(outputs::SOURCE_ARTIFACT)
    }

    /// All input paths, in read order. Every one is read before any
    /// computation begins.
    pub fn input_paths(&self) -> Vec<PathBuf> {
        vec![
            self.errno_base_header(),
            self.errno_header(),
            self.errno_doc(),
        ]
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(Path::new("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = GeneratorConfig::new("/tmp/project");
        assert_eq!(
            config.errno_base_header(),
            PathBuf::from("/tmp/project/error_decls/errno-base.h")
        );
        assert_eq!(
            config.errno_doc(),
            PathBuf::from("/tmp/project/error_decls/errno.dat")
        );
        assert_eq!(
            config.header_artifact(),
            PathBuf::from("/tmp/project/error_codes.h")
        );
    }

    #[test]
    fn test_output_override() {
        let config = GeneratorConfig::new("/in").with_output_dir("/out");
        assert_eq!(
            config.source_artifact(),
            PathBuf::from("/out/error_codes.c")
        );
        // Inputs stay rooted at the declarations root
        assert_eq!(
            config.errno_header(),
            PathBuf::from("/in/error_decls/errno.h")
        );
    }

    #[test]
    fn test_input_paths_read_order() {
        let config = GeneratorConfig::new("/in");
        let paths = config.input_paths();
        assert_eq!(paths.len(), 3);
        assert!(paths[0].ends_with("errno-base.h"));
        assert!(paths[2].ends_with("errno.dat"));
    }
}
