//! File processor implementation with compile-time limits and global logging

use crate::config::constants::compile_time::inputs::MAX_INPUT_SIZE;
use crate::logging::codes;
use crate::{log_debug, log_error};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File processor specific errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum FileProcessorError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("File too large: {size} bytes (max: {max_size})")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("File is empty: {path}")]
    EmptyFile { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid UTF-8 encoding in file: {path}")]
    InvalidEncoding { path: String },

    #[error("I/O error reading {path}: {message}")]
    IoError { path: String, message: String },

    #[error("Failed to write artifact {path}: {message}")]
    WriteFailed { path: String, message: String },
}

impl FileProcessorError {
    /// Get the appropriate diagnostic code for this error type
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            FileProcessorError::FileNotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            FileProcessorError::FileTooLarge { .. } => codes::file_processing::FILE_TOO_LARGE,
            FileProcessorError::EmptyFile { .. } => codes::file_processing::EMPTY_FILE,
            FileProcessorError::PermissionDenied { .. } => {
                codes::file_processing::PERMISSION_DENIED
            }
            FileProcessorError::InvalidEncoding { .. } => codes::file_processing::INVALID_ENCODING,
            FileProcessorError::IoError { .. } => codes::file_processing::IO_ERROR,
            FileProcessorError::WriteFailed { .. } => codes::file_processing::WRITE_FAILED,
        }
    }
}

/// One fully-read input source.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub size: u64,
    pub contents: String,
}

/// Read and validate one input source: existence, size cap, UTF-8, non-empty.
pub fn read_source(path: &Path) -> Result<SourceFile, FileProcessorError> {
    let display = path.display().to_string();

    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FileProcessorError::FileNotFound {
            path: display.clone(),
        },
        ErrorKind::PermissionDenied => FileProcessorError::PermissionDenied {
            path: display.clone(),
        },
        _ => FileProcessorError::IoError {
            path: display.clone(),
            message: e.to_string(),
        },
    })?;

    if !metadata.is_file() {
        return Err(FileProcessorError::IoError {
            path: display,
            message: "not a regular file".to_string(),
        });
    }

    let size = metadata.len();
    if size > MAX_INPUT_SIZE {
        let error = FileProcessorError::FileTooLarge {
            size,
            max_size: MAX_INPUT_SIZE,
        };
        log_error!(error.error_code(), "Input exceeds size cap",
            "path" => display,
            "size" => size
        );
        return Err(error);
    }

    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FileProcessorError::FileNotFound {
            path: display.clone(),
        },
        ErrorKind::PermissionDenied => FileProcessorError::PermissionDenied {
            path: display.clone(),
        },
        _ => FileProcessorError::IoError {
            path: display.clone(),
            message: e.to_string(),
        },
    })?;

    let contents = String::from_utf8(bytes).map_err(|_| FileProcessorError::InvalidEncoding {
        path: display.clone(),
    })?;

    if contents.is_empty() {
        return Err(FileProcessorError::EmptyFile { path: display });
    }

    log_debug!("Read input source",
        "path" => path.display(),
        "bytes" => size
    );

    Ok(SourceFile {
        path: path.to_path_buf(),
        size,
        contents,
    })
}

/// Write one output artifact, fully overwriting any prior file at the path.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), FileProcessorError> {
    fs::write(path, contents).map_err(|e| {
        let error = FileProcessorError::WriteFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        };
        log_error!(error.error_code(), "Artifact write failed",
            "path" => path.display()
        );
        error
    })?;

    log_debug!("Wrote artifact",
        "path" => path.display(),
        "bytes" => contents.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;

    #[test]
    fn test_read_source_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("errno.h");
        fs::write(&path, "#define EPERM 1\n").unwrap();

        let source = read_source(&path).unwrap();
        assert_eq!(source.contents, "#define EPERM 1\n");
        assert_eq!(source.size, 16);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_source(&dir.path().join("nope.h"));
        assert_matches!(result, Err(FileProcessorError::FileNotFound { .. }));
    }

    #[test]
    fn test_read_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert_matches!(
            read_source(dir.path()),
            Err(FileProcessorError::IoError { .. })
        );
    }

    #[test]
    fn test_read_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.dat");
        fs::write(&path, "").unwrap();
        assert_matches!(
            read_source(&path),
            Err(FileProcessorError::EmptyFile { .. })
        );
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.dat");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert_matches!(
            read_source(&path),
            Err(FileProcessorError::InvalidEncoding { .. })
        );
    }

    #[test]
    fn test_write_artifact_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("error_codes.h");
        write_artifact(&path, "first").unwrap();
        write_artifact(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_error_codes_mapped() {
        let err = FileProcessorError::EmptyFile {
            path: "x".to_string(),
        };
        assert_eq!(err.error_code().as_str(), "E007");
    }
}
