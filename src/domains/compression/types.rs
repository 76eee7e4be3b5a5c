//! Type definitions for the compression domain.

use std::path::{Path, PathBuf};

/// Extension of the documents picked up by a batch
pub const PDF_EXTENSION: &str = ".pdf";

pub const BYTES_PER_MEGABYTE: u64 = 1024 * 1024;

/// Files smaller than this are copied instead of compressed
pub const DEFAULT_SIZE_THRESHOLD: u64 = BYTES_PER_MEGABYTE;

pub const DEFAULT_GHOSTSCRIPT_BINARY: &str = "gs";

/// What to do with a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyDecision {
    /// Copy the file unchanged
    PassThrough,

    /// Run the file through the external compressor
    Compress,
}

impl PolicyDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyDecision::PassThrough => "pass_through",
            PolicyDecision::Compress => "compress",
        }
    }
}

/// Configuration for one batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionConfig {
    pub extension: String,
    pub size_threshold: u64, // bytes
    pub ghostscript_binary: String,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            extension: PDF_EXTENSION.to_string(),
            size_threshold: DEFAULT_SIZE_THRESHOLD,
            ghostscript_binary: DEFAULT_GHOSTSCRIPT_BINARY.to_string(),
        }
    }
}

impl CompressionConfig {
    pub fn with_ghostscript_binary(mut self, binary: impl Into<String>) -> Self {
        self.ghostscript_binary = binary.into();
        self
    }

    pub fn with_size_threshold(mut self, threshold: u64) -> Self {
        self.size_threshold = threshold;
        self
    }
}

/// Output location of `input_path` inside `output_directory`.
///
/// Paths without a file name component map onto the directory itself.
pub fn output_path_for(output_directory: &Path, input_path: &Path) -> PathBuf {
    match input_path.file_name() {
        Some(base) => output_directory.join(base),
        None => output_directory.to_path_buf(),
    }
}

/// Literal, case-sensitive suffix match on the raw bytes of the file name.
/// Names that are not valid UTF-8 still match.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| name.as_encoded_bytes().ends_with(extension.as_bytes()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CompressionConfig::default();
        assert_eq!(config.size_threshold, 1_048_576);
        assert_eq!(config.extension, ".pdf");
        assert_eq!(config.ghostscript_binary, "gs");
    }

    #[test]
    fn test_output_path_uses_basename() {
        let out = output_path_for(Path::new("/tmp/out"), Path::new("/a/b/superpdf.pdf"));
        assert_eq!(out, PathBuf::from("/tmp/out/superpdf.pdf"));
    }

    #[test]
    fn test_extension_match_is_literal() {
        assert!(has_extension(Path::new("/a/report.pdf"), ".pdf"));
        assert!(!has_extension(Path::new("/a/report.PDF"), ".pdf"));
        assert!(!has_extension(Path::new("/a/report.pdf.txt"), ".pdf"));
        assert!(!has_extension(Path::new("/a/pdf"), ".pdf"));
    }

    #[cfg(unix)]
    #[test]
    fn test_extension_match_on_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"caf\xe9.pdf");
        assert!(has_extension(&Path::new("/a").join(name), ".pdf"));
        assert!(!has_extension(&Path::new("/a").join(OsStr::from_bytes(b"caf\xe9.txt")), ".pdf"));
    }
}
