//! PDF compression using an external Ghostscript binary

use async_trait::async_trait;
use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::errors::{ProcessError, ProcessResult};
use super::ProcessStrategy;

/// Fixed Ghostscript options for the "ebook" output profile
pub const GHOSTSCRIPT_OPTIONS: [&str; 6] = [
    "-sDEVICE=pdfwrite",
    "-dCompatibilityLevel=1.4",
    "-dPDFSETTINGS=/ebook",
    "-dNOPAUSE",
    "-dQUIET",
    "-dBATCH",
];

/// Compressor that shells out to Ghostscript (`gs` by default)
#[derive(Debug, Clone)]
pub struct CompressStrategy {
    ghostscript_binary: String,
}

impl CompressStrategy {
    pub fn new(ghostscript_binary: impl Into<String>) -> Self {
        Self {
            ghostscript_binary: ghostscript_binary.into(),
        }
    }

    /// Full argument list passed to the binary
    pub fn arguments(input: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = GHOSTSCRIPT_OPTIONS.iter().map(OsString::from).collect();
        let mut output_flag = OsString::from("-sOutputFile=");
        output_flag.push(output.as_os_str());
        args.push(output_flag);
        args.push(input.as_os_str().to_os_string());
        args
    }
}

#[async_trait]
impl ProcessStrategy for CompressStrategy {
    async fn execute(&self, input: &Path, output: &Path) -> ProcessResult<()> {
        log::debug!(
            "Running {} on {} -> {}",
            self.ghostscript_binary,
            input.display(),
            output.display()
        );

        let result = Command::new(&self.ghostscript_binary)
            .args(Self::arguments(input, output))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await;

        let result = match result {
            Ok(result) => result,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ProcessError::ToolNotFound {
                    binary: self.ghostscript_binary.clone(),
                });
            }
            Err(e) => return Err(ProcessError::Io(e)),
        };

        for line in String::from_utf8_lossy(&result.stderr).lines() {
            log::debug!("[{}] {}", self.ghostscript_binary, line);
        }

        if !result.status.success() {
            log::warn!(
                "{} exited with {} while processing {}",
                self.ghostscript_binary,
                result.status,
                input.display()
            );
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "ghostscript"
    }
}
