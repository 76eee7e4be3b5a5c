//! Status event sinks for the compression pipeline

use std::path::Path;

/// Receives human-readable progress messages from a batch run.
///
/// Called synchronously from the pipeline, so implementations must not block
/// for long.
pub trait StatusReporter: Send + Sync {
    fn report(&self, message: &str);
}

/// Drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl StatusReporter for NoopReporter {
    fn report(&self, _message: &str) {}
}

/// Prints events to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl StatusReporter for ConsoleReporter {
    fn report(&self, message: &str) {
        println!("{}", message);
    }
}

impl<F> StatusReporter for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, message: &str) {
        self(message)
    }
}

// Message templates

pub fn batch_started(file_count: usize, source: &Path, output: &Path) -> String {
    format!(
        "Compressing {} PDF files from '{}' into '{}'",
        file_count,
        source.display(),
        output.display()
    )
}

pub fn compressing(input: &Path) -> String {
    format!("Compressing '{}' ...", input.display())
}

pub fn not_compressing(input: &Path, file_size: u64, threshold: u64) -> String {
    format!(
        "Not compressing '{}'\nReason: Actual file size is {} bytes,\nlower limit for compression is {} bytes",
        input.display(),
        file_size,
        threshold
    )
}

pub fn file_done(output: &Path) -> String {
    format!("File done! Result saved to '{}'", output.display())
}

pub fn tool_not_found(binary: &str) -> String {
    format!("Ghostscript not installed or not aliased to {}", binary)
}

pub const ALL_FILES_PROCESSED: &str = "All files processed!";
