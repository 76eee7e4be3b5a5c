use std::path::{Path, PathBuf};
use tokio::fs;

use crate::errors::{CompressionError, CompressionResult};
use super::executor::CompressionExecutor;
use super::locator::FileLocator;
use super::policy::CompressionPolicy;
use super::reporter::{self, StatusReporter};
use super::types::{output_path_for, CompressionConfig};

/// Compresses every matching document of a source directory into an output directory.
///
/// Files are processed one at a time, in discovery order. The first fatal
/// error stops the batch; outputs written before it stay on disk.
pub struct BatchCompressor {
    locator: FileLocator,
    policy: CompressionPolicy,
    executor: CompressionExecutor,
}

impl BatchCompressor {
    pub fn new(config: &CompressionConfig) -> Self {
        Self::with_executor(config, CompressionExecutor::new(config))
    }

    pub fn with_executor(config: &CompressionConfig, executor: CompressionExecutor) -> Self {
        Self {
            locator: FileLocator::new(config.extension.clone()),
            policy: CompressionPolicy::new(config.size_threshold),
            executor,
        }
    }

    /// Run the batch and return one output path per discovered file.
    pub async fn run(
        &self,
        source_directory: &Path,
        output_directory: &Path,
        reporter: &dyn StatusReporter,
    ) -> CompressionResult<Vec<PathBuf>> {
        let source_paths = self.locator.locate(source_directory).await?;
        ensure_distinct_directories(source_directory, output_directory).await?;

        log::info!(
            "Starting batch of {} files from {} into {}",
            source_paths.len(),
            source_directory.display(),
            output_directory.display()
        );
        reporter.report(&reporter::batch_started(
            source_paths.len(),
            source_directory,
            output_directory,
        ));

        let mut output_paths = Vec::with_capacity(source_paths.len());
        for source_path in source_paths {
            let output_path = output_path_for(output_directory, &source_path);
            let file_size = fs::metadata(&source_path).await?.len();
            let decision = self.policy.decide(file_size);
            log::debug!(
                "{}: {} bytes -> {}",
                source_path.display(),
                file_size,
                decision.as_str()
            );

            self.executor
                .process(&source_path, &output_path, file_size, decision, reporter)
                .await?;
            output_paths.push(output_path);
        }

        log::info!("Batch finished, {} files written", output_paths.len());
        reporter.report(reporter::ALL_FILES_PROCESSED);
        Ok(output_paths)
    }
}

/// Outputs share basenames with their inputs, so writing into the source
/// directory would overwrite every input with itself.
async fn ensure_distinct_directories(source_directory: &Path, output_directory: &Path) -> CompressionResult<()> {
    let source = fs::canonicalize(source_directory).await?;
    // An output directory that does not exist yet cannot be the source
    let output = match fs::canonicalize(output_directory).await {
        Ok(path) => path,
        Err(_) => return Ok(()),
    };
    if source == output {
        return Err(CompressionError::InvalidArgument(format!(
            "Output directory '{}' is the source directory '{}'",
            output_directory.display(),
            source_directory.display()
        )));
    }
    Ok(())
}
