use std::path::Path;
use std::sync::Arc;

use crate::errors::{CompressionError, CompressionResult};
use super::reporter::{self, StatusReporter};
use super::strategies::{CompressStrategy, CopyStrategy, ProcessStrategy};
use super::types::{has_extension, CompressionConfig, PolicyDecision};

/// Runs the copy or compress branch for one file and waits for it to finish
pub struct CompressionExecutor {
    extension: String,
    size_threshold: u64,
    copy_strategy: Arc<dyn ProcessStrategy>,
    compress_strategy: Arc<dyn ProcessStrategy>,
}

impl CompressionExecutor {
    /// Executor backed by a native file copy and the configured Ghostscript binary
    pub fn new(config: &CompressionConfig) -> Self {
        Self::with_strategies(
            config,
            Arc::new(CopyStrategy),
            Arc::new(CompressStrategy::new(config.ghostscript_binary.clone())),
        )
    }

    pub fn with_strategies(
        config: &CompressionConfig,
        copy_strategy: Arc<dyn ProcessStrategy>,
        compress_strategy: Arc<dyn ProcessStrategy>,
    ) -> Self {
        Self {
            extension: config.extension.clone(),
            size_threshold: config.size_threshold,
            copy_strategy,
            compress_strategy,
        }
    }

    /// Produce `output_path` from `input_path` according to `decision`.
    /// `file_size` is the size the decision was made on and is the one reported.
    ///
    /// A missing compression tool is reported through `reporter` and returned
    /// as [`CompressionError::ToolNotFound`]; callers must stop the batch.
    pub async fn process(
        &self,
        input_path: &Path,
        output_path: &Path,
        file_size: u64,
        decision: PolicyDecision,
        reporter: &dyn StatusReporter,
    ) -> CompressionResult<()> {
        if !has_extension(input_path, &self.extension) {
            return Err(CompressionError::InvalidArgument(format!(
                "Filename must end with {}! {} does not.",
                self.extension,
                input_path.display()
            )));
        }

        let strategy = match decision {
            PolicyDecision::PassThrough => {
                reporter.report(&reporter::not_compressing(input_path, file_size, self.size_threshold));
                &self.copy_strategy
            }
            PolicyDecision::Compress => {
                reporter.report(&reporter::compressing(input_path));
                &self.compress_strategy
            }
        };

        log::debug!(
            "Processing {} ({} bytes) with {} strategy",
            input_path.display(),
            file_size,
            strategy.name()
        );

        if let Err(e) = strategy.execute(input_path, output_path).await {
            let err = CompressionError::from(e);
            if let CompressionError::ToolNotFound { binary } = &err {
                log::error!("Compression tool '{}' could not be launched", binary);
                reporter.report(&reporter::tool_not_found(binary));
            }
            return Err(err);
        }

        reporter.report(&reporter::file_done(output_path));
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::SpyStrategy;
    use super::*;
    use crate::domains::compression::reporter::testing::RecordingReporter;
    use tempfile::TempDir;

    fn executor_with(copy: Arc<SpyStrategy>, compress: Arc<SpyStrategy>) -> CompressionExecutor {
        CompressionExecutor::with_strategies(&CompressionConfig::default(), copy, compress)
    }

    #[tokio::test]
    async fn test_wrong_extension_is_rejected_without_writes() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("notes.txt");
        std::fs::write(&input, b"hello").unwrap();
        let output = dir.path().join("out.txt");

        let copy = Arc::new(SpyStrategy::default());
        let compress = Arc::new(SpyStrategy::default());
        let reporter = RecordingReporter::default();
        let err = executor_with(copy.clone(), compress.clone())
            .process(&input, &output, 5, PolicyDecision::PassThrough, &reporter)
            .await
            .unwrap_err();

        assert!(matches!(err, CompressionError::InvalidArgument(_)));
        assert!(!output.exists());
        assert!(copy.calls().is_empty());
        assert!(compress.calls().is_empty());
        assert!(reporter.events().is_empty());
    }

    #[tokio::test]
    async fn test_pass_through_copies_and_reports_twice() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("superpdf.pdf");
        let data = vec![7u8; 500];
        std::fs::write(&input, &data).unwrap();
        let output = dir.path().join("copy.pdf");

        let reporter = RecordingReporter::default();
        CompressionExecutor::new(&CompressionConfig::default())
            .process(&input, &output, 500, PolicyDecision::PassThrough, &reporter)
            .await
            .unwrap();

        assert_eq!(std::fs::read(&output).unwrap(), data);
        let expected_skip = format!(
            "Not compressing '{}'\nReason: Actual file size is 500 bytes,\nlower limit for compression is 1048576 bytes",
            input.display()
        );
        assert_eq!(
            reporter.events(),
            vec![expected_skip, reporter::file_done(&output)]
        );
    }

    #[tokio::test]
    async fn test_compress_invokes_compress_strategy_once() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("big.pdf");
        std::fs::write(&input, b"%PDF-1.4 large").unwrap();
        let output = dir.path().join("big_out.pdf");

        let copy = Arc::new(SpyStrategy::default());
        let compress = Arc::new(SpyStrategy::default());
        let reporter = RecordingReporter::default();
        executor_with(copy.clone(), compress.clone())
            .process(&input, &output, 14, PolicyDecision::Compress, &reporter)
            .await
            .unwrap();

        assert!(copy.calls().is_empty());
        assert_eq!(compress.calls(), vec![(input.clone(), output.clone())]);
        assert_eq!(
            reporter.events(),
            vec![reporter::compressing(&input), reporter::file_done(&output)]
        );
    }

    #[tokio::test]
    async fn test_missing_tool_reports_and_fails() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("big.pdf");
        std::fs::write(&input, b"%PDF-1.4").unwrap();
        let output = dir.path().join("out.pdf");

        let config = CompressionConfig::default().with_ghostscript_binary("pdfebc-test-no-such-gs");
        let reporter = RecordingReporter::default();
        let err = CompressionExecutor::new(&config)
            .process(&input, &output, 14, PolicyDecision::Compress, &reporter)
            .await
            .unwrap_err();

        assert!(err.is_fatal());
        assert_eq!(
            reporter.events(),
            vec![
                reporter::compressing(&input),
                "Ghostscript not installed or not aliased to pdfebc-test-no-such-gs".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_input_is_io_error() {
        let dir = TempDir::new().unwrap();
        let reporter = RecordingReporter::default();
        let err = CompressionExecutor::new(&CompressionConfig::default())
            .process(
                &dir.path().join("ghost.pdf"),
                &dir.path().join("out.pdf"),
                0,
                PolicyDecision::PassThrough,
                &reporter,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CompressionError::Io(_)));
        assert_eq!(reporter.events().len(), 1);
        assert!(reporter.events()[0].starts_with("Not compressing"));
    }

    #[tokio::test]
    async fn test_skip_event_reports_given_size() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("grown.pdf");
        std::fs::write(&input, vec![0u8; 10]).unwrap();
        let output = dir.path().join("out.pdf");

        let reporter = RecordingReporter::default();
        CompressionExecutor::new(&CompressionConfig::default())
            .process(&input, &output, 42, PolicyDecision::PassThrough, &reporter)
            .await
            .unwrap();

        assert_eq!(
            reporter.events()[0],
            reporter::not_compressing(&input, 42, CompressionConfig::default().size_threshold)
        );
    }
}
