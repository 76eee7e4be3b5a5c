//! Ways of producing an output file from an input document

pub mod compress_strategy;
pub mod copy_strategy;

use async_trait::async_trait;
use std::path::Path;

use crate::errors::ProcessResult;

pub use compress_strategy::CompressStrategy;
pub use copy_strategy::CopyStrategy;

/// Common trait for the copy and compress branches
#[async_trait]
pub trait ProcessStrategy: Send + Sync {
    /// Produce `output` from `input`, returning once the file is complete
    async fn execute(&self, input: &Path, output: &Path) -> ProcessResult<()>;

    /// Short name used in log output
    fn name(&self) -> &'static str;
}
