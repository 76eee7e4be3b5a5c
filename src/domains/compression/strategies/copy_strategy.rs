//! Byte-exact copy for files that are already small enough

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use crate::errors::ProcessResult;
use super::ProcessStrategy;

#[derive(Debug, Default, Clone, Copy)]
pub struct CopyStrategy;

#[async_trait]
impl ProcessStrategy for CopyStrategy {
    async fn execute(&self, input: &Path, output: &Path) -> ProcessResult<()> {
        let copied = fs::copy(input, output).await?;
        log::debug!("Copied {} bytes from {} to {}", copied, input.display(), output.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "copy"
    }
}
