// Declare submodules for the compression domain
pub mod executor;
pub mod locator;
pub mod policy;
pub mod reporter;
pub mod service;
pub mod strategies;
pub mod types;

pub use types::{CompressionConfig, PolicyDecision};
pub use executor::CompressionExecutor;
pub use locator::FileLocator;
pub use policy::{classify, CompressionPolicy};
pub use reporter::{ConsoleReporter, NoopReporter, StatusReporter};
pub use service::BatchCompressor;
pub use strategies::{CompressStrategy, CopyStrategy, ProcessStrategy};
