mod error;

pub use error::{AppError, CompressionError, EmailError, ProcessError, FAILURE_EXIT_CODE};

/// Result type for a single external process invocation
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Result type for compression operations
pub type CompressionResult<T> = Result<T, CompressionError>;

/// Result type for email operations
pub type EmailResult<T> = Result<T, EmailError>;

/// Result type for the command line application
pub type AppResult<T> = Result<T, AppError>;
