use std::path::PathBuf;
use thiserror::Error;

/// Failure of one copy or compress strategy
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Binary not found: {binary}")]
    ToolNotFound { binary: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Compression pipeline errors
#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("{} is not a directory!", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Ghostscript not installed or not aliased to {binary}")]
    ToolNotFound { binary: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompressionError {
    /// Whether this error must terminate the whole run
    pub fn is_fatal(&self) -> bool {
        matches!(self, CompressionError::ToolNotFound { .. })
    }
}

impl From<ProcessError> for CompressionError {
    fn from(error: ProcessError) -> Self {
        match error {
            ProcessError::ToolNotFound { binary } => CompressionError::ToolNotFound { binary },
            ProcessError::Io(e) => CompressionError::Io(e),
        }
    }
}

/// Email configuration and delivery errors
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Config file badly formed! {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build email: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("Failed to read input: {0}")]
    Prompt(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl EmailError {
    pub fn missing_attribute(section: &str, attribute: &str) -> Self {
        Self::Config(format!(
            "Failed to get attribute '{}' from section '{}'!",
            attribute, section
        ))
    }
}

impl From<lettre::error::Error> for EmailError {
    fn from(error: lettre::error::Error) -> Self {
        EmailError::Build(error.to_string())
    }
}

/// Top-level errors of the command line application
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Compression(#[from] CompressionError),

    #[error("{0}")]
    Email(#[from] EmailError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Process exit code used for every failed run
pub const FAILURE_EXIT_CODE: i32 = 1;
