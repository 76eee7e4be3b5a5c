//! Batch PDF compression with Ghostscript, with optional delivery of the results by email.

pub mod cli;
pub mod domains;
pub mod errors;
