pub mod file_storage_service;

pub use file_storage_service::{make_output_directory, remove_directory};
