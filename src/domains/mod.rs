pub mod compression;
pub mod core;
pub mod email;
