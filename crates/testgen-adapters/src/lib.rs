//! Infrastructure adapters for testgen.
//!
//! This crate implements the ports defined in `testgen_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod config_loader;
pub mod filesystem;
pub mod prompts;

// Re-export commonly used adapters
pub use config_loader::TomlConfigCodec;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompts::BuiltinPromptCatalog;
