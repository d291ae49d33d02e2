//! Application layer for testgen.
//!
//! - **Services**: detection pipelines and config resolution
//! - **Ports**: traits for the file tree, config codec and prompt catalog
//! - **Errors**: port and orchestration failures
//!
//! Services gather evidence through ports and hand it to the pure
//! classifiers in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ConfigResolver, DirectoryResolver, EcosystemProber, FrameworkDetector, IdeDetector,
    ManifestReader, ProjectDetector, PromptService, RenderedPrompt, TestScript, TestScriptLocator,
};

pub use ports::{ConfigCodec, ProjectFilesystem, PromptCatalog};

pub use error::ApplicationError;
