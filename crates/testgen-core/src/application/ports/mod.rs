//! Application ports (traits) for external dependencies.
//!
//! Adapters in `testgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by services, implemented by infrastructure
//!   - `ProjectFilesystem`: read-mostly access to the project tree
//!   - `ConfigCodec`: project config text <-> config shapes
//!   - `PromptCatalog`: static prompt templates
//!
//! - **Driving (Input) Ports**: the CLI calls services directly

pub mod output;

pub use output::{ConfigCodec, ProjectFilesystem, PromptCatalog};
