//! testgen Core - Hexagonal Architecture Implementation
//!
//! Detection and configuration resolution for the testgen prompt tool.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           testgen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (FrameworkDetector, ConfigResolver)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (ProjectFilesystem, ConfigCodec, ...)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    testgen-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (registry, classifiers, configs)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use testgen_core::application::ConfigResolver;
//!
//! # fn demo(filesystem: Arc<dyn testgen_core::application::ProjectFilesystem>,
//! #         codec: Arc<dyn testgen_core::application::ConfigCodec>) {
//! let resolver = ConfigResolver::new("./my-app", filesystem, codec);
//! let config = resolver.get_config();
//! println!("{} / {}", config.project_type, config.testing_framework);
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ConfigResolver, DirectoryResolver, FrameworkDetector, IdeDetector, ProjectDetector,
        PromptService, TestScriptLocator,
        ports::{ConfigCodec, ProjectFilesystem, PromptCatalog},
    };
    pub use crate::domain::{
        ConfigOverrides, ConfigSource, DetectedProject, DetectionResult, Ide, ProjectType, PromptKey,
        PromptRequest, ResolvedConfig, TestTarget, TestType, TestingFramework,
    };
    pub use crate::error::{TestgenError, TestgenResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
