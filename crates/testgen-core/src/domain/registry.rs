//! Detection registry: every marker the classifiers look for.
//!
//! Each category is described exactly once by a static entry. Classifiers
//! walk these tables in declaration order and stop at the first hit, so the
//! ORDER of every table is the priority order. Presence checks are the single
//! [`AliasSet::matches`] primitive; no classifier hand-rolls its own
//! "has dependency X" logic.
//!
//! # Adding a New Framework
//!
//! 1. Add a variant to `TestingFramework` in `value_objects.rs`
//! 2. Add one [`FrameworkDef`] entry to [`JS_FRAMEWORK_REGISTRY`] (or a
//!    marker to [`DOTNET_FRAMEWORK_MARKERS`])

use crate::domain::manifest::Manifest;
use crate::domain::detection::Ide;
use crate::domain::value_objects::{ProjectType, TestingFramework};

// ── Alias sets ───────────────────────────────────────────────────────────────

/// An ordered list of dependency names that all count as evidence for one
/// category.
#[derive(Debug, Clone, Copy)]
pub struct AliasSet(pub &'static [&'static str]);

impl AliasSet {
    /// True if any alias is declared in the manifest.
    pub fn matches(&self, manifest: &Manifest) -> bool {
        self.0.iter().any(|alias| manifest.contains(alias))
    }

    /// Declared version of the first declared alias.
    pub fn version<'m>(&self, manifest: &'m Manifest) -> Option<&'m str> {
        self.0.iter().find_map(|alias| manifest.version_of(alias))
    }
}

// ── Project types ────────────────────────────────────────────────────────────

/// Filename suffix that marks a .NET project directory.
pub const DOTNET_MARKER_SUFFIX: &str = ".csproj";

/// Dependency evidence for each JS project type.
#[derive(Debug, Clone, Copy)]
pub struct ProjectTypeDef {
    pub project_type: ProjectType,
    pub aliases: AliasSet,
}

/// Priority order: UI frameworks before server frameworks.
pub static PROJECT_TYPE_REGISTRY: &[ProjectTypeDef] = &[
    ProjectTypeDef {
        project_type: ProjectType::React,
        aliases: AliasSet(&["react", "react-dom"]),
    },
    ProjectTypeDef {
        project_type: ProjectType::Vue,
        aliases: AliasSet(&["vue", "@vue/core"]),
    },
    ProjectTypeDef {
        project_type: ProjectType::Angular,
        aliases: AliasSet(&["@angular/core"]),
    },
    ProjectTypeDef {
        project_type: ProjectType::NodeJs,
        aliases: AliasSet(&["express", "fastify", "koa"]),
    },
];

// ── JS testing frameworks ────────────────────────────────────────────────────

/// Where a framework's test directory comes from once it has won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestDirectoryPolicy {
    /// No directory lookup.
    None,
    /// First existing entry of [`JS_TEST_DIRECTORIES`], else none.
    Conventional,
}

/// Everything detection knows about one JS testing framework.
#[derive(Debug, Clone, Copy)]
pub struct FrameworkDef {
    pub framework: TestingFramework,

    /// Dependency names that count as the framework being installed.
    ///
    /// A companion "globals" package counts as the framework itself.
    pub dependency_aliases: AliasSet,

    /// Config files whose mere presence selects this framework when no
    /// dependency evidence exists.
    pub detection_config_files: &'static [&'static str],

    /// Config files reported in the detection result, first existing wins.
    pub reported_config_files: &'static [&'static str],

    /// Dependencies whose declared version is surfaced, first declared wins.
    pub version_aliases: AliasSet,

    pub test_directory: TestDirectoryPolicy,

    /// Whether testing-library capability flags are reported.
    pub reports_testing_library: bool,
}

/// Priority order: Jest > Vitest > Mocha > Jasmine.
pub static JS_FRAMEWORK_REGISTRY: &[FrameworkDef] = &[
    FrameworkDef {
        framework: TestingFramework::Jest,
        dependency_aliases: AliasSet(&["jest", "@jest/globals"]),
        detection_config_files: &["jest.config.js", "jest.config.ts", "jest.config.json"],
        reported_config_files: &[
            "jest.config.js",
            "jest.config.ts",
            "jest.config.json",
            "jest.config.mjs",
        ],
        version_aliases: AliasSet(&["jest", "@jest/globals"]),
        test_directory: TestDirectoryPolicy::Conventional,
        reports_testing_library: true,
    },
    FrameworkDef {
        framework: TestingFramework::Vitest,
        dependency_aliases: AliasSet(&["vitest"]),
        detection_config_files: &["vitest.config.ts", "vitest.config.js"],
        // vite.config.ts may carry a `test` block, so it is reported but
        // never used as detection evidence.
        reported_config_files: &["vitest.config.ts", "vitest.config.js", "vite.config.ts"],
        version_aliases: AliasSet(&["vitest"]),
        test_directory: TestDirectoryPolicy::Conventional,
        reports_testing_library: false,
    },
    FrameworkDef {
        framework: TestingFramework::Mocha,
        dependency_aliases: AliasSet(&["mocha"]),
        detection_config_files: &[],
        reported_config_files: &[],
        version_aliases: AliasSet(&[]),
        test_directory: TestDirectoryPolicy::None,
        reports_testing_library: false,
    },
    FrameworkDef {
        framework: TestingFramework::Jasmine,
        dependency_aliases: AliasSet(&["jasmine", "jasmine-core"]),
        detection_config_files: &[],
        reported_config_files: &[],
        version_aliases: AliasSet(&[]),
        test_directory: TestDirectoryPolicy::None,
        reports_testing_library: false,
    },
];

/// Look up the registry entry of a JS framework.
pub fn find_js_framework(framework: TestingFramework) -> Option<&'static FrameworkDef> {
    JS_FRAMEWORK_REGISTRY
        .iter()
        .find(|def| def.framework == framework)
}

/// React Testing Library (and its hooks companion).
pub const REACT_TESTING_LIBRARY: AliasSet =
    AliasSet(&["@testing-library/react", "@testing-library/react-hooks"]);

/// Any flavour of Testing Library.
pub const TESTING_LIBRARY: AliasSet = AliasSet(&[
    "@testing-library/react",
    "@testing-library/vue",
    "@testing-library/angular",
    "@testing-library/dom",
]);

// ── .NET testing frameworks ──────────────────────────────────────────────────

/// Lowercase substrings searched (case-insensitively) in `.csproj` text, in
/// priority order.
pub static DOTNET_FRAMEWORK_MARKERS: &[(&str, TestingFramework)] = &[
    ("xunit", TestingFramework::XUnit),
    ("nunit", TestingFramework::NUnit),
    ("mstest", TestingFramework::MsTest),
];

/// Framework assumed for a .NET project whose build files name none.
pub const DOTNET_DEFAULT_FRAMEWORK: TestingFramework = TestingFramework::XUnit;

// ── Conventional directories ─────────────────────────────────────────────────

pub const JS_TEST_DIRECTORIES: &[&str] = &["__tests__", "tests", "test", "spec", "specs"];

pub const DOTNET_TEST_DIRECTORIES: &[&str] = &["Tests", "tests", "Test", "test"];

/// Recommended .NET test directory when none exists yet.
pub const DOTNET_DEFAULT_TEST_DIRECTORY: &str = "Tests";

pub const SOURCE_DIRECTORIES: &[&str] = &["src", "lib", "app", "source"];

/// Source directory assumed for JS projects with none of the conventional ones.
pub const DEFAULT_SOURCE_DIRECTORY: &str = "src";

/// Directory `init` creates for a JS project without a test directory.
pub const JS_DEFAULT_TEST_DIRECTORY: &str = "__tests__";

pub const TYPESCRIPT_CONFIG_FILES: &[&str] = &["tsconfig.json", "tsconfig.app.json"];

// ── Synthesized config defaults ──────────────────────────────────────────────

pub const JEST_DEFAULT_TEST_MATCH: &[&str] =
    &["**/__tests__/**/*", "**/*.test.*", "**/*.spec.*"];

pub const DOTNET_DEFAULT_NAMESPACE: &str = "Tests";

/// Fixed location of the optional project configuration file.
pub const CONFIG_FILE_NAME: &str = "testgen.config.toml";

/// `package.json` scripts that are reported by `run`, in priority order.
pub const TEST_SCRIPT_NAMES: &[&str] = &["test", "test:unit", "test:watch", "test:coverage"];

/// Editor marker directories at the root, first match wins.
pub static IDE_MARKERS: &[(&str, Ide)] = &[
    (".cursor", Ide::Cursor),
    (".vscode", Ide::VsCode),
    (".idea", Ide::JetBrains),
    (".codeium", Ide::Codeium),
];
