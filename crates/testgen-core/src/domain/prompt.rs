//! Prompt selection and placeholder substitution.
//!
//! Templates are static text; the only "generation" is literal replacement
//! of `{{NAME}}` placeholders with resolved values and with what the user
//! said about the code under test ([`TestTarget`]).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::config::ResolvedConfig;
use crate::domain::error::DomainError;
use crate::domain::value_objects::{ProjectType, TestingFramework};

/// Identifies one canned prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PromptKey {
    JestReact,
    JestNode,
    Vitest,
    Mocha,
    Jasmine,
    XUnitDotNet,
    NUnitDotNet,
    MsTest,
    Generic,
}

impl PromptKey {
    pub const ALL: [PromptKey; 9] = [
        Self::JestReact,
        Self::JestNode,
        Self::Vitest,
        Self::Mocha,
        Self::Jasmine,
        Self::XUnitDotNet,
        Self::NUnitDotNet,
        Self::MsTest,
        Self::Generic,
    ];

    /// Select the template for a detected `(framework, project_type)` pair.
    pub fn select(framework: TestingFramework, project_type: ProjectType) -> Self {
        match framework {
            TestingFramework::Jest if project_type == ProjectType::React => Self::JestReact,
            TestingFramework::Jest => Self::JestNode,
            TestingFramework::Vitest => Self::Vitest,
            TestingFramework::Mocha => Self::Mocha,
            TestingFramework::Jasmine => Self::Jasmine,
            TestingFramework::XUnit => Self::XUnitDotNet,
            TestingFramework::NUnit => Self::NUnitDotNet,
            TestingFramework::MsTest => Self::MsTest,
            TestingFramework::Unknown => Self::Generic,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::JestReact => "jest-react",
            Self::JestNode => "jest-node",
            Self::Vitest => "vitest",
            Self::Mocha => "mocha",
            Self::Jasmine => "jasmine",
            Self::XUnitDotNet => "xunit-dotnet",
            Self::NUnitDotNet => "nunit-dotnet",
            Self::MsTest => "mstest",
            Self::Generic => "generic",
        }
    }

    /// Test type assumed when the request names none. Only the Jest
    /// templates have one.
    pub const fn default_test_type(&self) -> Option<TestType> {
        match self {
            Self::JestReact => Some(TestType::Component),
            Self::JestNode => Some(TestType::Function),
            _ => None,
        }
    }

    /// The framework a template is written for.
    pub const fn framework(&self) -> TestingFramework {
        match self {
            Self::JestReact | Self::JestNode => TestingFramework::Jest,
            Self::Vitest => TestingFramework::Vitest,
            Self::Mocha => TestingFramework::Mocha,
            Self::Jasmine => TestingFramework::Jasmine,
            Self::XUnitDotNet => TestingFramework::XUnit,
            Self::NUnitDotNet => TestingFramework::NUnit,
            Self::MsTest => TestingFramework::MsTest,
            Self::Generic => TestingFramework::Unknown,
        }
    }
}

impl fmt::Display for PromptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A framework name as typed on the command line.
///
/// `jest` alone is ambiguous between the React and Node templates and is
/// resolved against the detected project type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptRequest {
    Auto,
    Key(PromptKey),
    Jest,
}

impl PromptRequest {
    /// Parse a requested name. Unrecognised names fall back to [`Self::Auto`].
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or(Self::Auto)
    }
}

impl FromStr for PromptRequest {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.to_ascii_lowercase().as_str() {
            "auto" => return Ok(Self::Auto),
            "jest" => return Ok(Self::Jest),
            "jest-react" => PromptKey::JestReact,
            "jest-node" => PromptKey::JestNode,
            "vitest" => PromptKey::Vitest,
            "mocha" => PromptKey::Mocha,
            "jasmine" => PromptKey::Jasmine,
            "xunit" | "xunit-dotnet" => PromptKey::XUnitDotNet,
            "nunit" | "nunit-dotnet" => PromptKey::NUnitDotNet,
            "mstest" => PromptKey::MsTest,
            other => return Err(DomainError::UnknownFramework(other.to_string())),
        };
        Ok(Self::Key(key))
    }
}

/// Kind of code the tests are for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestType {
    Component,
    Function,
    Class,
    Hook,
    Utility,
}

impl TestType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Function => "function",
            Self::Class => "class",
            Self::Hook => "hook",
            Self::Utility => "utility",
        }
    }

    /// How `--name` is labelled in the target summary.
    const fn name_label(&self) -> &'static str {
        match self {
            Self::Component => "Component name",
            Self::Class => "Class name",
            Self::Hook => "Hook name",
            Self::Function | Self::Utility => "Function name",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "component" => Ok(Self::Component),
            "function" => Ok(Self::Function),
            "class" => Ok(Self::Class),
            "hook" => Ok(Self::Hook),
            "utility" => Ok(Self::Utility),
            other => Err(DomainError::UnknownTestType(other.to_string())),
        }
    }
}

/// Scenarios listed when the request gives none. `utility` and an absent
/// type share the generic list.
pub fn default_scenarios(test_type: Option<TestType>) -> &'static [&'static str] {
    match test_type {
        Some(TestType::Component) => &[
            "Component renders correctly",
            "Component handles user interactions",
            "Component displays data correctly",
            "Component handles error states",
            "Component handles edge cases",
        ],
        Some(TestType::Function) => &[
            "Function returns expected result",
            "Function handles valid inputs",
            "Function handles invalid inputs",
            "Function handles edge cases",
            "Function handles error scenarios",
        ],
        Some(TestType::Class) => &[
            "Class instantiates correctly",
            "Methods work as expected",
            "Methods handle edge cases",
            "Methods handle errors",
            "State management works correctly",
        ],
        Some(TestType::Hook) => &[
            "Hook returns expected values",
            "Hook handles state changes",
            "Hook handles dependencies",
            "Hook handles cleanup",
            "Hook handles edge cases",
        ],
        Some(TestType::Utility) | None => &[
            "Normal case",
            "Edge cases",
            "Error scenarios",
            "Boundary conditions",
        ],
    }
}

/// What the user knows about the code to be tested. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestTarget {
    pub source_file: Option<String>,
    /// Component, function, class or hook name.
    pub name: Option<String>,
    pub description: Option<String>,
    pub test_type: Option<TestType>,
    pub scenarios: Vec<String>,
}

/// Values substituted into a prompt template.
#[derive(Debug, Clone, Default)]
pub struct PromptContext {
    variables: BTreeMap<&'static str, String>,
}

impl PromptContext {
    pub const FRAMEWORK: &'static str = "FRAMEWORK";
    pub const PROJECT_TYPE: &'static str = "PROJECT_TYPE";
    pub const TEST_DIRECTORY: &'static str = "TEST_DIRECTORY";
    pub const SOURCE_DIRECTORY: &'static str = "SOURCE_DIRECTORY";

    /// Bulleted summary of the [`TestTarget`].
    pub const SOURCE_INFO: &'static str = "SOURCE_INFO";
    /// Bulleted scenario list, explicit or defaulted.
    pub const SCENARIOS: &'static str = "SCENARIOS";
    pub const SOURCE_FILE: &'static str = "SOURCE_FILE";
    pub const NAME: &'static str = "NAME";
    pub const DESCRIPTION: &'static str = "DESCRIPTION";
    pub const TEST_TYPE: &'static str = "TEST_TYPE";

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert(Self::FRAMEWORK, config.testing_framework.to_string());
        variables.insert(Self::PROJECT_TYPE, config.project_type.to_string());
        // Co-located tests have no directory; templates read "alongside source".
        variables.insert(
            Self::TEST_DIRECTORY,
            config
                .test_directory
                .clone()
                .unwrap_or_else(|| "alongside source files".to_string()),
        );
        variables.insert(
            Self::SOURCE_DIRECTORY,
            config
                .source_directory
                .clone()
                .unwrap_or_else(|| ".".to_string()),
        );
        Self { variables }
    }

    /// Add the target placeholders. The test type falls back to the
    /// template's own default, and scenarios to that type's default list.
    pub fn with_target(mut self, key: PromptKey, target: &TestTarget) -> Self {
        let test_type = target.test_type.or(key.default_test_type());

        let mut info = Vec::new();
        if let Some(file) = &target.source_file {
            info.push(format!("- Source file: `{file}`"));
            self.variables.insert(Self::SOURCE_FILE, file.clone());
        }
        if let Some(name) = &target.name {
            let label = test_type.map_or("Name", |t| t.name_label());
            info.push(format!("- {label}: {name}"));
            self.variables.insert(Self::NAME, name.clone());
        }
        if let Some(test_type) = test_type {
            info.push(format!("- Test type: {test_type}"));
            self.variables.insert(Self::TEST_TYPE, test_type.to_string());
        }
        if let Some(description) = &target.description {
            info.push(format!("- Description: {description}"));
            self.variables.insert(Self::DESCRIPTION, description.clone());
        }
        if info.is_empty() {
            info.push("- Not specified; ask which file or symbol to cover".to_string());
        }
        self.variables.insert(Self::SOURCE_INFO, info.join("\n"));

        let scenarios: Vec<String> = if target.scenarios.is_empty() {
            default_scenarios(test_type)
                .iter()
                .map(|s| format!("- {s}"))
                .collect()
        } else {
            target.scenarios.iter().map(|s| format!("- {s}")).collect()
        };
        self.variables.insert(Self::SCENARIOS, scenarios.join("\n"));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every known `{{KEY}}` in one left-to-right pass. Substituted
    /// values are never rescanned; unknown placeholders stay as written.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after = &rest[open + 2..];
            let Some(close) = after.find("}}") else {
                out.push_str(&rest[open..]);
                return out;
            };

            let name = &after[..close];
            if name.contains("{{") {
                // `{{ {{KEY}}`: keep the stray braces, retry at the inner one.
                out.push_str("{{");
                rest = after;
                continue;
            }
            match self.variables.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(name);
                    out.push_str("}}");
                }
            }
            rest = &after[close + 2..];
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::FrameworkConfig;

    #[test]
    fn jest_template_depends_on_project_type() {
        assert_eq!(
            PromptKey::select(TestingFramework::Jest, ProjectType::React),
            PromptKey::JestReact
        );
        assert_eq!(
            PromptKey::select(TestingFramework::Jest, ProjectType::Vue),
            PromptKey::JestNode
        );
        assert_eq!(
            PromptKey::select(TestingFramework::Jest, ProjectType::Unknown),
            PromptKey::JestNode
        );
    }

    #[test]
    fn dotnet_templates_carry_suffix() {
        assert_eq!(
            PromptKey::select(TestingFramework::NUnit, ProjectType::DotNet).as_str(),
            "nunit-dotnet"
        );
        assert_eq!(
            PromptKey::select(TestingFramework::MsTest, ProjectType::DotNet).as_str(),
            "mstest"
        );
    }

    #[test]
    fn unknown_framework_selects_generic() {
        assert_eq!(
            PromptKey::select(TestingFramework::Unknown, ProjectType::React),
            PromptKey::Generic
        );
    }

    #[test]
    fn every_key_maps_back_to_itself() {
        for key in PromptKey::ALL {
            if key == PromptKey::Generic {
                continue;
            }
            let project = if key == PromptKey::JestReact {
                ProjectType::React
            } else {
                ProjectType::NodeJs
            };
            assert_eq!(PromptKey::select(key.framework(), project), key);
        }
    }

    #[test]
    fn unrecognised_request_falls_back_to_auto() {
        assert_eq!(PromptRequest::parse_lenient("ava"), PromptRequest::Auto);
        assert_eq!(PromptRequest::parse_lenient("JEST"), PromptRequest::Jest);
        assert_eq!(
            PromptRequest::parse_lenient("xunit"),
            PromptRequest::Key(PromptKey::XUnitDotNet)
        );
    }

    fn dotnet_xunit() -> ResolvedConfig {
        ResolvedConfig {
            project_type: ProjectType::DotNet,
            testing_framework: TestingFramework::XUnit,
            test_directory: Some("Tests".into()),
            source_directory: None,
            framework_config: FrameworkConfig::default(),
        }
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let mut config = dotnet_xunit();
        config.source_directory = Some("{{TEST_DIRECTORY}}".into());
        let ctx = PromptContext::from_config(&config);

        assert_eq!(ctx.render("src={{SOURCE_DIRECTORY}}"), "src={{TEST_DIRECTORY}}");
    }

    #[test]
    fn stray_braces_are_kept() {
        let ctx = PromptContext::from_config(&dotnet_xunit());
        assert_eq!(ctx.render("a {{ {{FRAMEWORK}} b"), "a {{ xunit b");
        assert_eq!(ctx.render("open {{FRAMEWORK"), "open {{FRAMEWORK");
        assert_eq!(ctx.render("{{}}"), "{{}}");
    }

    #[test]
    fn target_fields_fill_source_info() {
        let target = TestTarget {
            source_file: Some("src/Button.tsx".into()),
            name: Some("Button".into()),
            description: Some("Primary action button".into()),
            ..Default::default()
        };
        let ctx = PromptContext::from_config(&dotnet_xunit()).with_target(PromptKey::JestReact, &target);

        assert_eq!(
            ctx.get(PromptContext::SOURCE_INFO),
            Some(
                "- Source file: `src/Button.tsx`\n\
                 - Component name: Button\n\
                 - Test type: component\n\
                 - Description: Primary action button"
            )
        );
        assert_eq!(ctx.get(PromptContext::NAME), Some("Button"));
        assert!(ctx.get(PromptContext::SCENARIOS).unwrap().starts_with("- Component renders correctly"));
    }

    #[test]
    fn explicit_scenarios_replace_defaults() {
        let target = TestTarget {
            test_type: Some(TestType::Hook),
            scenarios: vec!["Debounces input".into(), "Cancels on unmount".into()],
            ..Default::default()
        };
        let ctx = PromptContext::from_config(&dotnet_xunit()).with_target(PromptKey::Vitest, &target);

        assert_eq!(
            ctx.get(PromptContext::SCENARIOS),
            Some("- Debounces input\n- Cancels on unmount")
        );
    }

    #[test]
    fn empty_target_uses_generic_scenarios() {
        let ctx = PromptContext::from_config(&dotnet_xunit())
            .with_target(PromptKey::XUnitDotNet, &TestTarget::default());

        assert_eq!(
            ctx.get(PromptContext::SOURCE_INFO),
            Some("- Not specified; ask which file or symbol to cover")
        );
        assert_eq!(
            ctx.get(PromptContext::SCENARIOS),
            Some("- Normal case\n- Edge cases\n- Error scenarios\n- Boundary conditions")
        );
        assert_eq!(ctx.get(PromptContext::TEST_TYPE), None);
    }

    #[test]
    fn default_scenarios_per_test_type() {
        assert_eq!(default_scenarios(Some(TestType::Class))[0], "Class instantiates correctly");
        assert_eq!(default_scenarios(Some(TestType::Function)).len(), 5);
        assert_eq!(default_scenarios(Some(TestType::Utility)), default_scenarios(None));
    }

    #[test]
    fn test_type_parses_case_insensitively() {
        assert_eq!("Hook".parse::<TestType>(), Ok(TestType::Hook));
        assert_eq!(
            "widget".parse::<TestType>(),
            Err(DomainError::UnknownTestType("widget".into()))
        );
    }

    #[test]
    fn context_renders_all_placeholders() {
        let config = ResolvedConfig {
            project_type: ProjectType::DotNet,
            testing_framework: TestingFramework::XUnit,
            test_directory: Some("Tests".into()),
            source_directory: None,
            framework_config: FrameworkConfig::default(),
        };
        let ctx = PromptContext::from_config(&config);

        let rendered = ctx.render(
            "{{FRAMEWORK}}/{{PROJECT_TYPE}} in {{TEST_DIRECTORY}} from {{SOURCE_DIRECTORY}} {{OTHER}}",
        );
        assert_eq!(rendered, "xunit/dotnet in Tests from . {{OTHER}}");
    }
}
