//! The dependency manifest record.
//!
//! A [`Manifest`] is the merged view of a `package.json`'s `dependencies` and
//! `devDependencies`: dependency name → declared version-spec text. It is
//! built once per read and never mutated afterwards.

use std::collections::BTreeMap;

use serde_json::Value;

/// Well-known manifest filename at a project root.
pub const MANIFEST_FILE: &str = "package.json";

/// Merged runtime + development dependencies of a project.
///
/// Invariant: an absent or unparsable manifest yields [`Manifest::empty`],
/// never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    dependencies: BTreeMap<String, String>,
}

impl Manifest {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse `package.json` text.
    ///
    /// `devDependencies` entries override `dependencies` entries with the same
    /// name. Sections that are not objects, and entries whose version is not a
    /// string, are skipped.
    pub fn parse(source: &str) -> Result<Self, serde_json::Error> {
        let json: Value = serde_json::from_str(source)?;
        let mut dependencies = BTreeMap::new();

        for section in ["dependencies", "devDependencies"] {
            dependencies.extend(string_entries(&json, section));
        }

        Ok(Self { dependencies })
    }

    /// Case-sensitive presence check.
    pub fn contains(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }

    /// Declared version-spec text, verbatim.
    pub fn version_of(&self, name: &str) -> Option<&str> {
        self.dependencies.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Manifest
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            dependencies: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Extract the `scripts` table of a `package.json`.
pub fn parse_scripts(source: &str) -> Result<BTreeMap<String, String>, serde_json::Error> {
    let json: Value = serde_json::from_str(source)?;
    Ok(string_entries(&json, "scripts").collect())
}

fn string_entries<'a>(
    json: &'a Value,
    section: &'static str,
) -> impl Iterator<Item = (String, String)> + 'a {
    json.get(section)
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|map| map.iter())
        .filter_map(|(name, version)| {
            version
                .as_str()
                .map(|v| (name.clone(), v.to_string()))
        })
}
