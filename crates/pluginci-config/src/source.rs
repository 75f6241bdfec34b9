//! Parameter sources.
//!
//! Every generation step reads its settings by name from a
//! [`ParameterSource`]. Parameters can be loaded from a KDL file:
//!
//! ```kdl
//! param "vcs.name" "my-plugin"
//! param "teamcity.api.versions" "2018.1,2022.04,2025.03"
//!
//! params {
//!     vcs.branch "main"
//!     agent.requirements "Build1=docker"
//! }
//! ```
//!
//! Values may reference server-side parameters as `%name%`; those are
//! passed through untouched and resolved by the CI server.

use crate::{ConfigError, ConfigResult};
use kdl::{KdlDocument, KdlNode};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Read-only lookup of named string parameters.
pub trait ParameterSource {
    /// Get a parameter, `None` when it is not defined.
    fn get(&self, name: &str) -> Option<&str>;

    /// Get a parameter, reading an undefined one as empty.
    fn parameter(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Get a parameter, falling back to `default` only when it is undefined.
    ///
    /// A parameter defined as an empty string stays empty.
    fn parameter_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }
}

/// In-memory parameters, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    values: BTreeMap<String, String>,
}

impl ParameterSource for Parameters {
    fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|v| v.as_str())
    }
}

impl<S: ParameterSource + ?Sized> ParameterSource for &S {
    fn get(&self, name: &str) -> Option<&str> {
        (**self).get(name)
    }
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a parameter, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Add every parameter from `other`; `other` wins on conflicts.
    pub fn extend(&mut self, other: Parameters) {
        self.values.extend(other.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse parameters from KDL text.
    pub fn from_kdl(kdl: &str) -> ConfigResult<Self> {
        let doc: KdlDocument = kdl.parse()?;
        let mut params = Parameters::new();

        for node in doc.nodes() {
            match node.name().value() {
                "param" => {
                    let args = get_all_string_args(node);
                    match args.as_slice() {
                        [name, value] => params.insert_unique(name, value)?,
                        _ => {
                            return Err(ConfigError::InvalidValue {
                                field: "param".to_string(),
                                message: format!(
                                    "expected a name and a value, found {} string argument(s)",
                                    args.len()
                                ),
                            });
                        }
                    }
                }
                "params" => {
                    if let Some(children) = node.children() {
                        for child in children.nodes() {
                            let name = child.name().value();
                            let value = get_first_string_arg(child).ok_or_else(|| {
                                ConfigError::InvalidValue {
                                    field: name.to_string(),
                                    message: "expected a string value".to_string(),
                                }
                            })?;
                            params.insert_unique(name, &value)?;
                        }
                    }
                }
                _ => {} // Ignore unknown nodes
            }
        }

        Ok(params)
    }

    /// Read and parse a KDL parameter file.
    pub fn from_kdl_file(path: impl AsRef<std::path::Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_kdl(&content)
    }

    fn insert_unique(&mut self, name: &str, value: &str) -> ConfigResult<()> {
        if self.values.contains_key(name) {
            return Err(ConfigError::Duplicate(format!("parameter '{}'", name)));
        }
        self.insert(name, value);
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Parameters::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Parse a `name=value` assignment. The value may itself contain `=`.
pub fn parse_assignment(input: &str) -> ConfigResult<(String, String)> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidValue {
            field: "parameter".to_string(),
            message: format!("expected name=value, got '{}'", input),
        })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "parameter".to_string(),
            message: format!("missing name in '{}'", input),
        });
    }
    Ok((name.to_string(), value.to_string()))
}

// Regex for matching %name% parameter references
static REFERENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([a-zA-Z0-9_][a-zA-Z0-9_.\-]*)%").unwrap());

/// Names of the `%name%` references in a string, in order of appearance.
pub fn references(input: &str) -> Vec<String> {
    REFERENCE_REGEX
        .captures_iter(input)
        .map(|caps| caps[1].to_string())
        .collect()
}

fn get_first_string_arg(node: &KdlNode) -> Option<String> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
}

fn get_all_string_args(node: &KdlNode) -> Vec<String> {
    node.entries()
        .iter()
        .filter(|e| e.name().is_none())
        .filter_map(|e| e.value().as_string())
        .map(|s| s.to_string())
        .collect()
}
