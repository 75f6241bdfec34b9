//! Build parameters.

use serde::{Deserialize, Serialize};

/// A named build parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered parameters with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(Vec<Parameter>);

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter. An existing entry keeps its position and takes the new value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let parameter = Parameter::new(name, value);
        match self.0.iter_mut().find(|p| p.name == parameter.name) {
            Some(existing) => existing.value = parameter.value,
            None => self.0.push(parameter),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Parameter] {
        &self.0
    }

    /// Overlay `overrides` on top of these parameters.
    pub fn merged_with(&self, overrides: &ParameterSet) -> ParameterSet {
        let mut merged = self.clone();
        for parameter in overrides.iter() {
            merged.set(parameter.name.clone(), parameter.value.clone());
        }
        merged
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_appends_in_order() {
        let mut params = ParameterSet::new();
        params.set("gradle.opts", "");
        params.set("gradle.tasks", "clean build");

        assert_eq!(params.len(), 2);
        assert_eq!(params.as_slice()[0], Parameter::new("gradle.opts", ""));
        assert_eq!(params.as_slice()[1], Parameter::new("gradle.tasks", "clean build"));
    }

    #[test]
    fn test_set_replaces_existing_name() {
        let mut params = ParameterSet::new();
        params.set("gradle.tasks", "clean build");
        params.set("java.home", "%java8.home%");
        params.set("gradle.tasks", "jar");

        assert_eq!(params.len(), 2);
        assert_eq!(params.as_slice()[0], Parameter::new("gradle.tasks", "jar"));
    }

    #[test]
    fn test_merged_with_overrides() {
        let mut defaults = ParameterSet::new();
        defaults.set("gradle.opts", "");
        defaults.set("gradle.tasks", "clean build");

        let mut overrides = ParameterSet::new();
        overrides.set("gradle.opts", "-Pteamcity.api.version=2025.03");
        overrides.set("extra", "value");

        let merged = defaults.merged_with(&overrides);
        assert_eq!(merged.get("gradle.opts"), Some("-Pteamcity.api.version=2025.03"));
        assert_eq!(merged.get("gradle.tasks"), Some("clean build"));
        assert_eq!(merged.as_slice()[2].name, "extra");
    }
}
