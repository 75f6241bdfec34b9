//! Build definitions and agent requirements.

use serde::{Deserialize, Serialize};

use crate::{Error, ParameterSet, RelativeId, Result, Template};

/// Agent property holding the operating system name.
pub const OS_NAME_PROPERTY: &str = "teamcity.agent.jvm.os.name";
/// Agent property reported when Docker is installed.
pub const DOCKER_VERSION_PROPERTY: &str = "docker.server.version";

/// One build configuration handed to the CI server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildType {
    pub id: RelativeId,
    pub name: String,
    /// Templates this build is based on, by id.
    pub templates: Vec<RelativeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_rules: Option<String>,
    /// Overrides of the template parameters.
    pub params: ParameterSet,
    pub requirements: Vec<Requirement>,
}

impl BuildType {
    /// Create a build based on `template` with no overrides.
    pub fn from_template(
        id: impl Into<RelativeId>,
        name: impl Into<String>,
        template: &Template,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            templates: vec![template.id.clone()],
            artifact_rules: None,
            params: ParameterSet::new(),
            requirements: Vec::new(),
        }
    }

    /// Parameters the build runs with: template defaults overlaid by this build's own.
    pub fn effective_params(&self, template: &Template) -> ParameterSet {
        template.params.merged_with(&self.params)
    }
}

/// A constraint on the agents allowed to run a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Requirement {
    Contains { name: String, value: String },
    Exists { name: String },
}

impl Requirement {
    pub fn contains(name: impl Into<String>, value: impl Into<String>) -> Self {
        Requirement::Contains {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn exists(name: impl Into<String>) -> Self {
        Requirement::Exists { name: name.into() }
    }
}

/// Requirement names accepted in `agent.requirements`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentRequirement {
    Linux,
    Macos,
    Solaris,
    Windows,
    Docker,
}

impl AgentRequirement {
    pub fn requirement(self) -> Requirement {
        match self {
            AgentRequirement::Linux => Requirement::contains(OS_NAME_PROPERTY, "Linux"),
            AgentRequirement::Macos => Requirement::contains(OS_NAME_PROPERTY, "Mac OS X"),
            AgentRequirement::Solaris => Requirement::contains(OS_NAME_PROPERTY, "SunOS"),
            AgentRequirement::Windows => Requirement::contains(OS_NAME_PROPERTY, "Windows"),
            AgentRequirement::Docker => Requirement::exists(DOCKER_VERSION_PROPERTY),
        }
    }
}

impl std::fmt::Display for AgentRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentRequirement::Linux => write!(f, "linux"),
            AgentRequirement::Macos => write!(f, "macos"),
            AgentRequirement::Solaris => write!(f, "solaris"),
            AgentRequirement::Windows => write!(f, "windows"),
            AgentRequirement::Docker => write!(f, "docker"),
        }
    }
}

impl std::str::FromStr for AgentRequirement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linux" => Ok(AgentRequirement::Linux),
            "macos" => Ok(AgentRequirement::Macos),
            "solaris" => Ok(AgentRequirement::Solaris),
            "windows" => Ok(AgentRequirement::Windows),
            "docker" => Ok(AgentRequirement::Docker),
            _ => Err(Error::UnknownRequirement(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_requirement_clauses() {
        assert_eq!(
            AgentRequirement::Linux.requirement(),
            Requirement::contains("teamcity.agent.jvm.os.name", "Linux")
        );
        assert_eq!(
            AgentRequirement::Macos.requirement(),
            Requirement::contains("teamcity.agent.jvm.os.name", "Mac OS X")
        );
        assert_eq!(
            AgentRequirement::Solaris.requirement(),
            Requirement::contains("teamcity.agent.jvm.os.name", "SunOS")
        );
        assert_eq!(
            AgentRequirement::Windows.requirement(),
            Requirement::contains("teamcity.agent.jvm.os.name", "Windows")
        );
        assert_eq!(
            AgentRequirement::Docker.requirement(),
            Requirement::exists("docker.server.version")
        );
    }

    #[test]
    fn test_agent_requirement_round_trips_name() {
        for name in ["linux", "macos", "solaris", "windows", "docker"] {
            let requirement: AgentRequirement = name.parse().unwrap();
            assert_eq!(requirement.to_string(), name);
        }
        assert!("Linux".parse::<AgentRequirement>().is_err());
    }

    #[test]
    fn test_requirement_serialization() {
        let json = serde_json::to_string(&Requirement::exists("docker.server.version")).unwrap();
        assert_eq!(json, r#"{"type":"exists","name":"docker.server.version"}"#);
    }
}
