//! Shared build template.

use serde::{Deserialize, Serialize};

use crate::{ParameterSet, RelativeId};

/// A reusable build shape referenced by every build definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: RelativeId,
    pub name: String,
    /// VCS root attached to builds using this template.
    pub vcs_root: RelativeId,
    pub steps: Vec<GradleStep>,
    pub triggers: Vec<VcsTrigger>,
    pub failure_conditions: FailureConditions,
    pub features: Vec<BuildFeature>,
    /// Defaults that build definitions override.
    pub params: ParameterSet,
}

/// A Gradle build step.
///
/// Fields holding `%name%` are resolved by the server from build parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradleStep {
    pub id: String,
    pub tasks: String,
    pub gradle_params: String,
    pub use_gradle_wrapper: bool,
    pub enable_stacktrace: bool,
    pub jdk_home: String,
}

/// Starts a build when the VCS root changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcsTrigger {
    pub id: String,
    /// Empty filter matches every branch.
    pub branch_filter: String,
    pub trigger_rules: Vec<String>,
}

impl VcsTrigger {
    /// Trigger rules as the server expects them, one per line.
    pub fn trigger_rules_text(&self) -> String {
        self.trigger_rules.join("\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureConditions {
    pub execution_timeout_min: u32,
}

/// A build feature identified by its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildFeature {
    pub id: String,
    #[serde(rename = "type")]
    pub feature_type: String,
}
