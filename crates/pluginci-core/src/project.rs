//! The project handed to the CI server.

use serde::{Deserialize, Serialize};

use crate::{BuildType, ParameterSet, RelativeId, Template, VcsRoot};

/// Settings format version understood by the server.
pub const DSL_VERSION: &str = "2025.11";

/// Everything one generation run produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Absolute id of the owning project, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub version: String,
    pub params: ParameterSet,
    pub vcs_roots: Vec<VcsRoot>,
    pub templates: Vec<Template>,
    pub build_types: Vec<BuildType>,
    /// Display order of the build types.
    pub build_types_order: Vec<RelativeId>,
}

impl Project {
    pub fn new(id: Option<String>) -> Self {
        let mut params = ParameterSet::new();
        params.set("teamcity.ui.settings.readOnly", "true");
        Self {
            id,
            version: DSL_VERSION.to_string(),
            params,
            vcs_roots: Vec::new(),
            templates: Vec::new(),
            build_types: Vec::new(),
            build_types_order: Vec::new(),
        }
    }

    pub fn register_vcs_root(&mut self, root: VcsRoot) {
        self.vcs_roots.push(root);
    }

    pub fn register_template(&mut self, template: Template) {
        self.templates.push(template);
    }

    /// Add builds and make their order the display order.
    pub fn register_build_types(&mut self, builds: Vec<BuildType>) {
        self.build_types_order = builds.iter().map(|b| b.id.clone()).collect();
        self.build_types = builds;
    }

    pub fn build_type(&self, id: &RelativeId) -> Option<&BuildType> {
        self.build_types.iter().find(|b| &b.id == id)
    }

    pub fn template(&self, id: &RelativeId) -> Option<&Template> {
        self.templates.iter().find(|t| &t.id == id)
    }

    /// Absolute id of an entity in this project.
    pub fn qualify(&self, id: &RelativeId) -> String {
        id.qualify(self.id.as_deref())
    }
}
