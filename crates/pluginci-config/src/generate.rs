//! Project generation.

use crate::ConfigResult;
use crate::matrix::create_api_build_configurations;
use crate::report::create_report_build_configuration;
use crate::requirements::configure_requirements;
use crate::source::{ParameterSource, references};
use crate::template::default_plugin_build_template;
use crate::vcs::create_vcs_root;
use pluginci_core::Project;
use tracing::info;

/// Options that are not read from the parameter source.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Absolute id of the project the settings are applied to.
    pub project_id: Option<String>,
}

/// Generate the complete project from `params`.
///
/// Steps run in a fixed order: VCS root, template, API version builds, the
/// report build, then agent requirements. The first failure aborts the run.
pub fn generate(
    params: &impl ParameterSource,
    options: &GenerateOptions,
) -> ConfigResult<Project> {
    let mut project = Project::new(options.project_id.clone());

    let vcs_root = create_vcs_root(&mut project, params)?;
    let template = default_plugin_build_template(params, &vcs_root);

    let mut builds = create_api_build_configurations(params, &template)?;
    builds.push(create_report_build_configuration(params, &template));

    configure_requirements(params, &mut builds)?;

    info!(
        vcs_root = %vcs_root.id,
        builds = builds.len(),
        "Generated project settings"
    );

    project.register_template(template);
    project.register_build_types(builds);
    Ok(project)
}

/// Parameter references in the project that no build defines.
///
/// These must be provided by the server or agent, e.g. `java8.home`.
/// Returned sorted and without duplicates.
pub fn unresolved_references(project: &Project) -> Vec<String> {
    let mut unresolved = std::collections::BTreeSet::new();

    for build in &project.build_types {
        let Some(template) = build.templates.first().and_then(|id| project.template(id)) else {
            continue;
        };
        let effective = build.effective_params(template);

        let step_fields = template
            .steps
            .iter()
            .flat_map(|s| [s.tasks.as_str(), s.gradle_params.as_str(), s.jdk_home.as_str()]);
        let param_values = effective.iter().map(|p| p.value.as_str());

        for name in step_fields.chain(param_values).flat_map(references) {
            if effective.get(&name).is_none() && project.params.get(&name).is_none() {
                unresolved.insert(name);
            }
        }
    }

    unresolved.into_iter().collect()
}
