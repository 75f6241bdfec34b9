//! Per-version build expansion.

use crate::source::ParameterSource;
use crate::{ConfigError, ConfigResult};
use pluginci_core::{BuildType, RelativeId, Template};
use tracing::debug;

pub const DEFAULT_ARTIFACT_PATHS: &str = "build/distributions/*.zip";

/// Create one build per entry of `teamcity.api.versions`, in list order.
///
/// Builds are numbered `Build1`, `Build2`, ... Only the first publishes
/// artifacts.
pub fn create_api_build_configurations(
    params: &impl ParameterSource,
    template: &Template,
) -> ConfigResult<Vec<BuildType>> {
    let api_versions = params.parameter("teamcity.api.versions");
    if api_versions.trim().is_empty() {
        return Err(ConfigError::EmptyApiVersions);
    }

    let gradle_tasks = params.parameter("gradle.tasks");
    let gradle_options = params.parameter("gradle.options");

    let builds = api_versions
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(index, version)| {
            let mut build = BuildType::from_template(
                RelativeId::new(format!("Build{}", index + 1)),
                format!("Build - TeamCity {}", version),
                template,
            );

            if index == 0 {
                build.artifact_rules = Some(
                    params
                        .parameter_or("artifact.paths", DEFAULT_ARTIFACT_PATHS)
                        .to_string(),
                );
            }

            build.params.set(
                "gradle.opts",
                format!("-Pteamcity.api.version={} {}", version, gradle_options).trim(),
            );
            if !gradle_tasks.is_empty() {
                build.params.set("gradle.tasks", gradle_tasks);
            }

            debug!(id = %build.id, version, "Created API build");
            build
        })
        .collect();

    Ok(builds)
}
