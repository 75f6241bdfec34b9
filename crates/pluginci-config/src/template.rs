//! The shared plugin build template.

use crate::source::ParameterSource;
use pluginci_core::template::{BuildFeature, FailureConditions, GradleStep, VcsTrigger};
use pluginci_core::{ParameterSet, RelativeId, Template, VcsRoot};
use tracing::debug;

pub const TEMPLATE_ID: &str = "Build";
pub const DEFAULT_JAVA_HOME: &str = "%java8.home%";
pub const DEFAULT_GRADLE_TASKS: &str = "clean build";
pub const EXECUTION_TIMEOUT_MIN: u32 = 15;

/// Build the template every generated build is based on.
///
/// The Gradle step reads its tasks, options and JDK from the `gradle.tasks`,
/// `gradle.opts` and `java.home` parameters, so builds only differ in the
/// parameter values they set.
pub fn default_plugin_build_template(
    params: &impl ParameterSource,
    vcs_root: &VcsRoot,
) -> Template {
    let mut defaults = ParameterSet::new();
    defaults.set("gradle.opts", "");
    defaults.set("gradle.tasks", DEFAULT_GRADLE_TASKS);
    defaults.set("java.home", params.parameter_or("java.home", DEFAULT_JAVA_HOME));

    let template = Template {
        id: RelativeId::new(TEMPLATE_ID),
        name: "build plugin".to_string(),
        vcs_root: vcs_root.id.clone(),
        steps: vec![GradleStep {
            id: "GradleBuild".to_string(),
            tasks: "%gradle.tasks%".to_string(),
            gradle_params: "%gradle.opts%".to_string(),
            use_gradle_wrapper: true,
            enable_stacktrace: true,
            jdk_home: "%java.home%".to_string(),
        }],
        triggers: vec![VcsTrigger {
            id: "vcsTrigger".to_string(),
            branch_filter: String::new(),
            trigger_rules: vec!["-:.github/**".to_string(), "-:README.adoc".to_string()],
        }],
        failure_conditions: FailureConditions {
            execution_timeout_min: EXECUTION_TIMEOUT_MIN,
        },
        features: vec![BuildFeature {
            id: "perfmon".to_string(),
            feature_type: "perfmon".to_string(),
        }],
        params: defaults,
    };

    debug!(id = %template.id, vcs_root = %template.vcs_root, "Created build template");
    template
}
