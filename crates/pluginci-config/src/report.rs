//! Code quality report build.

use crate::source::ParameterSource;
use pluginci_core::{BuildType, RelativeId, Template};
use tracing::debug;

pub const REPORT_BUILD_ID: &str = "ReportCodeQuality";
pub const DEFAULT_REPORT_TASK: &str = "sonar";

/// Create the build that runs the code quality task.
///
/// The global `gradle.tasks` override does not apply here.
pub fn create_report_build_configuration(
    params: &impl ParameterSource,
    template: &Template,
) -> BuildType {
    let gradle_options = params.parameter("gradle.options");
    let report_task = params.parameter_or("report.task", DEFAULT_REPORT_TASK);

    let mut build = BuildType::from_template(
        RelativeId::new(REPORT_BUILD_ID),
        "Report - Code Quality",
        template,
    );
    build
        .params
        .set("gradle.opts", format!("%report.opts% {}", gradle_options).trim());
    build
        .params
        .set("gradle.tasks", format!("clean build {}", report_task));

    debug!(id = %build.id, task = report_task, "Created report build");
    build
}
