//! CLI command implementations.

use anyhow::{Context, Result};
use pluginci_config::{GenerateOptions, Parameters, generate as generate_project, parse_assignment};
use pluginci_core::{Project, RelativeId};
use std::path::Path;
use tracing::{info, warn};

/// Load the parameter file, then apply `name=value` overrides in order.
pub fn load_parameters(path: Option<&Path>, overrides: &[String]) -> Result<Parameters> {
    let mut params = match path {
        Some(path) => Parameters::from_kdl_file(path)
            .with_context(|| format!("Failed to load parameters: {}", path.display()))?,
        None => Parameters::new(),
    };

    for assignment in overrides {
        let (name, value) = parse_assignment(assignment)?;
        params.insert(name, value);
    }

    info!(count = params.len(), "Loaded parameters");
    Ok(params)
}

fn build_project(params: &Parameters, options: &GenerateOptions) -> Result<Project> {
    generate_project(params, options).context("Failed to generate project settings")
}

pub fn generate(
    params: &Parameters,
    options: &GenerateOptions,
    output: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let project = build_project(params, options)?;
    let json = if compact {
        serde_json::to_string(&project)?
    } else {
        serde_json::to_string_pretty(&project)?
    };

    match output {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write settings: {}", path.display()))?;
            info!(path = %path.display(), "Wrote project settings");
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub fn validate(params: &Parameters, options: &GenerateOptions) -> Result<()> {
    match generate_project(params, options) {
        Ok(project) => {
            for name in pluginci_config::unresolved_references(&project) {
                warn!(parameter = %name, "Parameter must be provided by the server or agent");
            }
            println!("Configuration is valid");
            println!("{}", summary(&project));
            Ok(())
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn params(params: &Parameters, options: &GenerateOptions, build_id: &str) -> Result<()> {
    let project = build_project(params, options)?;
    let id = RelativeId::new(build_id.trim());
    let build = project
        .build_type(&id)
        .ok_or_else(|| anyhow::anyhow!("Invalid build id: {}", id))?;

    let template = build
        .templates
        .first()
        .and_then(|t| project.template(t))
        .with_context(|| format!("Build {} has no template", id))?;

    println!("# {} ({})", build.name, project.qualify(&build.id));
    for parameter in &build.effective_params(template) {
        println!("{}={}", parameter.name, parameter.value);
    }
    Ok(())
}

fn summary(project: &Project) -> String {
    let builds: Vec<String> = project
        .build_types_order
        .iter()
        .map(|id| project.qualify(id))
        .collect();
    format!("{} build(s): {}", builds.len(), builds.join(", "))
}
