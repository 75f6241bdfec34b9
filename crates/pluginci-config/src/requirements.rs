//! Agent requirement assignment.

use crate::source::ParameterSource;
use crate::{ConfigError, ConfigResult};
use pluginci_core::{AgentRequirement, BuildType, RelativeId};
use tracing::debug;

/// One `agent.requirements` token, `[buildId=]name`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RequirementToken<'a> {
    build_id: Option<&'a str>,
    name: &'a str,
}

impl<'a> RequirementToken<'a> {
    /// The name is the text after the last `=`, the build id the text before the first.
    fn parse(token: &'a str) -> Self {
        let parts: Vec<&str> = token.split('=').collect();
        let name = parts.last().copied().unwrap_or_default().trim();
        let build_id = if parts.len() > 1 {
            Some(parts[0].trim()).filter(|id| !id.is_empty())
        } else {
            None
        };
        Self { build_id, name }
    }
}

/// Attach the requirements listed in `agent.requirements` to the generated builds.
///
/// A token without a build id applies to every build. A build id that
/// matches no build is an error, reported before the token is applied.
pub fn configure_requirements(
    params: &impl ParameterSource,
    builds: &mut [BuildType],
) -> ConfigResult<()> {
    let requirements = params.parameter("agent.requirements");
    if requirements.trim().is_empty() {
        return Ok(());
    }

    for token in requirements.split(',').map(RequirementToken::parse) {
        let target = match token.build_id {
            Some(id) => {
                let id: RelativeId = id
                    .parse()
                    .map_err(|_| ConfigError::InvalidBuildId(id.to_string()))?;
                if !builds.iter().any(|b| b.id == id) {
                    return Err(ConfigError::InvalidBuildId(id.to_string()));
                }
                Some(id)
            }
            None => None,
        };

        let requirement: AgentRequirement = token
            .name
            .parse()
            .map_err(|_| ConfigError::InvalidRequirement(token.name.to_string()))?;

        for build in builds
            .iter_mut()
            .filter(|b| target.as_ref().is_none_or(|id| &b.id == id))
        {
            debug!(build = %build.id, %requirement, "Adding agent requirement");
            build.requirements.push(requirement.requirement());
        }
    }

    Ok(())
}
