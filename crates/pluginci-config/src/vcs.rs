//! VCS root resolution.

use crate::source::ParameterSource;
use crate::{ConfigError, ConfigResult};
use pluginci_core::vcs::{AuthMethodKind, BranchRule, CheckoutPolicy};
use pluginci_core::{AuthMethod, Project, RelativeId, VcsRoot, to_id};
use tracing::debug;

/// Build the Git VCS root from `vcs.*` parameters and register it with the project.
pub fn create_vcs_root(
    project: &mut Project,
    params: &impl ParameterSource,
) -> ConfigResult<VcsRoot> {
    let name = params.parameter("vcs.name");
    if name.trim().is_empty() {
        return Err(ConfigError::MissingParameter("vcs.name".to_string()));
    }
    let url = params.parameter("vcs.url");
    let branch = params.parameter_or("vcs.branch", "master");

    let mut branch_spec = vec![BranchRule::Branch(branch.to_string())];
    branch_spec.extend(
        params
            .parameter("vcs.branches")
            .split(',')
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(|b| BranchRule::Branch(b.to_string())),
    );
    branch_spec.push(BranchRule::AllTags);

    let root = VcsRoot {
        id: RelativeId::new(to_id(name)),
        name: name.to_string(),
        url: url.to_string(),
        branch: format!("refs/heads/{}", branch),
        branch_spec,
        use_tags_as_branches: true,
        checkout_policy: CheckoutPolicy::NoMirrors,
        auth_method: configure_authentication(params)?,
    };

    debug!(id = %root.id, url = %root.url, auth = %root.auth_method.kind(), "Created VCS root");
    project.register_vcs_root(root.clone());
    Ok(root)
}

/// Select the authentication method named by `vcs.auth.method`.
pub fn configure_authentication(params: &impl ParameterSource) -> ConfigResult<AuthMethod> {
    let method = params.parameter_or("vcs.auth.method", "anonymous");
    let kind: AuthMethodKind = method
        .parse()
        .map_err(|_| ConfigError::InvalidAuthMethod(method.to_string()))?;

    let auth = match kind {
        AuthMethodKind::Anonymous => AuthMethod::Anonymous,
        AuthMethodKind::UploadedKey => AuthMethod::UploadedKey {
            username: non_blank(params, "vcs.auth.username"),
            uploaded_key: non_blank(params, "vcs.auth.uploadedkey"),
            passphrase: non_blank(params, "vcs.auth.passphrase"),
        },
        AuthMethodKind::Password => AuthMethod::Password {
            username: non_blank(params, "vcs.auth.username"),
            password: non_blank(params, "vcs.auth.password"),
        },
    };
    Ok(auth)
}

fn non_blank(params: &impl ParameterSource, name: &str) -> Option<String> {
    Some(params.parameter(name))
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
}
