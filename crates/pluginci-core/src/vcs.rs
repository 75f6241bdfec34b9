//! VCS root types.

use serde::{Deserialize, Serialize};

use crate::RelativeId;

/// A Git VCS root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcsRoot {
    pub id: RelativeId,
    /// Display name.
    pub name: String,
    /// Repository URL.
    pub url: String,
    /// Default branch ref, e.g. `refs/heads/master`.
    pub branch: String,
    /// Branches and tags the server monitors, in order.
    pub branch_spec: Vec<BranchRule>,
    pub use_tags_as_branches: bool,
    pub checkout_policy: CheckoutPolicy,
    pub auth_method: AuthMethod,
}

impl VcsRoot {
    /// The branch specification as the server expects it, one rule per line.
    pub fn branch_spec_text(&self) -> String {
        self.branch_spec
            .iter()
            .map(|rule| rule.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One line of a branch specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum BranchRule {
    /// Include a single branch under `refs/heads/`.
    Branch(String),
    /// Include every tag.
    AllTags,
}

const BRANCH_PREFIX: &str = "+:refs/heads/(";
const ALL_TAGS: &str = "+:refs/tags/(*)";

impl std::fmt::Display for BranchRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BranchRule::Branch(name) => write!(f, "{}{})", BRANCH_PREFIX, name),
            BranchRule::AllTags => write!(f, "{}", ALL_TAGS),
        }
    }
}

impl From<BranchRule> for String {
    fn from(rule: BranchRule) -> Self {
        rule.to_string()
    }
}

impl TryFrom<String> for BranchRule {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s == ALL_TAGS {
            return Ok(BranchRule::AllTags);
        }
        s.strip_prefix(BRANCH_PREFIX)
            .and_then(|rest| rest.strip_suffix(')'))
            .map(|name| BranchRule::Branch(name.to_string()))
            .ok_or_else(|| format!("Unknown branch rule: {}", s))
    }
}

/// How agents check out sources. Generated roots never use mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutPolicy {
    NoMirrors,
}

/// Credentials used to reach the repository.
///
/// Unset fields stay `None` and are left out of the serialized settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AuthMethod {
    Anonymous,
    UploadedKey {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        username: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        uploaded_key: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        passphrase: Option<String>,
    },
    Password {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        username: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        password: Option<String>,
    },
}

impl AuthMethod {
    pub fn kind(&self) -> AuthMethodKind {
        match self {
            AuthMethod::Anonymous => AuthMethodKind::Anonymous,
            AuthMethod::UploadedKey { .. } => AuthMethodKind::UploadedKey,
            AuthMethod::Password { .. } => AuthMethodKind::Password,
        }
    }
}

/// The authentication method names accepted in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethodKind {
    Anonymous,
    UploadedKey,
    Password,
}

impl std::fmt::Display for AuthMethodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthMethodKind::Anonymous => write!(f, "anonymous"),
            AuthMethodKind::UploadedKey => write!(f, "uploadedkey"),
            AuthMethodKind::Password => write!(f, "password"),
        }
    }
}

impl std::str::FromStr for AuthMethodKind {
    type Err = String;

    /// Surrounding whitespace is ignored; names are case sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "anonymous" => Ok(AuthMethodKind::Anonymous),
            "uploadedkey" => Ok(AuthMethodKind::UploadedKey),
            "password" => Ok(AuthMethodKind::Password),
            _ => Err(format!("Unknown authentication method: {}", s)),
        }
    }
}
