//! Relative identifiers.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Longest id the CI server accepts.
pub const MAX_ID_LENGTH: usize = 225;

/// Project-relative identifier of a VCS root, template or build.
///
/// Relative ids are what builds and requirement tokens refer to; the server
/// qualifies them with the owning project's id when the settings are applied.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct RelativeId(String);

impl RelativeId {
    /// Create a RelativeId without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render the absolute id, `{project}_{id}`, when a project id is known.
    pub fn qualify(&self, project_id: Option<&str>) -> String {
        match project_id {
            Some(project) if !project.is_empty() => format!("{}_{}", project, self.0),
            _ => self.0.clone(),
        }
    }
}

impl std::str::FromStr for RelativeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {}
            _ => {
                return Err(Error::InvalidInput(format!(
                    "id must start with a latin letter: '{}'",
                    s
                )));
            }
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(Error::InvalidInput(format!(
                "id may only contain latin letters, digits and underscores: '{}'",
                s
            )));
        }
        if s.len() > MAX_ID_LENGTH {
            return Err(Error::InvalidInput(format!(
                "id is longer than {} characters",
                MAX_ID_LENGTH
            )));
        }
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for RelativeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Convert a human readable name into an id.
///
/// Words are split on anything that is not a latin letter, digit or
/// underscore, capitalised and joined. Leading non-letters are dropped.
pub fn to_id(name: &str) -> String {
    let joined: String = name
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();

    joined
        .trim_start_matches(|c: char| !c.is_ascii_alphabetic())
        .chars()
        .take(MAX_ID_LENGTH)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
