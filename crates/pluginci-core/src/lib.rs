//! Core domain types for PluginCI.
//!
//! This crate contains:
//! - Relative identifiers and the name-to-id slug transform
//! - Parameters and ordered parameter sets
//! - VCS root and authentication types
//! - The shared build template
//! - Build definitions and agent requirements
//! - The project that collects everything handed to the CI server

pub mod build;
pub mod error;
pub mod id;
pub mod parameter;
pub mod project;
pub mod template;
pub mod vcs;

pub use build::{AgentRequirement, BuildType, Requirement};
pub use error::{Error, Result};
pub use id::{RelativeId, to_id};
pub use parameter::{Parameter, ParameterSet};
pub use project::Project;
pub use template::Template;
pub use vcs::{AuthMethod, VcsRoot};
