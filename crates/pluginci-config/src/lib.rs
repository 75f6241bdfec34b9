//! Build matrix generation for PluginCI.
//!
//! This crate handles:
//! - Loading parameters (KDL files, `name=value` overrides)
//! - VCS root resolution and authentication
//! - The shared build template
//! - Per-version build expansion and the report build
//! - Agent requirement assignment

pub mod error;
pub mod generate;
pub mod matrix;
pub mod report;
pub mod requirements;
pub mod source;
pub mod template;
pub mod vcs;

pub use error::{ConfigError, ConfigResult, ErrorKind};
pub use generate::{GenerateOptions, generate, unresolved_references};
pub use source::{ParameterSource, Parameters, parse_assignment};
