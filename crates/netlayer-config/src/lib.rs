//! # netlayer-config
//!
//! Layered network configuration. A project's declared networks are merged
//! with an optional home override (`~/.netlayer/networks.{toml,json}`) and an
//! optional local override (`<project>/.netlayer/networks.{toml,json}` or an
//! explicit `local_networks_config` path), on top of built-in defaults.
//!
//! Precedence, weakest first: defaults, home, local, project.

pub mod format;
pub mod loader;
pub mod merge;
pub mod paths;
pub mod project;
pub mod resolve;

pub use format::{JsonFormat, SourceFormat, TomlFormat};
pub use loader::{LoadedOverride, OverrideLoader};
pub use merge::NetworkMerger;
pub use paths::{LOCAL_PATH_OPTION, PathResolver, ResolvedPaths};
pub use project::{PROJECT_FILE, ProjectConfig};
pub use resolve::{NetworkResolver, Resolution};
