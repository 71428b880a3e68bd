use netlayer_core::{NetlayerError, NetworksMap, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the project configuration file.
pub const PROJECT_FILE: &str = "netlayer.toml";

/// A project's own configuration (`netlayer.toml`).
///
/// ```toml
/// local_networks_config = "~/secrets/networks.toml"   # optional
///
/// [networks.sepolia]
/// url = "https://rpc.sepolia.org"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directory the project file lives in. Relative override paths are
    /// taken from here.
    #[serde(skip)]
    pub root: PathBuf,
    /// Explicit local override path. When set, the file must exist.
    pub local_networks_config: Option<String>,
    /// Networks declared by the project.
    pub networks: NetworksMap,
}

impl ProjectConfig {
    pub fn new(root: impl Into<PathBuf>, networks: NetworksMap) -> Self {
        Self {
            root: root.into(),
            local_networks_config: None,
            networks,
        }
    }

    pub fn with_local_networks_config(mut self, path: impl Into<String>) -> Self {
        self.local_networks_config = Some(path.into());
        self
    }

    /// Load a project file. A directory is taken to contain `netlayer.toml`.
    pub fn load(path: &Path) -> Result<Self> {
        let path = if path.is_dir() {
            path.join(PROJECT_FILE)
        } else {
            path.to_path_buf()
        };
        if !path.is_file() {
            return Err(NetlayerError::Config(format!(
                "project file not found: {}",
                path.display()
            )));
        }

        info!(path = %path.display(), "loading project configuration");
        let raw = std::fs::read_to_string(&path)?;
        let mut project: ProjectConfig =
            toml::from_str(&raw).map_err(|e| NetlayerError::Parse {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        project.root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(project)
    }

    /// Walk up from `start` to the nearest directory holding `netlayer.toml`.
    pub fn find(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(PROJECT_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Load the nearest project file at or above `start`.
    pub fn discover(start: &Path) -> Result<Self> {
        let path = Self::find(start).ok_or_else(|| {
            NetlayerError::Config(format!(
                "no {PROJECT_FILE} found in {} or any parent directory",
                start.display()
            ))
        })?;
        Self::load(&path)
    }
}
