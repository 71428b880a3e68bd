use netlayer_core::{Layer, NetworkConfig, NetworksMap, Result, default_network_config};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::loader::{LoadedOverride, OverrideLoader};
use crate::merge::NetworkMerger;
use crate::paths::{PathResolver, ResolvedPaths};
use crate::project::ProjectConfig;

/// Outcome of resolving a project's networks, with the inputs that produced it.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub paths: ResolvedPaths,
    pub defaults: NetworkConfig,
    pub declared: NetworksMap,
    pub home: LoadedOverride,
    pub local: LoadedOverride,
    pub networks: NetworksMap,
}

impl Resolution {
    /// Which layer supplied each key of a resolved network.
    pub fn explain(&self, name: &str) -> Option<BTreeMap<String, Layer>> {
        NetworkMerger::new(
            &self.defaults,
            &self.declared,
            &self.home.contents,
            &self.local.contents,
        )
        .explain(name)
    }
}

/// Resolves a project's networks against the home and local overrides.
#[derive(Debug)]
pub struct NetworkResolver {
    home: Option<PathBuf>,
    defaults: NetworkConfig,
    loader: OverrideLoader,
}

impl Default for NetworkResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkResolver {
    pub fn new() -> Self {
        Self {
            home: None,
            defaults: default_network_config(),
            loader: OverrideLoader::new(),
        }
    }

    /// Use `home` instead of the invoking user's home directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn with_loader(mut self, loader: OverrideLoader) -> Self {
        self.loader = loader;
        self
    }

    pub fn with_defaults(mut self, defaults: NetworkConfig) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn path_resolver(&self, project: &ProjectConfig) -> PathResolver {
        match &self.home {
            Some(home) => PathResolver::with_home(home, &project.root),
            None => PathResolver::new(&project.root),
        }
    }

    /// Compute paths, load both overrides and merge. Any failure aborts the
    /// whole resolution.
    pub fn resolve(&self, project: &ProjectConfig) -> Result<Resolution> {
        let paths = self
            .path_resolver(project)
            .resolve(project.local_networks_config.as_deref())?;

        let home = match &paths.home {
            Some(path) => self.loader.load_source(path)?,
            None => {
                debug!("no home directory, skipping home override");
                LoadedOverride::default()
            }
        };
        let local = self.loader.load_source(&paths.local)?;

        let networks = NetworkMerger::new(
            &self.defaults,
            &project.networks,
            &home.contents,
            &local.contents,
        )
        .merge();

        info!(
            networks = networks.len(),
            home = home.file.is_some(),
            local = local.file.is_some(),
            "resolved networks"
        );

        Ok(Resolution {
            paths,
            defaults: self.defaults.clone(),
            declared: project.networks.clone(),
            home,
            local,
            networks,
        })
    }

    /// Resolve and replace `project.networks` with the result. On error the
    /// project is left untouched.
    pub fn extend(&self, project: &mut ProjectConfig) -> Result<()> {
        let resolution = self.resolve(project)?;
        debug!(
            declared = project.networks.len(),
            resolved = resolution.networks.len(),
            "extending project networks"
        );
        project.networks = resolution.networks;
        Ok(())
    }
}
