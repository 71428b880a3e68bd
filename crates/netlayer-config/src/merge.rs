//! Layered merge of network settings.
//!
//! Every network name found in the project, the home override or the local
//! override is resolved by applying, weakest first:
//!
//! 1. built-in defaults
//! 2. home `defaultConfig`
//! 3. home `networks[name]`
//! 4. local `defaultConfig`
//! 5. local `networks[name]`
//! 6. project `networks[name]`
//!
//! Each layer overwrites same-named keys of the layers before it. The
//! overwrite is shallow: a nested value (e.g. `httpHeaders`) is replaced
//! whole.

use netlayer_core::{Layer, NetworkConfig, NetworksMap, OverrideFile};
use std::collections::{BTreeMap, BTreeSet};

pub struct NetworkMerger<'a> {
    defaults: &'a NetworkConfig,
    project: &'a NetworksMap,
    home: &'a OverrideFile,
    local: &'a OverrideFile,
}

impl<'a> NetworkMerger<'a> {
    pub fn new(
        defaults: &'a NetworkConfig,
        project: &'a NetworksMap,
        home: &'a OverrideFile,
        local: &'a OverrideFile,
    ) -> Self {
        Self {
            defaults,
            project,
            home,
            local,
        }
    }

    /// Union of the network names declared by the three sources.
    pub fn network_names(&self) -> BTreeSet<&'a str> {
        self.project
            .keys()
            .chain(self.home.networks.keys())
            .chain(self.local.networks.keys())
            .map(String::as_str)
            .collect()
    }

    fn declares(&self, name: &str) -> bool {
        self.project.contains_key(name)
            || self.home.networks.contains_key(name)
            || self.local.networks.contains_key(name)
    }

    fn layers(&self, name: &str) -> [(Layer, Option<&'a NetworkConfig>); 6] {
        [
            (Layer::Defaults, Some(self.defaults)),
            (Layer::HomeDefault, Some(&self.home.default_config)),
            (Layer::HomeNetwork, self.home.networks.get(name)),
            (Layer::LocalDefault, Some(&self.local.default_config)),
            (Layer::LocalNetwork, self.local.networks.get(name)),
            (Layer::Project, self.project.get(name)),
        ]
    }

    /// Resolved settings for one network, or `None` if no source declares it.
    pub fn merge_network(&self, name: &str) -> Option<NetworkConfig> {
        if !self.declares(name) {
            return None;
        }
        let mut resolved = NetworkConfig::new();
        for (_, config) in self.layers(name) {
            for (key, value) in config.into_iter().flatten() {
                resolved.insert(key.clone(), value.clone());
            }
        }
        Some(resolved)
    }

    /// Resolve every declared network.
    pub fn merge(&self) -> NetworksMap {
        self.network_names()
            .into_iter()
            .filter_map(|name| Some((name.to_string(), self.merge_network(name)?)))
            .collect()
    }

    /// For each resolved key of `name`, the layer its final value came from.
    pub fn explain(&self, name: &str) -> Option<BTreeMap<String, Layer>> {
        if !self.declares(name) {
            return None;
        }
        let mut origins = BTreeMap::new();
        for (layer, config) in self.layers(name) {
            for key in config.into_iter().flat_map(|c| c.keys()) {
                origins.insert(key.clone(), layer);
            }
        }
        Some(origins)
    }
}
