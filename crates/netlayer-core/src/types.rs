use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::fmt;

/// Settings for a single network (url, gas policy, headers, timeout...).
/// Treated as an opaque key/value bag; keys are kept sorted.
pub type NetworkConfig = Map<String, Value>;

/// Network name → settings.
pub type NetworksMap = BTreeMap<String, NetworkConfig>;

/// Contents of a home or local override file.
///
/// `default_config` applies to every network the file layers over, while
/// `networks` carries per-network overrides. Both are optional on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideFile {
    #[serde(rename = "defaultConfig", alias = "default_config")]
    pub default_config: NetworkConfig,
    pub networks: NetworksMap,
}

impl OverrideFile {
    /// True when the file contributes nothing to any network.
    pub fn is_empty(&self) -> bool {
        self.default_config.is_empty() && self.networks.is_empty()
    }
}

/// One step of the merge, weakest first. Later layers overwrite earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Defaults,
    HomeDefault,
    HomeNetwork,
    LocalDefault,
    LocalNetwork,
    Project,
}

impl Layer {
    /// All layers in application order.
    pub const ORDER: [Layer; 6] = [
        Layer::Defaults,
        Layer::HomeDefault,
        Layer::HomeNetwork,
        Layer::LocalDefault,
        Layer::LocalNetwork,
        Layer::Project,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Layer::Defaults => "built-in defaults",
            Layer::HomeDefault => "home defaultConfig",
            Layer::HomeNetwork => "home networks",
            Layer::LocalDefault => "local defaultConfig",
            Layer::LocalNetwork => "local networks",
            Layer::Project => "project",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Built-in settings every resolved network starts from.
pub fn default_network_config() -> NetworkConfig {
    let mut config = NetworkConfig::new();
    config.insert("accounts".into(), json!("remote"));
    config.insert("gas".into(), json!("auto"));
    config.insert("gasMultiplier".into(), json!(1));
    config.insert("gasPrice".into(), json!("auto"));
    config.insert("httpHeaders".into(), Value::Object(Map::new()));
    config.insert("timeout".into(), json!(20000));
    config
}
