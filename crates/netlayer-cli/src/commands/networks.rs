use console::style;
use netlayer_config::{NetworkResolver, ProjectConfig, Resolution};
use netlayer_core::{NetlayerError, NetworkConfig, NetworksMap, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write;

#[derive(Serialize)]
struct NetworksDocument<'a> {
    networks: &'a NetworksMap,
}

pub(super) fn cmd_networks(resolver: &NetworkResolver, project: &ProjectConfig, json: bool) -> Result<()> {
    let resolution = resolver.resolve(project)?;
    print!("{}", render_networks(&resolution.networks, json)?);
    Ok(())
}

pub(super) fn cmd_show(
    resolver: &NetworkResolver,
    project: &ProjectConfig,
    name: &str,
    json: bool,
    explain: bool,
) -> Result<()> {
    let resolution = resolver.resolve(project)?;
    print!("{}", render_show(&resolution, name, json, explain)?);
    Ok(())
}

fn render_networks(networks: &NetworksMap, json: bool) -> Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(networks)?));
    }
    let networks: NetworksMap = networks
        .iter()
        .map(|(name, config)| (name.clone(), without_nulls(config)))
        .collect();
    Ok(toml::to_string_pretty(&NetworksDocument {
        networks: &networks,
    })?)
}

fn render_show(resolution: &Resolution, name: &str, json: bool, explain: bool) -> Result<String> {
    let network = resolution.networks.get(name).ok_or_else(|| {
        NetlayerError::Config(format!(
            "unknown network '{name}' (known: {})",
            resolution
                .networks
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })?;

    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(network)?));
    }
    if !explain {
        return Ok(toml::to_string_pretty(&without_nulls(network))?);
    }

    let origins = resolution.explain(name).unwrap_or_default();
    let width = network.keys().map(|k| k.len()).max().unwrap_or(0);
    let mut out = format!("{}\n", style(name).bold());
    for (key, value) in network {
        let layer = origins
            .get(key)
            .map(|l| l.label())
            .unwrap_or("unknown");
        let _ = writeln!(
            out,
            "  {key:<width$}  {}  {}",
            serde_json::to_string(value)?,
            style(format!("({layer})")).dim()
        );
    }
    Ok(out)
}

/// TOML has no null, so null settings are left out of TOML output.
fn without_nulls(config: &NetworkConfig) -> NetworkConfig {
    config
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.clone(), strip_nulls(value)))
        .collect()
}

fn strip_nulls(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(without_nulls(map)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .filter(|item| !item.is_null())
                .map(strip_nulls)
                .collect(),
        ),
        other => other.clone(),
    }
}
