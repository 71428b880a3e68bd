use netlayer_config::format;
use netlayer_config::paths::{PathResolver, locate};
use netlayer_config::{NetworkResolver, ProjectConfig};
use netlayer_core::{NetlayerError, Result};
use std::path::{Path, PathBuf};

const TEMPLATE: &str = r#"# netlayer network overrides
#
# Layered over the networks in netlayer.toml. Precedence, weakest first:
#   built-in defaults < home overrides < local overrides < project networks
#
# String values may read the environment with ${VAR} or ${VAR:-fallback}.

[defaultConfig]
# timeout = 20000
# gasMultiplier = 1

# [networks.sepolia]
# url = "https://sepolia.infura.io/v3/${INFURA_KEY}"
# accounts = ["${DEPLOYER_KEY}"]

# [networks.localhost]
# url = "http://127.0.0.1:${RPC_PORT:-8545}"
"#;

pub(super) fn cmd_init_home(force: bool) -> Result<()> {
    init_home(&PathResolver::new(std::env::current_dir()?), force)
}

pub(super) fn cmd_init_local(
    resolver: &NetworkResolver,
    project: &ProjectConfig,
    force: bool,
) -> Result<()> {
    let candidate = resolver
        .path_resolver(project)
        .local_path(project.local_networks_config.as_deref());
    write_template(&template_target(&candidate), force)
}

fn init_home(resolver: &PathResolver, force: bool) -> Result<()> {
    let home = resolver
        .home_path()
        .ok_or_else(|| NetlayerError::Config("no home directory found".into()))?;
    write_template(&template_target(&home), force)
}

/// A candidate without a supported extension is a stem; write its TOML form.
fn template_target(candidate: &Path) -> PathBuf {
    let supported = candidate
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| format::for_extension(e).is_some());
    if supported {
        candidate.to_path_buf()
    } else {
        let mut raw = candidate.as_os_str().to_owned();
        raw.push(".toml");
        PathBuf::from(raw)
    }
}

fn write_template(target: &Path, force: bool) -> Result<()> {
    // A sibling in the other format would shadow or be shadowed by the new file.
    let existing = target
        .exists()
        .then(|| target.to_path_buf())
        .or_else(|| locate(&target.with_extension("")));
    if let Some(existing) = existing {
        if !force {
            return Err(NetlayerError::Config(format!(
                "{} already exists (use --force to overwrite)",
                existing.display()
            )));
        }
    }

    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }
    if target.extension().is_some_and(|e| e == "json") {
        std::fs::write(target, "{\n  \"defaultConfig\": {},\n  \"networks\": {}\n}\n")?;
    } else {
        std::fs::write(target, TEMPLATE)?;
    }
    println!("✅ Created {}", target.display());
    Ok(())
}
