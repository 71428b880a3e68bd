use console::style;
use netlayer_config::paths::locate;
use netlayer_config::{LOCAL_PATH_OPTION, NetworkResolver, PathResolver, ProjectConfig};
use netlayer_core::Result;
use std::fmt::Write;
use std::path::Path;

pub(super) fn cmd_paths(resolver: &NetworkResolver, project: &ProjectConfig) -> Result<()> {
    print!("{}", render_paths(&resolver.path_resolver(project), project));
    Ok(())
}

fn render_paths(resolver: &PathResolver, project: &ProjectConfig) -> String {
    let explicit = project.local_networks_config.as_deref();
    let mut out = format!("{}\n", style("Override files (weakest first)").bold());

    match resolver.home_path() {
        Some(home) => candidate(&mut out, "home", &home, "conventional", false),
        None => {
            let _ = writeln!(out, "  {:<7} {}", "home", style("no home directory, skipped").dim());
        }
    }

    let local = resolver.local_path(explicit);
    match explicit {
        Some(configured) => candidate(
            &mut out,
            "local",
            &local,
            &format!("{LOCAL_PATH_OPTION} = \"{configured}\""),
            true,
        ),
        None => candidate(&mut out, "local", &local, "conventional", false),
    }

    let _ = writeln!(
        out,
        "  {:<7} {} ({} networks)",
        "project",
        project.root.display(),
        project.networks.len()
    );
    out
}

fn candidate(out: &mut String, label: &str, path: &Path, origin: &str, required: bool) {
    let status = match locate(path) {
        Some(file) => style(format!("found {}", file.display())).green(),
        None if required => style("missing (required)".to_string()).red(),
        None => style("not found".to_string()).dim(),
    };
    let _ = writeln!(out, "  {label:<7} {} [{origin}]", path.display());
    let _ = writeln!(out, "          {status}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use netlayer_core::NetworksMap;

    #[test]
    fn test_paths_reports_found_and_missing_files() {
        let home = tempfile::tempdir().unwrap();
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(home.path().join(".netlayer")).unwrap();
        std::fs::write(home.path().join(".netlayer").join("networks.toml"), "").unwrap();

        let project = ProjectConfig::new(root.path(), NetworksMap::new());
        let resolver = NetworkResolver::new().with_home(home.path());
        let out = render_paths(&resolver.path_resolver(&project), &project);

        let found = home.path().join(".netlayer").join("networks.toml");
        assert!(out.contains(&format!("found {}", found.display())));
        assert!(out.contains("not found"));
        assert!(out.contains("[conventional]"));
        assert!(out.contains("(0 networks)"));
        assert!(cmd_paths(&resolver, &project).is_ok());
    }

    #[test]
    fn test_paths_flags_missing_explicit_local_path() {
        let home = tempfile::tempdir().unwrap();
        let root = tempfile::tempdir().unwrap();
        let project = ProjectConfig::new(root.path(), NetworksMap::new())
            .with_local_networks_config("config/missing.json");
        let resolver = PathResolver::with_home(home.path(), root.path());

        let out = render_paths(&resolver, &project);
        assert!(out.contains("local_networks_config = \"config/missing.json\""));
        assert!(out.contains("missing (required)"));
    }
}
