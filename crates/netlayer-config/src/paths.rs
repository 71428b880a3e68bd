use netlayer_core::{NetlayerError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::format;

/// Directory holding override files, under the home dir or the project root.
pub const CONFIG_DIR: &str = ".netlayer";

/// File stem of override files. The extension selects the format.
pub const OVERRIDE_STEM: &str = "networks";

/// Project option naming an explicit local override path.
pub const LOCAL_PATH_OPTION: &str = "local_networks_config";

/// Candidate override paths for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// `None` when the user has no home directory; the home layer is skipped.
    pub home: Option<PathBuf>,
    pub local: PathBuf,
    /// Whether `local` came from the project configuration.
    pub local_explicit: bool,
}

/// Computes where the home and local override files live.
#[derive(Debug, Clone)]
pub struct PathResolver {
    home: Option<PathBuf>,
    root: PathBuf,
}

impl PathResolver {
    /// Resolver for the invoking user's home directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            home: dirs::home_dir(),
            root: root.into(),
        }
    }

    pub fn with_home(home: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
            root: root.into(),
        }
    }

    pub fn home_dir(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    pub fn project_root(&self) -> &Path {
        &self.root
    }

    /// `<home>/.netlayer/networks`, the same every run.
    pub fn home_path(&self) -> Option<PathBuf> {
        self.home
            .as_ref()
            .map(|home| home.join(CONFIG_DIR).join(OVERRIDE_STEM))
    }

    /// `<root>/.netlayer/networks`, used when no explicit path is configured.
    pub fn default_local_path(&self) -> PathBuf {
        self.root.join(CONFIG_DIR).join(OVERRIDE_STEM)
    }

    /// Turn a configured path into a filesystem path: `~` expands to the home
    /// directory and relative paths are taken from the project root. Without
    /// a home directory a leading `~` is kept as a literal path component.
    pub fn expand(&self, configured: &str) -> PathBuf {
        if let Some(home) = &self.home {
            if configured == "~" {
                return home.clone();
            }
            if let Some(rest) = configured
                .strip_prefix("~/")
                .or_else(|| configured.strip_prefix("~\\"))
            {
                return home.join(rest);
            }
        }
        let path = Path::new(configured);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn local_path(&self, explicit: Option<&str>) -> PathBuf {
        match explicit {
            Some(configured) => self.expand(configured),
            None => self.default_local_path(),
        }
    }

    /// Compute both candidate paths. An explicitly configured local path must
    /// exist; the conventional paths may be absent.
    pub fn resolve(&self, explicit: Option<&str>) -> Result<ResolvedPaths> {
        let home = self.home_path();
        let local = self.local_path(explicit);

        if let Some(configured) = explicit {
            if locate(&local).is_none() {
                return Err(NetlayerError::MissingConfigFile {
                    option: LOCAL_PATH_OPTION.into(),
                    path: configured.to_string(),
                });
            }
        }

        debug!(
            home = ?home.as_deref().map(Path::display),
            local = %local.display(),
            "resolved override paths"
        );
        Ok(ResolvedPaths {
            home,
            local,
            local_explicit: explicit.is_some(),
        })
    }
}

/// Find the file a candidate path refers to.
///
/// A path ending in a supported extension names exactly that file. Any other
/// path is a stem: `<path>.toml` then `<path>.json` are tried, then the path
/// itself.
pub fn locate(path: &Path) -> Option<PathBuf> {
    let has_known_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| format::for_extension(e).is_some());

    if has_known_extension {
        return path.is_file().then(|| path.to_path_buf());
    }

    for source in format::FORMATS {
        let candidate = with_appended_extension(path, source.extension());
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    path.is_file().then(|| path.to_path_buf())
}

fn with_appended_extension(path: &Path, extension: &str) -> PathBuf {
    let mut raw = OsString::from(path.as_os_str());
    raw.push(".");
    raw.push(extension);
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventional_paths() {
        let resolver = PathResolver::with_home("/home/dev", "/work/app");
        assert_eq!(
            resolver.home_path(),
            Some(PathBuf::from("/home/dev/.netlayer/networks"))
        );
        assert_eq!(
            resolver.default_local_path(),
            PathBuf::from("/work/app/.netlayer/networks")
        );
        assert_eq!(resolver.local_path(None), resolver.default_local_path());
    }

    #[test]
    fn test_expand_tilde_relative_absolute() {
        let resolver = PathResolver::with_home("/home/dev", "/work/app");
        assert_eq!(resolver.expand("~"), PathBuf::from("/home/dev"));
        assert_eq!(
            resolver.expand("~/xyz/networks.toml"),
            PathBuf::from("/home/dev/xyz/networks.toml")
        );
        assert_eq!(
            resolver.expand("config/networks.json"),
            PathBuf::from("/work/app/config/networks.json")
        );
        #[cfg(unix)]
        assert_eq!(resolver.expand("/etc/networks.toml"), PathBuf::from("/etc/networks.toml"));
    }

    #[test]
    fn test_appended_extension_keeps_dots() {
        assert_eq!(
            with_appended_extension(Path::new("/a/networks.local"), "toml"),
            PathBuf::from("/a/networks.local.toml")
        );
    }

    #[test]
    fn test_no_home_dir_skips_home_layer() {
        let resolver = PathResolver {
            home: None,
            root: PathBuf::from("/work/app"),
        };
        assert_eq!(resolver.home_path(), None);
        assert_eq!(
            resolver.expand("~/networks.toml"),
            PathBuf::from("/work/app/~/networks.toml")
        );

        let paths = resolver.resolve(None).unwrap();
        assert_eq!(paths.home, None);
        assert_eq!(paths.local, PathBuf::from("/work/app/.netlayer/networks"));
    }
}
