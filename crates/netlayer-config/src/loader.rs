use netlayer_core::{NetlayerError, OverrideFile, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::format::{self, EnvLookup};
use crate::paths::locate;

/// An override file as found on disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedOverride {
    /// Path that was probed (may be a stem without extension).
    pub candidate: PathBuf,
    /// File that was actually read, if any.
    pub file: Option<PathBuf>,
    pub contents: OverrideFile,
}

/// Loads home and local override files.
pub struct OverrideLoader {
    env: Box<EnvLookup>,
}

impl Default for OverrideLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OverrideLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverrideLoader").finish_non_exhaustive()
    }
}

impl OverrideLoader {
    /// Loader that evaluates sources against the process environment.
    pub fn new() -> Self {
        Self::with_env(|name| std::env::var(name).ok())
    }

    /// Loader with a custom environment lookup.
    pub fn with_env(lookup: impl Fn(&str) -> Option<String> + 'static) -> Self {
        Self {
            env: Box::new(lookup),
        }
    }

    /// Load the override at `path`. A missing file is not an error; it loads
    /// as an empty override.
    pub fn load(&self, path: &Path) -> Result<OverrideFile> {
        self.load_source(path).map(|loaded| loaded.contents)
    }

    /// Like [`load`](Self::load), but also reports which file was read.
    pub fn load_source(&self, path: &Path) -> Result<LoadedOverride> {
        let Some(file) = locate(path) else {
            debug!(candidate = %path.display(), "override file not found, skipping");
            return Ok(LoadedOverride {
                candidate: path.to_path_buf(),
                file: None,
                contents: OverrideFile::default(),
            });
        };

        let contents = self.load_file(&file)?;
        Ok(LoadedOverride {
            candidate: path.to_path_buf(),
            file: Some(file),
            contents,
        })
    }

    /// Read and parse a file known to exist.
    pub fn load_file(&self, file: &Path) -> Result<OverrideFile> {
        let extension = file
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let source = format::for_extension(extension).ok_or_else(|| {
            NetlayerError::UnsupportedFormat {
                path: file.to_path_buf(),
                extension: extension.to_string(),
            }
        })?;

        let raw = std::fs::read_to_string(file)?;
        if raw.trim().is_empty() {
            debug!(path = %file.display(), "override file is empty");
            return Ok(OverrideFile::default());
        }

        let contents = source
            .parse(&raw, self.env.as_ref())
            .map_err(|reason| NetlayerError::Parse {
                path: file.to_path_buf(),
                reason,
            })?;

        info!(
            path = %file.display(),
            format = source.name(),
            networks = contents.networks.len(),
            "loaded override file"
        );
        Ok(contents)
    }
}
