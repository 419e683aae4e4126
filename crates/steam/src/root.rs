use std::path::{Path, PathBuf};

use crate::SteamError;

/// Token expected somewhere in any plausible Steam root path.
const ROOT_MARKER: &str = "steam";

/// Where a root was configured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootOrigin {
    /// The client's own installation directory.
    Primary,
    /// An extra library, from libraryfolders.vdf or user input.
    Library,
}

/// A directory expected to contain one subdirectory per installed game.
///
/// Roots are resolved once at the start of a run and read-only afterwards;
/// the stored path is always normalized down to the `steamapps/common`
/// container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    path: PathBuf,
    origin: RootOrigin,
}

impl Root {
    /// Validates and normalizes the primary installation root.
    ///
    /// The path must exist as a directory and carry the Steam marker token
    /// somewhere in its chain; anything else is the fatal "no primary root"
    /// condition and ends the run.
    pub fn primary(path: impl Into<PathBuf>) -> Result<Self, SteamError> {
        let path: PathBuf = path.into();
        if !path.is_dir() {
            return Err(SteamError::InvalidRoot(format!(
                "{} is not a directory",
                path.display()
            )));
        }
        if !contains_marker(&path) {
            return Err(SteamError::InvalidRoot(format!(
                "{} does not look like a Steam directory",
                path.display()
            )));
        }

        let path = normalize_root(&path);
        tracing::info!(path = %path.display(), "game installations located");
        Ok(Self {
            path,
            origin: RootOrigin::Primary,
        })
    }

    /// Vets a user-supplied or discovered library root.
    ///
    /// Entries that do not exist or do not look like Steam libraries are
    /// dropped with a warning; a bad library never aborts the run.
    pub fn library(path: impl Into<PathBuf>) -> Option<Self> {
        let path: PathBuf = path.into();
        if !path.is_dir() || !contains_marker(&path) {
            tracing::warn!(path = %path.display(), "invalid or missing library, skipping");
            return None;
        }
        Some(Self {
            path: normalize_root(&path),
            origin: RootOrigin::Library,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> RootOrigin {
        self.origin
    }
}

/// Appends `steamapps/common` unless the path already descends through a
/// `steamapps` component. Idempotent: a normalized path passes through
/// unchanged.
pub fn normalize_root(path: &Path) -> PathBuf {
    let has_steamapps = path
        .components()
        .any(|c| c.as_os_str().to_string_lossy().eq_ignore_ascii_case("steamapps"));

    if has_steamapps {
        path.to_path_buf()
    } else {
        path.join("steamapps").join("common")
    }
}

fn contains_marker(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().contains(ROOT_MARKER)
}
