use std::path::PathBuf;

use crate::SteamError;

/// Provides the Steam installation root.
///
/// Registry lookups, well-known path probing and any interactive fallback
/// all sit behind this seam; the detection engine only ever sees an
/// already-resolved path.
pub trait InstallRootProvider {
    fn install_root(&self) -> Result<PathBuf, SteamError>;
}

/// Platform-default root lookup.
pub struct DefaultProvider;

impl InstallRootProvider for DefaultProvider {
    fn install_root(&self) -> Result<PathBuf, SteamError> {
        platform_install_root()
    }
}

/// A fixed, pre-resolved root, e.g. from a command-line flag.
pub struct FixedRoot(pub PathBuf);

impl InstallRootProvider for FixedRoot {
    fn install_root(&self) -> Result<PathBuf, SteamError> {
        Ok(self.0.clone())
    }
}

#[cfg(target_os = "windows")]
fn platform_install_root() -> Result<PathBuf, SteamError> {
    crate::provider_windows::install_root()
}

#[cfg(target_os = "linux")]
fn platform_install_root() -> Result<PathBuf, SteamError> {
    crate::provider_linux::install_root()
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
fn platform_install_root() -> Result<PathBuf, SteamError> {
    Err(SteamError::UnsupportedPlatform)
}
