use std::path::PathBuf;

use crate::SteamError;

/// Returns the Steam installation root on Linux by probing the well-known
/// client locations, including the Flatpak install.
pub(crate) fn install_root() -> Result<PathBuf, SteamError> {
    let home = std::env::var_os("HOME")
        .map(PathBuf::from)
        .ok_or(SteamError::NotFound)?;

    let candidates = [
        home.join(".steam").join("steam"),
        home.join(".local").join("share").join("Steam"),
        home.join(".var")
            .join("app")
            .join("com.valvesoftware.Steam")
            .join(".local")
            .join("share")
            .join("Steam"),
    ];

    for candidate in candidates {
        if candidate.is_dir() {
            tracing::info!(path = %candidate.display(), "installation path found");
            return Ok(candidate);
        }
    }

    Err(SteamError::NotFound)
}
