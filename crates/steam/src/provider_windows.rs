use std::path::PathBuf;

use crate::SteamError;

/// Returns the Steam installation root from the Windows registry.
pub(crate) fn install_root() -> Result<PathBuf, SteamError> {
    // 64-bit installs register under the Wow6432Node view.
    if let Ok(path) = read_install_path(r"SOFTWARE\Wow6432Node\Valve\Steam") {
        tracing::info!(path = %path.display(), "installation path read from registry");
        return Ok(path);
    }

    if let Ok(path) = read_install_path(r"SOFTWARE\Valve\Steam") {
        tracing::info!(path = %path.display(), "installation path read from registry");
        return Ok(path);
    }

    Err(SteamError::NotFound)
}

fn read_install_path(subkey: &str) -> Result<PathBuf, SteamError> {
    use winreg::RegKey;
    use winreg::enums::HKEY_LOCAL_MACHINE;

    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    let key = hklm.open_subkey(subkey).map_err(|_| SteamError::NotFound)?;
    let install_path: String = key
        .get_value("InstallPath")
        .map_err(|_| SteamError::NotFound)?;
    Ok(PathBuf::from(install_path.trim()))
}
