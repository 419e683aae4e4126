//! Steam client integration for steamsweep.
//!
//! Locates the Steam installation root (registry on Windows, well-known
//! client paths on Linux), normalizes configured roots down to their
//! `steamapps/common` game container, and reads extra library locations
//! from `libraryfolders.vdf`.

mod error;
mod libraries;
mod provider;
#[cfg(target_os = "linux")]
mod provider_linux;
#[cfg(target_os = "windows")]
mod provider_windows;
mod root;

pub use error::SteamError;
pub use libraries::read_library_folders;
pub use provider::{DefaultProvider, FixedRoot, InstallRootProvider};
pub use root::{Root, RootOrigin, normalize_root};
