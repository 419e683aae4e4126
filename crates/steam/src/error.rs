//! Steam integration error types.

/// Errors produced while locating the Steam installation.
#[derive(Debug, thiserror::Error)]
pub enum SteamError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Steam installation not found")]
    NotFound,

    #[error("no Steam support for this operating system")]
    UnsupportedPlatform,

    #[error("not a Steam installation root: {0}")]
    InvalidRoot(String),
}
