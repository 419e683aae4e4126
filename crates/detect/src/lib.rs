//! Detection engine for leftover installer files in Steam game directories.
//!
//! Enumerates game directories across configured roots, resolves each
//! game's `.vdf` manifest into installer references, scans redistributable
//! containers on disk, and aggregates everything into a sized report.
//!
//! Every per-game failure (unreadable directory, malformed manifest line,
//! vanished file) is handled where it occurs and never aborts the run; an
//! empty report is a valid outcome meaning "nothing to clean".

mod game_dirs;
mod manifest;
mod pipeline;
mod report;
mod scan;

pub use game_dirs::enumerate_game_dirs;
pub use manifest::{find_manifest, resolve_manifest};
pub use pipeline::{DetectOptions, detect};
pub use report::{CleanReport, CleanableFile, FileOrigin};
pub use scan::scan_game_dir;
