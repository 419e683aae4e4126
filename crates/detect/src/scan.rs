//! Redistributable directory scanning.
//!
//! Matching is deliberately permissive: substring based and applied to
//! full paths, so a file named `myexecutive.exe` under a directory whose
//! path happens to contain `redist` will match. Detection here is
//! heuristic, not semantic file-type identification.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::report::{CleanableFile, FileOrigin};

/// Path markers (substring, case-insensitive) identifying a first-level
/// subdirectory as a redistributable container.
const CONTAINER_MARKERS: [&str; 3] = ["directx", "redist", "miles"];

/// Installer markers, matched against the full lower-cased file path.
const INSTALLER_MARKERS: [&str; 3] = ["cab", "exe", "msi"];

/// Scans one game directory for redistributable installer files.
///
/// Only subtrees under a matched container are walked; everything else in
/// the game directory is left alone. Entries that vanish or cannot be
/// read mid-walk are skipped and the walk continues.
pub fn scan_game_dir(game_dir: &Path) -> Vec<CleanableFile> {
    let mut files = Vec::new();

    let entries = match fs::read_dir(game_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(
                game = %game_dir.display(),
                error = %e,
                "unable to list game directory, skipping"
            );
            return files;
        }
    };

    for entry in entries.flatten() {
        if !entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
            continue;
        }

        let container = entry.path();
        let container_lower = container.to_string_lossy().to_lowercase();
        if !CONTAINER_MARKERS.iter().any(|m| container_lower.contains(m)) {
            continue;
        }

        for item in WalkDir::new(&container).into_iter().filter_map(Result::ok) {
            if !item.file_type().is_file() {
                continue;
            }

            let path_lower = item.path().to_string_lossy().to_lowercase();
            if !INSTALLER_MARKERS.iter().any(|m| path_lower.contains(m)) {
                continue;
            }

            let Ok(meta) = item.metadata() else {
                continue;
            };

            files.push(CleanableFile {
                path: item.into_path(),
                size_mb: meta.len() as f64 / 1024.0 / 1024.0,
                origin: FileOrigin::DirScan,
            });
        }
    }

    files
}
