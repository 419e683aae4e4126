use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use steamsweep_steam::Root;

/// Lists first-level subdirectories of each root; each is one candidate
/// game directory.
///
/// Files directly under a root are ignored. A root that cannot be listed
/// is skipped with a warning so one bad root never aborts the run. The
/// result is keyed by absolute path, so a directory reachable from two
/// roots appears exactly once.
pub fn enumerate_game_dirs(roots: &[Root]) -> BTreeSet<PathBuf> {
    let mut games = BTreeSet::new();

    for root in roots {
        tracing::info!(root = %root.path().display(), "checking root");

        let entries = match fs::read_dir(root.path()) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    root = %root.path().display(),
                    error = %e,
                    "unable to list root, skipping"
                );
                continue;
            }
        };

        for entry in entries.flatten() {
            if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
                games.insert(entry.path());
            }
        }
    }

    games
}
