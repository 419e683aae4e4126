use steamsweep_steam::Root;

use crate::game_dirs::enumerate_game_dirs;
use crate::manifest::resolve_manifest;
use crate::report::CleanReport;
use crate::scan::scan_game_dir;

/// Options for a detection run.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetectOptions {
    /// Skip the redistributable directory scan; only manifest-referenced
    /// files are considered.
    pub skip_dir_scan: bool,
}

/// Runs the full detection pipeline over the given roots.
///
/// Games are processed one at a time; a failure inside one game directory
/// never affects the others, and the worst case is an empty report.
pub fn detect(roots: &[Root], options: DetectOptions) -> CleanReport {
    let mut manifest_files = Vec::new();
    let mut scanned_files = Vec::new();

    for game in enumerate_game_dirs(roots) {
        manifest_files.extend(resolve_manifest(&game));
        if !options.skip_dir_scan {
            scanned_files.extend(scan_game_dir(&game));
        }
    }

    let report = CleanReport::aggregate(manifest_files, scanned_files);
    for file in report.files() {
        tracing::info!(
            path = %file.path.display(),
            size_mb = format_args!("{:.2}", file.size_mb),
            "cleanable file found"
        );
    }
    report
}
