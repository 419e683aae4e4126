use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// How a cleanable file was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOrigin {
    /// Referenced from the game's manifest.
    Manifest,
    /// Found by the redistributable directory scan.
    DirScan,
}

/// A file identified as a safe-to-remove installer artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanableFile {
    pub path: PathBuf,
    /// Size in megabytes, captured at classification time. Not re-checked
    /// before deletion; a vanished file is a skip there, not an error.
    pub size_mb: f64,
    pub origin: FileOrigin,
}

/// The aggregate outcome of one detection run. Produced fresh per run,
/// never persisted.
#[derive(Debug, Default)]
pub struct CleanReport {
    // Keyed by lower-cased path so the same physical file discovered by
    // both resolvers collapses to one entry.
    files: BTreeMap<String, CleanableFile>,
}

impl CleanReport {
    /// Merges manifest-derived and scan-derived results into one report.
    ///
    /// When both resolvers saw the same file the manifest entry wins;
    /// sizes are identical by construction since both read the same
    /// on-disk file.
    pub fn aggregate(manifest: Vec<CleanableFile>, scanned: Vec<CleanableFile>) -> Self {
        let mut report = CleanReport::default();
        for file in manifest.into_iter().chain(scanned) {
            let key = file.path.to_string_lossy().to_lowercase();
            report.files.entry(key).or_insert(file);
        }
        report
    }

    /// Entries in normalized-path order.
    pub fn files(&self) -> impl Iterator<Item = &CleanableFile> {
        self.files.values()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Sum of per-file sizes in MB.
    pub fn total_mb(&self) -> f64 {
        self.files.values().map(|f| f.size_mb).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, size_mb: f64, origin: FileOrigin) -> CleanableFile {
        CleanableFile {
            path: PathBuf::from(path),
            size_mb,
            origin,
        }
    }

    #[test]
    fn empty_report_is_valid() {
        let report = CleanReport::aggregate(Vec::new(), Vec::new());
        assert!(report.is_empty());
        assert_eq!(report.file_count(), 0);
        assert_eq!(report.total_mb(), 0.0);
    }

    #[test]
    fn identical_discoveries_collapse_to_one_entry() {
        let report = CleanReport::aggregate(
            vec![file("/games/x/redist/setup.exe", 1.5, FileOrigin::Manifest)],
            vec![file("/games/x/redist/setup.exe", 1.5, FileOrigin::DirScan)],
        );

        assert_eq!(report.file_count(), 1);
        assert_eq!(report.files().next().unwrap().origin, FileOrigin::Manifest);
    }

    #[test]
    fn dedup_key_is_case_normalized() {
        let report = CleanReport::aggregate(
            vec![file("/games/X/Redist/Setup.exe", 1.5, FileOrigin::Manifest)],
            vec![file("/games/x/redist/setup.exe", 1.5, FileOrigin::DirScan)],
        );
        assert_eq!(report.file_count(), 1);
    }

    #[test]
    fn totals_sum_distinct_entries() {
        let report = CleanReport::aggregate(
            vec![file("/a/redist/setup.exe", 1.0, FileOrigin::Manifest)],
            vec![
                file("/a/redist/other.cab", 2.5, FileOrigin::DirScan),
                file("/b/directx/dxsetup.exe", 0.5, FileOrigin::DirScan),
            ],
        );

        assert_eq!(report.file_count(), 3);
        assert!((report.total_mb() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cleanable_file_serializes_for_reporting() {
        let json =
            serde_json::to_string(&file("/a/setup.exe", 1.0, FileOrigin::DirScan)).unwrap();
        assert!(json.contains("\"dir_scan\""));
        assert!(json.contains("\"size_mb\""));
    }
}
