//! Manifest resolution.
//!
//! A game directory may carry a `.vdf` descriptor that references files
//! through an `%INSTALLDIR%` placeholder. Lines carrying the placeholder
//! are resolved against the game path; a resolved file is accepted only
//! when it exists and its path carries a redistributable keyword, so a
//! manifest reference to a required file is never marked cleanable.

use std::fs;
use std::path::{Path, PathBuf};

use crate::report::{CleanableFile, FileOrigin};

/// Placeholder token used by manifests for the installation directory.
const INSTALLDIR_TOKEN: &str = "INSTALLDIR";

/// Keywords a manifest-referenced file must carry (lower-cased path
/// substring) to be considered cleanable. Deliberately narrower than the
/// directory-scan markers.
const MANIFEST_KEYWORDS: [&str; 2] = ["setup", "redist"];

/// Returns the path of a first-level `.vdf` manifest in a game directory.
///
/// When several are present the last one in directory order wins. No
/// manifest is the common case, not an error.
pub fn find_manifest(game_dir: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(game_dir).ok()?;

    let mut manifest = None;
    for entry in entries.flatten() {
        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }
        if entry.file_name().to_string_lossy().contains(".vdf") {
            manifest = Some(entry.path());
        }
    }
    manifest
}

/// Resolves a game's manifest into cleanable installer files.
///
/// Yields nothing when the directory has no manifest or the manifest has
/// no placeholder lines. Malformed lines are skipped, never fatal.
pub fn resolve_manifest(game_dir: &Path) -> Vec<CleanableFile> {
    let Some(manifest) = find_manifest(game_dir) else {
        return Vec::new();
    };

    let text = match fs::read_to_string(&manifest) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                manifest = %manifest.display(),
                error = %e,
                "unable to read manifest, skipping"
            );
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    for line in text.lines() {
        if !line.contains(INSTALLDIR_TOKEN) {
            continue;
        }
        let Some(candidate) = resolve_line(line, game_dir) else {
            tracing::warn!(manifest = %manifest.display(), "malformed placeholder line, skipping");
            continue;
        };

        let Ok(meta) = fs::metadata(&candidate) else {
            continue;
        };
        if !meta.is_file() {
            continue;
        }

        let path_lower = candidate.to_string_lossy().to_lowercase();
        if !MANIFEST_KEYWORDS.iter().any(|k| path_lower.contains(k)) {
            continue;
        }

        files.push(CleanableFile {
            path: candidate,
            size_mb: meta.len() as f64 / 1024.0 / 1024.0,
            origin: FileOrigin::Manifest,
        });
    }

    files
}

/// Substitutes the game path into a single placeholder line.
///
/// The line must hold two `%` delimiters around the token; fewer means a
/// malformed line and `None`.
fn resolve_line(line: &str, game_dir: &Path) -> Option<PathBuf> {
    let mut parts = line.split('%');
    let _prefix = parts.next()?;
    let placeholder = parts.next()?;
    let remainder = parts.next()?;

    let resolved = placeholder.replace(INSTALLDIR_TOKEN, &game_dir.to_string_lossy());
    // Manifests use Windows separators regardless of platform.
    let fragment = truncate_at_extension(remainder).replace('\\', std::path::MAIN_SEPARATOR_STR);

    Some(PathBuf::from(resolved + &fragment))
}

/// Cuts a manifest path fragment at the first extension boundary: the text
/// up to and including the first `.` plus three characters. Fragments
/// without a dot degrade to their first three characters; the existence
/// check discards the nonsense candidate.
///
/// The fixed three-character extension assumption lives only here so it
/// can be revisited in one place.
fn truncate_at_extension(fragment: &str) -> &str {
    let end = match fragment.find('.') {
        Some(dot) => dot + 4,
        None => 3,
    };
    fragment.get(..end.min(fragment.len())).unwrap_or(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SEP: &str = std::path::MAIN_SEPARATOR_STR;

    fn write_manifest(game_dir: &Path, lines: &str) {
        fs::write(game_dir.join("installscript.vdf"), lines).unwrap();
    }

    #[test]
    fn truncates_at_first_extension() {
        assert_eq!(
            truncate_at_extension("\\redist\\setup.exe\""),
            "\\redist\\setup.exe"
        );
        assert_eq!(truncate_at_extension("a.msi extra"), "a.msi");
    }

    #[test]
    fn truncates_dotless_fragment_to_three_chars() {
        assert_eq!(truncate_at_extension("abcdef"), "abc");
        assert_eq!(truncate_at_extension("ab"), "ab");
    }

    #[test]
    fn no_manifest_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(find_manifest(tmp.path()).is_none());
        assert!(resolve_manifest(tmp.path()).is_empty());
    }

    #[test]
    fn last_manifest_in_directory_order_wins() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.vdf"), b"").unwrap();
        fs::write(tmp.path().join("b.vdf"), b"").unwrap();

        // Directory order is unspecified, but some .vdf must be returned.
        assert!(find_manifest(tmp.path()).is_some());
    }

    #[test]
    fn line_without_placeholder_contributes_nothing() {
        let tmp = TempDir::new().unwrap();
        write_manifest(tmp.path(), "\"Exe\"  \"bin\\game.exe\"\n");
        assert!(resolve_manifest(tmp.path()).is_empty());
    }

    #[test]
    fn malformed_line_is_skipped() {
        let tmp = TempDir::new().unwrap();
        // Only one delimiter around the token.
        write_manifest(tmp.path(), "\"Run\" \"%INSTALLDIR\\redist\\setup.exe\"\n");
        assert!(resolve_manifest(tmp.path()).is_empty());
    }

    #[test]
    fn resolves_existing_redistributable_reference() {
        let tmp = TempDir::new().unwrap();
        let redist = tmp.path().join("redist");
        fs::create_dir_all(&redist).unwrap();
        fs::write(redist.join("setup.exe"), vec![0u8; 2048]).unwrap();
        write_manifest(
            tmp.path(),
            "\"Run Process\"  \"%INSTALLDIR%\\redist\\setup.exe\"\n",
        );

        let files = resolve_manifest(tmp.path());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, redist.join("setup.exe"));
        assert_eq!(files[0].origin, FileOrigin::Manifest);
        assert!((files[0].size_mb - 2048.0 / 1024.0 / 1024.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_target_is_excluded() {
        let tmp = TempDir::new().unwrap();
        write_manifest(
            tmp.path(),
            "\"Run Process\"  \"%INSTALLDIR%\\redist\\setup.exe\"\n",
        );
        assert!(resolve_manifest(tmp.path()).is_empty());
    }

    #[test]
    fn existing_target_without_keyword_is_excluded() {
        // The acceptance keywords are setup/redist only; a directory name
        // like Miles matches the scan markers but not manifest acceptance.
        let tmp = TempDir::new().unwrap();
        let miles = tmp.path().join("Miles");
        fs::create_dir_all(&miles).unwrap();
        fs::write(miles.join("msvcr.msi"), b"x").unwrap();
        write_manifest(
            tmp.path(),
            "\"InstallDir\"  \"%INSTALLDIR%\\Miles\\msvcr.msi\"\n",
        );

        assert!(resolve_manifest(tmp.path()).is_empty());
    }

    #[test]
    fn trailing_quote_is_dropped_by_extension_rule() {
        let resolved = resolve_line(
            "\"Run\"  \"%INSTALLDIR%\\redist\\setup.exe\"",
            Path::new("game"),
        )
        .unwrap();
        assert_eq!(
            resolved,
            PathBuf::from(format!("game{SEP}redist{SEP}setup.exe"))
        );
    }
}
