use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

/// Reads extra library locations from `steamapps/libraryfolders.vdf` under
/// the given installation root.
///
/// Declarations look like `\t"1"\t\t"D:\\SteamLibrary"`: a numbered key
/// followed by the library path in a second quoted field. Returned paths
/// are raw; existence and marker checks are the caller's concern. A
/// missing or unreadable file yields an empty list with a warning.
pub fn read_library_folders(install_root: &Path) -> Vec<PathBuf> {
    let libfile = install_root.join("steamapps").join("libraryfolders.vdf");

    let text = match fs::read_to_string(&libfile) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                file = %libfile.display(),
                error = %e,
                "unable to read library folders file"
            );
            return Vec::new();
        }
    };

    tracing::info!(file = %libfile.display(), "reading libraries");
    parse_library_folders(&text)
}

/// One library per numbered line; the second quoted field is the path.
fn parse_library_folders(text: &str) -> Vec<PathBuf> {
    static LIBRARY_LINE: OnceLock<Regex> = OnceLock::new();
    let line_re = LIBRARY_LINE
        .get_or_init(|| Regex::new(r#"^\t"[1-8]"\s*"(.*)""#).expect("library line pattern"));

    let mut dirs = Vec::new();
    for line in text.lines() {
        if let Some(caps) = line_re.captures(line) {
            // VDF escapes Windows separators as doubled backslashes.
            let dir = caps[1].replace("\\\\", "\\");
            tracing::info!(library = %dir, "library found");
            dirs.push(PathBuf::from(dir));
        }
    }
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\"LibraryFolders\"\n{\n\t\"TimeNextStatsReport\"\t\t\"1500000000\"\n\t\"ContentStatsID\"\t\t\"-1234\"\n\t\"1\"\t\t\"D:\\\\SteamLibrary\"\n\t\"2\"\t\t\"E:\\\\Games\\\\Steam\"\n}\n";

    #[test]
    fn parses_numbered_library_lines() {
        let dirs = parse_library_folders(SAMPLE);
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("D:\\SteamLibrary"),
                PathBuf::from("E:\\Games\\Steam"),
            ]
        );
    }

    #[test]
    fn ignores_metadata_lines() {
        // Keys that are not single digits 1-8 are not libraries.
        let dirs = parse_library_folders("\t\"TimeNextStatsReport\"\t\t\"1500000000\"\n");
        assert!(dirs.is_empty());
    }

    #[test]
    fn ignores_unindented_lines() {
        let dirs = parse_library_folders("\"1\"\t\t\"D:\\\\SteamLibrary\"\n");
        assert!(dirs.is_empty());
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(parse_library_folders("").is_empty());
    }

    #[test]
    fn missing_file_yields_nothing() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(read_library_folders(tmp.path()).is_empty());
    }

    #[test]
    fn reads_file_under_steamapps() {
        let tmp = tempfile::TempDir::new().unwrap();
        let steamapps = tmp.path().join("steamapps");
        std::fs::create_dir_all(&steamapps).unwrap();
        std::fs::write(steamapps.join("libraryfolders.vdf"), SAMPLE).unwrap();

        let dirs = read_library_folders(tmp.path());
        assert_eq!(dirs.len(), 2);
    }
}
