use std::path::PathBuf;

use clap::Parser;

/// Finds and removes leftover installer and redistributable files from
/// Steam game installation directories.
#[derive(Parser, Debug)]
#[command(name = "steamsweep", version)]
pub struct Args {
    /// Report cleanable files without removing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the redistributable directory scan; consider only files
    /// referenced from game manifests.
    #[arg(long)]
    pub no_dir_scan: bool,

    /// Additional Steam libraries to examine (comma separated).
    #[arg(short, long)]
    pub library: Option<String>,

    /// Steam installation directory, bypassing the platform lookup.
    #[arg(long)]
    pub steam_dir: Option<PathBuf>,

    /// Remove files without asking for confirmation.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Report output format.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Table,
    Json,
}

/// Splits the `--library` value into individual paths, dropping empty
/// entries and stray quotes.
pub fn split_library_list(list: &str) -> Vec<PathBuf> {
    list.split(',')
        .map(|item| item.trim().replace('"', ""))
        .filter(|item| !item.is_empty())
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_report_and_remove() {
        let args = Args::parse_from(["steamsweep"]);
        assert!(!args.dry_run);
        assert!(!args.no_dir_scan);
        assert!(args.library.is_none());
        assert_eq!(args.format, Format::Table);
    }

    #[test]
    fn library_list_splits_on_commas() {
        let libs = split_library_list("D:\\SteamLibrary, \"E:\\Steam\" ,");
        assert_eq!(
            libs,
            vec![
                PathBuf::from("D:\\SteamLibrary"),
                PathBuf::from("E:\\Steam"),
            ]
        );
    }

    #[test]
    fn flags_parse() {
        let args = Args::parse_from([
            "steamsweep",
            "--dry-run",
            "--no-dir-scan",
            "--format",
            "json",
            "-l",
            "/mnt/steam",
        ]);
        assert!(args.dry_run);
        assert!(args.no_dir_scan);
        assert_eq!(args.format, Format::Json);
        assert_eq!(args.library.as_deref(), Some("/mnt/steam"));
    }
}
