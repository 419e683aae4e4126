//! Report printing, confirmation and file removal.

use std::io::{self, Write};

use serde::Serialize;
use steamsweep_detect::{CleanReport, CleanableFile};

/// Prints the removable-file summary, mirroring it into the log.
pub fn print_report(report: &CleanReport) {
    println!(
        "\nTotal number of files marked for removal: {}",
        report.file_count()
    );
    println!(
        "Estimated disk space saved after removal: {:.2} MB\n",
        report.total_mb()
    );

    tracing::info!(
        count = report.file_count(),
        total_mb = format_args!("{:.2}", report.total_mb()),
        "detection summary"
    );
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: Vec<&'a CleanableFile>,
    file_count: usize,
    total_mb: f64,
}

/// Prints the report as JSON on stdout.
pub fn print_json(report: &CleanReport) -> serde_json::Result<()> {
    let out = JsonReport {
        files: report.files().collect(),
        file_count: report.file_count(),
        total_mb: report.total_mb(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

/// Asks for removal confirmation on stdin. Anything but an explicit `y`
/// means no.
pub fn confirm_removal() -> bool {
    println!(
        "WARNING: All files will be permanently deleted! \
         See the log file for per-file details.\n"
    );
    print!("Do you wish to remove the detected files [y/N]: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    answer.trim().eq_ignore_ascii_case("y")
}

/// Removes every file in the report, one at a time.
///
/// There is no rollback: a file that vanished or cannot be removed is
/// logged and skipped, and earlier removals stand. Returns the number of
/// files removed.
pub fn remove_files(report: &CleanReport) -> usize {
    let mut removed = 0;

    for file in report.files() {
        match std::fs::remove_file(&file.path) {
            Ok(()) => {
                removed += 1;
                tracing::info!(path = %file.path.display(), "file removed");
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %file.path.display(), "file not found, skipping");
            }
            Err(e) => {
                tracing::warn!(
                    path = %file.path.display(),
                    error = %e,
                    "unable to remove file, skipping"
                );
            }
        }
    }

    println!("\n{removed} files removed successfully.");
    tracing::info!(removed, "removal pass finished");
    removed
}
