mod args;
mod clean;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use steamsweep_detect::{DetectOptions, detect};
use steamsweep_steam::{
    DefaultProvider, FixedRoot, InstallRootProvider, Root, read_library_folders,
};

use args::{Args, Format};

fn main() -> ExitCode {
    let args = Args::parse();
    let _log_guard = logging::init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        os = std::env::consts::OS,
        "starting steamsweep"
    );

    // Only two conditions are fatal: no way to locate an installation on
    // this platform, and a supplied root that fails validation. Everything
    // downstream degrades per game directory.
    let provider: Box<dyn InstallRootProvider> = match &args.steam_dir {
        Some(dir) => Box::new(FixedRoot(dir.clone())),
        None => Box::new(DefaultProvider),
    };
    let install_root = match provider.install_root() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Unable to locate a Steam installation: {e}");
            eprintln!("Re-run with --steam-dir <path> to point at one.");
            return ExitCode::FAILURE;
        }
    };

    let primary = match Root::primary(&install_root) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut roots = vec![primary];

    // Libraries the client itself has configured, then any passed on the
    // command line. Invalid entries are dropped with a warning.
    for dir in read_library_folders(&install_root) {
        roots.extend(Root::library(dir));
    }
    if let Some(list) = &args.library {
        for dir in args::split_library_list(list) {
            roots.extend(Root::library(dir));
        }
    }

    let report = detect(
        &roots,
        DetectOptions {
            skip_dir_scan: args.no_dir_scan,
        },
    );

    match args.format {
        Format::Table => clean::print_report(&report),
        Format::Json => {
            if let Err(e) = clean::print_json(&report) {
                eprintln!("failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if report.is_empty() {
        println!("Congratulations! No files were found for removal.");
        return ExitCode::SUCCESS;
    }

    if args.dry_run {
        return ExitCode::SUCCESS;
    }

    if args.yes || clean::confirm_removal() {
        clean::remove_files(&report);
    }

    ExitCode::SUCCESS
}
