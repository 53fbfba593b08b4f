//! nugetnpm - sync npm dependencies shipped inside NuGet packages
//!
//! Usage: `nugetnpm sync [--project PATH] [--dry-run] [--no-install]`

use clap::Parser;
use nugetnpm::cli::{CliArgs, Command, SyncArgs};
use nugetnpm::config::SyncConfig;
use nugetnpm::orchestrator::Orchestrator;
use nugetnpm::output::{create_formatter, OutputConfig};
use nugetnpm::package_manager::exit_status_byte;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let result = match args.command {
        Command::Sync(sync_args) => run_sync(sync_args),
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run the sync subcommand
fn run_sync(args: SyncArgs) -> anyhow::Result<ExitCode> {
    let config = SyncConfig::resolve(&args)?;

    if args.verbose {
        eprintln!("nugetnpm v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Directory: {}", config.working_dir.display());
        eprintln!("Packages: {}", config.packages_root.display());
        if config.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let show_progress = !args.quiet && !args.json;
    let orchestrator = Orchestrator::new(config).with_progress(show_progress);
    let outcome = orchestrator.sync()?;

    if args.verbose {
        for note in &outcome.notes {
            eprintln!("  {}", note);
        }
    }

    let formatter = create_formatter(OutputConfig {
        color: io::stdout().is_terminal(),
        ..OutputConfig::from_cli(args.json, args.verbose, args.quiet)
    });
    let mut stdout = io::stdout().lock();
    formatter.format(&outcome.summary, &mut stdout)?;
    stdout.flush()?;
    drop(stdout);

    match orchestrator.install()? {
        Some(code) => {
            if args.verbose {
                eprintln!(
                    "'{} install' exited with status {}",
                    orchestrator.config().installer,
                    code
                );
            }
            Ok(ExitCode::from(exit_status_byte(code)))
        }
        None => Ok(ExitCode::SUCCESS),
    }
}
