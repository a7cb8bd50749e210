//! grooves CLI entry point

use clap::Parser;
use colored::Colorize;
use grooves::config::{Cli, Settings};
use grooves::pipeline;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse CLI arguments; usage errors exit with 1 rather than clap's 2
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize logging
    init_logging(&cli);

    // Build settings from CLI (validates the source folder)
    let settings = match Settings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };
    println!(
        "Successfully found path: {}",
        settings.source_root.display().to_string().green()
    );

    // Run the pipeline
    match pipeline::run(&settings) {
        Ok(result) => {
            println!();
            if settings.dry_run {
                println!(
                    "Dry run: {} of {} files are midi, nothing copied",
                    result.target_files, result.total_files
                );
            } else {
                println!("Total files: {}", result.copied.to_string().cyan());
                if result.skipped > 0 {
                    println!("Skipped: {}", result.skipped.to_string().yellow());
                }
                println!("Log: {}", settings.log_path().display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter = cli.log_level().to_string().to_lowercase();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_error(err: &grooves::GroovesError) {
    eprintln!();
    eprintln!(" {} {}", "ERROR:".red().bold(), err);
    eprintln!();
}
