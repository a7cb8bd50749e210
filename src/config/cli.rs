//! CLI argument parsing and configuration

use clap::Parser;
use std::path::PathBuf;

/// Prefix of the single positional argument naming the source folder
pub const MIDIFOLDER_PREFIX: &str = "midifolder=";

/// grooves - Reorganize MIDI groove folders
///
/// Copies every .mid file under the source folder into a normalized
/// library.lib/song.sng/part.prt hierarchy next to it (../Grooves by default).
/// Refuses to run if the folder contains anything other than .mid, .head,
/// .txt or extension-less files.
#[derive(Parser, Debug)]
#[command(name = "grooves")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example:\n  grooves midifolder=/Users/me/MIDI/")]
pub struct Cli {
    /// Source folder, written as midifolder=<PATH>
    #[arg(value_name = "midifolder=PATH", value_parser = parse_midifolder)]
    pub midifolder: PathBuf,

    /// Output directory (defaults to a "Grooves" folder next to the source)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Warn and skip files whose destination already exists instead of aborting
    #[arg(long, default_value = "false")]
    pub skip_existing: bool,

    /// Dry run - show where files would go without copying anything
    #[arg(short = 'n', long, default_value = "false")]
    pub dry_run: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only, no progress bar)
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Get the log level based on verbosity flags
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

/// Parse a `midifolder=<PATH>` argument into the path it names
pub fn parse_midifolder(arg: &str) -> Result<PathBuf, String> {
    let path = arg.strip_prefix(MIDIFOLDER_PREFIX).ok_or_else(|| {
        format!(
            "expected {}<dir>, got '{}'\n  Example: grooves midifolder=/Users/me/MIDI/",
            MIDIFOLDER_PREFIX, arg
        )
    })?;

    if path.is_empty() {
        return Err(format!("{} needs a directory path", MIDIFOLDER_PREFIX));
    }

    Ok(PathBuf::from(path))
}
