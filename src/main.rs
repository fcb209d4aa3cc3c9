//! CLI entry point for ror-devtools
//!
//! Provides the event-handle generator and the YCM flag extractor
//! as subcommands.

use clap::{error::ErrorKind, Parser, Subcommand};
use colored::*;
use ror_devtools::{
    events::write_declarations,
    flags::{run, AssumeYes, Outcome, Prompt},
};
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ror-devtools")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print event-handle declarations to stdout
    EventHandles,

    /// Generate .ycm_extra_conf.py from compile_commands.json
    Flags {
        /// Directory containing compile_commands.json and ycm_extra_conf.template
        base_dir: PathBuf,

        /// Overwrite an existing .ycm_extra_conf.py without asking
        #[arg(short, long)]
        force: bool,
    },
}

const USAGE: &str = "Bad arguments\nUsage:\n\tror-devtools flags <directory containing compile_commands.json>";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<OsString> = std::env::args_os().collect();
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) if is_flags_usage_error(&e, &args) => {
            println!("{}", USAGE);
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    match cli.command {
        Commands::EventHandles => print_event_handles()?,
        Commands::Flags { base_dir, force } => extract_flags(&base_dir, force),
    }

    Ok(())
}

/// Check whether a parse error belongs to the `flags` subcommand
///
/// Help and version requests are not errors and keep clap's output.
fn is_flags_usage_error(error: &clap::Error, args: &[OsString]) -> bool {
    let is_request = matches!(
        error.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );

    !is_request && args.get(1).is_some_and(|arg| arg == "flags")
}

/// Print every declaration and the summary line
fn print_event_handles() -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    write_declarations(&mut out)?;
    out.flush()?;

    Ok(())
}

/// Run the extractor, reporting any failure as a usage message
fn extract_flags(base_dir: &Path, force: bool) {
    // Expand tilde in path
    let base_dir = match base_dir.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
        None => base_dir.to_path_buf(),
    };

    let result = if force {
        run(&base_dir, &mut AssumeYes)
    } else {
        run(&base_dir, &mut Prompt::stdio())
    };

    match result {
        Ok(Outcome::Written(path)) => {
            println!("{} Wrote {}", "✓".green(), path.display());
        }
        Ok(Outcome::Declined) => {}
        Err(e) => {
            log::debug!("flag extraction failed: {}", e);
            println!("{}", USAGE);
            std::process::exit(1);
        }
    }
}
