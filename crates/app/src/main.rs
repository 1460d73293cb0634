//! vlc-archiver: pack and unpack text files with a fixed variable-length code.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::{Config, Mode};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// A simple archiver using variable-length codes
///
/// Packed files hold the code bits as space-separated hex bytes.
#[derive(Parser, Debug)]
#[command(name = "vlc-archiver")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory for output files (default: current directory)
    #[arg(short, long, global = true)]
    out_dir: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print a size summary after the run
    #[arg(long, global = true)]
    stats: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack a text file into <name>.vlc
    Pack {
        /// File to pack
        file_path: Option<String>,
    },

    /// Unpack a .vlc file into <name>.txt
    Unpack {
        /// File to unpack
        file_path: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (mode, file_path) = match cli.command {
        Commands::Pack { file_path } => (Mode::Pack, file_path),
        Commands::Unpack { file_path } => (Mode::Unpack, file_path),
    };

    init_tracing(cli.verbose);

    // A missing path is reported like an empty one
    let file_path = file_path.unwrap_or_default();
    let result = Config::new(mode, &file_path, cli.out_dir, cli.stats)
        .map_err(anyhow::Error::from)
        .and_then(|config| commands::run(&config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
