//! Configuration for a single pack or unpack run.
//!
//! Resolved from command-line arguments. Nothing here reaches the codec
//! itself: the code table is fixed. The config only decides which file is
//! read, where the result goes, and what gets reported.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extension given to packed files.
pub const PACKED_EXTENSION: &str = "vlc";

/// Extension given to unpacked files.
pub const UNPACKED_EXTENSION: &str = "txt";

/// User errors in the arguments.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file path argument was empty
    #[error("path to file is not specified")]
    EmptyPath,

    /// The path has no file name to derive the output name from
    #[error("cannot derive an output name from {0:?}")]
    NoFileName(PathBuf),
}

/// Which direction to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Pack,
    Unpack,
}

impl Mode {
    /// Extension of the file this mode writes.
    pub fn output_extension(self) -> &'static str {
        match self {
            Mode::Pack => PACKED_EXTENSION,
            Mode::Unpack => UNPACKED_EXTENSION,
        }
    }
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pack or unpack
    pub mode: Mode,

    /// Input file path
    pub input_file: PathBuf,

    /// Directory the output file is written to
    pub out_dir: PathBuf,

    /// Whether to print the size summary
    pub print_stats: bool,
}

impl Config {
    /// Validate arguments into a config.
    ///
    /// # Errors
    /// `ConfigError::EmptyPath` if `file_path` is empty.
    pub fn new(
        mode: Mode,
        file_path: &str,
        out_dir: Option<PathBuf>,
        print_stats: bool,
    ) -> Result<Self, ConfigError> {
        if file_path.is_empty() {
            return Err(ConfigError::EmptyPath);
        }

        Ok(Self {
            mode,
            input_file: PathBuf::from(file_path),
            out_dir: out_dir.unwrap_or_else(|| PathBuf::from(".")),
            print_stats,
        })
    }

    /// Output path: the input's base name with its extension replaced,
    /// inside `out_dir`.
    pub fn output_file(&self) -> Result<PathBuf, ConfigError> {
        let name = output_name(&self.input_file, self.mode.output_extension())
            .ok_or_else(|| ConfigError::NoFileName(self.input_file.clone()))?;
        Ok(self.out_dir.join(name))
    }
}

/// `dir/notes.txt` -> `notes.<extension>`.
fn output_name(input: &Path, extension: &str) -> Option<PathBuf> {
    let mut name = Path::new(input.file_name()?).file_stem()?.to_os_string();
    name.push(".");
    name.push(extension);
    Some(PathBuf::from(name))
}
