//! The pack and unpack commands.
//!
//! Both read the whole input file, run it through the shared standard codec
//! and write a single output file named after the input.

use crate::config::{Config, Mode};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};
use vlc_archiver_core::Codec;

/// Input that cannot be handled as text.
#[derive(Debug, Error)]
#[error("{path} is not valid UTF-8 text")]
pub struct NotUtf8 {
    path: String,
}

/// Run the command selected by `config`.
pub fn run(config: &Config) -> Result<()> {
    debug!(?config, "resolved configuration");

    match config.mode {
        Mode::Pack => pack(config),
        Mode::Unpack => unpack(config),
    }
}

/// Encode a text file into `<name>.vlc`.
fn pack(config: &Config) -> Result<()> {
    let text = read_text(&config.input_file)?;
    let codec = standard_codec()?;

    let (packed, stats) = codec.encode_with_stats(&text).context("encode")?;
    debug!(
        code_bits = stats.code_bits,
        padding_bits = stats.padding_bits,
        "encoded"
    );

    let output = config.output_file()?;
    write_output(&output, &packed)?;

    info!("File successfully packed: {}", output.display());
    println!("packed {} -> {}", config.input_file.display(), output.display());
    if config.print_stats {
        stats.print_summary();
    }
    Ok(())
}

/// Decode a `.vlc` file into `<name>.txt`.
fn unpack(config: &Config) -> Result<()> {
    let packed = read_text(&config.input_file)?;
    let codec = standard_codec()?;

    let (text, stats) = codec.decode_with_stats(&packed).context("decode")?;
    debug!(
        chunks = stats.chunks,
        padding_bits = stats.padding_bits,
        "decoded"
    );

    let output = config.output_file()?;
    write_output(&output, &text)?;

    info!("File successfully unpacked: {}", output.display());
    println!(
        "unpacked {} -> {}",
        config.input_file.display(),
        output.display()
    );
    if config.print_stats {
        stats.print_summary();
    }
    Ok(())
}

fn standard_codec() -> Result<&'static Codec> {
    let codec = Codec::standard().context("build code table")?;
    debug!(
        depth = codec.tree().depth(),
        leaves = codec.tree().leaf_count(),
        "code table ready"
    );
    Ok(codec)
}

fn read_text(path: &Path) -> Result<String> {
    let data = fs::read(path).with_context(|| format!("read file {}", path.display()))?;
    info!("Read {} bytes from file {}", data.len(), path.display());

    String::from_utf8(data).map_err(|_| {
        anyhow::Error::new(NotUtf8 {
            path: path.display().to_string(),
        })
    })
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write output file {}", path.display()))
}
