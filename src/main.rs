//! Main entry point for the ruzip CLI application.
//!
//! This binary provides a command-line interface for packing local files
//! into a store-only (uncompressed) ZIP archive.

use anyhow::{Result, bail};
use clap::Parser;
use tokio::io::AsyncWriteExt;

use ruzip::zip::{ArchiveEntry, assemble};
use ruzip::{Cli, collect_entries};

/// Application entry point.
///
/// Parses command-line arguments, gathers the input files, assembles the
/// archive in memory, and hands the finished buffer to the requested sink
/// (a file, or stdout when the archive name is "-").
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Gather (name, bytes) pairs from the filesystem up front; assembly
    // operates on fully materialized buffers.
    let entries = collect_entries(&cli.files, cli.recursive, cli.junk_paths)?;

    if entries.is_empty() {
        bail!("Nothing to do! (directories need -r to be added)");
    }

    report_entries(&entries, &cli);

    // Any oversized name or payload refuses the whole archive here;
    // no partial output file is ever created.
    let archive = assemble(&entries)?;

    write_archive(&archive, &cli).await?;

    if !cli.is_quiet() {
        eprintln!(
            "{}: {} entries, {}",
            cli.archive,
            entries.len(),
            format_size(archive.len() as u64)
        );
    }

    Ok(())
}

/// Print per-entry progress lines.
///
/// Progress goes to stderr so that piping the archive itself to stdout
/// (`ruzip - ...`) stays clean. Quiet mode suppresses the lines entirely;
/// verbose mode adds each entry's size.
fn report_entries(entries: &[ArchiveEntry], cli: &Cli) {
    if cli.is_quiet() && !cli.verbose {
        return;
    }

    for entry in entries {
        if cli.verbose {
            eprintln!(
                "  adding: {} ({})",
                entry.name,
                format_size(entry.data.len() as u64)
            );
        } else {
            eprintln!("  adding: {}", entry.name);
        }
    }
}

/// Write the finished archive to its destination.
///
/// # Arguments
///
/// * `archive` - The complete archive buffer
/// * `cli` - Parsed command-line arguments (selects file vs stdout)
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the sink cannot be written.
async fn write_archive(archive: &[u8], cli: &Cli) -> Result<()> {
    if cli.is_stdout() {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(archive).await?;
        stdout.flush().await?;
    } else {
        tokio::fs::write(&cli.archive, archive).await?;
    }
    Ok(())
}

/// Format a byte size into a human-readable string.
///
/// Automatically selects the appropriate unit (bytes, KB, MB, GB)
/// based on the size magnitude.
fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
