//! # ruzip
//!
//! A Rust zip utility producing store-only (uncompressed) archives.
//!
//! This library turns an ordered list of named in-memory byte buffers into
//! a single buffer that is a valid, standard ZIP file, openable by any
//! off-the-shelf unzip tool. Entries are stored verbatim (method 0); the
//! archive is a pure function of the entry list, so identical inputs always
//! produce byte-identical output.
//!
//! ## Features
//!
//! - Assemble ZIP archives entirely in memory, no compression library
//! - Per-entry CRC-32 so any reader can verify the data independently
//! - Deterministic output suitable for reproducible bundles
//! - Oversized names or payloads refuse the whole archive instead of
//!   producing a corrupt one
//!
//! ## Example
//!
//! ```no_run
//! use ruzip::zip::ZipWriter;
//!
//! fn main() -> ruzip::Result<()> {
//!     let mut writer = ZipWriter::new();
//!     writer.add("readme.txt", b"hello".to_vec());
//!     writer.add("data/export.csv", b"a,b\n1,2\n".to_vec());
//!
//!     // One contiguous buffer, ready to save or send.
//!     let archive = writer.finish()?;
//!     std::fs::write("bundle.zip", archive)?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod io;
pub mod zip;

pub use cli::Cli;
pub use error::{Error, Result};
pub use io::collect_entries;
pub use zip::{ArchiveEntry, ZipWriter, assemble, crc32};
