//! ZIP archive assembly.
//!
//! This module produces ZIP archives from in-memory byte buffers, using the
//! store method only (no compression).
//!
//! ## Architecture
//!
//! The module is organized into three main components:
//!
//! - [`structures`]: Data structures representing ZIP format elements (local
//!   headers, central directory records, EOCD) and their serialization
//! - [`crc32`]: The per-entry checksum every ZIP reader verifies
//! - [`writer`]: High-level assembly API for end users
//!
//! ## ZIP Format Overview
//!
//! A ZIP file consists of:
//! 1. Local file headers and data for each file
//! 2. Central Directory with metadata for all files
//! 3. End of Central Directory (EOCD) record at the end
//!
//! This implementation writes the three sections in that order, in a single
//! pass over the entry list, recording each entry's local header offset so
//! the Central Directory can point back at it.
//!
//! ## Supported Features
//!
//! - Standard ZIP format (PKZIP APPNOTE 6.3.x compatible)
//! - STORED (no compression) method
//! - Archives readable by any off-the-shelf unzip tool
//!
//! ## Limitations
//!
//! - No compression (entries are stored verbatim)
//! - No encryption support
//! - No ZIP64 extensions (caps archives at 65535 entries, 4 GiB per entry)
//! - No multi-disk archive support

mod crc32;
mod structures;
mod writer;

pub use crc32::crc32;
pub use structures::*;
pub use writer::{ArchiveEntry, ZipWriter, assemble};
