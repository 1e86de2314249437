//! Error types for ruzip

use thiserror::Error;

/// Main error type for archive assembly
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("entry name too long: {name:?} is {len} bytes (max 65535)")]
    NameTooLong { name: String, len: usize },

    #[error("entry too large: {name:?} is {size} bytes (ZIP64 is not supported)")]
    SizeOverflow { name: String, size: u64 },

    #[error("too many entries: {count} (max 65535, ZIP64 is not supported)")]
    TooManyEntries { count: usize },

    #[error("archive exceeds 4 GiB (ZIP64 is not supported)")]
    ArchiveTooLarge,
}

/// Result type alias for archive assembly
pub type Result<T> = std::result::Result<T, Error>;
