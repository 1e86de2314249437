use anyhow::{Result, bail};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::zip::ArchiveEntry;

/// Gather archive entries from local filesystem paths.
///
/// Files are read wholesale into memory; directories are walked only when
/// `recursive` is set, children sorted by name so the resulting archive is
/// deterministic. With `junk_paths` an entry is named after its final path
/// component only.
///
/// Fails before reading anything if an input path does not exist.
pub fn collect_entries(
    inputs: &[String],
    recursive: bool,
    junk_paths: bool,
) -> Result<Vec<ArchiveEntry>> {
    let mut files = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        if !path.exists() {
            bail!("{input}: No such file or directory");
        }
        collect_files(path, recursive, &mut files)?;
    }

    let mut entries = Vec::with_capacity(files.len());
    for path in files {
        let data = fs::read(&path)?;
        entries.push(ArchiveEntry::new(archive_name(&path, junk_paths), data));
    }
    Ok(entries)
}

/// Depth-first file listing; directory children sorted by name.
fn collect_files(path: &Path, recursive: bool, out: &mut Vec<PathBuf>) -> Result<()> {
    if path.is_file() {
        out.push(path.to_path_buf());
    } else if path.is_dir() && recursive {
        let mut children: Vec<_> = fs::read_dir(path)?
            .collect::<std::io::Result<Vec<_>>>()?;
        children.sort_by_key(|e| e.file_name());
        for child in children {
            collect_files(&child.path(), true, out)?;
        }
    }
    Ok(())
}

/// Derive the name an entry is stored under.
///
/// Platform separators become `/`; leading `/`, `./` and any drive prefix
/// are dropped so archives never carry absolute paths.
fn archive_name(path: &Path, junk_paths: bool) -> String {
    if junk_paths {
        if let Some(file_name) = path.file_name() {
            return file_name.to_string_lossy().into_owned();
        }
    }

    let parts: Vec<_> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    parts.join("/")
}
