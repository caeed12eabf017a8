//! File I/O adapters: read/write a whole file, join path components, and
//! enumerate a directory to discover cache files.

use crate::error::Result;
use std::path::Path;

/// Read a whole file into memory.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    Ok(std::fs::read(path)?)
}

/// Write `bytes` to `path`, truncating any existing contents.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Join two path components with `/`, collapsing any run of adjacent
/// duplicate separators down to one.
#[must_use]
pub fn path_join(a: &str, b: &str) -> String {
    collapse_slashes(&format!("{a}/{b}"))
}

fn collapse_slashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_slash = false;
    for c in s.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }
    out
}

/// List the entry names (not full paths) of a directory.
pub fn directory_entries(path: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}
