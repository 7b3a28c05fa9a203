//! Disk cache for fetched source documents.
//!
//! Raw documents are stored under the platform cache directory so repeat
//! runs do not re-download them. `--refresh` bypasses the cached copy and
//! overwrites it with a fresh fetch.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

/// Path: ~/.cache/ffl-explorer/{name}
pub fn cache_path(name: &str) -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("ffl-explorer").join(name)
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
