// src/file.rs

use std::{
    fs,
    io,
    path::Path,
};

/// Read the whole input file as UTF-8 text.
pub fn read_input(path: &Path) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    logd!("File: read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Create/truncate `path` and write `contents`, creating the parent dir if missing.
pub fn write_output(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    logd!("File: wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
