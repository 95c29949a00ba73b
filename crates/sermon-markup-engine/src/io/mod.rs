use std::fs;
use std::path::{Path, PathBuf};

/// File extension of sermon documents.
pub const SERMON_EXTENSION: &str = "md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid sermons directory: {0}")]
    InvalidSermonsDir(String),
}

/// Read a sermon file and return its content
pub fn read_sermon(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Scan for sermon files in the sermons directory, sorted by path
pub fn scan_sermon_files(sermons_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !sermons_root.exists() {
        return Err(IoError::InvalidSermonsDir(
            "sermons directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(sermons_root, &mut files)?;
    files.sort();
    log::debug!(
        "found {} sermon files under {}",
        files.len(),
        sermons_root.display()
    );
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == SERMON_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_sermons_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidSermonsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
