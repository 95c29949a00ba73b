use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary sermons directory
pub fn create_test_sermons_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test sermon file with content
pub fn create_test_file(sermons_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = sermons_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
