use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every regular file below `dir`, sorted so failures are reproducible.
#[allow(dead_code)]
pub fn test_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    Path::new("tests").join("fixtures").join(name)
}
