use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub mod csv_writer;
pub mod json_writer;
pub mod prints;
pub mod summary;

pub fn list_files(dir: &Path) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        // Follows symlinks; dangling links are skipped.
        if !entry.path().is_file() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}
