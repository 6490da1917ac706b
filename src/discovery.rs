//! Discovery of FXML documents on disk.
//!
//! Recursively scans a directory for `.fxml` files and reads them into a
//! `Project`. Files are visited in sorted path order so the batch, and with it
//! the generated identifiers, is stable across runs.

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{LowerError, Result};
use crate::fxml::Project;
use crate::parse::parse_fxml;

const FXML_EXTENSION: &str = "fxml";

/// All `.fxml` files below `dir`, sorted by path.
pub fn find_fxml_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && path.extension().map_or(false, |ext| ext == FXML_EXTENSION) {
                    files.push(path.to_path_buf());
                }
            }
            Err(e) => warn!("skipping unreadable entry below {:?}: {}", dir, e),
        }
    }
    files
}

/// Reads every document below `dir`. A document is named after its file stem,
/// so `views/Main.fxml` is included as `Main.fxml`.
pub fn discover_project(dir: &Path) -> Result<Project> {
    if !dir.is_dir() {
        return Err(LowerError::Io {
            path: dir.display().to_string(),
            message: "not a directory".to_string(),
        });
    }

    let mut fxmls = Vec::new();
    for path in find_fxml_files(dir) {
        let source = fs::read_to_string(&path).map_err(|e| LowerError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!("discovered {} at {:?}", name, path);
        fxmls.push(parse_fxml(&name, &source)?);
    }
    Ok(Project::new(fxmls))
}
