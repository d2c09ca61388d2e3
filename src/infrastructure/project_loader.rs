use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::domain::source::{module_path, SourceUnit, SOURCE_EXTENSION};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("project root {0} does not exist")]
    RootNotFound(PathBuf),

    #[error("project root {0} is not a directory")]
    NotADirectory(PathBuf),
}

pub struct ProjectLoader;

impl ProjectLoader {
    /// Load every `.rs` file beneath `root` as a source unit.
    ///
    /// Units come back in lexicographic path order. Symlinked files are read
    /// through their target; symlinked directories are not descended. Walk
    /// errors and unreadable files are logged and skipped over; only a bad
    /// root is an error.
    pub fn load(root: &Path) -> Result<Vec<SourceUnit>, LoadError> {
        if !root.exists() {
            return Err(LoadError::RootNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(LoadError::NotADirectory(root.to_path_buf()));
        }

        let paths: Vec<PathBuf> = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping directory entry: {}", err);
                    None
                }
            })
            .filter(Self::is_source_file)
            .map(DirEntry::into_path)
            .collect();

        debug!("Found {} source files under {}", paths.len(), root.display());

        let units = paths
            .iter()
            .filter_map(|path| {
                let module = module_path(path, root)?;
                Some(Self::read_unit(path, module))
            })
            .collect();

        Ok(units)
    }

    fn is_source_file(entry: &DirEntry) -> bool {
        let has_extension = entry
            .path()
            .extension()
            .is_some_and(|ext| ext == SOURCE_EXTENSION);
        if !has_extension {
            return false;
        }
        // `is_file` on the path follows the link to its target
        entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
    }

    fn read_unit(path: &Path, module: String) -> SourceUnit {
        match fs::read(path) {
            Ok(bytes) => SourceUnit::from_bytes(module, &bytes),
            Err(e) => {
                warn!("Cannot read {}: {}; treating as empty", path.display(), e);
                SourceUnit::new(module, String::new())
            }
        }
    }
}
