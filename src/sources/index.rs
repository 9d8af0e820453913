// Mon Feb 09 2026 - Alex

use crate::sources::error::SourceError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Enumerates candidate source files across a set of roots and caches file
/// contents by path. The cache lives for one pipeline run only.
pub struct SourceIndex {
    files: Vec<PathBuf>,
    cache: HashMap<PathBuf, String>,
}

impl SourceIndex {
    pub fn new(roots: &[PathBuf]) -> Self {
        Self {
            files: Self::list_files(roots),
            cache: HashMap::new(),
        }
    }

    /// Every file under the given roots, recursive, any file type. Entries
    /// are sorted by file name so enumeration order is stable across
    /// operating systems.
    pub fn list_files(roots: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for root in roots {
            if !root.exists() {
                log::debug!("Source root does not exist, skipping: {}", root.display());
                continue;
            }
            for entry in WalkDir::new(root)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                }
            }
        }
        files
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn read(&mut self, path: &Path) -> Result<&str, SourceError> {
        let text = match self.cache.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let contents = fs::read_to_string(path).map_err(|source| SourceError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                entry.insert(contents)
            }
        };
        Ok(text.as_str())
    }

    pub fn cached_file_count(&self) -> usize {
        self.cache.len()
    }
}
