// Tue Feb 10 2026 - Alex

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One script module's install-side directory: an `index.lua` entry script,
/// a `lua/` mirror of generated scripts, and addon subdirectories.
#[derive(Debug, Clone)]
pub struct ModuleEndpoint {
    root: PathBuf,
}

impl ModuleEndpoint {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_script(&self) -> PathBuf {
        self.root.join("index.lua")
    }

    pub fn lua_dir(&self) -> PathBuf {
        self.root.join("lua")
    }

    /// Shallow child directories of the endpoint, sorted. A missing endpoint
    /// root is an empty module, not an error.
    pub fn addon_dirs(&self) -> io::Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        if !self.root.is_dir() {
            return Ok(dirs);
        }
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                dirs.push(entry.path());
            }
        }
        dirs.sort();
        Ok(dirs)
    }

    /// Every shallow child directory of the scripts install root is one
    /// module endpoint.
    pub fn discover(scripts_root: &Path) -> io::Result<Vec<ModuleEndpoint>> {
        let mut endpoints = Vec::new();
        if !scripts_root.is_dir() {
            return Ok(endpoints);
        }
        for entry in fs::read_dir(scripts_root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                endpoints.push(ModuleEndpoint::new(entry.path()));
            }
        }
        endpoints.sort_by(|a, b| a.root.cmp(&b.root));
        Ok(endpoints)
    }
}
