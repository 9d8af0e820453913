// Mon Feb 09 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub core_public_headers: PathBuf,
    pub install_include_dir: PathBuf,
    pub third_party_header_candidates: Vec<PathBuf>,
    pub runtime_header_dir: Option<PathBuf>,
    pub profiler_header_dirs: Vec<PathBuf>,
    pub packet_header_dir: Option<PathBuf>,
    pub declaration_artifact: PathBuf,
    pub install_declaration_artifact: PathBuf,
    pub source_roots: Vec<PathBuf>,
    pub addon_include_dir: PathBuf,
    pub addon_support_files: Vec<PathBuf>,
    pub scripts_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            core_public_headers: PathBuf::from("core/Public"),
            install_include_dir: PathBuf::from("install/bin/include"),
            third_party_header_candidates: vec![PathBuf::from("build/core/scripting-headers")],
            runtime_header_dir: Some(PathBuf::from("build/core/lua-headers")),
            profiler_header_dirs: Vec::new(),
            packet_header_dir: Some(PathBuf::from("misc/client-extensions/CustomPackets")),
            declaration_artifact: PathBuf::from("core/Public/global.d.ts"),
            install_declaration_artifact: PathBuf::from("install/bin/include/global.d.ts"),
            source_roots: vec![PathBuf::from("core"), PathBuf::from("scripting/runtime")],
            addon_include_dir: PathBuf::from("install/bin/include-addon"),
            addon_support_files: vec![
                PathBuf::from("misc/include-addon/Events.ts"),
                PathBuf::from("misc/include-addon/shared.global.d.ts"),
                PathBuf::from("misc/include-addon/LualibBundle.lua"),
                PathBuf::from("misc/include-addon/RequireStub.lua"),
            ],
            scripts_root: PathBuf::from("install/bin/scripts"),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn with_declaration_artifact(mut self, artifact: PathBuf) -> Self {
        self.declaration_artifact = artifact;
        self
    }

    pub fn with_source_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.source_roots = roots;
        self
    }

    pub fn with_scripts_root(mut self, root: PathBuf) -> Self {
        self.scripts_root = root;
        self
    }

    pub fn with_install_include_dir(mut self, dir: PathBuf) -> Self {
        self.install_include_dir = dir;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.source_roots.is_empty() {
            return Err("At least one source root must be set".to_string());
        }
        if self.declaration_artifact.as_os_str().is_empty() {
            return Err("declaration_artifact must be set".to_string());
        }
        if self.install_declaration_artifact.as_os_str().is_empty() {
            return Err("install_declaration_artifact must be set".to_string());
        }
        if self.scripts_root.as_os_str().is_empty() {
            return Err("scripts_root must be set".to_string());
        }
        Ok(())
    }
}
