// Tue Feb 10 2026 - Alex

use crate::addons::{AddonSynchronizer, ModuleEndpoint};
use crate::config::Config;
use crate::headers::DeclarationEnricher;
use crate::pipeline::error::PipelineError;
use crate::utils::fs as fsutil;

#[derive(Debug)]
pub struct PipelineReport {
    pub missing_enums: Vec<String>,
    pub endpoints_synced: usize,
}

/// Sequences the whole header-generation step: static header copies,
/// declaration enrichment, and per-endpoint addon synchronization. A
/// globals-only run skips the third-party and runtime header copies.
pub struct HeaderPipeline {
    config: Config,
}

impl HeaderPipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run(&self, global_only: bool) -> Result<PipelineReport, PipelineError> {
        log::info!("Running header generation (global_only: {})", global_only);

        self.copy_public_headers()?;

        if !global_only {
            self.copy_third_party_headers()?;
            self.copy_runtime_headers()?;
            self.copy_profiler_headers()?;
        }

        self.copy_packet_headers()?;
        let missing_enums = self.enrich_declarations()?;
        self.copy_addon_support_files()?;
        let endpoints_synced = self.sync_endpoints()?;

        Ok(PipelineReport {
            missing_enums,
            endpoints_synced,
        })
    }

    fn copy_public_headers(&self) -> Result<(), PipelineError> {
        fsutil::copy_tree(
            &self.config.core_public_headers,
            &self.config.install_include_dir,
            true,
        )?;
        Ok(())
    }

    // Third-party scripting headers only exist after a core build; a full
    // pass without them is a hard error.
    fn copy_third_party_headers(&self) -> Result<(), PipelineError> {
        let found = self
            .config
            .third_party_header_candidates
            .iter()
            .find(|candidate| candidate.exists())
            .ok_or(PipelineError::MissingThirdPartyHeaders)?;

        fsutil::copy_tree(found, &self.config.install_include_dir, false)?;
        Ok(())
    }

    fn copy_runtime_headers(&self) -> Result<(), PipelineError> {
        if let Some(dir) = &self.config.runtime_header_dir {
            fsutil::copy_tree_filtered(
                dir,
                &self.config.install_include_dir.join("lua"),
                &["h"],
                true,
            )?;
        }
        Ok(())
    }

    fn copy_profiler_headers(&self) -> Result<(), PipelineError> {
        for dir in &self.config.profiler_header_dirs {
            let Some(name) = dir.file_name() else {
                continue;
            };
            fsutil::copy_tree_filtered(
                dir,
                &self.config.install_include_dir.join("profiler").join(name),
                &["h", "hpp"],
                true,
            )?;
        }
        Ok(())
    }

    fn copy_packet_headers(&self) -> Result<(), PipelineError> {
        if let Some(dir) = &self.config.packet_header_dir {
            fsutil::copy_tree_filtered(dir, &self.config.install_include_dir, &["h"], true)?;
        }
        Ok(())
    }

    fn enrich_declarations(&self) -> Result<Vec<String>, PipelineError> {
        let raw = fsutil::read_text_file(&self.config.declaration_artifact)?;

        let mut enricher = DeclarationEnricher::new(&self.config.source_roots);
        let outcome = enricher.enrich(&raw)?;

        fsutil::write_text_file(&self.config.install_declaration_artifact, &outcome.text)?;

        for line in &outcome.missing {
            log::warn!("Could not find enum for: {}", line.trim());
        }

        Ok(outcome.missing)
    }

    fn copy_addon_support_files(&self) -> Result<(), PipelineError> {
        for file in &self.config.addon_support_files {
            fsutil::copy_file_into(file, &self.config.addon_include_dir)?;
        }
        Ok(())
    }

    fn sync_endpoints(&self) -> Result<usize, PipelineError> {
        let endpoints = ModuleEndpoint::discover(&self.config.scripts_root)
            .map_err(PipelineError::Io)?;

        for endpoint in &endpoints {
            AddonSynchronizer::sync(endpoint)?;
        }

        Ok(endpoints.len())
    }
}
