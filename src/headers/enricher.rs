// Mon Feb 09 2026 - Alex

use crate::headers::error::HeaderError;
use crate::headers::extractor::EnumExtractor;
use crate::headers::stub::DeclarationStub;
use crate::sources::SourceIndex;
use std::path::PathBuf;

pub struct EnrichmentOutcome {
    pub text: String,
    pub missing: Vec<String>,
}

impl EnrichmentOutcome {
    pub fn resolved_everything(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Rewrites placeholder enum declarations in a declaration artifact by
/// resolving each against the source index. The index (and its file cache)
/// is scoped to this enricher, so repeated passes start cold.
pub struct DeclarationEnricher {
    index: SourceIndex,
}

impl DeclarationEnricher {
    pub fn new(source_roots: &[PathBuf]) -> Self {
        Self {
            index: SourceIndex::new(source_roots),
        }
    }

    /// Processes the artifact line by line. Stub lines that resolve are
    /// replaced with a populated declaration; stubs that do not are passed
    /// through untouched and collected in `missing`. All other lines pass
    /// through unchanged, in order.
    pub fn enrich(&mut self, declaration_text: &str) -> Result<EnrichmentOutcome, HeaderError> {
        let mut missing = Vec::new();
        let mut lines = Vec::new();

        for line in declaration_text.split('\n') {
            let Some(stub) = DeclarationStub::parse(line) else {
                lines.push(line.to_string());
                continue;
            };

            match self.resolve(&stub)? {
                Some(entries) => {
                    log::debug!(
                        "Resolved enum {} with {} entries",
                        stub.enum_name,
                        entries.len()
                    );
                    lines.push(stub.render_declaration(&entries));
                }
                None => {
                    missing.push(stub.raw_line.clone());
                    lines.push(line.to_string());
                }
            }
        }

        Ok(EnrichmentOutcome {
            text: lines.join("\n"),
            missing,
        })
    }

    // Candidate matching is substring containment on the whole path, not a
    // path-segment match. The first candidate with a usable enum body wins;
    // the index is sorted, so ties break the same way on every platform.
    fn resolve(&mut self, stub: &DeclarationStub) -> Result<Option<Vec<String>>, HeaderError> {
        let candidates: Vec<PathBuf> = self
            .index
            .files()
            .iter()
            .filter(|path| path.to_string_lossy().contains(&stub.source_file_hint))
            .cloned()
            .collect();

        for candidate in candidates {
            let contents = self.index.read(&candidate)?;
            if let Some(entries) = EnumExtractor::extract(contents, &stub.enum_name) {
                return Ok(Some(entries));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_source(dir: &TempDir, rel: &str, contents: &str) {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_resolves_stub_against_source_tree() {
        let dir = TempDir::new().unwrap();
        write_source(&dir, "src/bar.h", "enum BarEnum\n{\n  A, // comment\n  B,\n};");

        let mut enricher = DeclarationEnricher::new(&[dir.path().to_path_buf()]);
        let outcome = enricher
            .enrich("declare const enum Foo {} /** ./src/bar.h:BarEnum */")
            .unwrap();

        assert_eq!(outcome.text, "declare const enum Foo {\n    A,\n    B\n}");
        assert!(outcome.missing.is_empty());
    }

    #[test]
    fn test_unresolved_stub_is_kept_and_reported() {
        let dir = TempDir::new().unwrap();
        let line = "declare const enum Foo {} /** ./src/bar.h:BarEnum */";

        let mut enricher = DeclarationEnricher::new(&[dir.path().to_path_buf()]);
        let outcome = enricher.enrich(line).unwrap();

        assert_eq!(outcome.text, line);
        assert_eq!(outcome.missing, vec![line.to_string()]);
    }

    #[test]
    fn test_entry_count_matches_source() {
        let dir = TempDir::new().unwrap();
        write_source(
            &dir,
            "Unit.h",
            "enum UnitState {\n    STATE_A = 1,\n    STATE_B = 2,\n    STATE_C = 4,\n    STATE_D = 8,\n};",
        );

        let mut enricher = DeclarationEnricher::new(&[dir.path().to_path_buf()]);
        let outcome = enricher
            .enrich("declare const enum UnitState {} /** Unit.h:UnitState */")
            .unwrap();

        let rewritten = outcome.text;
        assert_eq!(rewritten.matches("STATE_").count(), 4);
        assert_eq!(rewritten.matches(',').count(), 3);
    }

    #[test]
    fn test_non_stub_lines_pass_through() {
        let dir = TempDir::new().unwrap();
        let text = "declare function GetName(): string\n\n// comment line";

        let mut enricher = DeclarationEnricher::new(&[dir.path().to_path_buf()]);
        let outcome = enricher.enrich(text).unwrap();

        assert_eq!(outcome.text, text);
        assert!(outcome.missing.is_empty());
    }

    #[test]
    fn test_enum_found_in_second_candidate() {
        let dir = TempDir::new().unwrap();
        // Both paths contain the hint; only the second defines the enum.
        write_source(&dir, "a/Item.h", "// forward declarations only");
        write_source(&dir, "b/Item.h", "enum ItemClass { WEAPON, ARMOR };");

        let mut enricher = DeclarationEnricher::new(&[dir.path().to_path_buf()]);
        let outcome = enricher
            .enrich("declare const enum ItemClass {} /** Item.h:ItemClass */")
            .unwrap();

        assert!(outcome.missing.is_empty());
        assert!(outcome.text.contains("WEAPON"));
    }

    #[test]
    fn test_structurally_empty_enum_reports_missing() {
        let dir = TempDir::new().unwrap();
        write_source(&dir, "Empty.h", "enum Nothing {\n    // reserved\n};");
        let line = "declare const enum Nothing {} /** Empty.h:Nothing */";

        let mut enricher = DeclarationEnricher::new(&[dir.path().to_path_buf()]);
        let outcome = enricher.enrich(line).unwrap();

        assert_eq!(outcome.text, line);
        assert_eq!(outcome.missing.len(), 1);
    }
}
