// Mon Feb 09 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;

// declare const enum Foo {} /** ./path/to/file.h:FooEnum */
static STUB_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"declare +const +enum +([a-zA-Z_][a-zA-Z_0-9]*) +\{.*?\} +/\*\* +(.+?):([a-zA-Z_][a-zA-Z_0-9]*).*",
    )
    .expect("stub pattern must compile")
});

/// One placeholder enum declaration parsed out of the declaration artifact.
/// Lives only for the duration of a single enrichment pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationStub {
    pub declared_name: String,
    pub source_file_hint: String,
    pub enum_name: String,
    pub raw_line: String,
}

impl DeclarationStub {
    pub fn parse(line: &str) -> Option<Self> {
        let caps = STUB_PATTERN.captures(line)?;
        let hint = caps.get(2)?.as_str();
        let hint = hint.strip_prefix("./").unwrap_or(hint);

        Some(Self {
            declared_name: caps.get(1)?.as_str().to_string(),
            source_file_hint: hint.to_string(),
            enum_name: caps.get(3)?.as_str().to_string(),
            raw_line: line.to_string(),
        })
    }

    /// Full replacement declaration for a resolved stub. Replaces the whole
    /// line, never edits the original fragment.
    pub fn render_declaration(&self, entries: &[String]) -> String {
        format!(
            "declare const enum {} {{\n    {}\n}}",
            self.declared_name,
            entries.join(",\n    ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stub_line() {
        let line = "declare const enum Foo {} /** ./src/bar.h:BarEnum */";
        let stub = DeclarationStub::parse(line).unwrap();
        assert_eq!(stub.declared_name, "Foo");
        assert_eq!(stub.source_file_hint, "src/bar.h");
        assert_eq!(stub.enum_name, "BarEnum");
        assert_eq!(stub.raw_line, line);
    }

    #[test]
    fn test_parse_hint_without_dot_slash() {
        let line = "declare const enum Quality {} /** Shared/ItemTemplate.h:ItemQualities */";
        let stub = DeclarationStub::parse(line).unwrap();
        assert_eq!(stub.source_file_hint, "Shared/ItemTemplate.h");
    }

    #[test]
    fn test_parse_rejects_plain_lines() {
        assert!(DeclarationStub::parse("declare function GetName(): string").is_none());
        assert!(DeclarationStub::parse("// declare const enum Foo").is_none());
        assert!(DeclarationStub::parse("declare const enum Foo {}").is_none());
    }

    #[test]
    fn test_render_declaration() {
        let stub = DeclarationStub::parse("declare const enum Foo {} /** a.h:E */").unwrap();
        let rendered = stub.render_declaration(&["A".to_string(), "B = 4".to_string()]);
        assert_eq!(rendered, "declare const enum Foo {\n    A,\n    B = 4\n}");
    }
}
