// Mon Feb 09 2026 - Alex

use regex::Regex;

/// Pulls a named enum body out of raw source text and normalizes its member
/// list. This is targeted pattern extraction, not a parse of the source
/// language; if the same enum name appears more than once in a file, the
/// first occurrence wins.
pub struct EnumExtractor;

impl EnumExtractor {
    /// Returns the trimmed, comment-stripped member list in source order, or
    /// `None` when the enum is absent or yields no usable entries.
    pub fn extract(file_text: &str, enum_name: &str) -> Option<Vec<String>> {
        let pattern = format!(
            r"enum\s+{}\s*\n?\s*\{{([^}}]*)\}}",
            regex::escape(enum_name)
        );
        let regex = Regex::new(&pattern).expect("escaped enum pattern must compile");

        let caps = regex.captures(file_text)?;
        let body = caps.get(1)?.as_str();

        let entries = Self::normalize_body(body);
        if entries.is_empty() {
            None
        } else {
            Some(entries)
        }
    }

    fn normalize_body(body: &str) -> Vec<String> {
        body.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("//") && !line.starts_with("/*"))
            .map(|line| match line.find("//") {
                Some(idx) => line[..idx].trim(),
                None => line,
            })
            .filter(|line| !line.is_empty())
            .map(|line| line.strip_suffix(',').unwrap_or(line).to_string())
            .collect()
    }
}
