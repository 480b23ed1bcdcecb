//! Document model — a loaded Ronn-style source file.

use crate::error::Result;
use crate::paths;
use crate::synopsis;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Trailing manpage section in a base name: "widget.3" → "3".
static RE_SECTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.(\d+)$").unwrap());

/// A source document, immutable once loaded. Created when the
/// orchestrator opens an input path; dropped after all formats have
/// been rendered for it.
#[derive(Debug)]
pub struct Document {
    pub path: PathBuf,
    /// Raw file content, header line included.
    pub raw: String,
    /// File name minus the source suffix, e.g. "widget.3". This is the
    /// label the renderer uses for the page, by upstream convention.
    pub basename: String,
    /// Base name minus the section qualifier, e.g. "widget".
    pub name: String,
    /// Manpage section from the file name, e.g. "3". Empty when the
    /// file name carries no section.
    pub section: String,
    /// Short description from the header line (text after `--`).
    pub description: String,
    /// Markdown body (everything after the header line).
    pub body: String,
}

impl Document {
    /// Read and parse a source file. Fails with `InvalidInputPath` for an
    /// unrecognized file name, `Io` for read errors, and
    /// `MalformedDocumentHeader` when the first line is not
    /// `name(section) -- description`.
    pub fn load(path: &Path) -> Result<Document> {
        let basename = paths::source_base_name(path)?;
        let raw = fs::read_to_string(path)?;
        Self::from_content(path, basename, raw)
    }

    fn from_content(path: &Path, basename: String, raw: String) -> Result<Document> {
        let (name, section) = match RE_SECTION.captures(&basename) {
            Some(caps) => {
                let section = caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default();
                let name = basename[..basename.len() - section.len() - 1].to_string();
                (name, section)
            }
            None => (basename.clone(), String::new()),
        };

        let (_, description) = synopsis::split_header(&raw)?;
        let description = description.to_string();

        // Body is everything after the header line.
        let body = match raw.find('\n') {
            Some(pos) => raw[pos + 1..].trim_start_matches('\n').to_string(),
            None => String::new(),
        };

        Ok(Document {
            path: path.to_path_buf(),
            raw,
            basename,
            name,
            section,
            description,
            body,
        })
    }

    /// The synopsis names segment for HTML re-injection.
    pub fn synopsis(&self) -> Result<String> {
        synopsis::extract_synopsis(&self.raw, &self.section)
    }

    /// Page title, e.g. "widget(3) - widgets the thing".
    pub fn title(&self) -> String {
        if self.section.is_empty() {
            format!("{} - {}", self.name, self.description)
        } else {
            format!("{}({}) - {}", self.name, self.section, self.description)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn doc(basename: &str, content: &str) -> Result<Document> {
        Document::from_content(
            Path::new("in.ronn"),
            basename.to_string(),
            content.to_string(),
        )
    }

    #[test]
    fn derives_name_and_section() {
        let d = doc("widget.3", "widget(3) -- widgets the thing\n\nbody\n").unwrap();
        assert_eq!(d.name, "widget");
        assert_eq!(d.section, "3");
        assert_eq!(d.description, "widgets the thing");
        assert_eq!(d.body, "body\n");
    }

    #[test]
    fn no_section_in_basename() {
        let d = doc("readme", "readme -- about the project\ntext\n").unwrap();
        assert_eq!(d.name, "readme");
        assert_eq!(d.section, "");
    }

    #[test]
    fn title_includes_section() {
        let d = doc("tool.1", "tool(1) -- runs tools\n\n").unwrap();
        assert_eq!(d.title(), "tool(1) - runs tools");
    }

    #[test]
    fn malformed_header_rejected() {
        let err = doc("tool.1", "no delimiter here\nbody\n").unwrap_err();
        assert!(matches!(err, Error::MalformedDocumentHeader { .. }));
    }

    #[test]
    fn synopsis_strips_section_tag() {
        let d = doc("widget.3", "widget(3) -- widgets the thing\n\nbody\n").unwrap();
        assert_eq!(d.synopsis().unwrap(), "widget");
    }
}
