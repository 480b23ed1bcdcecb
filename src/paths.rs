//! Output path resolution — maps a source path and target format to the
//! conventional output filename.
//!
//! A roff source named `widget.3.ronn` already encodes the manpage name:
//! the roff output is `widget.3` (no extra suffix), the html output is
//! `widget.3.html`.

use crate::error::{Error, Result};
use std::path::Path;

/// Source suffixes accepted as convertible documents.
pub const SOURCE_SUFFIXES: &[&str] = &[".ronn", ".md"];

/// Target output format. Not a stored entity — parametrizes filename
/// and rendering logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Roff,
}

impl Format {
    /// All formats, in the fixed order outputs are produced.
    pub const ALL: [Format; 2] = [Format::Html, Format::Roff];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Roff => "roff",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True if the argument names a convertible source file.
pub fn is_source_path(arg: &str) -> bool {
    SOURCE_SUFFIXES.iter().any(|s| arg.ends_with(s))
}

/// Strip directory components and the source suffix from a path.
/// "man/widget.3.ronn" → "widget.3"
pub fn source_base_name(source: &Path) -> Result<String> {
    let file_name = source
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::InvalidInputPath {
            path: source.to_path_buf(),
        })?;

    let base = SOURCE_SUFFIXES
        .iter()
        .find_map(|s| file_name.strip_suffix(s))
        .ok_or_else(|| Error::InvalidInputPath {
            path: source.to_path_buf(),
        })?;

    if base.is_empty() {
        return Err(Error::InvalidInputPath {
            path: source.to_path_buf(),
        });
    }
    Ok(base.to_string())
}

/// Compute the output filename for a (source, format) pair.
///
/// The output never retains the source suffix: roff gets the bare base
/// name, every other format appends its own extension.
pub fn resolve_output_name(source: &Path, format: Format) -> Result<String> {
    let base = source_base_name(source)?;
    Ok(match format {
        Format::Roff => base,
        Format::Html => format!("{}.{}", base, format),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roff_name_is_bare_base() {
        let name = resolve_output_name(Path::new("widget.3.ronn"), Format::Roff).unwrap();
        assert_eq!(name, "widget.3");
    }

    #[test]
    fn html_name_appends_extension() {
        let name = resolve_output_name(Path::new("widget.3.ronn"), Format::Html).unwrap();
        assert_eq!(name, "widget.3.html");
    }

    #[test]
    fn directory_components_stripped() {
        let name = resolve_output_name(Path::new("docs/man/tool.1.ronn"), Format::Roff).unwrap();
        assert_eq!(name, "tool.1");
    }

    #[test]
    fn md_suffix_accepted() {
        let name = resolve_output_name(Path::new("uprocctl.1.md"), Format::Html).unwrap();
        assert_eq!(name, "uprocctl.1.html");
    }

    #[test]
    fn unknown_suffix_rejected() {
        let err = resolve_output_name(Path::new("tool.1.txt"), Format::Roff).unwrap_err();
        assert!(matches!(err, Error::InvalidInputPath { .. }));
    }

    #[test]
    fn bare_suffix_rejected() {
        // ".ronn" alone reduces to an empty base name
        let err = resolve_output_name(Path::new(".ronn"), Format::Roff).unwrap_err();
        assert!(matches!(err, Error::InvalidInputPath { .. }));
    }

    #[test]
    fn source_detection() {
        assert!(is_source_path("widget.3.ronn"));
        assert!(is_source_path("page.md"));
        assert!(!is_source_path("out"));
        assert!(!is_source_path("html"));
    }
}
