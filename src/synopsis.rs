//! Header-line parsing and synopsis extraction.
//!
//! A Ronn-style document opens with `name(section) -- description`. The
//! names segment (everything before the `--`, with the `(section)` tag
//! removed) is re-injected into the rendered HTML in place of the
//! renderer's basename-derived label.

use crate::error::{Error, Result};

/// Split a document's first line into (names, description) around the
/// first literal `--`.
///
/// Fails with `MalformedDocumentHeader` when the text has no line break
/// or the first line has no `--` delimiter.
pub fn split_header(text: &str) -> Result<(&str, &str)> {
    let first_line = match text.find('\n') {
        Some(pos) => &text[..pos],
        None => {
            return Err(Error::MalformedDocumentHeader {
                reason: "document has no line break after the header line".into(),
            })
        }
    };

    let (names, description) =
        first_line
            .split_once("--")
            .ok_or_else(|| Error::MalformedDocumentHeader {
                reason: format!("header line has no `--` delimiter: {:?}", first_line),
            })?;

    Ok((names, description.trim()))
}

/// Extract the synopsis names from document text: first line before the
/// `--`, with every literal `(section)` occurrence removed, trimmed.
///
/// Pure function of its inputs; the result is only ever used as a
/// substitution value.
pub fn extract_synopsis(text: &str, section: &str) -> Result<String> {
    let (names, _) = split_header(text)?;
    let tag = format!("({})", section);
    Ok(names.replace(&tag, "").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_single_name() {
        let text = "foo(1) -- does a thing\nbody...\n";
        assert_eq!(extract_synopsis(text, "1").unwrap(), "foo");
    }

    #[test]
    fn extracts_multiple_names() {
        let text = "foo, bar(1) -- does a thing\nbody...\n";
        assert_eq!(extract_synopsis(text, "1").unwrap(), "foo, bar");
    }

    #[test]
    fn section_tag_removed_everywhere() {
        let text = "foo(8), foo-ctl(8) -- manages foos\n";
        assert_eq!(extract_synopsis(text, "8").unwrap(), "foo, foo-ctl");
    }

    #[test]
    fn no_line_break_is_malformed() {
        let err = extract_synopsis("foo(1) -- no newline", "1").unwrap_err();
        assert!(matches!(err, Error::MalformedDocumentHeader { .. }));
    }

    #[test]
    fn no_delimiter_is_malformed() {
        let err = extract_synopsis("just a title\nbody\n", "1").unwrap_err();
        assert!(matches!(err, Error::MalformedDocumentHeader { .. }));
    }

    #[test]
    fn split_header_keeps_description() {
        let (names, desc) = split_header("widget(3) -- widgets the thing\n## SYNOPSIS\n").unwrap();
        assert_eq!(names, "widget(3) ");
        assert_eq!(desc, "widgets the thing");
    }
}
