//! Cosmetic HTML post-processing.
//!
//! These are string-matching fixups tied to the upstream renderer's
//! output conventions, not load-bearing logic. The set applied to a run
//! is an explicit enumerated list in the orchestrator's configuration;
//! each fixup can be disabled from the CLI.

use crate::document::Document;
use crate::error::Result;
use regex::Regex;
use std::sync::LazyLock;

/// Marker after which the viewport meta tag is injected.
const HEAD_OPEN: &str = "<head>\n";

const VIEWPORT_META: &str =
    "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n";

/// The redundant empty list item the upstream renderer leaves in
/// tables of contents.
static RE_EMPTY_LI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*<li class=''></li>\n?").unwrap());

/// One cosmetic rewrite of rendered HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixup {
    /// Inject a viewport meta tag right after the head-open marker.
    ViewportMeta,
    /// Drop stray `<li class=''></li>` markers.
    EmptyListItem,
    /// Replace the basename-derived page label with the header names:
    /// `widget.3</code> - ` becomes `widget</code> - `.
    SynopsisLabel,
}

impl Fixup {
    /// Every fixup, in application order.
    pub const DEFAULT: [Fixup; 3] = [
        Fixup::ViewportMeta,
        Fixup::EmptyListItem,
        Fixup::SynopsisLabel,
    ];

    /// CLI name for `--disable-fixup`.
    pub fn name(&self) -> &'static str {
        match self {
            Fixup::ViewportMeta => "viewport",
            Fixup::EmptyListItem => "empty-li",
            Fixup::SynopsisLabel => "synopsis",
        }
    }

    pub fn from_name(name: &str) -> Option<Fixup> {
        Fixup::DEFAULT.into_iter().find(|f| f.name() == name)
    }
}

/// Run the given fixups over rendered HTML, in order.
pub fn apply(html: &str, doc: &Document, fixups: &[Fixup]) -> Result<String> {
    let mut out = html.to_string();
    for fixup in fixups {
        out = match fixup {
            Fixup::ViewportMeta => inject_viewport(&out),
            Fixup::EmptyListItem => RE_EMPTY_LI.replace_all(&out, "").into_owned(),
            Fixup::SynopsisLabel => substitute_synopsis(&out, doc)?,
        };
    }
    Ok(out)
}

fn inject_viewport(html: &str) -> String {
    match html.find(HEAD_OPEN) {
        Some(pos) => {
            let insert_at = pos + HEAD_OPEN.len();
            format!("{}{}{}", &html[..insert_at], VIEWPORT_META, &html[insert_at..])
        }
        // No head marker: leave the page alone.
        None => html.to_string(),
    }
}

/// Textual substitution, not DOM-aware: matches the literal label the
/// renderer produces from the basename.
fn substitute_synopsis(html: &str, doc: &Document) -> Result<String> {
    let names = doc.synopsis()?;
    let raw_label = format!("{}</code> - ", doc.basename);
    let new_label = format!("{}</code> - ", names);
    Ok(html.replace(&raw_label, &new_label))
}
