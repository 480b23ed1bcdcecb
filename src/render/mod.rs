//! Converter seam — the external Markdown renderers behind a narrow
//! interface.
//!
//! All cosmetic post-processing happens in the orchestrator's fixup
//! pipeline, never in here; the converter only produces the upstream
//! renderer's raw output (including its basename-derived page label,
//! which the fixups rewrite).

pub mod html;
pub mod roff;

use crate::document::Document;
use crate::error::Result;
use crate::paths::Format;
use std::path::PathBuf;

/// Render a loaded document into one output format.
pub trait Converter {
    fn render(&self, doc: &Document, format: Format) -> Result<String>;
}

/// Default converter: pulldown-cmark for the HTML body, the roff crate
/// for manpage output.
pub struct MarkdownConverter {
    /// Stylesheet directory passed through to the HTML renderer;
    /// opaque configuration, referenced but never inspected.
    pub style_dir: Option<PathBuf>,
}

impl Converter for MarkdownConverter {
    fn render(&self, doc: &Document, format: Format) -> Result<String> {
        match format {
            Format::Html => html::render(doc, self.style_dir.as_deref()),
            Format::Roff => roff::render(doc),
        }
    }
}
