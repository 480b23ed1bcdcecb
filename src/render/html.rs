//! HTML renderer — standalone manpage-style HTML document.
//!
//! The page label in the NAME section uses the basename-derived name
//! (e.g. `widget.3`), matching the upstream renderer's convention; the
//! synopsis fixup downstream replaces it with the header names.

use crate::document::Document;
use crate::error::Result;
use pulldown_cmark::{html as cmark_html, Options, Parser};
use std::path::Path;

pub fn render(doc: &Document, style_dir: Option<&Path>) -> Result<String> {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", html_escape(&doc.title())));
    if let Some(dir) = style_dir {
        out.push_str(&format!(
            "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}/man.css\">\n",
            html_escape(&dir.display().to_string())
        ));
    }
    out.push_str("</head>\n<body class=\"mp\">\n");

    // NAME section, labeled with the basename-derived name.
    out.push_str("<h2 id=\"NAME\">NAME</h2>\n");
    out.push_str(&format!(
        "<p class=\"man-name\">\n  <code>{}</code> - <span class=\"man-whatis\">{}</span>\n</p>\n",
        html_escape(&doc.basename),
        html_escape(&doc.description)
    ));

    // Body, delegated wholesale to pulldown-cmark.
    let parser = Parser::new_ext(&doc.body, Options::empty());
    cmark_html::push_html(&mut out, parser);

    out.push_str("</body>\n</html>\n");
    Ok(out)
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
