//! Roff renderer — manpage output via the roff crate's man macros.
//!
//! Walks pulldown-cmark events and emits the usual man-package macros:
//! .SH/.SS for headings, .PP for paragraphs, .IP for list items,
//! .nf/.fi inside .RS/.RE for code blocks. Character escaping is the
//! roff crate's job.

use crate::document::Document;
use crate::error::Result;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};
use roff::{bold, italic, roman, Inline, Roff};

pub fn render(doc: &Document) -> Result<String> {
    let mut page = Page::new();
    page.roff.control(
        "TH",
        [doc.name.to_uppercase().as_str(), doc.section.as_str()],
    );
    page.roff.control("SH", ["NAME"]);
    page.roff.text([
        bold(doc.name.as_str()),
        roman(" - "),
        roman(doc.description.as_str()),
    ]);
    page.body(&doc.body);
    Ok(page.roff.render())
}

/// Event-walking state for one page.
struct Page {
    roff: Roff,
    /// Inline run for the current output line, flushed at block ends.
    line: Vec<Inline>,
    bold_depth: usize,
    italic_depth: usize,
    /// Set while collecting heading text (headings become macro args).
    heading: Option<String>,
    in_code_block: bool,
    /// Numbering state per open list; None for bullet lists.
    list_stack: Vec<Option<u64>>,
}

impl Page {
    fn new() -> Self {
        Page {
            roff: Roff::new(),
            line: Vec::new(),
            bold_depth: 0,
            italic_depth: 0,
            heading: None,
            in_code_block: false,
            list_stack: Vec::new(),
        }
    }

    fn body(&mut self, markdown: &str) {
        let parser = Parser::new_ext(markdown, Options::empty());
        for event in parser {
            match event {
                Event::Start(tag) => self.start(tag),
                Event::End(tag) => self.end(tag),
                Event::Text(t) => self.text(&t),
                Event::Code(t) => {
                    if let Some(heading) = &mut self.heading {
                        heading.push_str(&t);
                    } else {
                        self.line.push(bold(&*t));
                    }
                }
                Event::SoftBreak | Event::HardBreak => self.line.push(roman(" ")),
                Event::Rule => {
                    self.flush();
                    self.roff.control("PP", []);
                }
                _ => {}
            }
        }
        self.flush();
    }

    fn start(&mut self, tag: Tag) {
        match tag {
            Tag::Heading(..) => {
                self.flush();
                self.heading = Some(String::new());
            }
            Tag::Paragraph => {
                self.flush();
                if self.list_stack.is_empty() {
                    self.roff.control("PP", []);
                }
            }
            Tag::CodeBlock(_) => {
                self.flush();
                self.roff.control("PP", []);
                self.roff.control("RS", ["4"]);
                self.roff.control("nf", []);
                self.in_code_block = true;
            }
            Tag::List(start) => {
                self.flush();
                self.list_stack.push(start);
            }
            Tag::Item => {
                self.flush();
                let label = match self.list_stack.last_mut() {
                    Some(Some(n)) => {
                        let label = format!("{}.", n);
                        *n += 1;
                        label
                    }
                    _ => "\\(bu".to_string(),
                };
                self.roff.control("IP", [label.as_str(), "4"]);
            }
            Tag::BlockQuote => {
                self.flush();
                self.roff.control("RS", ["4"]);
            }
            Tag::Emphasis => self.italic_depth += 1,
            Tag::Strong => self.bold_depth += 1,
            _ => {}
        }
    }

    fn end(&mut self, tag: Tag) {
        match tag {
            Tag::Heading(level, ..) => {
                let text = self.heading.take().unwrap_or_default();
                match level {
                    HeadingLevel::H1 | HeadingLevel::H2 => {
                        self.roff.control("SH", [text.to_uppercase().as_str()]);
                    }
                    _ => {
                        self.roff.control("SS", [text.as_str()]);
                    }
                }
            }
            Tag::Paragraph => self.flush(),
            Tag::CodeBlock(_) => {
                self.flush();
                self.roff.control("fi", []);
                self.roff.control("RE", []);
                self.in_code_block = false;
            }
            Tag::List(_) => {
                self.flush();
                self.list_stack.pop();
            }
            Tag::Item => self.flush(),
            Tag::BlockQuote => {
                self.flush();
                self.roff.control("RE", []);
            }
            Tag::Emphasis => self.italic_depth -= 1,
            Tag::Strong => self.bold_depth -= 1,
            Tag::Link(_, dest, _) => {
                // Manpages have no hyperlinks; show absolute URLs inline.
                if dest.starts_with("http") {
                    self.line.push(roman(format!(" <{}>", dest)));
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, t: &str) {
        if let Some(heading) = &mut self.heading {
            heading.push_str(t);
            return;
        }
        if self.in_code_block {
            for line in t.lines() {
                self.roff.text([roman(line)]);
            }
            return;
        }
        let inline = if self.bold_depth > 0 {
            bold(t)
        } else if self.italic_depth > 0 {
            italic(t)
        } else {
            roman(t)
        };
        self.line.push(inline);
    }

    fn flush(&mut self) {
        if !self.line.is_empty() {
            let line = std::mem::take(&mut self.line);
            self.roff.text(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn doc(body: &str) -> Document {
        Document {
            path: Path::new("widget.3.ronn").to_path_buf(),
            raw: format!("widget(3) -- widgets the thing\n\n{}", body),
            basename: "widget.3".into(),
            name: "widget".into(),
            section: "3".into(),
            description: "widgets the thing".into(),
            body: body.into(),
        }
    }

    #[test]
    fn title_and_name_section() {
        let out = render(&doc("")).unwrap();
        assert!(out.contains(".TH WIDGET 3"), "got: {out}");
        assert!(out.contains(".SH NAME"), "got: {out}");
        assert!(out.contains("widget"), "got: {out}");
    }

    #[test]
    fn headings_become_sections() {
        let out = render(&doc("## Synopsis\n\ntext\n\n### Details\n\nmore\n")).unwrap();
        assert!(out.contains(".SH SYNOPSIS"), "got: {out}");
        assert!(out.contains(".SS Details"), "got: {out}");
    }

    #[test]
    fn code_blocks_use_no_fill() {
        let out = render(&doc("    widget(1, 2)\n")).unwrap();
        assert!(out.contains(".nf"), "got: {out}");
        assert!(out.contains(".fi"), "got: {out}");
        assert!(out.contains("widget(1, 2)"), "got: {out}");
    }

    #[test]
    fn bullet_items_use_ip() {
        let out = render(&doc("- one\n- two\n")).unwrap();
        assert!(out.contains(".IP"), "got: {out}");
        assert!(out.contains("one"), "got: {out}");
        assert!(out.contains("two"), "got: {out}");
    }

    #[test]
    fn deterministic_output() {
        // No dates or environment leak into the page.
        let a = render(&doc("body text\n")).unwrap();
        let b = render(&doc("body text\n")).unwrap();
        assert_eq!(a, b);
    }
}
