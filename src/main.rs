//! ronngen — convert Ronn-style manpage sources to roff and HTML.
//!
//! Sources are Markdown files opening with a `name(section) -- description`
//! header line (e.g. `widget.3.ronn`). Each document is rendered once per
//! output format; the HTML output additionally runs through a small pipeline
//! of cosmetic fixups (viewport meta injection, stray-markup removal,
//! synopsis label substitution).
//!
//! Two invocation shapes:
//!
//! - `ronngen <outdir> <doc...>` — one directory gets both formats
//! - `ronngen <man-dir> <html-dir> <doc...>` — roff and HTML split

mod document;
mod error;
mod fixup;
mod paths;
mod render;
mod synopsis;

use anyhow::{bail, Context, Result};
use clap::Parser;
use document::Document;
use fixup::Fixup;
use log::debug;
use paths::Format;
use render::{Converter, MarkdownConverter};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "ronngen",
    about = "Convert Ronn-style manpage sources to roff and HTML"
)]
struct Cli {
    /// Output directory for roff output (and for HTML, unless a second
    /// directory is given)
    outdir: PathBuf,

    /// Source documents (glob patterns supported), optionally preceded
    /// by a separate HTML output directory
    args: Vec<String>,

    /// Stylesheet directory referenced from generated HTML
    /// (falls back to $RONNGEN_STYLE)
    #[arg(long)]
    style_dir: Option<PathBuf>,

    /// Disable a cosmetic HTML fixup: viewport, empty-li, synopsis.
    /// Can be specified multiple times.
    #[arg(long = "disable-fixup", value_name = "FIXUP")]
    disable_fixup: Vec<String>,
}

/// Destination directory per output format.
struct Destinations {
    roff: PathBuf,
    html: PathBuf,
}

impl Destinations {
    fn dir(&self, format: Format) -> &Path {
        match format {
            Format::Roff => &self.roff,
            Format::Html => &self.html,
        }
    }
}

/// Resolved run configuration: inputs in argument order, one destination
/// per format, and the explicit list of fixups to apply.
struct Config {
    inputs: Vec<PathBuf>,
    destinations: Destinations,
    fixups: Vec<Fixup>,
    style_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = configure(cli)?;
    run(&config)
}

/// Turn CLI arguments into a run configuration.
fn configure(cli: Cli) -> Result<Config> {
    let (html_dir, docs) = split_html_dir(&cli.args);
    let destinations = Destinations {
        html: html_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.outdir.clone()),
        roff: cli.outdir,
    };

    let inputs = expand_inputs(docs)?;
    if inputs.is_empty() {
        bail!("no input documents given");
    }

    let mut fixups: Vec<Fixup> = Fixup::DEFAULT.to_vec();
    for name in &cli.disable_fixup {
        match Fixup::from_name(name) {
            Some(fixup) => fixups.retain(|f| *f != fixup),
            None => bail!("unknown fixup: {} (expected viewport, empty-li or synopsis)", name),
        }
    }

    let style_dir = cli
        .style_dir
        .or_else(|| std::env::var_os("RONNGEN_STYLE").map(PathBuf::from));

    Ok(Config {
        inputs,
        destinations,
        fixups,
        style_dir,
    })
}

/// The second positional is an HTML output directory iff it does not
/// look like a source document.
fn split_html_dir(args: &[String]) -> (Option<&String>, &[String]) {
    match args.first() {
        Some(first) if !paths::is_source_path(first) => (Some(first), &args[1..]),
        _ => (None, args),
    }
}

/// Expand document arguments, preserving argument order. A literal path
/// must exist; a glob pattern may legitimately match nothing.
fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if !is_glob_pattern(pattern) {
            bail!("no such input file: {}", pattern);
        }
        let matches: Vec<PathBuf> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            log::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    Ok(files)
}

fn is_glob_pattern(s: &str) -> bool {
    s.chars().any(|c| matches!(c, '*' | '?' | '['))
}

/// Process every (document, format) pair sequentially; any failure
/// aborts the whole batch.
fn run(config: &Config) -> Result<()> {
    for dir in [&config.destinations.roff, &config.destinations.html] {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    }

    let converter = MarkdownConverter {
        style_dir: config.style_dir.clone(),
    };

    for input in &config.inputs {
        let doc = Document::load(input)
            .with_context(|| format!("failed to load {}", input.display()))?;
        debug!("loaded {} ({} bytes)", doc.path.display(), doc.raw.len());

        for format in Format::ALL {
            debug!("rendering {} as {}", input.display(), format);
            let rendered = converter
                .render(&doc, format)
                .with_context(|| format!("failed to render {} as {}", input.display(), format))?;

            let output = match format {
                Format::Html => fixup::apply(&rendered, &doc, &config.fixups)
                    .with_context(|| format!("failed to post-process {}", input.display()))?,
                Format::Roff => rendered,
            };

            let filename = paths::resolve_output_name(input, format)?;
            let dest = config.destinations.dir(format).join(&filename);
            fs::write(&dest, output)
                .with_context(|| format!("failed to write {}", dest.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn html_dir_detected_before_documents() {
        let list = args(&["htmlout", "a.1.ronn", "b.2.ronn"]);
        let (html_dir, docs) = split_html_dir(&list);
        assert_eq!(html_dir.map(String::as_str), Some("htmlout"));
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn no_html_dir_when_first_arg_is_a_document() {
        let list = args(&["a.1.ronn", "b.2.ronn"]);
        let (html_dir, docs) = split_html_dir(&list);
        assert!(html_dir.is_none());
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn glob_detection() {
        assert!(is_glob_pattern("man/*.ronn"));
        assert!(is_glob_pattern("tool.?.ronn"));
        assert!(!is_glob_pattern("man/tool.1.ronn"));
    }

    #[test]
    fn missing_literal_input_fails() {
        let err = expand_inputs(&args(&["does-not-exist.ronn"])).unwrap_err();
        assert!(err.to_string().contains("no such input file"));
    }
}
