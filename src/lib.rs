//! # linkpage
//!
//! Converts a markdown-style link list into a static HTML page.
//!
//! The input is line-oriented text with `#` headings and `- [text](url)`
//! bullets; the output is a single self-contained HTML5 document with
//! headings and `<ul>`-wrapped lists of anchors.
//!
//! ## Quick Start
//!
//! ```no_run
//! use linkpage::{convert_file, RenderOptions};
//!
//! fn main() -> linkpage::Result<()> {
//!     // links.md in, index.html out
//!     convert_file("links.md", "index.html")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! Four synchronous stages, one pass each:
//!
//! 1. **Reader** — loads the source file as ordered lines.
//! 2. **Classifier** — turns each line into at most one [`Token`].
//! 3. **Normalizer** — inserts `<ul>`/`</ul>` wrapper tokens around
//!    runs of list items.
//! 4. **Assembler** — concatenates tokens into a fixed page template
//!    and writes the result.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

pub use error::{Error, Result};
pub use model::Token;
pub use parser::{read_lines, LineClassifier};
pub use render::{insert_list_wrappers, to_html, HtmlRenderer, RenderOptions, StylePreset};

use std::fs;
use std::path::Path;

/// Parse a link-list file into classified tokens (no wrappers yet).
///
/// # Example
///
/// ```no_run
/// use linkpage::parse_file;
///
/// let tokens = parse_file("links.md").unwrap();
/// println!("{} tokens", tokens.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Token>> {
    let lines = parser::read_lines(path)?;
    Ok(parse_lines(&lines))
}

/// Parse in-memory source text into classified tokens.
pub fn parse_str(source: &str) -> Vec<Token> {
    let lines: Vec<&str> = source.lines().collect();
    parse_lines(&lines)
}

fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Token> {
    let classifier = LineClassifier::new();
    let tokens = classifier.classify_lines(lines);
    log::debug!("classified {} lines into {} tokens", lines.len(), tokens.len());
    tokens
}

/// Convert in-memory source text into a complete HTML page.
///
/// # Example
///
/// ```
/// use linkpage::{to_html_string, RenderOptions, StylePreset};
///
/// let options = RenderOptions::new().with_style(StylePreset::Plain);
/// let html = to_html_string("# Title\n- [A](http://a)\n", &options);
/// assert!(html.contains("<h1>Title</h1><ul>"));
/// ```
pub fn to_html_string(source: &str, options: &RenderOptions) -> String {
    let tokens = insert_list_wrappers(parse_str(source));
    to_html(&tokens, options)
}

/// Convert a link-list file into an HTML page with default options.
///
/// Reads `input`, runs the full pipeline, and writes the page to
/// `output`, overwriting any existing file.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    convert_file_with_options(input, output, &RenderOptions::default())
}

/// Convert a link-list file into an HTML page with custom options.
///
/// # Example
///
/// ```no_run
/// use linkpage::{convert_file_with_options, RenderOptions};
///
/// let options = RenderOptions::new().with_title("bookmarks");
/// convert_file_with_options("links.md", "index.html", &options).unwrap();
/// ```
pub fn convert_file_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &RenderOptions,
) -> Result<()> {
    let tokens = insert_list_wrappers(parse_file(input)?);
    let html = to_html(&tokens, options);

    let output = output.as_ref();
    fs::write(output, html).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })
}
