//! # vim2sourceview
//!
//! Convert Vim color schemes into GtkSourceView style schemes.
//!
//! The converter reads a Vim script line by line, extracts `hi`/`highlight`
//! directives for a fixed set of known highlight groups, and emits a
//! `style-scheme` XML document with the scheme's metadata and one `<style>`
//! element per recognized rule.
//!
//! ## Quick Start
//!
//! ```
//! use vim2sourceview::{SchemeOptions, convert};
//!
//! let script = "let g:colors_name=\"nightfall\"\nhi Comment guifg=#6272a4 gui=italic\n";
//!
//! let options = SchemeOptions::new().with_author("Example Author");
//! let xml = convert(script.as_bytes(), &options).unwrap();
//!
//! assert!(xml.contains(r#"<style-scheme name="Nightfall" id="nightfall" version="1.0">"#));
//! assert!(xml.contains(r##"<style name="def:comment" foreground="#6272a4" italic="true"/>"##));
//! ```

pub mod error;
pub mod scheme;
pub mod vim;

pub use error::{Error, Result};
pub use scheme::{SchemeOptions, write_scheme};
pub use vim::{StyleRule, VimParser, style_for_group};

use std::io::BufRead;

/// Convert a Vim color scheme to a style-scheme XML document.
///
/// Reads `reader` to exhaustion, then builds the document from the retained
/// rules. The first I/O error or malformed directive aborts the conversion;
/// no partial document is produced.
pub fn convert<R: BufRead>(reader: R, options: &SchemeOptions) -> Result<String> {
    let mut parser = VimParser::new();
    let rules = parser.parse(reader)?;
    Ok(write_scheme(&rules, parser.found_name(), options))
}
