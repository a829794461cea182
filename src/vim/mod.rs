//! Vim color-scheme parsing (the `hi`/`highlight` directive side).

mod parser;

pub use parser::{StyleRule, VimParser, style_for_group};
