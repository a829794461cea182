//! Line classifier for Vim color-scheme scripts.
//!
//! Recognizes two line shapes: a `let ...colors_name="..."` assignment, which
//! records the scheme name, and `hi`/`highlight` directives naming one of the
//! known highlight groups. Every other line is skipped.

use std::io::BufRead;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::{Error, Result};

/// Matches `let g:colors_name="<name>"` assignments.
static COLORS_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^let .*colors_name\s*=\s*"(\w+)"$"#).unwrap());

/// Map a lowercased Vim highlight-group name to its GtkSourceView style id.
///
/// Groups outside this table are ignored.
pub fn style_for_group(group: &str) -> Option<&'static str> {
    let style = match group {
        "normal" => "text",
        "cursor" => "cursor",
        "cursorline" => "current-line",
        "search" => "search-match",
        "comment" => "def:comment",
        "constant" => "def:constant",
        "identifier" => "def:identifier",
        "preproc" => "def:preprocessor",
        "error" => "def:error",
        "string" => "def:string",
        "number" => "def:number",
        "function" => "def:function",
        "boolean" => "def:boolean",
        "special" => "def:specials",
        "type" => "def:type",
        "statement" => "def:statement",
        "keyword" => "def:keyword",
        "matchparen" => "bracket-match",
        "diffdelete" => "diff:removed-line",
        "diffadd" => "diff:added-line",
        "diffchange" => "diff:changed-line",
        "linenr" => "line-numbers",
        _ => return None,
    };
    Some(style)
}

/// A single extracted highlight rule, keyed by its target style id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRule {
    /// Target style identifier (e.g. `def:comment`).
    pub name: &'static str,
    /// Raw foreground color as written in the script (may lack a `#`).
    pub foreground: Option<String>,
    /// Raw background color as written in the script (may lack a `#`).
    pub background: Option<String>,
    /// Flag keys extracted from `gui=` pairs. The whole value is one key, so
    /// a composite `bold,italic` stays a single literal entry.
    flags: Vec<String>,
}

impl StyleRule {
    fn new(name: &'static str) -> Self {
        StyleRule {
            name,
            ..Default::default()
        }
    }

    fn set_flag(&mut self, flag: String) {
        if !self.flags.contains(&flag) {
            self.flags.push(flag);
        }
    }

    /// Whether the rule carries the given flag key (e.g. `bold`).
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }

    /// Whether the rule carries anything beyond its mapped name. Rules that
    /// don't are uninformative and get dropped by [`VimParser::parse`].
    pub fn has_attributes(&self) -> bool {
        self.foreground.is_some() || self.background.is_some() || !self.flags.is_empty()
    }
}

/// One classified `key=value` token from a highlight directive.
enum TokenAttr {
    Foreground(String),
    Background(String),
    Flag(String),
}

/// Classify a single directive token. Values equal to `none` (any case) and
/// unrecognized keys contribute nothing; a token without `=` is malformed and
/// aborts the run.
fn classify_token(token: &str) -> Result<Option<TokenAttr>> {
    let mut parts = token.split('=');
    let key = parts.next().unwrap_or_default();
    let value = parts
        .next()
        .ok_or_else(|| Error::MalformedDirective(format!("expected key=value, got `{token}`")))?;

    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    Ok(match key {
        "guibg" => Some(TokenAttr::Background(value.to_string())),
        "guifg" => Some(TokenAttr::Foreground(value.to_string())),
        // bold, underline, reverse and italics arrive as gui=<flag>
        "gui" => Some(TokenAttr::Flag(value.to_string())),
        _ => None,
    })
}

/// Streaming parser for Vim color-scheme scripts.
///
/// Holds the one piece of run-scoped state: the scheme name discovered from a
/// `colors_name` assignment, if the script carries one.
#[derive(Debug, Default)]
pub struct VimParser {
    found_name: Option<String>,
}

impl VimParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// The scheme name discovered so far, if any.
    pub fn found_name(&self) -> Option<&str> {
        self.found_name.as_deref()
    }

    /// Classify one line.
    ///
    /// Returns a rule for `hi`/`highlight` directives naming a known group.
    /// A `let ...colors_name` assignment updates parser state and yields
    /// nothing. The rule is returned even when it carries no attributes;
    /// retention filtering happens in [`parse`](Self::parse).
    pub fn parse_line(&mut self, line: &str) -> Result<Option<StyleRule>> {
        let mut parts = line.split_whitespace();
        let Some(first) = parts.next() else {
            return Ok(None);
        };

        if first == "let"
            && let Some(captures) = COLORS_NAME_RE.captures(line.trim())
        {
            self.found_name = Some(captures[1].to_string());
        }

        if first != "hi" && first != "highlight" {
            return Ok(None);
        }

        let group = parts.next().ok_or_else(|| {
            Error::MalformedDirective(format!("missing group name in `{}`", line.trim()))
        })?;
        let Some(style) = style_for_group(&group.to_lowercase()) else {
            return Ok(None);
        };

        let mut rule = StyleRule::new(style);
        for token in parts {
            // Later tokens win on key collision
            match classify_token(token)? {
                Some(TokenAttr::Foreground(color)) => rule.foreground = Some(color),
                Some(TokenAttr::Background(color)) => rule.background = Some(color),
                Some(TokenAttr::Flag(flag)) => rule.set_flag(flag),
                None => {}
            }
        }
        Ok(Some(rule))
    }

    /// Parse an entire script, keeping only rules that carry at least one
    /// style attribute beyond the mapped name.
    ///
    /// Fail-fast: the first I/O error or malformed directive aborts the run.
    pub fn parse<R: BufRead>(&mut self, reader: R) -> Result<Vec<StyleRule>> {
        let mut rules = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(rule) = self.parse_line(&line)?
                && rule.has_attributes()
            {
                rules.push(rule);
            }
        }
        Ok(rules)
    }
}
