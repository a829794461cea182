//! XML serialization for style-scheme documents.

use crate::scheme::SchemeOptions;
use crate::vim::StyleRule;

/// Serialize rules and metadata into a complete style-scheme document.
///
/// `found_name` is the scheme name discovered during parsing, if any. Header
/// precedence is explicit option > discovered name > `Unknown`/`unknown`.
/// Style elements appear in the order the rules were encountered.
pub fn write_scheme(
    rules: &[StyleRule],
    found_name: Option<&str>,
    options: &SchemeOptions,
) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

    let (name, id) = match (&options.name, found_name) {
        (Some(name), _) => (name.clone(), name.to_lowercase()),
        (None, Some(found)) => (capitalize(found), found.to_string()),
        (None, None) => ("Unknown".to_string(), "unknown".to_string()),
    };
    let version = options.version.as_deref().unwrap_or("1.0");

    xml.push_str(&format!(
        "<style-scheme name=\"{}\" id=\"{}\" version=\"{}\">\n",
        escape_xml(&name),
        escape_xml(&id),
        escape_xml(version)
    ));

    match &options.author {
        Some(author) => xml.push_str(&format!("  <author>{}</author>\n", escape_xml(author))),
        None => xml.push_str("  <author/>\n"),
    }

    let description = match (&options.description, found_name) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(found)) => Some(format!("{} theme", capitalize(found))),
        (None, None) => None,
    };
    match description {
        Some(text) => xml.push_str(&format!(
            "  <_description>{}</_description>\n",
            escape_xml(&text)
        )),
        None => xml.push_str("  <_description/>\n"),
    }

    for rule in rules {
        write_style(&mut xml, rule);
    }

    xml.push_str("</style-scheme>\n");
    xml
}

fn write_style(xml: &mut String, rule: &StyleRule) {
    let fg = rule.foreground.as_deref().map(normalize_color);
    let bg = rule.background.as_deref().map(normalize_color);

    // Schemes sometimes use the #fg/#bg sentinels to copy the opposite
    // channel. Both comparisons run against the pre-fixup values, so a rule
    // carrying both sentinels swaps them.
    let mut fg_out = fg.clone();
    let mut bg_out = bg.clone();
    if let (Some(fg), Some(bg)) = (&fg, &bg) {
        if bg == "#fg" {
            bg_out = Some(fg.clone());
        }
        if fg == "#bg" {
            fg_out = Some(bg.clone());
        }
    }

    xml.push_str(&format!("  <style name=\"{}\"", escape_xml(rule.name)));
    if let Some(fg) = fg_out {
        xml.push_str(&format!(" foreground=\"{}\"", escape_xml(&fg)));
    }
    if let Some(bg) = bg_out {
        xml.push_str(&format!(" background=\"{}\"", escape_xml(&bg)));
    }
    for flag in ["bold", "italic", "underline", "reverse"] {
        if rule.has_flag(flag) {
            xml.push_str(&format!(" {flag}=\"true\""));
        }
    }
    xml.push_str("/>\n");
}

/// Ensure a color value carries a leading `#` (idempotent).
fn normalize_color(color: &str) -> String {
    if color.starts_with('#') {
        color.to_string()
    } else {
        format!("#{color}")
    }
}

/// First character uppercased, rest lowercased (`solarized` -> `Solarized`).
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vim::VimParser;

    fn rule(line: &str) -> StyleRule {
        VimParser::new()
            .parse_line(line)
            .unwrap()
            .expect("known group")
    }

    #[test]
    fn test_default_header_when_nothing_known() {
        let xml = write_scheme(&[], None, &SchemeOptions::new());

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(xml.contains("<style-scheme name=\"Unknown\" id=\"unknown\" version=\"1.0\">"));
        assert!(xml.contains("<author/>"));
        assert!(xml.contains("<_description/>"));
    }

    #[test]
    fn test_header_from_discovered_name() {
        let xml = write_scheme(&[], Some("solarized"), &SchemeOptions::new());

        assert!(xml.contains("<style-scheme name=\"Solarized\" id=\"solarized\" version=\"1.0\">"));
        assert!(xml.contains("<_description>Solarized theme</_description>"));
    }

    #[test]
    fn test_explicit_options_override_discovery() {
        let options = SchemeOptions::new()
            .with_name("MyScheme")
            .with_version("2.1")
            .with_author("Jane Doe")
            .with_description("A custom scheme");
        let xml = write_scheme(&[], Some("solarized"), &options);

        assert!(xml.contains("<style-scheme name=\"MyScheme\" id=\"myscheme\" version=\"2.1\">"));
        assert!(xml.contains("<author>Jane Doe</author>"));
        assert!(xml.contains("<_description>A custom scheme</_description>"));
    }

    #[test]
    fn test_color_normalization_prefixes_hash_once() {
        let styles = [rule("hi Comment guifg=859900 guibg=#002b36")];
        let xml = write_scheme(&styles, None, &SchemeOptions::new());

        assert!(xml.contains(
            "<style name=\"def:comment\" foreground=\"#859900\" background=\"#002b36\"/>"
        ));
    }

    #[test]
    fn test_background_sentinel_copies_foreground() {
        let styles = [rule("hi Cursor guifg=ff0000 guibg=#fg")];
        let xml = write_scheme(&styles, None, &SchemeOptions::new());

        assert!(
            xml.contains("<style name=\"cursor\" foreground=\"#ff0000\" background=\"#ff0000\"/>")
        );
    }

    #[test]
    fn test_foreground_sentinel_copies_background() {
        let styles = [rule("hi Cursor guifg=#bg guibg=00ff00")];
        let xml = write_scheme(&styles, None, &SchemeOptions::new());

        assert!(
            xml.contains("<style name=\"cursor\" foreground=\"#00ff00\" background=\"#00ff00\"/>")
        );
    }

    #[test]
    fn test_combined_sentinels_swap() {
        // Both fixups compare against pre-fixup values, so the sentinels
        // trade places instead of cascading.
        let styles = [rule("hi Cursor guifg=#bg guibg=#fg")];
        let xml = write_scheme(&styles, None, &SchemeOptions::new());

        assert!(xml.contains("<style name=\"cursor\" foreground=\"#fg\" background=\"#bg\"/>"));
    }

    #[test]
    fn test_sentinel_ignored_when_other_channel_missing() {
        let styles = [rule("hi Cursor guibg=#fg")];
        let xml = write_scheme(&styles, None, &SchemeOptions::new());

        assert!(xml.contains("<style name=\"cursor\" background=\"#fg\"/>"));
    }

    #[test]
    fn test_flag_attributes_emit_in_fixed_order() {
        let styles = [rule("hi Statement gui=reverse guifg=blue gui=bold")];
        let xml = write_scheme(&styles, None, &SchemeOptions::new());

        assert!(xml.contains(
            "<style name=\"def:statement\" foreground=\"#blue\" bold=\"true\" reverse=\"true\"/>"
        ));
    }

    #[test]
    fn test_composite_flag_key_is_not_serialized() {
        let styles = [rule("hi Statement gui=bold,italic")];
        let xml = write_scheme(&styles, None, &SchemeOptions::new());

        // The literal bold,italic key still made the rule retainable, but no
        // known flag attribute matches it.
        assert!(xml.contains("<style name=\"def:statement\"/>"));
    }

    #[test]
    fn test_metadata_text_is_escaped() {
        let options = SchemeOptions::new()
            .with_name("A<B")
            .with_author("Tom & Jerry");
        let xml = write_scheme(&[], None, &options);

        assert!(xml.contains("name=\"A&lt;B\" id=\"a&lt;b\""));
        assert!(xml.contains("<author>Tom &amp; Jerry</author>"));
    }

    #[test]
    fn test_capitalize_lowercases_the_rest() {
        assert_eq!(capitalize("solarized"), "Solarized");
        assert_eq!(capitalize("myTheme"), "Mytheme");
        assert_eq!(capitalize(""), "");
    }
}
