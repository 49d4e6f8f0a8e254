use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::description::ParsedDescription;

// `- Create Goal` -> `Create Goal`. Lines are already trimmed.
static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-\s*(?P<text>.*)$").expect("bullet pattern is valid"));

/// Splits an App Store description into headline, bullets, trust and
/// mission lines.
///
/// The headline is positional: it is the first non-blank line even when
/// that line is itself a bullet.
pub fn parse(text: &str) -> ParsedDescription {
    let lines: Vec<&str> = text
        .split(is_line_break)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let bullets: Vec<String> = lines
        .iter()
        .filter_map(|l| BULLET_RE.captures(l))
        .filter_map(|caps| caps.name("text"))
        .map(|m| m.as_str().trim().to_string())
        .collect();

    let headline = lines.first().copied().unwrap_or("");

    let trust_line = lines
        .iter()
        .rev()
        .find(|l| !l.starts_with('-') && **l != headline)
        .copied()
        .unwrap_or("");

    let mission_line = lines.last().copied().unwrap_or("");

    ParsedDescription {
        headline: headline.to_string(),
        bullets,
        trust_line: trust_line.to_string(),
        mission_line: mission_line.to_string(),
    }
}

// Same set of separators `str.splitlines` honours; CRLF yields an empty
// fragment that the blank filter drops.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn splits_full_description() {
        let parsed = parse(
            "Plan your day.\n- Create Goal\n- Focus\nTrusted by thousands.\nOur mission is clarity.",
        );

        assert_eq!(parsed.headline, "Plan your day.");
        assert_eq!(parsed.bullets, vec!["Create Goal", "Focus"]);
        assert_eq!(parsed.trust_line, "Trusted by thousands.");
        assert_eq!(parsed.mission_line, "Our mission is clarity.");
    }

    #[test]
    fn empty_input_yields_empty_fields() {
        assert_eq!(parse(""), ParsedDescription::default());
        assert_eq!(parse("  \n\t\n  "), ParsedDescription::default());
    }

    #[test]
    fn single_line_is_headline_and_mission() {
        let parsed = parse("  Just one line.  ");
        assert_eq!(parsed.headline, "Just one line.");
        assert_eq!(parsed.mission_line, "Just one line.");
        assert!(parsed.bullets.is_empty());
        assert_eq!(parsed.trust_line, "");
    }

    #[test]
    fn pure_bullets_keep_raw_headline() {
        let parsed = parse("- One\n-Two\n-   Three");
        assert_eq!(parsed.headline, "- One");
        assert_eq!(parsed.bullets, vec!["One", "Two", "Three"]);
        assert_eq!(parsed.trust_line, "");
        assert_eq!(parsed.mission_line, "-   Three");
    }

    #[test]
    fn trust_line_may_equal_mission_line() {
        let parsed = parse("Headline\n- a\nClosing words");
        assert_eq!(parsed.trust_line, "Closing words");
        assert_eq!(parsed.mission_line, "Closing words");
    }

    #[test]
    fn trust_line_skips_lines_equal_to_headline() {
        let parsed = parse("Same\n- a\nSame");
        assert_eq!(parsed.trust_line, "");
        assert_eq!(parsed.mission_line, "Same");
    }

    #[test]
    fn crlf_and_blank_lines_are_ignored() {
        let parsed = parse("Head\r\n\r\n- x\r\n\r\nTail\r\n");
        assert_eq!(parsed.headline, "Head");
        assert_eq!(parsed.bullets, vec!["x"]);
        assert_eq!(parsed.trust_line, "Tail");
        assert_eq!(parsed.mission_line, "Tail");
    }

    #[test]
    fn bullet_at_reads_positional_entries() {
        let parsed = parse("H\n- a\n- b\n- c");
        assert_eq!(parsed.bullet_at(0), Some("a"));
        assert_eq!(parsed.bullet_at(2), Some("c"));
        assert_eq!(parsed.bullet_at(4), None);
    }

    proptest! {
        #[test]
        fn parse_never_panics_and_fields_are_trimmed(text in ".{0,200}") {
            let parsed = parse(&text);
            prop_assert_eq!(parsed.headline.trim(), parsed.headline.as_str());
            prop_assert_eq!(parsed.mission_line.trim(), parsed.mission_line.as_str());
            for b in &parsed.bullets {
                prop_assert_eq!(b.trim(), b.as_str());
            }
            if parsed.headline.is_empty() {
                prop_assert!(parsed.bullets.is_empty());
                prop_assert!(parsed.mission_line.is_empty());
            }
        }

        #[test]
        fn bullets_preserve_order(items in proptest::collection::vec("[a-z]{1,8}", 0..8)) {
            let mut text = String::from("Headline\n");
            for item in &items {
                text.push_str("- ");
                text.push_str(item);
                text.push('\n');
            }
            let parsed = parse(&text);
            prop_assert_eq!(parsed.bullets, items);
        }
    }
}
