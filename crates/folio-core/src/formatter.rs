//! Per-work content cleanup.
//!
//! Some works were pasted in with indented paragraphs (ASCII or ideographic
//! spaces). Those are flagged in the catalog; their paragraphs are trimmed and
//! any leading indentation is stripped. Everything else passes through as-is.

use crate::catalog::LiteraryWork;

pub(crate) const PARAGRAPH_BREAK: &str = "\n\n";

/// Format `content`, normalizing paragraphs only when `needs_cleanup` is set.
pub fn format_content(content: &str, needs_cleanup: bool) -> String {
    if !needs_cleanup {
        return content.to_string();
    }

    content
        .split(PARAGRAPH_BREAK)
        .map(clean_paragraph)
        .collect::<Vec<_>>()
        .join(PARAGRAPH_BREAK)
}

/// Format the full content of `work`, or an empty string when it has none.
pub fn format_work(work: &LiteraryWork) -> String {
    work.full_content
        .as_deref()
        .map(|content| format_content(content, work.needs_paragraph_cleanup))
        .unwrap_or_default()
}

// `char::is_whitespace` includes U+3000, so indentation with ideographic
// spaces is stripped here too.
fn clean_paragraph(raw: &str) -> &str {
    raw.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paragraphs::paragraphs;
    use proptest::prelude::*;

    #[test]
    fn unflagged_content_is_untouched() {
        let raw = "  indented\n\n\u{3000}also indented  ";
        assert_eq!(format_content(raw, false), raw);
    }

    #[test]
    fn flagged_content_loses_indentation() {
        let raw = "\u{3000}\u{3000}First line.\n\n    Second line.  \n\n\tThird.";
        assert_eq!(
            format_content(raw, true),
            "First line.\n\nSecond line.\n\nThird."
        );
    }

    #[test]
    fn inner_line_breaks_survive_cleanup() {
        let raw = "  a verse\n  still the verse\n\n  next";
        assert_eq!(format_content(raw, true), "a verse\n  still the verse\n\nnext");
    }

    #[test]
    fn ideographic_indent_is_stripped() {
        assert_eq!(format_content("\u{3000}\u{3000} 序\n\n\u{3000}破", true), "序\n\n破");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(format_content("", true), "");
        assert_eq!(format_content("", false), "");
    }

    proptest! {
        #[test]
        fn unflagged_format_is_identity(s in "\\PC*") {
            prop_assert_eq!(format_content(&s, false), s);
        }

        #[test]
        fn flagged_paragraphs_have_no_leading_whitespace(
            s in "[ \u{3000}\ta-z\n]{0,64}"
        ) {
            let formatted = format_content(&s, true);
            for piece in formatted.split(PARAGRAPH_BREAK) {
                prop_assert_eq!(piece, piece.trim_start());
            }
            for paragraph in paragraphs(&formatted) {
                prop_assert!(formatted.split(PARAGRAPH_BREAK).any(|piece| piece == paragraph));
            }
        }
    }
}
