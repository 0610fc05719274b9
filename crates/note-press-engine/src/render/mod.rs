//! Line-oriented renderer for the note markdown subset.
//!
//! Every non-empty source line becomes exactly one `<tag>content</tag>`
//! element, in source order. There is no nesting and no inline markup.

mod classify;

pub use classify::{BlockLine, BlockTag, classify_line};

/// Joins rendered lines so the fragment lines up inside the page template.
pub const FRAGMENT_SEPARATOR: &str = "\n    ";

/// Splits a note into classified lines, dropping empty lines.
///
/// Only lines that are empty before trimming are dropped; a whitespace-only
/// line survives and renders as an empty paragraph.
pub fn parse_note(note_text: &str) -> Vec<BlockLine> {
    note_text
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(classify_line)
        .collect()
}

/// Renders note text into an HTML fragment.
pub fn render(note_text: &str) -> String {
    parse_note(note_text)
        .iter()
        .map(BlockLine::to_html)
        .collect::<Vec<_>>()
        .join(FRAGMENT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", "<h1>Title</h1>")]
    #[case("## Sub", "<h2>Sub</h2>")]
    #[case("### Sub2", "<h3>Sub2</h3>")]
    #[case("- item one", "<li>item one</li>")]
    #[case("-", "<li></li>")]
    #[case("plain text line", "<p>plain text line</p>")]
    #[case("#NoSpace", "<p>#NoSpace</p>")]
    #[case("#### deep", "<p>#### deep</p>")]
    #[case("1 < 2 && 3 > 2", "<p>1 < 2 && 3 > 2</p>")]
    fn test_single_line_rendering(#[case] note: &str, #[case] expected: &str) {
        assert_eq!(render(note), expected);
    }

    #[test]
    fn test_empty_input_renders_empty_fragment() {
        assert_eq!(render(""), "");
        assert_eq!(render("\n\n\n"), "");
    }

    #[test]
    fn test_lines_keep_order_and_use_separator() {
        assert_eq!(
            render("# A\n- B\nC"),
            "<h1>A</h1>\n    <li>B</li>\n    <p>C</p>"
        );
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let html = render("# A\n\n\n- B");
        assert_eq!(html, "<h1>A</h1>\n    <li>B</li>");
    }

    #[test]
    fn test_whitespace_only_line_is_an_empty_paragraph() {
        assert_eq!(render("# A\n   \n- B"), "<h1>A</h1>\n    <p></p>\n    <li>B</li>");
    }

    #[test]
    fn test_consecutive_list_items_are_not_wrapped() {
        let html = render("- one\n- two\n- three");
        assert!(!html.contains("<ul>"));
        assert_eq!(html.matches("<li>").count(), 3);
    }

    #[test]
    fn test_crlf_line_endings_are_trimmed() {
        assert_eq!(render("# Hi\r\n- one\r\n"), "<h1>Hi</h1>\n    <li>one</li>");
        // A CRLF blank line leaves a lone '\r', which is not empty.
        assert_eq!(render("# Hi\r\n\r\n- one"), "<h1>Hi</h1>\n    <p></p>\n    <li>one</li>");
    }

    #[test]
    fn test_one_tag_per_non_blank_line() {
        let note = "# Heading\n\nSome text\n-\n\n   \n### Third\n#### not a heading\n- last";
        let non_blank = note.split('\n').filter(|l| !l.is_empty()).count();

        let blocks = parse_note(note);
        assert_eq!(blocks.len(), non_blank);

        let html = render(note);
        assert_eq!(html.split(FRAGMENT_SEPARATOR).count(), non_blank);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let note = "# A\n- B\n\nC <d>";
        assert_eq!(render(note), render(note));
    }
}
