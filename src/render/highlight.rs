use std::ops::Range;

use html_escape::encode_text;

/// HTML-escape `text` and wrap `range` in `<mark>` tags.
///
/// The marked part keeps the casing of `text`. A range that does not fall on
/// character boundaries inside `text` is ignored and the whole text is escaped.
pub fn highlight_html(text: &str, range: Option<Range<usize>>) -> String {
    highlight_with(text, range, "<mark>", "</mark>")
}

/// Like [`highlight_html`] with custom opening and closing markup
pub fn highlight_with(text: &str, range: Option<Range<usize>>, open: &str, close: &str) -> String {
    let parts = range.and_then(|range| {
        Some((
            text.get(..range.start)?,
            text.get(range.clone())?,
            text.get(range.end..)?,
        ))
    });

    match parts {
        Some((before, matched, after)) if !matched.is_empty() => format!(
            "{}{}{}{}{}",
            encode_text(before),
            open,
            encode_text(matched),
            close,
            encode_text(after)
        ),
        _ => encode_text(text).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_range() {
        assert_eq!(
            highlight_html("Blueberry Pancakes", Some(10..13)),
            "Blueberry <mark>Pan</mark>cakes"
        );
    }

    #[test]
    fn test_escapes_markup() {
        assert_eq!(
            highlight_html("Mac & <Cheese>", Some(0..3)),
            "<mark>Mac</mark> &amp; &lt;Cheese&gt;"
        );
    }

    #[test]
    fn test_no_range() {
        assert_eq!(highlight_html("Fish & Chips", None), "Fish &amp; Chips");
    }

    #[test]
    fn test_empty_or_invalid_range() {
        assert_eq!(highlight_html("Tea", Some(0..0)), "Tea");
        assert_eq!(highlight_html("Tea", Some(1..10)), "Tea");
        assert_eq!(highlight_html("Brûlée", Some(0..3)), "Brûlée");
    }

    #[test]
    fn test_custom_markup() {
        assert_eq!(highlight_with("Tea", Some(0..1), "[", "]"), "[T]ea");
    }
}
