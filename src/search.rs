//! Case-insensitive substring matching.
//!
//! Matching lowercases both sides, but the reported range always points into
//! the original text so callers can emphasize the match with its casing intact.

use std::ops::Range;

use crate::model::SearchField;

/// Where a search term matched within a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    /// Field that contained the term
    pub field: SearchField,
    /// Byte offset of the first matched character in the field
    pub start: usize,
    /// Byte offset one past the last matched character in the field
    pub end: usize,
}

impl Highlight {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Split `text` into the parts before, inside and after the match.
    ///
    /// Returns `None` if the range does not fit `text`, which happens when the
    /// highlight is applied to a different string than the one it came from.
    pub fn split<'a>(&self, text: &'a str) -> Option<(&'a str, &'a str, &'a str)> {
        let before = text.get(..self.start)?;
        let matched = text.get(self.start..self.end)?;
        let after = text.get(self.end..)?;
        Some((before, matched, after))
    }
}

/// A search term, pre-lowercased once for repeated matching
#[derive(Debug, Clone, Default)]
pub struct SearchTerm {
    folded: Vec<char>,
}

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        Self {
            folded: term.chars().flat_map(fold_case).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    /// Byte range of the first case-insensitive occurrence of the term in `haystack`.
    ///
    /// An empty term matches at offset 0.
    pub fn find_in(&self, haystack: &str) -> Option<Range<usize>> {
        if self.folded.is_empty() {
            return Some(0..0);
        }

        // Each lowercased char remembers the byte span of the char it came from,
        // so expansions like 'İ' -> "i\u{307}" still map back onto whole source chars.
        let folded: Vec<(char, usize, usize)> = haystack
            .char_indices()
            .flat_map(|(start, c)| {
                let end = start + c.len_utf8();
                fold_case(c).map(move |lower| (lower, start, end))
            })
            .collect();

        if folded.len() < self.folded.len() {
            return None;
        }

        folded
            .windows(self.folded.len())
            .find(|window| {
                window
                    .iter()
                    .zip(&self.folded)
                    .all(|((c, _, _), wanted)| c == wanted)
            })
            .map(|window| window[0].1..window[window.len() - 1].2)
    }

    pub fn matches(&self, haystack: &str) -> bool {
        self.find_in(haystack).is_some()
    }
}

/// Case-insensitive substring lookup returning the matched byte range in `haystack`
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    SearchTerm::new(needle).find_in(haystack)
}

/// Case-insensitive equality, used for category scoping
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(fold_case)
        .eq(b.chars().flat_map(fold_case))
}

/// Lowercase one char, folding final sigma onto 'σ' so word position doesn't matter
fn fold_case(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase()
        .map(|lower| if lower == 'ς' { 'σ' } else { lower })
}
