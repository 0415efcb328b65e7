//! Match highlighting for displayed titles.
//!
//! Splits display text into matched and unmatched spans for the UI to
//! style. The query is matched literally and case-insensitively; it is
//! never interpreted as pattern syntax, so punctuation behaves like any
//! other character. This module does no filtering of its own.

/// A contiguous span of display text, flagged when it matched the query.
///
/// Concatenating the `text` of every segment, in order, reproduces the
/// source string byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: true,
        }
    }
}

/// Split `text` into alternating plain/matched segments around every
/// case-insensitive occurrence of `query`.
///
/// Occurrences are found left to right and do not overlap. An empty query
/// returns the whole text as a single plain segment.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    if query.is_empty() {
        return vec![Segment::plain(text)];
    }

    let query_folded: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while cursor < text.len() {
        match match_len_at(&text[cursor..], &query_folded) {
            Some(len) => {
                if plain_start < cursor {
                    segments.push(Segment::plain(&text[plain_start..cursor]));
                }
                segments.push(Segment::matched(&text[cursor..cursor + len]));
                cursor += len;
                plain_start = cursor;
            }
            None => {
                cursor += text[cursor..]
                    .chars()
                    .next()
                    .map_or(1, |c| c.len_utf8());
            }
        }
    }

    if plain_start < text.len() || segments.is_empty() {
        segments.push(Segment::plain(&text[plain_start..]));
    }

    segments
}

/// Byte length of a case-insensitive occurrence of the folded query at the
/// start of `rest`, if there is one.
///
/// Only whole characters of `rest` are consumed: a query that would end in
/// the middle of a character's lowercase expansion does not match, which
/// keeps segment boundaries on char boundaries.
fn match_len_at(rest: &str, query_folded: &[char]) -> Option<usize> {
    let mut qi = 0;

    for (offset, ch) in rest.char_indices() {
        if qi == query_folded.len() {
            return Some(offset);
        }
        for folded in ch.to_lowercase() {
            if qi == query_folded.len() || query_folded[qi] != folded {
                return None;
            }
            qi += 1;
        }
    }

    (qi == query_folded.len()).then_some(rest.len())
}
