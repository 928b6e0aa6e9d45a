//! Utility functions for string processing.

/// Normalize a query for matching: trim, then lowercase.
///
/// No diacritic stripping and no whitespace collapsing: the catalog is
/// single-language and multi-word queries are matched verbatim.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Split text into words on whitespace and hyphens, dropping empty pieces.
///
/// "Non-Woven  Bag" → ["Non", "Woven", "Bag"]
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == '-')
        .filter(|w| !w.is_empty())
}

/// Remove every hyphen. "am-001" → "am001".
pub fn strip_hyphens(value: &str) -> String {
    value.chars().filter(|&c| c != '-').collect()
}

/// Regex `\w`: ASCII letters, digits, underscore.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A `\b` sits between `before` and `after` when exactly one side is a word char.
/// `None` (start/end of text) counts as a non-word char.
#[inline]
fn is_boundary(before: Option<char>, after: Option<char>) -> bool {
    before.is_some_and(is_word_char) != after.is_some_and(is_word_char)
}

/// Does `haystack` contain `needle` delimited by word boundaries on both ends?
///
/// Same semantics as the regex `\bneedle\b` with `needle` escaped, but without
/// compiling a pattern per product. Every occurrence is tried, so "pen" is
/// found in "open pen" even though the first hit is mid-word.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let first = needle.chars().next();
    let last = needle.chars().next_back();

    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        is_boundary(before, first) && is_boundary(last, after)
    })
}

/// Excerpt of `text` around the first case-insensitive occurrence of `term`.
///
/// Takes `radius` characters on each side of the match and appends `...` when
/// the excerpt stops before the end of the text. Works in characters, not
/// bytes, so multi-byte text never splits mid-codepoint. Returns `None` when
/// `term` is empty or absent.
///
/// `text` is lowercased with [`str::to_lowercase`], the same folding the
/// matched-field check uses. A character whose lowercase form is longer ("İ"
/// becomes "i̇") maps every lowered char back to its source position.
pub fn snippet(text: &str, term: &str, radius: usize) -> Option<String> {
    if term.is_empty() {
        return None;
    }
    let chars: Vec<char> = text.chars().collect();
    let lowered: Vec<char> = text.to_lowercase().chars().collect();
    let origin: Vec<usize> = chars
        .iter()
        .enumerate()
        .flat_map(|(i, c)| std::iter::repeat(i).take(c.to_lowercase().count()))
        .collect();
    let needle: Vec<char> = term.chars().collect();

    if needle.len() > lowered.len() {
        return None;
    }
    let index = lowered
        .windows(needle.len())
        .position(|window| window == needle.as_slice())?;
    let first = *origin.get(index)?;
    let last = *origin.get(index + needle.len() - 1)?;

    let start = first.saturating_sub(radius);
    let end = (last + 1 + radius).min(chars.len());
    let mut excerpt: String = chars[start..end].iter().collect();
    if end < chars.len() {
        excerpt.push_str("...");
    }
    Some(excerpt)
}
