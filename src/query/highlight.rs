/// A piece of text, marked when it matched the search text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            matched: false,
        }
    }

    fn matched(text: &'a str) -> Self {
        Self {
            text,
            matched: true,
        }
    }
}

/// Splits `text` into segments, marking every case-insensitive occurrence of `needle`.
///
/// Both sides are lowercased with `str::to_lowercase`, as the search engine
/// does, so highlighting agrees with matching. A match that covers part of a
/// character's lowercase expansion marks the whole character. Occurrences are
/// found left to right and never overlap. An empty needle marks nothing.
/// Concatenating the segments always gives back `text`.
///
/// # Examples
///
/// ```
/// use lifeorg::highlight;
///
/// let segments = highlight("Review project proposal", "PRO");
/// let marked: Vec<&str> = segments.iter().filter(|s| s.matched).map(|s| s.text).collect();
/// assert_eq!(marked, vec!["pro", "pro"]);
/// ```
pub fn highlight<'a>(text: &'a str, needle: &str) -> Vec<Segment<'a>> {
    let needle = needle.to_lowercase();
    if needle.is_empty() {
        return if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::plain(text)]
        };
    }

    let lowered = text.to_lowercase();
    let origins = lowered_origins(text);

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut from = 0;

    while let Some(found) = lowered[from..].find(&needle) {
        let lo = from + found;
        let hi = lo + needle.len();
        from = hi;

        let start = origins[lo].max(plain_start);
        let end = char_end(text, origins[hi - 1]);
        if start >= end {
            continue;
        }

        if plain_start < start {
            segments.push(Segment::plain(&text[plain_start..start]));
        }
        segments.push(Segment::matched(&text[start..end]));
        plain_start = end;
    }

    if plain_start < text.len() {
        segments.push(Segment::plain(&text[plain_start..]));
    }

    segments
}

/// Maps each byte of `text.to_lowercase()` to the start of the source character.
///
/// Relies on every character lowercasing to the same byte length whether
/// lowered alone or in context; the one context-sensitive mapping, final
/// sigma, keeps its width.
fn lowered_origins(text: &str) -> Vec<usize> {
    let mut origins = Vec::with_capacity(text.len());
    for (start, c) in text.char_indices() {
        let width: usize = c.to_lowercase().map(char::len_utf8).sum();
        origins.extend(std::iter::repeat_n(start, width));
    }
    origins
}

/// Byte offset just past the character starting at `start`.
fn char_end(text: &str, start: usize) -> usize {
    start + text[start..].chars().next().map_or(0, char::len_utf8)
}
