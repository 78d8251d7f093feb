/// The path token that matches every key or index at its level.
pub const WILDCARD: &str = "*";

/// Splits a dot-delimited path into its segments.
///
/// A path without any dot yields a single segment; an empty path yields
/// `[""]`. Callers must special-case the empty path as "the whole value"
/// before splitting.
pub fn split(path: &str) -> Vec<&str> {
    path.split('.').collect()
}

/// A single path segment, classified for traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// The `*` token, matching all entries at this level.
    Wildcard,
    /// A literal key. Addresses objects by name and, when it parses as a
    /// non-negative integer, arrays by index.
    Key(&'a str),
}

impl<'a> Segment<'a> {
    pub fn parse(raw: &'a str) -> Segment<'a> {
        if raw == WILDCARD {
            Segment::Wildcard
        } else {
            Segment::Key(raw)
        }
    }

    /// The array index form of this segment, if it has one.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Wildcard => None,
            Segment::Key(key) => key.parse().ok(),
        }
    }
}
