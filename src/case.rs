//! Case conversion between identifier naming conventions, plus the
//! one-or-many needle string predicates the accessor helpers lean on.

/// Whether the haystack contains any of the needles. Empty needles never
/// match.
pub fn contains(haystack: &str, needles: &[&str]) -> bool {
    needles
        .iter()
        .any(|needle| !needle.is_empty() && haystack.contains(needle))
}

/// Whether the haystack starts with any of the needles.
pub fn starts_with(haystack: &str, needles: &[&str]) -> bool {
    needles
        .iter()
        .any(|needle| !needle.is_empty() && haystack.starts_with(needle))
}

/// Whether the haystack ends with any of the needles.
pub fn ends_with(haystack: &str, needles: &[&str]) -> bool {
    needles
        .iter()
        .any(|needle| !needle.is_empty() && haystack.ends_with(needle))
}

/// Converts `camelCase` to `snake_case`.
pub fn snake(value: &str) -> String {
    delimited(value, '_')
}

/// Converts `camelCase` to `kebab-case`.
pub fn kebab(value: &str) -> String {
    delimited(value, '-')
}

/// Converts `snake_case` or `kebab-case` to `camelCase`.
pub fn camel(value: &str) -> String {
    delimiters_to_camel(value, &['-', '_'])
}

/// Converts only `snake_case` to `camelCase`; kebab dashes pass through.
pub fn snake_to_camel(value: &str) -> String {
    delimiters_to_camel(value, &['_'])
}

/// Converts only `kebab-case` to `camelCase`; underscores pass through.
pub fn kebab_to_camel(value: &str) -> String {
    delimiters_to_camel(value, &['-'])
}

pub fn upper(value: &str) -> String {
    value.to_uppercase()
}

pub fn lower(value: &str) -> String {
    value.to_lowercase()
}

/// Inserts the delimiter at each lower-to-upper boundary and lowercases
/// the result.
fn delimited(value: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    let mut boundary = false;

    for c in value.chars() {
        if c.is_uppercase() {
            if boundary {
                out.push(delimiter);
            }
            out.extend(c.to_lowercase());
            boundary = false;
        } else {
            boundary = c.is_lowercase() || c.is_ascii_digit();
            out.push(c);
        }
    }

    out
}

fn delimiters_to_camel(value: &str, delimiters: &[char]) -> String {
    let mut out = String::with_capacity(value.len());
    let mut upper_next = false;

    for c in value.chars() {
        if delimiters.contains(&c) {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}
