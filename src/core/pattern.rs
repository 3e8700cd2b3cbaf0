//! Wildcard matching of actual output against golden text.

/// Returns `true` if `actual` satisfies `pattern`.
///
/// `pattern` is literal text in which every occurrence of `wildcard` matches
/// any run of characters, including none. The first literal segment must be
/// a prefix of `actual` and the text after the last segment must be empty,
/// unless the pattern ends in a wildcard (optionally followed by a single
/// newline), in which case anything may follow.
///
/// ```
/// use golden_check::pattern::pattern_match;
///
/// assert!(pattern_match("Hello, [WILDCARD]!\n", "Hello, world!\n", "[WILDCARD]"));
/// assert!(!pattern_match("Hello\n", "Hello, world\n", "[WILDCARD]"));
/// ```
pub fn pattern_match(pattern: &str, actual: &str, wildcard: &str) -> bool {
    if pattern.is_empty() {
        return actual.is_empty();
    }
    if pattern == wildcard {
        return true;
    }

    let parts: Vec<&str> = pattern.split(wildcard).collect();
    if parts.len() == 1 {
        return pattern == actual;
    }

    let Some(mut rest) = actual.strip_prefix(parts[0]) else {
        return false;
    };

    let last = parts.len() - 1;
    for (i, part) in parts.iter().enumerate().skip(1) {
        if i == last && (part.is_empty() || *part == "\n") {
            return true;
        }
        match rest.find(part) {
            Some(pos) => rest = &rest[pos + part.len()..],
            None => return false,
        }
    }

    rest.is_empty()
}
