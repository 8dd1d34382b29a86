//! Glob-style pattern matching for cache keys.
//!
//! Supports `*` as a wildcard matching any sequence of characters,
//! the subset of Redis KEYS patterns the in-memory backend needs.

/// Checks if a cache key matches a glob pattern.
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    if !pattern.contains('*') {
        return pattern == key;
    }

    let segments: Vec<&str> = pattern.split('*').collect();
    let mut remaining = key;

    for (i, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            continue;
        }

        if i == 0 {
            // No leading wildcard: segment is anchored at the start.
            match remaining.strip_prefix(segment) {
                Some(rest) => remaining = rest,
                None => return false,
            }
        } else if i == segments.len() - 1 && !pattern.ends_with('*') {
            // No trailing wildcard: segment is anchored at the end.
            return remaining.ends_with(segment);
        } else {
            // Interior segment: find the first occurrence and consume
            // through it.
            match remaining.find(segment) {
                Some(pos) => remaining = &remaining[pos + segment.len()..],
                None => return false,
            }
        }
    }

    true
}
