//! Marker prefix scanning for quoted-reply detection
//!
//! A quoted line in a plain-text email reply starts with a run of spaces
//! and `>` characters. The scanner measures such a run, but only counts it
//! when at least one significant character is present, so a line of plain
//! indentation is never mistaken for a quote prefix.

/// Characters that may appear inside a quote prefix.
pub const QUOTE_SKIP_CHARS: &str = " >";

/// Characters at least one of which must appear for the run to count.
pub const QUOTE_SIGNIFICANT_CHARS: &str = ">";

/// Measure the longest run of characters drawn from `skip` starting at byte
/// offset `start`, bounded by `end`.
///
/// Returns the run length in bytes, or 0 when the run contains no character
/// from `significant`, or 0 when `start` is at or past the bound.
pub fn containing_run(
    text: &str,
    start: usize,
    end: usize,
    skip: &str,
    significant: &str,
) -> usize {
    let end = end.min(text.len());
    let Some(window) = text.get(start..end) else {
        return 0;
    };

    let mut found_significant = false;
    let mut len = 0;
    for ch in window.chars() {
        if !skip.contains(ch) {
            break;
        }
        if significant.contains(ch) {
            found_significant = true;
        }
        len += ch.len_utf8();
    }

    if found_significant {
        len
    } else {
        0
    }
}

/// Measure the quote prefix at `start`, if any.
pub fn quote_prefix_len(text: &str, start: usize, end: usize) -> usize {
    containing_run(text, start, end, QUOTE_SKIP_CHARS, QUOTE_SIGNIFICANT_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_quote_prefix() {
        assert_eq!(quote_prefix_len("> hello", 0, 7), 2);
    }

    #[test]
    fn test_nested_quote_prefix() {
        assert_eq!(quote_prefix_len("> > > deep", 0, 10), 6);
    }

    #[test]
    fn test_indented_quote_prefix() {
        // Leading spaces are absorbed together with the markers
        assert_eq!(quote_prefix_len("  > quoted", 0, 10), 4);
    }

    #[test]
    fn test_spaces_only_is_not_a_prefix() {
        assert_eq!(quote_prefix_len("    plain", 0, 9), 0);
    }

    #[test]
    fn test_no_prefix() {
        assert_eq!(quote_prefix_len("hello", 0, 5), 0);
    }

    #[test]
    fn test_start_at_end_of_text() {
        assert_eq!(quote_prefix_len("> x", 3, 3), 0);
        assert_eq!(quote_prefix_len("> x", 10, 10), 0);
    }

    #[test]
    fn test_bounded_by_region_end() {
        // Only the part of the run inside the region is counted
        assert_eq!(quote_prefix_len("> > > x", 0, 2), 2);
    }

    #[test]
    fn test_custom_skip_and_significant_sets() {
        assert_eq!(containing_run("\t\t  x", 0, 5, " \t", "\t"), 4);
        assert_eq!(containing_run("    x", 0, 5, " \t", "\t"), 0);
    }
}
