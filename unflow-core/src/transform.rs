//! The line transducer
//!
//! A single left-to-right pass over the active region that decides, for
//! every hard return, whether to delete it, keep it, or replace it with
//! annotation text. The scan looks one line ahead: the fate of a return is
//! determined by the quote prefix, second return, or list marker found
//! immediately after it. Classification rules are mutually exclusive and
//! evaluated in a strict precedence order.

use log::debug;

use crate::markers::MarkerCatalog;
use crate::options::ProcessingOptions;
use crate::prefix::quote_prefix_len;
use crate::verbatim;

/// Marker inserted where a quoted reply block opens.
pub const REPLY_START_MARK: &str = "----Original Message----";

/// Marker inserted where a quoted reply block closes.
pub const REPLY_END_MARK: &str = "------------------------";

/// Result of one transform invocation.
///
/// `text` holds everything before the region verbatim, followed by the
/// rewritten region. Text at or after the region end is not included; a
/// caller operating on a selection splices it back itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformOutcome {
    pub text: String,
    /// Hard returns deleted by the default join rule.
    pub returns_removed: usize,
}

/// Resolve the requested region against the text.
///
/// When `restrict` is false the whole text is used regardless of the
/// indices. Otherwise the indices are clamped to the text length, ordered,
/// and floored to char boundaries so that no input can cause a panic.
pub fn effective_region(text: &str, start: usize, end: usize, restrict: bool) -> (usize, usize) {
    if !restrict {
        return (0, text.len());
    }
    let end = floor_char_boundary(text, end.min(text.len()));
    let start = floor_char_boundary(text, start.min(end));
    (start, end)
}

fn floor_char_boundary(text: &str, mut i: usize) -> usize {
    while i > 0 && !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Strip extra hard returns from the active region of `text`.
///
/// Accepts any string and any option values; there is no failure mode. See
/// [`TransformOutcome`] for what the returned text covers.
pub fn transform(
    text: &str,
    region_start: usize,
    region_end: usize,
    options: &ProcessingOptions,
) -> TransformOutcome {
    let (start, end) = effective_region(text, region_start, region_end, options.restrict_to_region);
    let catalog = MarkerCatalog::from_tokens(&options.list_markers);
    debug!(
        "transform: region [{start}, {end}) of {} bytes, {} marker specs",
        text.len(),
        catalog.len()
    );

    let mut out = String::with_capacity(text.len());
    let mut returns_removed = 0usize;

    // Text preceding the region is copied through at the head of the output
    out.push_str(&text[..start]);

    let mut n = start;
    let mut is_current_line_reply = false;
    let mut ignore_verbatim = false;

    // Only a region anchored at the very start of the text may open inside
    // a quoted block; a later region start never seeds, so a partially
    // selected quote block is not split by a spurious marker.
    if start == 0 {
        let seed_prefix = quote_prefix_len(text, 0, end);
        if seed_prefix > 0 {
            if options.email_markers_enabled {
                out.push_str(REPLY_START_MARK);
                out.push_str("\n\n");
            }
            is_current_line_reply = true;
            ignore_verbatim = true;
            n += seed_prefix;
        }
    }

    let mut line_start = n;

    while n < end {
        let single_return = text[n..end].find('\n').map(|rel| n + rel);

        // Lookahead: quote prefix after the return, a possible second
        // return with its own prefix, and a list marker on the next line.
        let mut inline_reply = 0;
        let mut next_inline_reply = 0;
        let mut is_double_return = false;
        let mut is_list = false;

        if let Some(sr) = single_return {
            inline_reply = quote_prefix_len(text, sr + 1, end);
            let after_prefix = sr + 1 + inline_reply;
            if after_prefix < end && text.as_bytes()[after_prefix] == b'\n' {
                is_double_return = true;
                next_inline_reply = quote_prefix_len(text, after_prefix + 1, end);
            }
            if after_prefix < end {
                is_list = catalog.is_list_line(text, after_prefix, end);
            }
        }
        let is_next_line_reply = inline_reply != 0 || next_inline_reply != 0;

        if verbatim::at_open_tag(text, n, end) && !ignore_verbatim {
            // A quoted tag never opens a real block; `ignore_verbatim`
            // suppresses detection across reply transitions
            n = verbatim::skip_block(text, n, end, &mut out);
        } else {
            match single_return {
                None => {
                    // No further return in the region
                    out.push_str(&text[n..end]);
                    n = end;
                }
                Some(sr) => {
                    let skip_single = sr + 1 + inline_reply;
                    let skip_double = sr + 2 + inline_reply + next_inline_reply;

                    if sr - line_start < options.min_line_length {
                        // Below-threshold line: keep it and its return, but
                        // still strip the upcoming quote prefix
                        out.push_str(&text[n..sr + 1]);
                        n = skip_single;
                    } else if !is_current_line_reply && is_next_line_reply {
                        // Reply block opens on the next line
                        out.push_str(&text[n..sr]);
                        out.push_str("\n\n");
                        if options.email_markers_enabled {
                            out.push_str(REPLY_START_MARK);
                            out.push_str("\n\n");
                        }
                        n = if is_double_return { skip_double } else { skip_single };
                    } else if is_current_line_reply && !is_next_line_reply {
                        // Reply block closes after this line
                        out.push_str(&text[n..sr]);
                        if options.email_markers_enabled {
                            out.push('\n');
                            out.push_str(REPLY_END_MARK);
                        }
                        out.push_str("\n\n");
                        n = if is_double_return { skip_double } else { skip_single };
                    } else if is_double_return {
                        // Intentional paragraph break
                        out.push_str(&text[n..sr]);
                        out.push_str("\n\n");
                        n = skip_double;
                    } else if is_list {
                        // The next line is a list item; keep it on its own line
                        out.push_str(&text[n..sr + 1]);
                        n = skip_single;
                    } else {
                        // Default join: delete the return, separating the
                        // lines with one space unless the line is empty or
                        // already ends with a space
                        out.push_str(&text[n..sr]);
                        if sr != n && text.as_bytes()[sr - 1] != b' ' {
                            out.push(' ');
                        }
                        returns_removed += 1;
                        n = skip_single;
                    }
                }
            }
        }

        is_current_line_reply = is_next_line_reply;
        ignore_verbatim = inline_reply != 0 || next_inline_reply != 0;
        line_start = n;
    }

    TransformOutcome {
        text: out,
        returns_removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ProcessingOptions {
        ProcessingOptions::default()
    }

    fn run(text: &str, options: &ProcessingOptions) -> TransformOutcome {
        transform(text, 0, text.len(), options)
    }

    #[test]
    fn test_empty_text() {
        let outcome = run("", &opts());
        assert_eq!(outcome.text, "");
        assert_eq!(outcome.returns_removed, 0);
    }

    #[test]
    fn test_single_line_no_return() {
        let outcome = run("just one line", &opts());
        assert_eq!(outcome.text, "just one line");
        assert_eq!(outcome.returns_removed, 0);
    }

    #[test]
    fn test_join_counts_removed_returns() {
        let outcome = run("a b c\nd e f\ng h i", &opts());
        assert_eq!(outcome.text, "a b c d e f g h i");
        assert_eq!(outcome.returns_removed, 2);
    }

    #[test]
    fn test_empty_line_join_inserts_no_space() {
        // The return sits at the start of the current line
        let outcome = run("\nhello", &opts());
        assert_eq!(outcome.text, "hello");
        assert_eq!(outcome.returns_removed, 1);
    }

    #[test]
    fn test_region_restriction_ignored_when_disabled() {
        let options = ProcessingOptions {
            restrict_to_region: false,
            ..opts()
        };
        // Indices are nonsense on purpose
        let outcome = transform("one\ntwo", 100, 3, &options);
        assert_eq!(outcome.text, "one two");
        assert_eq!(outcome.returns_removed, 1);
    }

    #[test]
    fn test_region_head_copied_verbatim() {
        let options = ProcessingOptions {
            restrict_to_region: true,
            ..opts()
        };
        let text = "head\nkeep\njoin a\njoin b";
        // Region starts at "join a"
        let outcome = transform(text, 10, text.len(), &options);
        assert_eq!(outcome.text, "head\nkeep\njoin a join b");
        assert_eq!(outcome.returns_removed, 1);
    }

    #[test]
    fn test_region_tail_not_emitted() {
        let options = ProcessingOptions {
            restrict_to_region: true,
            ..opts()
        };
        let text = "join a\njoin b\ntail stays";
        let outcome = transform(text, 0, 14, &options);
        assert_eq!(outcome.text, "join a join b ");
        assert_eq!(outcome.returns_removed, 2);
    }

    #[test]
    fn test_region_indices_clamped_and_floored() {
        let options = ProcessingOptions {
            restrict_to_region: true,
            ..opts()
        };
        // 'é' occupies bytes 1..3; offset 2 is not a char boundary
        let text = "héllo";
        let outcome = transform(text, 2, 9999, &options);
        assert_eq!(outcome.text, "héllo");
        assert_eq!(outcome.returns_removed, 0);
    }

    #[test]
    fn test_reversed_region_is_inert() {
        let options = ProcessingOptions {
            restrict_to_region: true,
            ..opts()
        };
        let outcome = transform("a\nb", 3, 0, &options);
        assert_eq!(outcome.text, "");
        assert_eq!(outcome.returns_removed, 0);
    }

    #[test]
    fn test_threshold_keeps_line_and_strips_prefix() {
        let options = ProcessingOptions {
            min_line_length: 10,
            ..opts()
        };
        let outcome = run("hi\n> yo\nworld", &options);
        // Both lines are short: returns kept, quote noise removed
        assert_eq!(outcome.text, "hi\nyo\nworld");
        assert_eq!(outcome.returns_removed, 0);
    }

    #[test]
    fn test_threshold_zero_never_fires() {
        let outcome = run("x\ny", &opts());
        assert_eq!(outcome.text, "x y");
        assert_eq!(outcome.returns_removed, 1);
    }

    #[test]
    fn test_double_return_with_embedded_prefixes() {
        let options = ProcessingOptions {
            email_markers_enabled: false,
            ..opts()
        };
        // "> a", blank quoted line, "> b": paragraph break survives
        let outcome = run("> a\n> \n> b", &options);
        assert_eq!(outcome.text, "a\n\nb");
        assert_eq!(outcome.returns_removed, 0);
    }

    #[test]
    fn test_seeded_reply_at_text_start() {
        let outcome = run("> quoted\nplain", &opts());
        assert_eq!(
            outcome.text,
            "----Original Message----\n\nquoted\n------------------------\n\nplain"
        );
        assert_eq!(outcome.returns_removed, 0);
    }

    #[test]
    fn test_no_seeding_for_later_region_start() {
        let options = ProcessingOptions {
            restrict_to_region: true,
            ..opts()
        };
        let text = "> early\n> late a\n> late b";
        // Region starts inside the quoted block, past the first line
        let outcome = transform(text, 8, text.len(), &options);
        assert!(!outcome.text.starts_with(REPLY_START_MARK));
        assert!(outcome.text.starts_with("> early\n"));
    }

    #[test]
    fn test_quoted_verbatim_tag_is_not_a_block() {
        let options = ProcessingOptions {
            email_markers_enabled: false,
            ..opts()
        };
        let outcome = run("a\n> <pre>\n> b", &options);
        // The tag arrives inside a reply transition and is joined, not skipped
        assert!(outcome.text.contains("<pre>"));
    }

    #[test]
    fn test_idempotent_on_settled_text() {
        let settled = "First paragraph joined already.\n\nSecond paragraph.";
        let outcome = run(settled, &opts());
        assert_eq!(outcome.text, settled);
        assert_eq!(outcome.returns_removed, 0);
    }
}
