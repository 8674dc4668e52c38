//! Verbatim block passthrough
//!
//! Text between `<pre>` and `</pre>` tag lines is copied through without
//! any return processing. Each tag is assumed to sit on a line of its own;
//! a tag line is modeled as the tag text plus its trailing line break, so
//! the tags themselves are consumed and never emitted.

/// Opening verbatim tag.
pub const OPEN_TAG: &str = "<pre>";

/// Closing verbatim tag.
pub const CLOSE_TAG: &str = "</pre>";

/// True when the opening tag sits exactly at offset `n` within the region.
pub fn at_open_tag(text: &str, n: usize, end: usize) -> bool {
    let end = end.min(text.len());
    text.get(n..end)
        .is_some_and(|rest| rest.starts_with(OPEN_TAG))
}

/// Offset just past a tag line: the tag text plus its trailing line break
/// when one is present, bounded by the region end.
fn tag_line_end(text: &str, tag_start: usize, tag: &str, end: usize) -> usize {
    let after_tag = (tag_start + tag.len()).min(end);
    if after_tag < end && text.as_bytes().get(after_tag) == Some(&b'\n') {
        after_tag + 1
    } else {
        after_tag
    }
}

/// Copy a verbatim block into `out` and return the cursor position after
/// the block.
///
/// The caller guarantees that `n` sits at an opening tag. When no closing
/// tag exists before the region end, the rest of the region is copied
/// through and the cursor lands on `end`.
pub fn skip_block(text: &str, n: usize, end: usize, out: &mut String) -> usize {
    let end = end.min(text.len());
    let interior_start = tag_line_end(text, n, OPEN_TAG, end);

    match text
        .get(interior_start..end)
        .and_then(|rest| rest.find(CLOSE_TAG))
    {
        Some(rel) => {
            let close = interior_start + rel;
            out.push_str(&text[interior_start..close]);
            tag_line_end(text, close, CLOSE_TAG, end)
        }
        None => {
            out.push_str(&text[interior_start..end]);
            end
        }
    }
}
