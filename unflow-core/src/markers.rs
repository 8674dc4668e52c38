//! List marker catalog and list-line matching
//!
//! Markers arrive as an ordered sequence of raw tokens, typically from a
//! comma-separated option string. A token is either a literal line prefix
//! (`-`, `*`, a tab) or an outline spec written `[outline]<delimiter>`,
//! which matches an incrementing symbol followed by the delimiter: `1)`,
//! `iv.`, `bb)` and so on.

/// Token prefix that switches a marker to outline matching.
const OUTLINE_TOKEN: &str = "[outline]";

/// Alphabet of outline incrementor characters: Arabic digits plus the
/// lowercase Roman numeral letters.
const INCREMENTOR_ALPHABET: &str = "0123456789ivxlcdm";

/// A single normalized marker specification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListMarkerSpec {
    pub literal: String,
    pub is_outline: bool,
}

impl ListMarkerSpec {
    /// Normalize a raw token. A case-insensitive `[outline]` prefix makes
    /// the remainder the closing delimiter of an outline marker; anything
    /// else is a plain literal prefix.
    pub fn parse(raw: &str) -> Self {
        let is_outline = raw
            .get(..OUTLINE_TOKEN.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(OUTLINE_TOKEN));

        if is_outline {
            Self {
                literal: raw[OUTLINE_TOKEN.len()..].to_string(),
                is_outline: true,
            }
        } else {
            Self {
                literal: raw.to_string(),
                is_outline: false,
            }
        }
    }

    /// Test whether the line starting at byte offset `p` matches this spec.
    fn matches_at(&self, text: &str, p: usize, end: usize) -> bool {
        // An empty literal is inert rather than an error
        if self.literal.is_empty() {
            return false;
        }
        let end = end.min(text.len());
        let Some(line) = text.get(p..end) else {
            return false;
        };

        if !self.is_outline {
            return line.starts_with(&self.literal);
        }

        match line.find(&self.literal) {
            // The delimiter with nothing in front of it is not a list item
            Some(0) | None => false,
            Some(q) => is_incrementor(&line[..q]),
        }
    }
}

/// Heuristic test for an outline incrementor.
///
/// Accepts when every case-folded character belongs to the numeral alphabet
/// (Arabic digits and Roman numeral letters), or when the whole string is a
/// repetition of its first character (`aa`, `BB`). Mixed or ambiguous
/// strings are rejected.
fn is_incrementor(s: &str) -> bool {
    let folded: String = s.chars().flat_map(char::to_lowercase).collect();
    let mut chars = folded.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    let all_numeral = folded.chars().all(|c| INCREMENTOR_ALPHABET.contains(c));
    let all_repeated = folded.chars().all(|c| c == first);

    all_numeral || all_repeated
}

/// Ordered collection of marker specs; first match wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkerCatalog {
    specs: Vec<ListMarkerSpec>,
}

impl MarkerCatalog {
    /// Build a catalog from raw tokens, preserving order.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            specs: tokens
                .into_iter()
                .map(|t| ListMarkerSpec::parse(t.as_ref()))
                .collect(),
        }
    }

    /// Build a catalog from a comma-separated option string, e.g.
    /// `"-,*,[outline])"`.
    pub fn parse_list(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        Self::from_tokens(raw.split(','))
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Test whether the line starting at byte offset `p` is a list item.
    /// Specs are consulted in catalog order; the first to accept wins.
    pub fn is_list_line(&self, text: &str, p: usize, end: usize) -> bool {
        self.specs.iter().any(|spec| spec.matches_at(text, p, end))
    }
}
