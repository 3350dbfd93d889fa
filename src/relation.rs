//! Span-relation predicates and gap-text extraction.
//!
//! These are total functions; every other query is built on top of them.

use crate::Span;

/// True when `outer` starts at or before `inner` and ends at or after it.
///
/// Reflexive: every span completely covers itself.
pub fn completely_covers(outer: &Span, inner: &Span) -> bool {
    outer.begin() <= inner.begin() && outer.end() >= inner.end()
}

/// True when both spans occupy exactly the same range.
///
/// This says nothing about identity; see [`Span::is_same`].
pub fn covers_same_span(a: &Span, b: &Span) -> bool {
    a.begin() == b.begin() && a.end() == b.end()
}

/// Returns the text strictly between the end of `first` and the begin of `second`.
///
/// The result is empty when either span is missing, when `first` does not end
/// before `second` begins, or when the two spans begin at the same offset. A
/// range outside `text` or off a character boundary also yields an empty slice.
///
/// ```
/// use layered_spans::{text_between, Span, SpanId};
///
/// let text = "0123456789ABC";
/// let a = Span::new(SpanId(0), 0, 5, "x").unwrap();
/// let b = Span::new(SpanId(1), 8, 12, "x").unwrap();
/// assert_eq!(text_between(text, Some(&a), Some(&b)), "567");
/// assert_eq!(text_between(text, Some(&b), Some(&a)), "");
/// ```
pub fn text_between<'t>(text: &'t str, first: Option<&Span>, second: Option<&Span>) -> &'t str {
    let (first, second) = match (first, second) {
        (Some(first), Some(second)) => (first, second),
        _ => return "",
    };

    if first.end() >= second.begin() || first.begin() == second.begin() {
        return "";
    }

    text.get(first.end()..second.begin()).unwrap_or("")
}
