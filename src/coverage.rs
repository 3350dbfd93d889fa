//! Containment queries: which spans contain the anchor, and which does it contain.
//!
//! Both are full scans over whatever the caller passes in. Category filtering,
//! if any, happens before the scan (see [`SortedSpans::of_category`]).
//!
//! [`SortedSpans::of_category`]: crate::SortedSpans::of_category

use tracing::trace;

use crate::{completely_covers, Span};

/// Every span that completely covers `anchor`, in input order.
///
/// Coverage is reflexive, so the anchor itself is included when it appears in
/// `spans`.
pub fn all_containing<'a>(spans: impl IntoIterator<Item = &'a Span>, anchor: &Span) -> Vec<&'a Span> {
    let found: Vec<&'a Span> = spans
        .into_iter()
        .filter(|span| completely_covers(span, anchor))
        .collect();
    trace!("{} spans contain {}", found.len(), anchor);
    found
}

/// Every span completely covered by `anchor`, in input order.
///
/// Typical use is pulling all words out of a sentence.
pub fn all_covered<'a>(spans: impl IntoIterator<Item = &'a Span>, anchor: &Span) -> Vec<&'a Span> {
    let found: Vec<&'a Span> = spans
        .into_iter()
        .filter(|span| completely_covers(anchor, span))
        .collect();
    trace!("{} spans covered by {}", found.len(), anchor);
    found
}
