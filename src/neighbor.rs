//! Bounded neighbor selection over a begin-sorted index.
//!
//! Both selectors return nearest-first lists. The anchor is excluded by
//! identity; a different span that shares the anchor's range is excluded only
//! because its begin is not strictly before/after the anchor's.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{SortedSpans, Span};

/// Maximum number of neighbors to return.
///
/// ```
/// use layered_spans::Limit;
///
/// assert_eq!(Limit::from_max_return(3).get(), Some(3));
/// assert_eq!(Limit::from_max_return(0), Limit::UNBOUNDED);
/// assert_eq!(Limit::from_max_return(-1), Limit::UNBOUNDED);
/// assert_eq!(Limit::at_most(0), Limit::UNBOUNDED);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Limit(Option<NonZeroUsize>);

impl Limit {
    pub const UNBOUNDED: Limit = Limit(None);

    /// At most `max` neighbors; `0` means unbounded.
    pub fn at_most(max: usize) -> Self {
        Limit(NonZeroUsize::new(max))
    }

    /// Signed cap where anything below one means unbounded.
    pub fn from_max_return(max_return: i64) -> Self {
        usize::try_from(max_return).map_or(Limit::UNBOUNDED, Limit::at_most)
    }

    pub fn get(self) -> Option<usize> {
        self.0.map(NonZeroUsize::get)
    }

    pub fn is_unbounded(self) -> bool {
        self.0.is_none()
    }
}

/// Spans beginning before `anchor`, nearest first.
///
/// When `limit` is bounded only the `limit` spans with the largest begin
/// offsets are kept. Spans sharing a begin offset keep their index order.
pub fn previous_of_type<'a>(index: &SortedSpans<'a>, anchor: &Span, limit: Limit) -> Vec<&'a Span> {
    let preceding: Vec<&'a Span> = index
        .beginning_before(anchor.begin())
        .iter()
        .copied()
        .take_while(|span| !span.is_same(anchor))
        .collect();

    let keep_from = limit
        .get()
        .map_or(0, |max| preceding.len().saturating_sub(max));
    let mut kept = preceding[keep_from..].to_vec();
    kept.sort_by(|a, b| b.begin().cmp(&a.begin()));

    trace!("{} previous spans for {} ({:?})", kept.len(), anchor, limit);
    kept
}

/// Spans beginning after `anchor`, nearest first, at most `limit` of them.
pub fn next_of_type<'a>(index: &SortedSpans<'a>, anchor: &Span, limit: Limit) -> Vec<&'a Span> {
    let following = index
        .beginning_after(anchor.begin())
        .iter()
        .copied()
        .filter(|span| !span.is_same(anchor));

    let found: Vec<&'a Span> = match limit.get() {
        Some(max) => following.take(max).collect(),
        None => following.collect(),
    };

    trace!("{} next spans for {} ({:?})", found.len(), anchor, limit);
    found
}
