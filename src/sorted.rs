//! A borrowed view of spans ordered by begin offset.

use crate::{Category, Span, SpanError, SpanResult};

/// Spans in ascending begin order, ties kept in input order.
///
/// The bounded neighbor selectors depend on this ordering to stop scanning
/// early, so the only ways to build one are a stable sort ([`SortedSpans::new`])
/// or a checked claim ([`SortedSpans::from_sorted`]).
#[derive(Debug, Clone, Default)]
pub struct SortedSpans<'a> {
    spans: Vec<&'a Span>,
}

impl<'a> SortedSpans<'a> {
    /// Sort `spans` by begin offset. The sort is stable, so spans that begin
    /// at the same offset keep the order they were given in.
    pub fn new(spans: impl IntoIterator<Item = &'a Span>) -> Self {
        let mut spans: Vec<&'a Span> = spans.into_iter().collect();
        spans.sort_by_key(|span| span.begin());
        Self { spans }
    }

    /// Accept a sequence the caller claims is already sorted, verifying it.
    pub fn from_sorted(spans: Vec<&'a Span>) -> SpanResult<Self> {
        if let Some(index) = spans.windows(2).position(|pair| pair[0].begin() > pair[1].begin()) {
            return Err(SpanError::Unsorted {
                index: index + 1,
                previous: spans[index].begin(),
                begin: spans[index + 1].begin(),
            });
        }
        Ok(Self { spans })
    }

    /// Keep only spans of `category`. Filtering preserves the ordering.
    pub fn of_category(&self, category: &Category) -> SortedSpans<'a> {
        SortedSpans {
            spans: self
                .spans
                .iter()
                .copied()
                .filter(|span| span.has_category(category))
                .collect(),
        }
    }

    /// Spans that begin strictly before `offset`.
    pub fn beginning_before(&self, offset: usize) -> &[&'a Span] {
        let split = self.spans.partition_point(|span| span.begin() < offset);
        &self.spans[..split]
    }

    /// Spans that begin strictly after `offset`.
    pub fn beginning_after(&self, offset: usize) -> &[&'a Span] {
        let split = self.spans.partition_point(|span| span.begin() <= offset);
        &self.spans[split..]
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Span> + '_ {
        self.spans.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'a Span] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

impl<'a> IntoIterator for SortedSpans<'a> {
    type Item = &'a Span;
    type IntoIter = std::vec::IntoIter<&'a Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b SortedSpans<'a> {
    type Item = &'a Span;
    type IntoIter = std::iter::Copied<std::slice::Iter<'b, &'a Span>>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter().copied()
    }
}
