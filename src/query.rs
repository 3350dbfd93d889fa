//! Query API binding the span algorithms to a [`SpanStore`].
//!
//! ## Usage
//!
//! ```rust
//! use layered_spans::{Category, Limit, SpanQuery, SpanStore};
//!
//! let mut store = SpanStore::new("The cat sat. The dog ran.");
//! store.add_words("word").unwrap();
//! let first = store.add(0, 12, "sentence").unwrap();
//! store.add(13, 25, "sentence").unwrap();
//!
//! let query = SpanQuery::new(&store);
//! let sentence = store.get(first).unwrap();
//! let word = Category::from("word");
//!
//! let words: Vec<&str> = query
//!     .covered(sentence, Some(&word))
//!     .into_iter()
//!     .map(|span| store.covered_text(span))
//!     .collect();
//! assert_eq!(words, vec!["The", "cat", "sat"]);
//!
//! let following = query.next_of_type(sentence, &Category::from("sentence"), Limit::at_most(1));
//! assert_eq!(following.len(), 1);
//! ```

use crate::{
    all_containing, all_covered, all_next, all_previous, next_closest, next_of_type,
    previous_closest, previous_of_type, text_between, Category, Limit, SortedSpans, Span,
    SpanStore,
};

/// Query API over the spans and text of one store.
///
/// Every method takes the anchor by reference; the anchor does not need to
/// come from this store, though identity exclusion only applies to spans that
/// share its id.
#[derive(Debug, Clone, Copy)]
pub struct SpanQuery<'a> {
    store: &'a SpanStore,
}

impl<'a> SpanQuery<'a> {
    pub fn new(store: &'a SpanStore) -> Self {
        Self { store }
    }

    /// The store's spans, optionally restricted to one category.
    pub fn candidates(&self, category: Option<&Category>) -> SortedSpans<'a> {
        match category {
            Some(category) => self.store.index_of(category),
            None => self.store.index(),
        }
    }

    /// Spans that completely cover `anchor`.
    pub fn containing(&self, anchor: &Span, category: Option<&Category>) -> Vec<&'a Span> {
        all_containing(self.candidates(category), anchor)
    }

    /// Spans completely covered by `anchor`.
    pub fn covered(&self, anchor: &Span, category: Option<&Category>) -> Vec<&'a Span> {
        all_covered(self.candidates(category), anchor)
    }

    /// Spans of `category` beginning before `anchor`, nearest first.
    pub fn previous_of_type(&self, anchor: &Span, category: &Category, limit: Limit) -> Vec<&'a Span> {
        previous_of_type(&self.store.index_of(category), anchor, limit)
    }

    /// Spans of `category` beginning after `anchor`, nearest first.
    pub fn next_of_type(&self, anchor: &Span, category: &Category, limit: Limit) -> Vec<&'a Span> {
        next_of_type(&self.store.index_of(category), anchor, limit)
    }

    /// Spans beginning nearest after `anchor` ends (all of them on a tie).
    pub fn next_closest(&self, anchor: &Span, category: Option<&Category>) -> Vec<&'a Span> {
        next_closest(anchor, self.candidates(category))
    }

    /// Spans ending nearest before `anchor` begins (all of them on a tie).
    pub fn previous_closest(&self, anchor: &Span, category: Option<&Category>) -> Vec<&'a Span> {
        previous_closest(anchor, self.candidates(category))
    }

    pub fn all_previous(&self, anchor: &Span, category: Option<&Category>) -> Vec<&'a Span> {
        all_previous(anchor, self.candidates(category))
    }

    pub fn all_next(&self, anchor: &Span, category: Option<&Category>) -> Vec<&'a Span> {
        all_next(anchor, self.candidates(category))
    }

    /// Document text between two spans; empty when they overlap or are misordered.
    pub fn text_between(&self, first: Option<&Span>, second: Option<&Span>) -> &'a str {
        text_between(self.store.text(), first, second)
    }
}
