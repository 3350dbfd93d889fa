//! In-memory span store: the host side that owns document text and spans.
//!
//! The query functions never depend on this type. It exists so callers have a
//! ready-made index provider that validates spans when they are added.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::{Category, SortedSpans, Span, SpanError, SpanId, SpanResult};

/// Document text plus the spans annotated over it.
///
/// Spans get sequential ids in insertion order; that order is also the
/// tie-break when two spans begin at the same offset.
#[derive(Debug, Clone, Default)]
pub struct SpanStore {
    text: String,
    spans: Vec<Span>,
}

/// Serialized form of a store. Ids are not persisted; they are reassigned in
/// order on load.
#[derive(Debug, Serialize, Deserialize)]
struct StoreSnapshot {
    text: String,
    spans: Vec<SpanRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SpanRecord {
    begin: usize,
    end: usize,
    category: Category,
}

impl SpanStore {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Add a span over `[begin, end)`.
    ///
    /// Fails if `begin > end`, if the span runs past the text, or if either
    /// offset splits a character.
    pub fn add(&mut self, begin: usize, end: usize, category: impl Into<Category>) -> SpanResult<SpanId> {
        let id = SpanId(self.spans.len() as u32);
        let span = Span::new(id, begin, end, category)?;

        if end > self.text.len() {
            return Err(SpanError::OutOfBounds {
                end,
                len: self.text.len(),
            });
        }
        if let Some(offset) = [begin, end].into_iter().find(|&o| !self.text.is_char_boundary(o)) {
            return Err(SpanError::NotCharBoundary { offset });
        }

        self.spans.push(span);
        Ok(id)
    }

    /// Add one span per word of the text, using Unicode word boundaries.
    ///
    /// Segments without any alphanumeric character (whitespace, punctuation)
    /// are skipped.
    pub fn add_words(&mut self, category: impl Into<Category>) -> SpanResult<Vec<SpanId>> {
        let category = category.into();
        let words: Vec<(usize, usize)> = self
            .text
            .split_word_bound_indices()
            .filter(|(_, segment)| segment.chars().any(char::is_alphanumeric))
            .map(|(begin, segment)| (begin, begin + segment.len()))
            .collect();

        let ids = words
            .into_iter()
            .map(|(begin, end)| self.add(begin, end, category.clone()))
            .collect::<SpanResult<Vec<_>>>()?;

        debug!("added {} {} spans", ids.len(), category);
        Ok(ids)
    }

    pub fn get(&self, id: SpanId) -> Option<&Span> {
        self.spans.get(id.0 as usize)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text covered by `span`, or empty if it does not fit this store's text.
    pub fn covered_text(&self, span: &Span) -> &str {
        self.text.get(span.begin()..span.end()).unwrap_or("")
    }

    /// All spans in insertion order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Distinct categories present in the store.
    pub fn categories(&self) -> BTreeSet<&Category> {
        self.spans.iter().map(Span::category).collect()
    }

    /// Every span, sorted by begin offset.
    pub fn index(&self) -> SortedSpans<'_> {
        SortedSpans::new(&self.spans)
    }

    /// Spans of one category, sorted by begin offset.
    pub fn index_of(&self, category: &Category) -> SortedSpans<'_> {
        SortedSpans::new(self.spans.iter().filter(|span| span.has_category(category)))
    }

    /// Load a store from its RON snapshot, validating every span.
    pub fn from_ron(source: &str) -> SpanResult<Self> {
        let snapshot: StoreSnapshot = ron::from_str(source)?;
        let mut store = SpanStore::new(snapshot.text);
        for record in snapshot.spans {
            store.add(record.begin, record.end, record.category)?;
        }
        debug!("loaded {} spans over {} bytes of text", store.len(), store.text.len());
        Ok(store)
    }

    /// Write the store as a pretty-printed RON snapshot.
    pub fn to_ron(&self) -> SpanResult<String> {
        let snapshot = StoreSnapshot {
            text: self.text.clone(),
            spans: self
                .spans
                .iter()
                .map(|span| SpanRecord {
                    begin: span.begin(),
                    end: span.end(),
                    category: span.category().clone(),
                })
                .collect(),
        };
        Ok(ron::ser::to_string_pretty(&snapshot, ron::ser::PrettyConfig::default())?)
    }
}
