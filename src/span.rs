//! The span type: a categorized half-open range over document offsets.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{SpanError, SpanResult};

/// Identity of a span within the store that created it.
///
/// Two spans may cover the same range and still be different spans; only the
/// id says whether a candidate *is* the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpanId(pub u32);

impl fmt::Display for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque classification key used to pre-filter spans before a query.
///
/// ```
/// use layered_spans::Category;
///
/// const SENTENCE: Category = Category::from_static("sentence");
/// assert_eq!(SENTENCE, Category::new(String::from("sentence")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(Cow<'static, str>);

impl Category {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Category(name.into())
    }

    pub const fn from_static(name: &'static str) -> Self {
        Category(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Category {
    fn from(name: &'static str) -> Self {
        Category::from_static(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Category(Cow::Owned(name))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable half-open range `[begin, end)` tagged with a category.
///
/// `begin == end` is a valid zero-width marker. `begin > end` is rejected by
/// [`Span::new`] and by deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSpan")]
pub struct Span {
    id: SpanId,
    begin: usize,
    end: usize,
    category: Category,
}

#[derive(Deserialize)]
struct RawSpan {
    id: SpanId,
    begin: usize,
    end: usize,
    category: Category,
}

impl TryFrom<RawSpan> for Span {
    type Error = SpanError;

    fn try_from(raw: RawSpan) -> SpanResult<Self> {
        Span::new(raw.id, raw.begin, raw.end, raw.category)
    }
}

impl Span {
    pub fn new(id: SpanId, begin: usize, end: usize, category: impl Into<Category>) -> SpanResult<Self> {
        if begin > end {
            return Err(SpanError::InvertedRange { begin, end });
        }
        Ok(Span {
            id,
            begin,
            end,
            category: category.into(),
        })
    }

    pub fn id(&self) -> SpanId {
        self.id
    }

    pub fn begin(&self) -> usize {
        self.begin
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Number of offsets covered.
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// True for zero-width markers.
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Identity check: same id, regardless of range.
    pub fn is_same(&self, other: &Span) -> bool {
        self.id == other.id
    }

    pub fn has_category(&self, category: &Category) -> bool {
        &self.category == category
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}..{})", self.category, self.begin, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_span_is_valid() {
        let marker = Span::new(SpanId(0), 4, 4, "marker").unwrap();
        assert!(marker.is_empty());
        assert_eq!(marker.len(), 0);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = Span::new(SpanId(0), 5, 2, "word").unwrap_err();
        assert!(matches!(err, SpanError::InvertedRange { begin: 5, end: 2 }));
        assert_eq!(err.to_string(), "span begin 5 is after its end 2");
    }

    #[test]
    fn identity_is_by_id_not_range() {
        let a = Span::new(SpanId(1), 0, 5, "word").unwrap();
        let b = Span::new(SpanId(2), 0, 5, "word").unwrap();
        assert!(!a.is_same(&b));
        assert!(a.is_same(&a.clone()));
    }

    #[test]
    fn category_forms_compare_equal() {
        assert_eq!(Category::from("word"), Category::new(String::from("word")));
        assert_eq!(Category::from_static("word").as_str(), "word");
    }

    #[test]
    fn display() {
        let span = Span::new(SpanId(3), 2, 9, "sentence").unwrap();
        assert_eq!(span.to_string(), "sentence[2..9)");
        assert_eq!(span.id().to_string(), "#3");
    }

    #[test]
    fn deserialization_validates_range() {
        let ok: Span = ron::from_str(r#"(id: 0, begin: 1, end: 3, category: "word")"#).unwrap();
        assert_eq!((ok.begin(), ok.end()), (1, 3));

        let bad = ron::from_str::<Span>(r#"(id: 0, begin: 4, end: 3, category: "word")"#);
        assert!(bad.is_err());
    }
}
