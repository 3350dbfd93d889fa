#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Positional queries over categorized document spans.
//!
//! Given a document's spans (half-open `[begin, end)` byte ranges, each tagged
//! with a [`Category`]), this crate answers which spans contain an anchor, are
//! contained by it, precede or follow it, or sit closest to it.
//!
//! ## Core Types
//!
//! - [`Span`] / [`SpanId`] / [`Category`] - the annotated range and its identity
//! - [`SortedSpans`] - a view ordered by begin offset, required by the bounded selectors
//! - [`Limit`] - neighbor cap for [`previous_of_type`] / [`next_of_type`]
//! - [`SpanStore`] - in-memory text + spans, with RON snapshots
//! - [`SpanQuery`] - all queries bound to one store
//! - [`SpanDisplay`] - debug rendering of spans under the text
//!
//! ## Example
//!
//! ```
//! use layered_spans::{next_closest, SpanStore};
//!
//! let mut store = SpanStore::new("Section 1. Scope");
//! let ids = store.add_words("word").unwrap();
//! let section = store.get(ids[0]).unwrap();
//!
//! let next = next_closest(section, store.spans());
//! assert_eq!(store.covered_text(next[0]), "1");
//! ```

mod closest;
mod coverage;
mod display;
mod errors;
mod neighbor;
mod query;
mod relation;
mod sorted;
mod span;
mod store;

// Span types
pub use span::{Category, Span, SpanId};

// Errors
pub use errors::{SpanError, SpanResult};

// Relation predicates
pub use relation::{completely_covers, covers_same_span, text_between};

// Ordered view
pub use sorted::SortedSpans;

// Containment
pub use coverage::{all_containing, all_covered};

// Bounded neighbors
pub use neighbor::{next_of_type, previous_of_type, Limit};

// Closest neighbors
pub use closest::{
    all_in_direction,
    all_next,
    all_previous,
    closest,
    directional_gap,
    next_closest,
    previous_closest,
    Direction,
};

// Host-side store and query API
pub use store::SpanStore;
pub use query::SpanQuery;

// Display
pub use display::{DisplayOptions, SpanDisplay};
