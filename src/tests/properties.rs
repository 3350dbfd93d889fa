//! Behavioral properties of the span queries, checked end to end.

use crate::{
    all_containing, all_covered, all_previous, completely_covers, covers_same_span, next_closest,
    next_of_type, previous_closest, previous_of_type, text_between, Category, Limit, SortedSpans,
    Span, SpanId, SpanStore,
};

const X: Category = Category::from_static("x");
const Y: Category = Category::from_static("y");

fn span(id: u32, begin: usize, end: usize) -> Span {
    Span::new(SpanId(id), begin, end, X).unwrap()
}

/// Spans of category X at begins {1, 3, 5, 7, 9}, interleaved with category Y noise.
fn odd_store() -> SpanStore {
    let mut store = SpanStore::new("0123456789ABCDEF");
    for begin in [1, 3, 5, 7, 9] {
        store.add(begin, begin + 1, X).unwrap();
        store.add(begin + 1, begin + 2, Y).unwrap();
    }
    store
}

fn begins(spans: &[&Span]) -> Vec<usize> {
    spans.iter().map(|s| s.begin()).collect()
}

#[test]
fn containment_is_reflexive() {
    for s in [span(0, 0, 0), span(1, 0, 12), span(2, 4, 4), span(3, 7, 9)] {
        assert!(completely_covers(&s, &s), "{} should cover itself", s);
    }
}

#[test]
fn mutual_containment_means_same_range() {
    let spans = [span(0, 2, 8), span(1, 2, 8), span(2, 2, 9), span(3, 1, 8)];
    for a in &spans {
        for b in &spans {
            if completely_covers(a, b) && completely_covers(b, a) {
                assert!(covers_same_span(a, b));
            }
        }
    }
    assert!(!spans[0].is_same(&spans[1]));
}

#[test]
fn gap_extraction_round_trip() {
    let text = "0123456789ABC";
    let a = span(0, 0, 5);
    let b = span(1, 8, 12);
    assert_eq!(text_between(text, Some(&a), Some(&b)), &text[5..8]);
}

#[test]
fn gap_extraction_is_safe_on_overlap() {
    let text = "0123456789ABCDEF";
    assert_eq!(text_between(text, Some(&span(0, 0, 10)), Some(&span(1, 5, 15))), "");
}

#[test]
fn bounded_previous_is_nearest_first() {
    let store = odd_store();
    let anchor = span(100, 10, 11);
    let found = previous_of_type(&store.index_of(&X), &anchor, Limit::from_max_return(2));
    assert_eq!(begins(&found), vec![9, 7]);
}

#[test]
fn bounded_next_is_capped() {
    let store = odd_store();
    let anchor = span(100, 0, 1);
    let found = next_of_type(&store.index_of(&X), &anchor, Limit::from_max_return(3));
    assert_eq!(begins(&found), vec![1, 3, 5]);
}

#[test]
fn max_return_below_one_is_unbounded() {
    let store = odd_store();
    let index = store.index_of(&X);
    for max_return in [0, -1, -100] {
        let limit = Limit::from_max_return(max_return);
        assert_eq!(
            begins(&previous_of_type(&index, &span(100, 10, 11), limit)),
            vec![9, 7, 5, 3, 1]
        );
        assert_eq!(
            begins(&next_of_type(&index, &span(100, 0, 1), limit)),
            vec![1, 3, 5, 7, 9]
        );
    }
}

#[test]
fn closest_returns_tied_plateau() {
    let anchor = span(0, 4, 10);
    let candidates = vec![span(1, 12, 15), span(2, 12, 13), span(3, 20, 22)];
    let found = next_closest(&anchor, &candidates);
    assert_eq!(found.iter().map(|s| s.id()).collect::<Vec<_>>(), vec![SpanId(1), SpanId(2)]);
}

#[test]
fn anchor_is_never_its_own_neighbor() {
    let store = odd_store();
    let index = store.index_of(&X);
    let spans: Vec<&Span> = index.iter().collect();

    for anchor in &spans {
        let results = [
            previous_of_type(&index, anchor, Limit::UNBOUNDED),
            next_of_type(&index, anchor, Limit::UNBOUNDED),
            next_closest(anchor, spans.iter().copied()),
            previous_closest(anchor, spans.iter().copied()),
            all_previous(anchor, spans.iter().copied()),
        ];
        for result in &results {
            assert!(result.iter().all(|s| !s.is_same(anchor)), "{} returned itself", anchor);
        }
    }
}

#[test]
fn same_range_twin_is_a_bounded_candidate_only_by_begin() {
    // Bounded selectors exclude by identity; a twin with the anchor's range is
    // still filtered by its begin offset, never by range equality.
    let owned = vec![span(0, 2, 4), span(1, 5, 7), span(2, 5, 7), span(3, 9, 10)];
    let index = SortedSpans::new(&owned);
    let anchor = &owned[1];

    assert_eq!(begins(&previous_of_type(&index, anchor, Limit::UNBOUNDED)), vec![2]);
    assert_eq!(begins(&next_of_type(&index, anchor, Limit::UNBOUNDED)), vec![9]);

    // The closest selectors exclude the twin outright.
    let next = next_closest(anchor, &owned);
    assert_eq!(next.iter().map(|s| s.id()).collect::<Vec<_>>(), vec![SpanId(3)]);
}

#[test]
fn containment_queries_over_store() {
    let mut store = SpanStore::new("Dogs bark. Cats purr loudly.");
    store.add_words("word").unwrap();
    let first = store.add(0, 10, "sentence").unwrap();
    let second = store.add(11, 28, "sentence").unwrap();
    let word = Category::from("word");

    let second = store.get(second).unwrap();
    let inside: Vec<&str> = all_covered(store.index_of(&word), second)
        .into_iter()
        .map(|s| store.covered_text(s))
        .collect();
    assert_eq!(inside, vec!["Cats", "purr", "loudly"]);

    let bark = store
        .index_of(&word)
        .iter()
        .find(|s| store.covered_text(s) == "bark")
        .unwrap();
    let around = all_containing(store.index_of(&Category::from("sentence")), bark);
    assert_eq!(around.iter().map(|s| s.id()).collect::<Vec<_>>(), vec![first]);
}

#[test]
fn empty_inputs_return_empty_results() {
    let anchor = span(0, 3, 5);
    let none: Vec<Span> = Vec::new();
    let index = SortedSpans::new(&none);

    assert!(all_containing(&none, &anchor).is_empty());
    assert!(all_covered(&none, &anchor).is_empty());
    assert!(previous_of_type(&index, &anchor, Limit::at_most(4)).is_empty());
    assert!(next_of_type(&index, &anchor, Limit::at_most(4)).is_empty());
    assert!(next_closest(&anchor, &none).is_empty());
    assert!(previous_closest(&anchor, &none).is_empty());
    assert!(all_previous(&anchor, &none).is_empty());
}
