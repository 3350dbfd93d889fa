//! Closest-neighbor selection with plateau semantics.
//!
//! Candidates may come in any order. Several spans can sit at the same minimal
//! distance from the anchor (a token and a section that both start right after
//! it, say), and all of them are returned together.

use std::cmp::Ordering;

use tracing::trace;

use crate::{covers_same_span, Span};

/// Which side of the anchor a neighbor is looked for on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Candidates ending at or before the anchor's begin.
    Previous,
    /// Candidates beginning at or after the anchor's end.
    Next,
}

/// Distance from `anchor` to `candidate` in `direction`.
///
/// `None` when the candidate lies on the other side of the anchor or overlaps
/// it. Touching spans have a gap of zero.
pub fn directional_gap(anchor: &Span, candidate: &Span, direction: Direction) -> Option<usize> {
    match direction {
        Direction::Next => candidate.begin().checked_sub(anchor.end()),
        Direction::Previous => anchor.begin().checked_sub(candidate.end()),
    }
}

/// The anchor itself and any span over the same range are never neighbors.
fn is_excluded(anchor: &Span, candidate: &Span) -> bool {
    candidate.is_same(anchor) || covers_same_span(candidate, anchor)
}

/// All candidates at the smallest gap from `anchor` in `direction`, in input order.
pub fn closest<'a>(
    anchor: &Span,
    candidates: impl IntoIterator<Item = &'a Span>,
    direction: Direction,
) -> Vec<&'a Span> {
    let mut closest_gap: Option<usize> = None;
    let mut winners = Vec::new();

    for candidate in candidates {
        if is_excluded(anchor, candidate) {
            continue;
        }
        let gap = match directional_gap(anchor, candidate, direction) {
            Some(gap) => gap,
            None => continue,
        };

        match closest_gap.map(|best| gap.cmp(&best)) {
            None | Some(Ordering::Less) => {
                winners.clear();
                winners.push(candidate);
                closest_gap = Some(gap);
            }
            Some(Ordering::Equal) => winners.push(candidate),
            Some(Ordering::Greater) => {}
        }
    }

    trace!(
        "{} closest {:?} spans for {} at gap {:?}",
        winners.len(),
        direction,
        anchor,
        closest_gap
    );
    winners
}

/// Spans beginning nearest after the anchor ends.
pub fn next_closest<'a>(anchor: &Span, candidates: impl IntoIterator<Item = &'a Span>) -> Vec<&'a Span> {
    closest(anchor, candidates, Direction::Next)
}

/// Spans ending nearest before the anchor begins.
pub fn previous_closest<'a>(anchor: &Span, candidates: impl IntoIterator<Item = &'a Span>) -> Vec<&'a Span> {
    closest(anchor, candidates, Direction::Previous)
}

/// Every candidate fully on the `direction` side of `anchor`, in input order.
pub fn all_in_direction<'a>(
    anchor: &Span,
    candidates: impl IntoIterator<Item = &'a Span>,
    direction: Direction,
) -> Vec<&'a Span> {
    candidates
        .into_iter()
        .filter(|candidate| !is_excluded(anchor, candidate))
        .filter(|candidate| directional_gap(anchor, candidate, direction).is_some())
        .collect()
}

/// Every candidate ending at or before the anchor's begin.
pub fn all_previous<'a>(anchor: &Span, candidates: impl IntoIterator<Item = &'a Span>) -> Vec<&'a Span> {
    all_in_direction(anchor, candidates, Direction::Previous)
}

/// Every candidate beginning at or after the anchor's end.
pub fn all_next<'a>(anchor: &Span, candidates: impl IntoIterator<Item = &'a Span>) -> Vec<&'a Span> {
    all_in_direction(anchor, candidates, Direction::Next)
}
