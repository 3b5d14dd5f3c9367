use std::cmp::Ordering;

use varmix_core::SequencingType;

use crate::traits::Unify;

/// Merge two `(position, variant id)` ordered record sequences into one
/// ordered sequence, combining records that appear in both.
///
/// Every record `merge` emits is tagged with the source(s) that contributed
/// to it, so output provenance is never empty. Inputs are read-only; the
/// output is freshly allocated.
///
/// Sortedness of the inputs is a precondition, not checked here: unsorted
/// input yields deterministic but unspecified output ordering. Callers that
/// want the check outside the hot path can use [`is_merge_ordered`].
///
/// Runs in O(n + m); records sharing a position are gathered into two
/// position groups and merged against each other by variant id. Such
/// groups stay small in practice, bounded by multiallelic sites.
pub fn merge<R: Unify>(
    a: &[R],
    b: &[R],
    source_a: SequencingType,
    source_b: SequencingType,
) -> Vec<R> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        match a[i].position().cmp(&b[j].position()) {
            Ordering::Less => {
                merged.push(a[i].clone().tag(source_a));
                i += 1;
            }
            Ordering::Greater => {
                merged.push(b[j].clone().tag(source_b));
                j += 1;
            }
            Ordering::Equal => {
                let a_end = position_run_end(a, i);
                let b_end = position_run_end(b, j);
                merge_at_position(&a[i..a_end], &b[j..b_end], source_a, source_b, &mut merged);
                i = a_end;
                j = b_end;
            }
        }
    }

    for record in &a[i..] {
        merged.push(record.clone().tag(source_a));
    }
    for record in &b[j..] {
        merged.push(record.clone().tag(source_b));
    }

    merged
}

/// End (exclusive) of the run of records sharing `records[start]`'s
/// position.
fn position_run_end<R: Unify>(records: &[R], start: usize) -> usize {
    let position = records[start].position();
    let mut end = start + 1;
    while end < records.len() && records[end].position() == position {
        end += 1;
    }
    end
}

/// Inner merge of two groups of records sharing one position, keyed by
/// variant id.
///
/// Ids unique to one group pass through tagged with that group's source;
/// an id present in both groups combines into one record via
/// [`Unify::combine`], tagged with both sources. Group order is the
/// id-sorted order guaranteed by the outer precondition.
fn merge_at_position<R: Unify>(
    group_a: &[R],
    group_b: &[R],
    source_a: SequencingType,
    source_b: SequencingType,
    merged: &mut Vec<R>,
) {
    let mut i = 0;
    let mut j = 0;

    while i < group_a.len() && j < group_b.len() {
        match group_a[i].variant_id().cmp(group_b[j].variant_id()) {
            Ordering::Less => {
                merged.push(group_a[i].clone().tag(source_a));
                i += 1;
            }
            Ordering::Greater => {
                merged.push(group_b[j].clone().tag(source_b));
                j += 1;
            }
            Ordering::Equal => {
                let tagged_a = group_a[i].clone().tag(source_a);
                let tagged_b = group_b[j].clone().tag(source_b);
                merged.push(tagged_a.combine(tagged_b));
                i += 1;
                j += 1;
            }
        }
    }

    for record in &group_a[i..] {
        merged.push(record.clone().tag(source_a));
    }
    for record in &group_b[j..] {
        merged.push(record.clone().tag(source_b));
    }
}

/// Whether `records` satisfies the merge ordering precondition:
/// non-decreasing by `(position, variant id)`.
pub fn is_merge_ordered<R: Unify>(records: &[R]) -> bool {
    records.windows(2).all(|pair| {
        (pair[0].position(), pair[0].variant_id())
            <= (pair[1].position(), pair[1].variant_id())
    })
}
