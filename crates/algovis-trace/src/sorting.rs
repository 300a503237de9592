//! Instrumented textbook sorts.
//!
//! Every function clones its input and traces each comparison, exchange
//! and write in the order it happens. The comparison grids are the full
//! textbook shapes on purpose (no sorted-tail early exit in bubble sort,
//! no heap in sight): the traces must match the pseudocode learners see.

use crate::events::{Cursor, TraceEvent, Traced};

/// Bubble sort: full nested pass/compare loop. `Compare` precedes every
/// comparison; `Swap` fires iff the comparison triggered an exchange.
pub fn bubble_sort(values: &[i64]) -> Traced<Vec<i64>> {
    let mut a = values.to_vec();
    let mut trace = Vec::new();

    let n = a.len();
    for i in 0..n {
        for j in 0..n.saturating_sub(1 + i) {
            trace.push(TraceEvent::Compare { i: j, j: Some(j + 1) });
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                trace.push(TraceEvent::Swap { i: j, j: j + 1 });
            }
        }
    }

    Traced::new(a, trace)
}

/// Selection sort: compare against every candidate minimum, at most one
/// swap per outer pass, then a `sorted` pointer move marking the
/// position as settled.
pub fn selection_sort(values: &[i64]) -> Traced<Vec<i64>> {
    let mut a = values.to_vec();
    let mut trace = Vec::new();

    let n = a.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            trace.push(TraceEvent::Compare {
                i: min_idx,
                j: Some(j),
            });
            if a[j] < a[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            a.swap(i, min_idx);
            trace.push(TraceEvent::Swap { i, j: min_idx });
        }
        trace.push(TraceEvent::MovePointer {
            name: Cursor::Sorted,
            index: Some(i),
        });
    }

    Traced::new(a, trace)
}

/// Insertion sort: a `key` pointer per outer iteration, one `Shift` per
/// backward displacement, one `Insert` placing the key.
pub fn insertion_sort(values: &[i64]) -> Traced<Vec<i64>> {
    let mut a = values.to_vec();
    let mut trace = Vec::new();

    for i in 1..a.len() {
        let key = a[i];
        trace.push(TraceEvent::MovePointer {
            name: Cursor::Key,
            index: Some(i),
        });
        let mut j = i;
        while j > 0 && a[j - 1] > key {
            trace.push(TraceEvent::Compare {
                i: j - 1,
                j: Some(i),
            });
            a[j] = a[j - 1];
            trace.push(TraceEvent::Shift { from: j - 1, to: j });
            j -= 1;
        }
        a[j] = key;
        trace.push(TraceEvent::Insert { index: j, value: key });
    }

    Traced::new(a, trace)
}

/// Merge sort: comparisons fire during merging only, and every write to
/// the merged output (leftover drains included) is an `Insert`.
pub fn merge_sort(values: &[i64]) -> Traced<Vec<i64>> {
    let mut a = values.to_vec();
    let mut trace = Vec::new();

    if !a.is_empty() {
        let end = a.len() - 1;
        merge_sort_range(&mut a, 0, end, &mut trace);
    }

    Traced::new(a, trace)
}

fn merge_sort_range(a: &mut [i64], lo: usize, hi: usize, trace: &mut Vec<TraceEvent>) {
    if lo >= hi {
        return;
    }
    let mid = (lo + hi) / 2;
    merge_sort_range(a, lo, mid, trace);
    merge_sort_range(a, mid + 1, hi, trace);
    merge(a, lo, mid, hi, trace);
}

fn merge(a: &mut [i64], lo: usize, mid: usize, hi: usize, trace: &mut Vec<TraceEvent>) {
    let left = a[lo..=mid].to_vec();
    let right = a[mid + 1..=hi].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = lo;
    while i < left.len() && j < right.len() {
        trace.push(TraceEvent::Compare {
            i: lo + i,
            j: Some(mid + 1 + j),
        });
        if left[i] <= right[j] {
            a[k] = left[i];
            trace.push(TraceEvent::Insert {
                index: k,
                value: left[i],
            });
            i += 1;
        } else {
            a[k] = right[j];
            trace.push(TraceEvent::Insert {
                index: k,
                value: right[j],
            });
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        a[k] = left[i];
        trace.push(TraceEvent::Insert {
            index: k,
            value: left[i],
        });
        i += 1;
        k += 1;
    }
    while j < right.len() {
        a[k] = right[j];
        trace.push(TraceEvent::Insert {
            index: k,
            value: right[j],
        });
        j += 1;
        k += 1;
    }
}

/// Quick sort with Lomuto partitioning, pivot = last element. A `pivot`
/// pointer move opens each partition; every element is compared against
/// the pivot and every exchange (final pivot placement included) is a
/// `Swap`.
pub fn quick_sort(values: &[i64]) -> Traced<Vec<i64>> {
    let mut a = values.to_vec();
    let mut trace = Vec::new();

    if !a.is_empty() {
        let end = a.len() - 1;
        quick_sort_range(&mut a, 0, end, &mut trace);
    }

    Traced::new(a, trace)
}

fn quick_sort_range(a: &mut [i64], lo: usize, hi: usize, trace: &mut Vec<TraceEvent>) {
    if lo >= hi {
        return;
    }
    let p = partition(a, lo, hi, trace);
    if p > lo {
        quick_sort_range(a, lo, p - 1, trace);
    }
    quick_sort_range(a, p + 1, hi, trace);
}

fn partition(a: &mut [i64], lo: usize, hi: usize, trace: &mut Vec<TraceEvent>) -> usize {
    trace.push(TraceEvent::MovePointer {
        name: Cursor::Pivot,
        index: Some(hi),
    });
    let pivot = a[hi];
    let mut i = lo;
    for j in lo..hi {
        trace.push(TraceEvent::Compare { i: j, j: Some(hi) });
        if a[j] < pivot {
            a.swap(i, j);
            trace.push(TraceEvent::Swap { i, j });
            i += 1;
        }
    }
    a.swap(i, hi);
    trace.push(TraceEvent::Swap { i, j: hi });
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];
    const SORTED: [i64; 7] = [11, 12, 22, 25, 34, 64, 90];

    #[test]
    fn bubble_sorts_the_canonical_array() {
        assert_eq!(bubble_sort(&INPUT).result, SORTED);
    }

    #[test]
    fn bubble_opening_events_on_small_input() {
        let run = bubble_sort(&[5, 3, 1]);
        assert_eq!(run.result, vec![1, 3, 5]);
        assert_eq!(
            &run.trace[..4],
            &[
                TraceEvent::Compare { i: 0, j: Some(1) },
                TraceEvent::Swap { i: 0, j: 1 },
                TraceEvent::Compare { i: 1, j: Some(2) },
                TraceEvent::Swap { i: 1, j: 2 },
            ]
        );
    }

    #[test]
    fn bubble_emits_the_full_comparison_grid() {
        // No sorted-tail shortcut: n(n-1)/2 comparisons even when sorted.
        let run = bubble_sort(&[1, 2, 3, 4]);
        let compares = run
            .trace
            .iter()
            .filter(|e| matches!(e, TraceEvent::Compare { .. }))
            .count();
        assert_eq!(compares, 6);
        assert!(!run.trace.iter().any(|e| matches!(e, TraceEvent::Swap { .. })));
    }

    #[test]
    fn selection_sorts_with_at_most_one_swap_per_pass() {
        let run = selection_sort(&INPUT);
        assert_eq!(run.result, SORTED);

        let swaps = run
            .trace
            .iter()
            .filter(|e| matches!(e, TraceEvent::Swap { .. }))
            .count();
        assert!(swaps <= INPUT.len());
    }

    #[test]
    fn selection_marks_each_settled_position() {
        let run = selection_sort(&[3, 1, 2]);
        let settled: Vec<usize> = run
            .trace
            .iter()
            .filter_map(|e| match e {
                TraceEvent::MovePointer {
                    name: Cursor::Sorted,
                    index,
                } => *index,
                _ => None,
            })
            .collect();
        assert_eq!(settled, vec![0, 1, 2]);
    }

    #[test]
    fn insertion_shifts_then_inserts_the_key() {
        let run = insertion_sort(&[3, 1, 2]);
        assert_eq!(run.result, vec![1, 2, 3]);
        assert_eq!(
            run.trace,
            vec![
                TraceEvent::MovePointer {
                    name: Cursor::Key,
                    index: Some(1)
                },
                TraceEvent::Compare { i: 0, j: Some(1) },
                TraceEvent::Shift { from: 0, to: 1 },
                TraceEvent::Insert { index: 0, value: 1 },
                TraceEvent::MovePointer {
                    name: Cursor::Key,
                    index: Some(2)
                },
                TraceEvent::Compare { i: 1, j: Some(2) },
                TraceEvent::Shift { from: 1, to: 2 },
                TraceEvent::Insert { index: 1, value: 2 },
            ]
        );
    }

    #[test]
    fn merge_sorts_and_compares_only_while_merging() {
        let run = merge_sort(&INPUT);
        assert_eq!(run.result, SORTED);
        // A two-element merge needs exactly one comparison.
        let run = merge_sort(&[2, 1]);
        assert_eq!(
            run.trace,
            vec![
                TraceEvent::Compare { i: 0, j: Some(1) },
                TraceEvent::Insert { index: 0, value: 1 },
                TraceEvent::Insert { index: 1, value: 2 },
            ]
        );
    }

    #[test]
    fn merge_drains_leftovers_as_inserts() {
        // merge(1|2) writes twice, merge(1,2|3) writes three times; every
        // write is an insert, drains included.
        let run = merge_sort(&[1, 2, 3]);
        let inserts = run
            .trace
            .iter()
            .filter(|e| matches!(e, TraceEvent::Insert { .. }))
            .count();
        assert_eq!(inserts, 5);
    }

    #[test]
    fn quick_sorts_with_lomuto_partitioning() {
        let run = quick_sort(&INPUT);
        assert_eq!(run.result, SORTED);
        // The first partition opens with the pivot pointer on the last slot.
        assert_eq!(
            run.trace[0],
            TraceEvent::MovePointer {
                name: Cursor::Pivot,
                index: Some(6)
            }
        );
        // Every element of the first window is compared against the pivot.
        let first_pass: Vec<_> = run
            .trace
            .iter()
            .skip(1)
            .take(6)
            .map(|e| e.kind())
            .collect();
        assert!(first_pass.contains(&crate::events::EventKind::Compare));
    }

    #[test]
    fn sorts_handle_degenerate_inputs() {
        assert!(bubble_sort(&[]).trace.is_empty());
        assert!(merge_sort(&[]).trace.is_empty());
        assert!(quick_sort(&[]).trace.is_empty());
        assert!(insertion_sort(&[7]).trace.is_empty());
        assert_eq!(quick_sort(&[7]).result, vec![7]);
        // Selection sort on one element still settles it.
        assert_eq!(
            selection_sort(&[7]).trace,
            vec![TraceEvent::MovePointer {
                name: Cursor::Sorted,
                index: Some(0)
            }]
        );
    }

    #[test]
    fn sorting_is_deterministic() {
        let a = bubble_sort(&INPUT);
        let b = bubble_sort(&INPUT);
        assert_eq!(a.trace, b.trace);
        assert_eq!(a.result, b.result);
    }
}
