//! Instrumented linear and binary search.

use crate::events::{Cursor, TraceEvent, Traced};

/// Linear scan for `target`. Compares each index in order against the
/// target, emits `Found` and stops at the first match; an exhausted scan
/// returns `None` with no `Found` event.
pub fn linear_search(values: &[i64], target: i64) -> Traced<Option<usize>> {
    let mut trace = Vec::new();

    for (i, &value) in values.iter().enumerate() {
        trace.push(TraceEvent::Compare { i, j: None });
        if value == target {
            trace.push(TraceEvent::Found {
                index: Some(i),
                node: None,
            });
            return Traced::new(Some(i), trace);
        }
    }

    Traced::new(None, trace)
}

/// Binary search over a sorted slice. Compares at the midpoint; on a
/// mismatch the bound that moved is reported with a pointer move. A
/// vacated upper bound (`right` below zero) is reported as `None`.
pub fn binary_search(values: &[i64], target: i64) -> Traced<Option<usize>> {
    let mut trace = Vec::new();

    let mut lo: i64 = 0;
    let mut hi: i64 = values.len() as i64 - 1;
    while lo <= hi {
        let mid = ((lo + hi) / 2) as usize;
        trace.push(TraceEvent::Compare { i: mid, j: None });
        if values[mid] == target {
            trace.push(TraceEvent::Found {
                index: Some(mid),
                node: None,
            });
            return Traced::new(Some(mid), trace);
        } else if values[mid] < target {
            lo = mid as i64 + 1;
            trace.push(TraceEvent::MovePointer {
                name: Cursor::Left,
                index: Some(lo as usize),
            });
        } else {
            hi = mid as i64 - 1;
            trace.push(TraceEvent::MovePointer {
                name: Cursor::Right,
                index: usize::try_from(hi).ok(),
            });
        }
    }

    Traced::new(None, trace)
}
