//! Singly linked list arena and the pointer-chasing algorithms over it.
//!
//! Nodes live in an index-linked slot table rather than behind owned
//! pointers, so a cyclic fixture is representable and link rewrites on a
//! private clone can never corrupt a structure still referenced elsewhere.

use serde::{Deserialize, Serialize};

use crate::events::{Cursor, NodeId, TraceEvent, Traced};

/// One list slot: a value and the id of the next slot, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSlot {
    pub value: i64,
    pub next: Option<NodeId>,
}

/// An arena-backed singly linked list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListArena {
    slots: Vec<ListSlot>,
    head: Option<NodeId>,
}

impl ListArena {
    /// Build a forward-only list from values, linked in slot order.
    pub fn from_values(values: &[i64]) -> Self {
        let slots = values
            .iter()
            .enumerate()
            .map(|(i, &value)| ListSlot {
                value,
                next: if i + 1 < values.len() {
                    Some(NodeId(i + 1))
                } else {
                    None
                },
            })
            .collect();
        Self {
            slots,
            head: if values.is_empty() {
                None
            } else {
                Some(NodeId(0))
            },
        }
    }

    /// Build a list whose tail links back to the slot at `entry`,
    /// producing the intentionally cyclic fixture for cycle detection.
    pub fn cyclic(values: &[i64], entry: usize) -> Self {
        let mut list = Self::from_values(values);
        if let Some(last) = list.slots.len().checked_sub(1) {
            if entry < list.slots.len() {
                list.slots[last].next = Some(NodeId(entry));
            }
        }
        list
    }

    /// Head of the list.
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Number of slots in the arena.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the arena holds no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Value stored at a slot.
    pub fn value(&self, id: NodeId) -> Option<i64> {
        self.slots.get(id.0).map(|slot| slot.value)
    }

    /// Successor of a slot.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.0).and_then(|slot| slot.next)
    }

    fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            slot.next = next;
        }
    }

    fn set_head(&mut self, head: Option<NodeId>) {
        self.head = head;
    }
}

/// Reverse a list iteratively, returning the new head.
///
/// Operates on a private clone; the link rewrites never touch the
/// caller's arena. Pointer moves are emitted for `curr` and `prev` both
/// before and after each link rewrite, with a stack snapshot capturing
/// the local `[prev, curr]` pair at the rewrite itself.
pub fn reverse_list(list: &ListArena) -> Traced<Option<NodeId>> {
    let mut list = list.clone();
    let mut trace = Vec::new();

    let mut prev: Option<NodeId> = None;
    let mut curr = list.head();
    while let Some(c) = curr {
        trace.push(TraceEvent::MovePointer {
            name: Cursor::Curr,
            index: Some(c.0),
        });
        trace.push(TraceEvent::MovePointer {
            name: Cursor::Prev,
            index: prev.map(|p| p.0),
        });
        trace.push(TraceEvent::Visit { node: c });

        let next = list.next(c);
        list.set_next(c, prev);
        trace.push(TraceEvent::StackSnapshot {
            state: prev.into_iter().chain([c]).collect(),
        });

        prev = Some(c);
        curr = next;
        trace.push(TraceEvent::MovePointer {
            name: Cursor::Curr,
            index: curr.map(|n| n.0),
        });
        trace.push(TraceEvent::MovePointer {
            name: Cursor::Prev,
            index: prev.map(|n| n.0),
        });
    }
    list.set_head(prev);

    Traced::new(prev, trace)
}

/// Floyd cycle detection: slow advances one slot, fast two, per
/// iteration. Emits both pointer moves every iteration and `Found` when
/// the pointers meet.
pub fn detect_cycle(list: &ListArena) -> Traced<bool> {
    let mut trace = Vec::new();

    let mut slow = list.head();
    let mut fast = list.head();
    while let (Some(s), Some(f)) = (slow, fast) {
        let Some(hop) = list.next(f) else { break };
        slow = list.next(s);
        fast = list.next(hop);
        trace.push(TraceEvent::MovePointer {
            name: Cursor::Slow,
            index: slow.map(|n| n.0),
        });
        trace.push(TraceEvent::MovePointer {
            name: Cursor::Fast,
            index: fast.map(|n| n.0),
        });
        if slow.is_some() && slow == fast {
            trace.push(TraceEvent::Found {
                index: None,
                node: slow,
            });
            return Traced::new(true, trace);
        }
    }

    Traced::new(false, trace)
}

/// Find the middle node with the fast/slow pointer pair. Terminates when
/// fast or its successor falls off the list; the resulting slow node is
/// reported via `Found`.
pub fn find_middle(list: &ListArena) -> Traced<Option<NodeId>> {
    let mut trace = Vec::new();

    let mut slow = list.head();
    let mut fast = list.head();
    while let (Some(s), Some(f)) = (slow, fast) {
        let Some(hop) = list.next(f) else { break };
        trace.push(TraceEvent::MovePointer {
            name: Cursor::Slow,
            index: Some(s.0),
        });
        trace.push(TraceEvent::MovePointer {
            name: Cursor::Fast,
            index: Some(f.0),
        });
        slow = list.next(s);
        fast = list.next(hop);
    }
    trace.push(TraceEvent::Found {
        index: None,
        node: slow,
    });

    Traced::new(slow, trace)
}
