//! Per-algorithm pseudocode and event-kind line-highlight tables.
//!
//! Process-wide read-only configuration: built once on first access,
//! never mutated afterwards, safe to share across sessions.

use std::collections::HashMap;

use algovis_trace::{AlgorithmId, EventKind};
use once_cell::sync::Lazy;

/// The pseudocode shown for one algorithm, with the line indices to
/// highlight per event kind.
pub struct Pseudocode {
    /// Source lines, in display order.
    pub lines: &'static [&'static str],
    highlights: &'static [(EventKind, &'static [usize])],
}

impl Pseudocode {
    /// Lines to highlight when an event of this kind replays. Unmapped
    /// kinds highlight nothing.
    pub fn highlight(&self, kind: EventKind) -> &'static [usize] {
        self.highlights
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, lines)| *lines)
            .unwrap_or(&[])
    }
}

static FALLBACK: Pseudocode = Pseudocode {
    lines: &[],
    highlights: &[],
};

/// Look up the pseudocode for an algorithm.
pub fn pseudocode(algorithm: AlgorithmId) -> &'static Pseudocode {
    CATALOG.get(&algorithm).unwrap_or(&FALLBACK)
}

static CATALOG: Lazy<HashMap<AlgorithmId, Pseudocode>> = Lazy::new(|| {
    use EventKind::*;

    let mut table = HashMap::new();
    table.insert(
        AlgorithmId::BubbleSort,
        Pseudocode {
            lines: &[
                "for i in 0 .. n",
                "  for j in 0 .. n-1-i",
                "    if a[j] > a[j+1]",
                "      swap a[j] and a[j+1]",
            ],
            highlights: &[(Compare, &[2]), (Swap, &[3])],
        },
    );
    table.insert(
        AlgorithmId::SelectionSort,
        Pseudocode {
            lines: &[
                "for i in 0 .. n",
                "  min = i",
                "  for j in i+1 .. n",
                "    if a[j] < a[min]: min = j",
                "  swap a[i] and a[min]",
                "  position i is settled",
            ],
            highlights: &[(Compare, &[3]), (Swap, &[4]), (MovePointer, &[5])],
        },
    );
    table.insert(
        AlgorithmId::InsertionSort,
        Pseudocode {
            lines: &[
                "for i in 1 .. n",
                "  key = a[i]",
                "  while j >= 0 and a[j] > key",
                "    shift a[j] one place right",
                "  place key at j+1",
            ],
            highlights: &[(MovePointer, &[1]), (Compare, &[2]), (Shift, &[3]), (Insert, &[4])],
        },
    );
    table.insert(
        AlgorithmId::MergeSort,
        Pseudocode {
            lines: &[
                "split the range in half",
                "sort the left half",
                "sort the right half",
                "compare the front of each half",
                "write the smaller into place",
                "drain whichever half remains",
            ],
            highlights: &[(Compare, &[3]), (Insert, &[4, 5])],
        },
    );
    table.insert(
        AlgorithmId::QuickSort,
        Pseudocode {
            lines: &[
                "choose the last element as pivot",
                "for j in lo .. hi",
                "  if a[j] < pivot",
                "    swap a[i] and a[j]",
                "swap the pivot into place",
                "recurse on both sides",
            ],
            highlights: &[(MovePointer, &[0]), (Compare, &[2]), (Swap, &[3, 4])],
        },
    );
    table.insert(
        AlgorithmId::LinearSearch,
        Pseudocode {
            lines: &[
                "for i in 0 .. n",
                "  if a[i] == target",
                "    return i",
                "return not found",
            ],
            highlights: &[(Compare, &[1]), (Found, &[2])],
        },
    );
    table.insert(
        AlgorithmId::BinarySearch,
        Pseudocode {
            lines: &[
                "left = 0, right = n-1",
                "while left <= right",
                "  mid = (left + right) / 2",
                "  if a[mid] == target: return mid",
                "  if a[mid] < target: left = mid+1",
                "  else: right = mid-1",
            ],
            highlights: &[(Compare, &[3]), (MovePointer, &[4, 5]), (Found, &[3])],
        },
    );
    table.insert(
        AlgorithmId::GraphBfs,
        Pseudocode {
            lines: &[
                "enqueue the start node",
                "while the queue is not empty",
                "  dequeue u and visit it",
                "  for each neighbor v of u",
                "    if v is unvisited: enqueue v",
            ],
            highlights: &[(Visit, &[2]), (QueueSnapshot, &[4])],
        },
    );
    table.insert(
        AlgorithmId::GraphDfs,
        Pseudocode {
            lines: &[
                "push the start node",
                "while the stack is not empty",
                "  pop u and visit it",
                "  for each neighbor v of u",
                "    if v is undiscovered: push v",
            ],
            highlights: &[(Visit, &[2]), (StackSnapshot, &[4])],
        },
    );
    table.insert(
        AlgorithmId::Dijkstra,
        Pseudocode {
            lines: &[
                "dist[source] = 0, all others infinity",
                "repeat n times",
                "  pick the unvisited u with smallest dist",
                "  visit u",
                "  for each edge (u, v, w)",
                "    if dist[u] + w < dist[v]: relax v",
            ],
            highlights: &[(Visit, &[3]), (Relax, &[5])],
        },
    );
    table.insert(
        AlgorithmId::TopologicalSort,
        Pseudocode {
            lines: &[
                "compute every in-degree",
                "enqueue all zero in-degree nodes",
                "while the queue is not empty",
                "  dequeue u, append it to the order",
                "  decrement each neighbor's in-degree",
                "  enqueue neighbors reaching zero",
            ],
            highlights: &[(Visit, &[3]), (QueueSnapshot, &[5])],
        },
    );
    table.insert(
        AlgorithmId::ReverseList,
        Pseudocode {
            lines: &[
                "prev = null, curr = head",
                "while curr is not null",
                "  next = curr.next",
                "  curr.next = prev",
                "  prev = curr, curr = next",
                "return prev",
            ],
            highlights: &[(Visit, &[1]), (StackSnapshot, &[3]), (MovePointer, &[4])],
        },
    );
    table.insert(
        AlgorithmId::DetectCycle,
        Pseudocode {
            lines: &[
                "slow = head, fast = head",
                "while fast and fast.next",
                "  slow = slow.next",
                "  fast = fast.next.next",
                "  if slow == fast: cycle found",
            ],
            highlights: &[(MovePointer, &[2, 3]), (Found, &[4])],
        },
    );
    table.insert(
        AlgorithmId::FindMiddle,
        Pseudocode {
            lines: &[
                "slow = head, fast = head",
                "while fast and fast.next",
                "  slow = slow.next",
                "  fast = fast.next.next",
                "return slow",
            ],
            highlights: &[(MovePointer, &[2, 3]), (Found, &[4])],
        },
    );
    table.insert(
        AlgorithmId::InorderTraversal,
        Pseudocode {
            lines: &[
                "traverse the left subtree",
                "visit the node",
                "traverse the right subtree",
            ],
            highlights: &[(Visit, &[1])],
        },
    );
    table.insert(
        AlgorithmId::LevelOrder,
        Pseudocode {
            lines: &[
                "enqueue the root",
                "while the queue is not empty",
                "  dequeue a node and visit it",
                "  enqueue its children",
            ],
            highlights: &[(Visit, &[2]), (QueueSnapshot, &[3])],
        },
    );
    table.insert(
        AlgorithmId::Gcd,
        Pseudocode {
            lines: &["while b != 0", "  a, b = b, a mod b", "return a"],
            highlights: &[(MovePointer, &[1]), (Insert, &[2])],
        },
    );
    table.insert(
        AlgorithmId::Lcm,
        Pseudocode {
            lines: &["g = gcd(a, b)", "return a / g * b"],
            highlights: &[(MovePointer, &[0]), (Insert, &[1])],
        },
    );
    table.insert(
        AlgorithmId::FastPower,
        Pseudocode {
            lines: &[
                "result = 1",
                "while exp > 0",
                "  if the low bit is set: fold base into result",
                "  square the base, shift the exponent",
            ],
            highlights: &[(MovePointer, &[3]), (Insert, &[2])],
        },
    );
    table.insert(
        AlgorithmId::PrimeCheck,
        Pseudocode {
            lines: &[
                "for d in 2 ..= sqrt(n)",
                "  if n mod d == 0: composite",
                "n is prime",
            ],
            highlights: &[(Compare, &[1]), (Found, &[2])],
        },
    );
    table.insert(
        AlgorithmId::Sieve,
        Pseudocode {
            lines: &[
                "for p in 2 ..= sqrt(limit)",
                "  if p is unmarked",
                "    mark multiples of p from p*p",
                "unmarked numbers are prime",
            ],
            highlights: &[(MovePointer, &[0]), (Insert, &[2])],
        },
    );
    table.insert(
        AlgorithmId::Binomial,
        Pseudocode {
            lines: &[
                "result = 1",
                "for i in 0 .. r",
                "  result = result * (n-i) / (i+1)",
                "return result",
            ],
            highlights: &[(MovePointer, &[1]), (Insert, &[2])],
        },
    );
    table.insert(
        AlgorithmId::CountSetBits,
        Pseudocode {
            lines: &[
                "while n != 0",
                "  n = n & (n-1)",
                "  count += 1",
            ],
            highlights: &[(Insert, &[1, 2])],
        },
    );
    table.insert(
        AlgorithmId::PowerOfTwo,
        Pseudocode {
            lines: &["return n != 0 and n & (n-1) == 0"],
            highlights: &[(Compare, &[0]), (Found, &[0])],
        },
    );
    table.insert(
        AlgorithmId::XorUnique,
        Pseudocode {
            lines: &[
                "acc = 0",
                "for each value: acc = acc xor value",
                "return acc",
            ],
            highlights: &[(Compare, &[1]), (Found, &[2])],
        },
    );
    table.insert(
        AlgorithmId::Subsets,
        Pseudocode {
            lines: &[
                "for mask in 0 .. 2^n",
                "  include each element whose bit is set",
                "  emit the subset",
            ],
            highlights: &[(MovePointer, &[0]), (Insert, &[1])],
        },
    );
    table
});
