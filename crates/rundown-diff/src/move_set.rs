//! Move-set resolution: partition two segment orders of one rundown.
//!
//! Ids only in the previous order are deleted, ids only in the current order
//! are inserted. Common ids are split by a longest common subsequence: the
//! subsequence members kept their relative order (`not_moved`), every other
//! common id had to be repositioned (`moved`).

use std::collections::BTreeSet;

use rundown_types::SegmentId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The partition of two segment orders.
///
/// The four lists are pairwise disjoint and together cover every distinct
/// id of both inputs. `moved`, `not_moved` and `inserted` follow the current
/// order; `deleted` follows the previous order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSet {
    /// Common ids outside the chosen longest common subsequence.
    pub moved: Vec<SegmentId>,
    /// Common ids inside the chosen longest common subsequence.
    pub not_moved: Vec<SegmentId>,
    /// Ids present only in the current order.
    pub inserted: Vec<SegmentId>,
    /// Ids present only in the previous order.
    pub deleted: Vec<SegmentId>,
}

impl MoveSet {
    /// An all-empty move set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing was moved, inserted, or deleted.
    pub fn is_unchanged(&self) -> bool {
        self.moved.is_empty() && self.inserted.is_empty() && self.deleted.is_empty()
    }

    /// Total number of distinct ids covered by the partition.
    pub fn len(&self) -> usize {
        self.moved.len() + self.not_moved.len() + self.inserted.len() + self.deleted.len()
    }

    /// Returns `true` if both inputs were empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `previous` and `current` into moved, not-moved, inserted and
/// deleted ids.
///
/// When an id repeats inside one sequence, its first occurrence decides its
/// position and later occurrences are ignored.
///
/// Among several longest common subsequences the reconstruction prefers the
/// one that keeps the earliest entries of the previous order: previous
/// `[A, B, C, D]` against current `[A, C, B, D, E]` keeps `A, B, D` and
/// reports `C` as moved.
pub fn resolve_moves(previous: &[SegmentId], current: &[SegmentId]) -> MoveSet {
    let previous = first_occurrences(previous);
    let current = first_occurrences(current);

    let previous_set: BTreeSet<&SegmentId> = previous.iter().copied().collect();
    let current_set: BTreeSet<&SegmentId> = current.iter().copied().collect();

    let inserted: Vec<SegmentId> = current
        .iter()
        .filter(|id| !previous_set.contains(*id))
        .map(|id| (*id).clone())
        .collect();
    let deleted: Vec<SegmentId> = previous
        .iter()
        .filter(|id| !current_set.contains(*id))
        .map(|id| (*id).clone())
        .collect();

    let common_previous: Vec<&SegmentId> = previous
        .iter()
        .copied()
        .filter(|id| current_set.contains(id))
        .collect();
    let common_current: Vec<&SegmentId> = current
        .iter()
        .copied()
        .filter(|id| previous_set.contains(id))
        .collect();

    let kept: BTreeSet<&SegmentId> = longest_common_subsequence(&common_previous, &common_current)
        .into_iter()
        .collect();

    let (not_moved, moved): (Vec<&SegmentId>, Vec<&SegmentId>) =
        common_current.iter().copied().partition(|id| kept.contains(id));

    debug!(
        previous = previous.len(),
        current = current.len(),
        moved = moved.len(),
        inserted = inserted.len(),
        deleted = deleted.len(),
        "resolved segment moves"
    );

    MoveSet {
        moved: moved.into_iter().cloned().collect(),
        not_moved: not_moved.into_iter().cloned().collect(),
        inserted,
        deleted,
    }
}

/// Drop repeated ids, keeping each id at its first position.
fn first_occurrences(ids: &[SegmentId]) -> Vec<&SegmentId> {
    let mut seen = BTreeSet::new();
    let unique: Vec<&SegmentId> = ids.iter().filter(|id| seen.insert(*id)).collect();
    if unique.len() != ids.len() {
        debug!(dropped = ids.len() - unique.len(), "ignoring repeated segment ids");
    }
    unique
}

/// Classic O(n·m) LCS over two sequences of distinct ids.
///
/// `table[i][j]` holds the LCS length of `a[i..]` and `b[j..]`. The forward
/// walk takes every match and, on a tie, advances in `b`.
fn longest_common_subsequence<'a>(a: &[&'a SegmentId], b: &[&'a SegmentId]) -> Vec<&'a SegmentId> {
    let n = a.len();
    let m = b.len();
    let width = m + 1;
    let mut table = vec![0usize; (n + 1) * width];

    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i * width + j] = if a[i] == b[j] {
                table[(i + 1) * width + j + 1] + 1
            } else {
                table[(i + 1) * width + j].max(table[i * width + j + 1])
            };
        }
    }

    let mut result = Vec::with_capacity(table[0]);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if a[i] == b[j] {
            result.push(a[i]);
            i += 1;
            j += 1;
        } else if table[i * width + j + 1] >= table[(i + 1) * width + j] {
            j += 1;
        } else {
            i += 1;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(names: &[&str]) -> Vec<SegmentId> {
        names.iter().map(|n| SegmentId::from(*n)).collect()
    }

    #[test]
    fn identical_orders_nothing_moved() {
        let order = ids(&["A", "B", "C"]);
        let set = resolve_moves(&order, &order);
        assert!(set.is_unchanged());
        assert_eq!(set.not_moved, order);
    }

    #[test]
    fn empty_inputs() {
        let set = resolve_moves(&[], &[]);
        assert!(set.is_empty());
        assert!(set.is_unchanged());
    }

    #[test]
    fn swap_prefers_earliest_previous_entries() {
        let set = resolve_moves(&ids(&["A", "B", "C", "D"]), &ids(&["A", "C", "B", "D", "E"]));
        assert_eq!(set.inserted, ids(&["E"]));
        assert!(set.deleted.is_empty());
        assert_eq!(set.moved, ids(&["C"]));
        assert_eq!(set.not_moved, ids(&["A", "B", "D"]));
    }

    #[test]
    fn single_segment_moved_to_end() {
        let set = resolve_moves(&ids(&["A", "B", "C", "D"]), &ids(&["B", "C", "D", "A"]));
        assert_eq!(set.moved, ids(&["A"]));
        assert_eq!(set.not_moved, ids(&["B", "C", "D"]));
    }

    #[test]
    fn reversal_keeps_one() {
        let set = resolve_moves(&ids(&["A", "B", "C"]), &ids(&["C", "B", "A"]));
        assert_eq!(set.not_moved.len(), 1);
        assert_eq!(set.moved.len(), 2);
        assert_eq!(set.not_moved, ids(&["A"]));
    }

    #[test]
    fn inserts_and_deletes_do_not_count_as_moves() {
        let set = resolve_moves(&ids(&["A", "X", "B", "C"]), &ids(&["A", "B", "Y", "C"]));
        assert!(set.moved.is_empty());
        assert_eq!(set.not_moved, ids(&["A", "B", "C"]));
        assert_eq!(set.inserted, ids(&["Y"]));
        assert_eq!(set.deleted, ids(&["X"]));
    }

    #[test]
    fn everything_replaced() {
        let set = resolve_moves(&ids(&["A", "B"]), &ids(&["C", "D"]));
        assert!(set.moved.is_empty());
        assert!(set.not_moved.is_empty());
        assert_eq!(set.inserted, ids(&["C", "D"]));
        assert_eq!(set.deleted, ids(&["A", "B"]));
    }

    #[test]
    fn repeated_id_first_occurrence_wins() {
        // Current repeats A at the end; the first A keeps its place.
        let set = resolve_moves(&ids(&["A", "B", "C"]), &ids(&["A", "B", "C", "A"]));
        assert!(set.is_unchanged());
        assert_eq!(set.not_moved, ids(&["A", "B", "C"]));

        let set = resolve_moves(&ids(&["B", "A", "B"]), &ids(&["A", "B"]));
        assert_eq!(set.len(), 2);
        assert_eq!(set.moved.len(), 1);
    }

    /// Is `sub` an order-preserving subsequence of `seq`?
    fn is_subsequence(sub: &[SegmentId], seq: &[&SegmentId]) -> bool {
        let mut it = seq.iter();
        sub.iter().all(|s| it.any(|x| *x == s))
    }

    /// Brute-force LCS length over all subsets of the common ids.
    fn brute_force_lcs_len(previous: &[&SegmentId], current: &[&SegmentId]) -> usize {
        let common: Vec<SegmentId> = current
            .iter()
            .filter(|id| previous.contains(*id))
            .map(|id| (*id).clone())
            .collect();
        let mut best = 0;
        for mask in 0u32..(1 << common.len()) {
            let subset: Vec<SegmentId> = common
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, id)| id.clone())
                .collect();
            if subset.len() > best && is_subsequence(&subset, previous) {
                best = subset.len();
            }
        }
        best
    }

    fn id_sequence() -> impl Strategy<Value = Vec<SegmentId>> {
        prop::collection::vec(0u8..10, 0..9)
            .prop_map(|v| v.into_iter().map(|n| SegmentId::new(format!("S{n}"))).collect())
    }

    proptest! {
        #[test]
        fn partition_covers_union_disjointly(previous in id_sequence(), current in id_sequence()) {
            let set = resolve_moves(&previous, &current);

            let union: BTreeSet<&SegmentId> = previous.iter().chain(current.iter()).collect();
            let mut covered = BTreeSet::new();
            for id in set.moved.iter().chain(&set.not_moved).chain(&set.inserted).chain(&set.deleted) {
                prop_assert!(covered.insert(id), "{id} classified twice");
            }
            prop_assert_eq!(covered, union);
        }

        #[test]
        fn not_moved_is_a_longest_common_subsequence(previous in id_sequence(), current in id_sequence()) {
            let set = resolve_moves(&previous, &current);
            let prev = first_occurrences(&previous);
            let cur = first_occurrences(&current);

            prop_assert!(is_subsequence(&set.not_moved, &prev));
            prop_assert!(is_subsequence(&set.not_moved, &cur));
            prop_assert_eq!(set.not_moved.len(), brute_force_lcs_len(&prev, &cur));
        }

        #[test]
        fn resolution_is_deterministic(previous in id_sequence(), current in id_sequence()) {
            prop_assert_eq!(resolve_moves(&previous, &current), resolve_moves(&previous, &current));
        }

        #[test]
        fn permutation_never_inserts_or_deletes(order in Just(ids(&["A", "B", "C", "D", "E", "F"])).prop_shuffle()) {
            let previous = ids(&["A", "B", "C", "D", "E", "F"]);
            let set = resolve_moves(&previous, &order);
            prop_assert!(set.inserted.is_empty());
            prop_assert!(set.deleted.is_empty());
            prop_assert_eq!(set.moved.len() + set.not_moved.len(), 6);
        }
    }
}
