//! Best-first search over an arena of nodes keyed by position. Successors, heuristic and goal test
//! are supplied as closures so the same loop serves every [GridSolver](crate::solver::GridSolver).
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// Parent index of the start node.
const NO_PARENT: usize = usize::MAX;

/// Bookkeeping for one position. The position is the arena key, so two search nodes are the same
/// node exactly when their positions are equal; costs never take part in that identity.
#[derive(Clone, Copy, Debug)]
struct SearchNode<C> {
    parent: usize,
    g: C,
    h: C,
    closed: bool,
}

/// Frontier entry referring to an arena slot.
struct FrontierEntry<C> {
    f: C,
    g: C,
    seq: usize,
    index: usize,
}

impl<C: PartialEq> Eq for FrontierEntry<C> {}

impl<C: PartialEq> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.f.eq(&other.f) && self.seq == other.seq
    }
}

impl<C: Ord> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest f first; among equal f the entry pushed first wins.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// What to do with a freshly generated successor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Admission {
    /// Position not seen before.
    Insert,
    /// On the frontier with a worse cost; take over the slot at this index.
    Replace(usize),
    /// Already expanded, or on the frontier with a cost at least as good.
    Discard,
}

fn admission<N, C>(arena: &FxIndexMap<N, SearchNode<C>>, position: &N, g: C) -> Admission
where
    N: Eq + Hash,
    C: Ord,
{
    match arena.get_full(position) {
        None => Admission::Insert,
        Some((_, _, node)) if node.closed || node.g <= g => Admission::Discard,
        Some((index, _, _)) => Admission::Replace(index),
    }
}

/// Result of a single search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome<N, C> {
    Found {
        path: Vec<N>,
        cost: C,
        expanded: usize,
    },
    /// The frontier ran empty before the goal was expanded.
    Exhausted { expanded: usize },
    /// `should_stop` asked for the search to end.
    Stopped { expanded: usize },
}

fn reverse_path<N: Clone, C>(arena: &FxIndexMap<N, SearchNode<C>>, goal: usize) -> Vec<N> {
    let mut path: Vec<N> = std::iter::successors(arena.get_index(goal), |(_, node)| {
        arena.get_index(node.parent)
    })
    .map(|(position, _)| position.clone())
    .collect();
    path.reverse();
    path
}

/// Runs A* from `start` until `success` holds for an expanded node.
///
/// The start node has `g = h = f = 0`. Each expanded node is closed for good: it is never
/// re-opened, even when the heuristic is inconsistent. `should_stop` is called with the number of
/// nodes expanded so far before every expansion.
pub fn astar<N, C, FN, IN, FH, FS, FX>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    mut should_stop: FX,
) -> SearchOutcome<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
    FX: FnMut(usize) -> bool,
{
    let mut frontier = BinaryHeap::new();
    let mut arena: FxIndexMap<N, SearchNode<C>> = FxIndexMap::default();
    arena.insert(
        start.clone(),
        SearchNode {
            parent: NO_PARENT,
            g: Zero::zero(),
            h: Zero::zero(),
            closed: false,
        },
    );
    frontier.push(FrontierEntry {
        f: Zero::zero(),
        g: Zero::zero(),
        seq: 0,
        index: 0,
    });
    let mut seq = 1;
    let mut expanded = 0;

    while let Some(FrontierEntry { g, index, .. }) = frontier.pop() {
        let current = {
            let Some((position, node)) = arena.get_index_mut(index) else {
                continue;
            };
            // A slot may have been pushed several times if a cheaper way to it was found; only
            // the entry carrying the current cost is live.
            if node.closed || g > node.g {
                continue;
            }
            if should_stop(expanded) {
                return SearchOutcome::Stopped { expanded };
            }
            node.closed = true;
            expanded += 1;
            position.clone()
        };
        if success(&current) {
            return SearchOutcome::Found {
                path: reverse_path(&arena, index),
                cost: g,
                expanded,
            };
        }
        for (successor, move_cost) in successors(&current) {
            let new_cost = g + move_cost;
            let (n, h) = match admission(&arena, &successor, new_cost) {
                Admission::Discard => continue,
                Admission::Insert => {
                    let h = heuristic(&successor);
                    let (n, _) = arena.insert_full(
                        successor,
                        SearchNode {
                            parent: index,
                            g: new_cost,
                            h,
                            closed: false,
                        },
                    );
                    (n, h)
                }
                Admission::Replace(n) => {
                    let node = &mut arena[n];
                    node.parent = index;
                    node.g = new_cost;
                    (n, node.h)
                }
            };
            frontier.push(FrontierEntry {
                f: new_cost + h,
                g: new_cost,
                seq,
                index: n,
            });
            seq += 1;
        }
    }
    SearchOutcome::Exhausted { expanded }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(
        edges: &[(u32, u32, i64)],
        start: u32,
        goal: u32,
        heuristic: impl Fn(&u32) -> i64,
    ) -> SearchOutcome<u32, i64> {
        astar(
            &start,
            |n| {
                edges
                    .iter()
                    .filter(|(from, _, _)| from == n)
                    .map(|&(_, to, c)| (to, c))
                    .collect::<Vec<_>>()
            },
            heuristic,
            |n| *n == goal,
            |_| false,
        )
    }

    #[test]
    fn start_is_goal() {
        let outcome = search(&[], 7, 7, |_| 0);
        assert_eq!(
            outcome,
            SearchOutcome::Found {
                path: vec![7],
                cost: 0,
                expanded: 1
            }
        );
    }

    /// A cheaper route found later takes over the frontier slot and the parent link.
    #[test]
    fn cheaper_route_replaces_frontier_entry() {
        let edges = [(0, 1, 5), (0, 2, 1), (2, 1, 1), (1, 3, 1)];
        match search(&edges, 0, 3, |_| 0) {
            SearchOutcome::Found { path, cost, .. } => {
                assert_eq!(path, vec![0, 2, 1, 3]);
                assert_eq!(cost, 3);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    /// Equal-priority entries are expanded in the order they were generated.
    #[test]
    fn ties_follow_insertion_order() {
        let first = [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)];
        let swapped = [(0, 2, 1), (0, 1, 1), (1, 3, 1), (2, 3, 1)];
        let path = |edges: &[(u32, u32, i64)]| match search(edges, 0, 3, |_| 0) {
            SearchOutcome::Found { path, .. } => path,
            other => panic!("unexpected outcome {other:?}"),
        };
        assert_eq!(path(&first), vec![0, 1, 3]);
        assert_eq!(path(&swapped), vec![0, 2, 3]);
    }

    /// Closed nodes stay closed even if the heuristic later exposes a cheaper way to them.
    #[test]
    fn closed_nodes_are_not_reopened() {
        // The heuristic delays 3, so 2 is closed with g = 3 before the cheaper edge 3 -> 2 is seen.
        let edges = [(0, 1, 1), (1, 2, 2), (0, 3, 1), (3, 2, 1), (2, 4, 1)];
        let h = |n: &u32| if *n == 3 { 3 } else { 0 };
        match search(&edges, 0, 4, h) {
            SearchOutcome::Found { path, cost, .. } => {
                assert_eq!(path, vec![0, 1, 2, 4]);
                assert_eq!(cost, 4);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn exhausts_without_route() {
        let edges = [(0, 1, 1), (1, 0, 1)];
        assert_eq!(
            search(&edges, 0, 2, |_| 0),
            SearchOutcome::Exhausted { expanded: 2 }
        );
    }

    #[test]
    fn stops_on_request() {
        let edges = [(0, 1, 1), (1, 2, 1), (2, 3, 1)];
        let outcome = astar(
            &0u32,
            |n| {
                edges
                    .iter()
                    .filter(|(from, _, _)| from == n)
                    .map(|&(_, to, c)| (to, c))
                    .collect::<Vec<(u32, i64)>>()
            },
            |_| 0,
            |n| *n == 3,
            |expanded| expanded >= 2,
        );
        assert_eq!(outcome, SearchOutcome::Stopped { expanded: 2 });
    }
}
