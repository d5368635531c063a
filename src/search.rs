//! Search engines over the move graph: plain BFS to the fixed goal,
//! bidirectional BFS between two explicit states, and A* to the fixed goal.
//!
//! BFS and A* share the arena-backed node pool and the canonical visited
//! index; both are built fresh per call and dropped on return. All engines
//! report an unreachable goal as `None`, never as an error.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use rustc_hash::FxHashMap;

use crate::board::BoardState;
use crate::moves::successors;
use crate::trie::{VisitedIndex, VACANT};

/// Handle of a root node's missing parent.
const NO_PARENT: u32 = u32::MAX;

/// One discovered state: where it is, how it was reached, how deep it is.
struct Node {
    state: BoardState,
    parent: u32,
    depth: u32,
}

/// Append-only pool of search nodes, addressed by `u32` handles.
///
/// Parent links are handles into the same pool, so path reconstruction is
/// a plain index walk with no pointer ownership to manage.
struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    fn new() -> Self {
        NodeArena { nodes: Vec::new() }
    }

    fn push(&mut self, state: BoardState, parent: u32) -> u32 {
        let depth = if parent == NO_PARENT { 0 } else { self.nodes[parent as usize].depth + 1 };
        let handle = self.nodes.len() as u32;
        self.nodes.push(Node { state, parent, depth });
        handle
    }

    #[inline]
    fn state(&self, handle: u32) -> BoardState {
        self.nodes[handle as usize].state
    }

    #[inline]
    fn depth(&self, handle: u32) -> u32 {
        self.nodes[handle as usize].depth
    }

    /// The states from the root down to `handle`, in move order.
    fn path_from_root(&self, handle: u32) -> Vec<BoardState> {
        let mut path = Vec::with_capacity(self.depth(handle) as usize + 1);
        let mut cursor = handle;
        loop {
            let node = &self.nodes[cursor as usize];
            path.push(node.state);
            if node.parent == NO_PARENT {
                break;
            }
            cursor = node.parent;
        }
        path.reverse();
        path
    }
}

/// Result of one BFS or A* run.
pub struct SearchOutcome {
    /// Start-to-goal state sequence, or `None` when the goal is unreachable.
    pub path: Option<Vec<BoardState>>,
    /// Number of states expanded before the search finished.
    pub nodes_explored: usize,
}

/// Breadth-first search from `start` to the fixed goal.
///
/// Explores by non-decreasing depth, deduplicating on canonical form at
/// discovery time, so the first goal found is at minimal move count.
pub fn breadth_first(start: BoardState) -> SearchOutcome {
    if start.is_goal() {
        return SearchOutcome { path: Some(vec![start]), nodes_explored: 0 };
    }
    let mut arena = NodeArena::new();
    let mut visited = VisitedIndex::new();
    let mut frontier = VecDeque::new();

    let root = arena.push(start, NO_PARENT);
    visited.insert(start, root);
    frontier.push_back(root);

    let mut explored = 0usize;
    while let Some(handle) = frontier.pop_front() {
        explored += 1;
        let state = arena.state(handle);
        for succ in successors(state) {
            let slot = visited.entry(succ);
            if *slot != VACANT {
                continue;
            }
            let node = arena.push(succ, handle);
            *slot = node;
            if succ.is_goal() {
                return SearchOutcome {
                    path: Some(arena.path_from_root(node)),
                    nodes_explored: explored,
                };
            }
            frontier.push_back(node);
        }
    }
    SearchOutcome { path: None, nodes_explored: explored }
}

/// Lower bound on remaining moves: Manhattan distance from the 2x2 piece's
/// top-left cell to the goal position (3, 1).
///
/// The big piece itself must make at least that many one-cell moves, so the
/// bound is admissible; one move changes it by at most one, so it is also
/// consistent and A* expansions carry optimal depths.
fn remaining_moves_bound(state: BoardState) -> u32 {
    // a layout without the 2x2 piece can never win; zero keeps the bound
    // admissible and the search simply exhausts the component
    state
        .big_piece_anchor()
        .map_or(0, |(r, c)| (r.abs_diff(3) + c.abs_diff(1)) as u32)
}

/// A* search from `start` to the fixed goal.
///
/// Orders expansion by depth plus [`remaining_moves_bound`], breaking ties
/// by insertion sequence for determinism. Returns paths of exactly the
/// length plain BFS would return; only the expansion order differs. The
/// goal test runs at expansion, as priority search requires.
pub fn best_first(start: BoardState) -> SearchOutcome {
    let mut arena = NodeArena::new();
    let mut visited = VisitedIndex::new();
    // min-heap of (depth + bound, insertion sequence, node handle)
    let mut open: BinaryHeap<Reverse<(u32, u64, u32)>> = BinaryHeap::new();

    let root = arena.push(start, NO_PARENT);
    visited.insert(start, root);
    let mut sequence = 0u64;
    open.push(Reverse((remaining_moves_bound(start), sequence, root)));

    let mut explored = 0usize;
    while let Some(Reverse((_, _, handle))) = open.pop() {
        let state = arena.state(handle);
        if visited.lookup(state) != Some(handle) {
            continue; // superseded by a cheaper route to the same state
        }
        if state.is_goal() {
            return SearchOutcome {
                path: Some(arena.path_from_root(handle)),
                nodes_explored: explored,
            };
        }
        explored += 1;
        let depth = arena.depth(handle) + 1;
        for succ in successors(state) {
            let slot = visited.entry(succ);
            let known = *slot;
            if known != VACANT && arena.depth(known) <= depth {
                continue;
            }
            // unvisited, or reached strictly cheaper than before
            let node = arena.push(succ, handle);
            *slot = node;
            sequence += 1;
            open.push(Reverse((depth + remaining_moves_bound(succ), sequence, node)));
        }
    }
    SearchOutcome { path: None, nodes_explored: explored }
}

/// Expands one full frontier level, returning a state already visited from
/// the other side if the frontiers meet.
///
/// The intersection test runs on dequeue, before generating successors, so
/// a meeting state found mid-level cannot be bypassed by a longer route.
fn expand_level(
    frontier: &mut VecDeque<BoardState>,
    visited: &mut FxHashMap<BoardState, BoardState>,
    other_side: &FxHashMap<BoardState, BoardState>,
) -> Option<BoardState> {
    for _ in 0..frontier.len() {
        let Some(state) = frontier.pop_front() else {
            break;
        };
        if other_side.contains_key(&state) {
            return Some(state);
        }
        for succ in successors(state) {
            if !visited.contains_key(&succ) {
                visited.insert(succ, state);
                frontier.push_back(succ);
            }
        }
    }
    None
}

/// Bidirectional breadth-first search between two explicit states.
///
/// Grows one frontier from each endpoint (moves are reversible, so the
/// successor relation serves both directions), alternating full levels
/// until the frontiers meet or one side empties. No mirror reduction here:
/// an arbitrary target need not be symmetric, so canonical merging would
/// accept mirror-image solutions the caller did not ask for. Predecessor
/// maps are plain hash maps keyed by exact state; roots map to themselves.
pub fn bidirectional(start: BoardState, target: BoardState) -> Option<Vec<BoardState>> {
    if start == target {
        return Some(vec![start]);
    }
    let mut forward_seen = FxHashMap::default();
    let mut backward_seen = FxHashMap::default();
    forward_seen.insert(start, start);
    backward_seen.insert(target, target);
    let mut forward = VecDeque::from([start]);
    let mut backward = VecDeque::from([target]);

    while !forward.is_empty() && !backward.is_empty() {
        if let Some(meeting) = expand_level(&mut forward, &mut forward_seen, &backward_seen) {
            return Some(join_paths(meeting, &forward_seen, &backward_seen));
        }
        if let Some(meeting) = expand_level(&mut backward, &mut backward_seen, &forward_seen) {
            return Some(join_paths(meeting, &forward_seen, &backward_seen));
        }
    }
    None
}

/// Stitches the two predecessor chains through the meeting state into one
/// start-to-target path.
fn join_paths(
    meeting: BoardState,
    forward_seen: &FxHashMap<BoardState, BoardState>,
    backward_seen: &FxHashMap<BoardState, BoardState>,
) -> Vec<BoardState> {
    let mut path = Vec::new();
    let mut cursor = meeting;
    loop {
        path.push(cursor);
        let previous = forward_seen[&cursor];
        if previous == cursor {
            break;
        }
        cursor = previous;
    }
    path.reverse();
    cursor = meeting;
    loop {
        let next = backward_seen[&cursor];
        if next == cursor {
            break;
        }
        path.push(next);
        cursor = next;
    }
    path
}
