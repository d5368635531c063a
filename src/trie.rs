//! Visited-set index: a fixed-depth prefix tree over canonical layouts.
//!
//! Keys are the 20 per-cell codes (values 0..=4) of a layout's canonical
//! form, walked one tree level per cell. The tree is arena-backed: nodes
//! are `[u32; 5]` child arrays in one `Vec`, so deep BFS runs store tens of
//! millions of entries without per-node allocation or ownership cycles.
//! The final level's slots hold the caller's node handles directly.

use crate::board::{BoardState, CELLS};

/// Marker for an empty child edge or an unclaimed terminal slot.
pub const VACANT: u32 = u32::MAX;

/// Branching factor: one child per defined cell code.
const BRANCH: usize = 5;

/// Deduplicating index from canonical layouts to search-node handles.
pub struct VisitedIndex {
    nodes: Vec<[u32; BRANCH]>,
}

impl VisitedIndex {
    /// Creates an index holding only the root node.
    pub fn new() -> Self {
        VisitedIndex { nodes: vec![[VACANT; BRANCH]] }
    }

    /// The terminal slot for `state`'s canonical form, creating the path.
    ///
    /// A returned slot equal to [`VACANT`] means the state is unvisited;
    /// writing a handle into it marks the state visited.
    pub fn entry(&mut self, state: BoardState) -> &mut u32 {
        let key = state.canonical();
        let mut node = 0usize;
        for cell in 0..CELLS - 1 {
            let code = key.code_at(cell) as usize;
            let next = self.nodes[node][code];
            let next = if next == VACANT {
                let created = self.nodes.len() as u32;
                self.nodes.push([VACANT; BRANCH]);
                self.nodes[node][code] = created;
                created
            } else {
                next
            };
            node = next as usize;
        }
        let last = key.code_at(CELLS - 1) as usize;
        &mut self.nodes[node][last]
    }

    /// Stores `handle` for the state's canonical form unless one is already
    /// stored. Returns whether this call claimed the state (first write
    /// wins; a `false` return is what prevents revisiting).
    pub fn insert(&mut self, state: BoardState, handle: u32) -> bool {
        let slot = self.entry(state);
        if *slot == VACANT {
            *slot = handle;
            true
        } else {
            false
        }
    }

    /// The handle stored for the state's canonical form, if any. Read-only:
    /// never extends the tree.
    pub fn lookup(&self, state: BoardState) -> Option<u32> {
        let key = state.canonical();
        let mut node = 0usize;
        for cell in 0..CELLS - 1 {
            let next = self.nodes[node][key.code_at(cell) as usize];
            if next == VACANT {
                return None;
            }
            node = next as usize;
        }
        match self.nodes[node][key.code_at(CELLS - 1) as usize] {
            VACANT => None,
            handle => Some(handle),
        }
    }

    /// Number of tree nodes currently allocated.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for VisitedIndex {
    fn default() -> Self {
        Self::new()
    }
}
