//! Well-known board layouts.
//!
//! Grid values: 0 empty, 1 single, 2 horizontal, 3 vertical, 4 big.

use crate::board::Grid;

/// The classic "横刀立马" opening: the 2x2 general at top center, four
/// vertical guards along the sides, the horizontal piece across the middle
/// and four soldiers below. Minimal solution is 116 single-cell moves.
pub const CLASSIC: Grid = [
    [3, 4, 4, 3],
    [3, 4, 4, 3],
    [3, 2, 2, 3],
    [3, 1, 1, 3],
    [1, 0, 0, 1],
];

/// An unsolvable layout: the 2x2 piece is boxed into the top-right corner
/// and its reachable component never places it on the goal cells.
pub const BOXED: Grid = [
    [0, 2, 2, 1],
    [2, 2, 4, 4],
    [1, 1, 4, 4],
    [1, 0, 1, 1],
    [1, 1, 1, 1],
];

/// One move short of winning: the 2x2 piece one row above the goal cells.
pub const NEARLY_SOLVED: Grid = [
    [1, 1, 1, 1],
    [1, 1, 1, 1],
    [1, 4, 4, 1],
    [1, 4, 4, 1],
    [1, 0, 0, 1],
];

/// A winning layout: the 2x2 piece on rows 3-4, columns 1-2.
pub const SOLVED: Grid = [
    [1, 1, 1, 1],
    [1, 1, 1, 1],
    [1, 0, 0, 1],
    [1, 4, 4, 1],
    [1, 4, 4, 1],
];

/// All named layouts, for the CLI.
pub const NAMED: [(&str, &Grid); 4] = [
    ("classic", &CLASSIC),
    ("boxed", &BOXED),
    ("nearly-solved", &NEARLY_SOLVED),
    ("solved", &SOLVED),
];

/// Looks up a layout by its CLI name.
pub fn by_name(name: &str) -> Option<&'static Grid> {
    NAMED.iter().find(|(n, _)| *n == name).map(|&(_, grid)| grid)
}
