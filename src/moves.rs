//! Successor generation: every layout reachable by sliding one piece one
//! cell in one of the four directions.
//!
//! Input layouts are assumed well-formed (produced by the codec or by an
//! earlier successor step) and are not re-validated. A footprint that does
//! not match one of the four piece geometries is a logic bug upstream and
//! aborts the solve loudly instead of being skipped.

use crate::board::{self, BoardState, BIG, COLS, EMPTY, HORIZONTAL, ROWS, SINGLE, VERTICAL};

/// One sliding direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Expansion order: fixed so successor enumeration is deterministic.
pub const DIRECTIONS: [Direction; 4] =
    [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

impl Direction {
    /// Row/column delta of one step.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction that undoes this one.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The cells of the piece rooted at `(r, c)`, which row-major scanning
/// guarantees is the piece's top-left cell.
fn footprint(grid: &board::Grid, r: usize, c: usize) -> ([(usize, usize); 4], usize) {
    let mut cells = [(r, c); 4];
    let value = grid[r][c];
    let len = match value {
        SINGLE => 1,
        HORIZONTAL => {
            assert!(
                c + 1 < COLS && grid[r][c + 1] == HORIZONTAL,
                "horizontal piece at ({r}, {c}) has no matching right cell"
            );
            cells[1] = (r, c + 1);
            2
        }
        VERTICAL => {
            assert!(
                r + 1 < ROWS && grid[r + 1][c] == VERTICAL,
                "vertical piece at ({r}, {c}) has no matching lower cell"
            );
            cells[1] = (r + 1, c);
            2
        }
        BIG => {
            assert!(
                r + 1 < ROWS
                    && c + 1 < COLS
                    && grid[r][c + 1] == BIG
                    && grid[r + 1][c] == BIG
                    && grid[r + 1][c + 1] == BIG,
                "2x2 piece at ({r}, {c}) is not a full block"
            );
            cells[1] = (r, c + 1);
            cells[2] = (r + 1, c);
            cells[3] = (r + 1, c + 1);
            4
        }
        _ => unreachable!("cell ({r}, {c}) holds unknown piece value {value}"),
    };
    (cells, len)
}

/// Moves the piece covering `cells` one step, returning the new layout or
/// `None` if the move leaves the grid or collides with another piece.
fn slide(
    state: BoardState,
    grid: &board::Grid,
    cells: &[(usize, usize)],
    dir: Direction,
) -> Option<BoardState> {
    let (dr, dc) = dir.delta();
    let mut raw = state.raw();
    let code = board::code_for(grid[cells[0].0][cells[0].1]) as u64;

    // clear the old footprint first so self-overlap reads as free
    for &(r, c) in cells {
        raw &= !(0b111 << ((r * COLS + c) * 3));
    }
    for &(r, c) in cells {
        let (tr, tc) = (r as isize + dr, c as isize + dc);
        if tr < 0 || tr >= ROWS as isize || tc < 0 || tc >= COLS as isize {
            return None;
        }
        let (tr, tc) = (tr as usize, tc as usize);
        let occupied = grid[tr][tc] != EMPTY && !cells.contains(&(tr, tc));
        if occupied {
            return None;
        }
        raw |= code << ((tr * COLS + tc) * 3);
    }
    Some(BoardState::from_raw(raw))
}

/// All layouts one legal move away from `state`.
///
/// Pieces are visited in row-major order of their top-left cell and tried
/// in the fixed [`DIRECTIONS`] order, so output order is deterministic.
pub fn successors(state: BoardState) -> Vec<BoardState> {
    let grid = board::decode(state)
        .expect("successor input must be a codec-produced layout");
    let mut seen = [[false; COLS]; ROWS];
    let mut out = Vec::with_capacity(8);

    for r in 0..ROWS {
        for c in 0..COLS {
            if seen[r][c] || grid[r][c] == EMPTY {
                continue;
            }
            let (cells, len) = footprint(&grid, r, c);
            let cells = &cells[..len];
            for &(fr, fc) in cells {
                seen[fr][fc] = true;
            }
            for dir in DIRECTIONS {
                if let Some(next) = slide(state, &grid, cells, dir) {
                    out.push(next);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{decode, encode, format_grid};
    use crate::layouts::{CLASSIC, NEARLY_SOLVED, SOLVED};

    #[test]
    fn test_classic_has_four_opening_moves() {
        // only the two soldiers beside each gap can move (right/left or down)
        let moves = successors(encode(&CLASSIC).unwrap());
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn test_every_move_is_reversible() {
        for grid in [&CLASSIC, &NEARLY_SOLVED, &SOLVED] {
            let state = encode(grid).unwrap();
            for next in successors(state) {
                assert!(
                    successors(next).contains(&state),
                    "move from\n{}\nto\n{}\nhas no inverse",
                    format_grid(grid),
                    next
                );
            }
        }
    }

    #[test]
    fn test_moves_preserve_piece_census() {
        let state = encode(&CLASSIC).unwrap();
        let census = |g: &crate::board::Grid| {
            let mut counts = [0usize; 5];
            for &v in g.iter().flatten() {
                counts[v as usize] += 1;
            }
            counts
        };
        let expected = census(&CLASSIC);
        for next in successors(state) {
            assert_eq!(census(&decode(next).unwrap()), expected);
        }
    }

    #[test]
    fn test_big_piece_slides_into_the_gap() {
        let state = encode(&NEARLY_SOLVED).unwrap();
        let solved = encode(&SOLVED).unwrap();
        assert!(successors(state).contains(&solved));
    }

    #[test]
    fn test_successor_order_is_deterministic() {
        let state = encode(&CLASSIC).unwrap();
        assert_eq!(successors(state), successors(state));
    }

    #[test]
    fn test_direction_opposites() {
        for dir in DIRECTIONS {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dr, dc) = dir.delta();
            let (or, oc) = dir.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }
}
