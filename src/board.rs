//! Board encoding and state representation for the 5x4 sliding-block puzzle.
//!
//! A board layout is packed into a `u64`: one 3-bit code per cell, 20 cells,
//! least-significant bits first. Cell `(r, c)` lives at bit offset
//! `(r * 4 + c) * 3`. The bit codes and the decoded grid values use different
//! numberings for the two-cell pieces; the lookup tables in this module own
//! that mapping and apply it in both directions.

use std::fmt;

/// Number of rows on the board.
pub const ROWS: usize = 5;
/// Number of columns on the board.
pub const COLS: usize = 4;
/// Total number of cells.
pub const CELLS: usize = ROWS * COLS;

/// Grid value for an empty cell.
pub const EMPTY: u8 = 0;
/// Grid value for a 1x1 piece.
pub const SINGLE: u8 = 1;
/// Grid value for a 1x2 horizontal piece.
pub const HORIZONTAL: u8 = 2;
/// Grid value for a 2x1 vertical piece.
pub const VERTICAL: u8 = 3;
/// Grid value for the 2x2 piece.
pub const BIG: u8 = 4;

/// A decoded board: 5 rows of 4 grid values in `0..=4`.
pub type Grid = [[u8; COLS]; ROWS];

/// Grid value -> 3-bit cell code. Horizontal and vertical swap places.
const GRID_TO_CODE: [u8; 5] = [0b000, 0b001, 0b011, 0b010, 0b100];

/// 3-bit cell code -> grid value. The mapping is its own inverse.
const CODE_TO_GRID: [u8; 5] = [0, 1, 3, 2, 4];

/// Cell code of the 2x2 piece, used by the goal test.
const CODE_BIG: u8 = 0b100;

/// The four cells the 2x2 piece must occupy to win: rows 3-4, columns 1-2.
const GOAL_CELLS: [usize; 4] = [3 * COLS + 1, 3 * COLS + 2, 4 * COLS + 1, 4 * COLS + 2];

/// Errors raised by the codec on malformed input.
///
/// The search engines never raise these: they only consume layouts produced
/// by `encode` or by the successor generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The input grid is not exactly 5 rows of 4 cells.
    InvalidDimensions { rows: usize, row: usize, cols: usize },
    /// A grid cell holds a value outside the five piece types.
    InvalidPieceCode { row: usize, col: usize, value: u8 },
    /// A 3-bit group of an encoded layout is not one of the five codes.
    InvalidEncoding { cell: usize, code: u8 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BoardError::InvalidDimensions { rows, row, cols } => write!(
                f,
                "expected a {ROWS}x{COLS} grid, got {rows} rows with row {row} holding {cols} cells"
            ),
            BoardError::InvalidPieceCode { row, col, value } => {
                write!(f, "cell ({row}, {col}) holds {value}, outside piece values 0..=4")
            }
            BoardError::InvalidEncoding { cell, code } => {
                write!(f, "cell {cell} encodes {code:#05b}, not one of the five cell codes")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// An immutable encoded board layout.
///
/// Equality, hashing and ordering follow the raw encoded value, which makes
/// this the node identity in every search graph. States are only ever
/// produced by [`encode`] and by the successor generator.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardState(u64);

impl BoardState {
    /// Wraps a raw encoded layout. Only the low 60 bits may be used.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        debug_assert_eq!(raw >> (CELLS * 3), 0, "bits above cell 19 must be zero");
        BoardState(raw)
    }

    /// The raw 60-bit encoded value.
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }

    /// The 3-bit code stored at a cell index in `0..20`.
    #[inline]
    pub fn code_at(self, cell: usize) -> u8 {
        ((self.0 >> (cell * 3)) & 0b111) as u8
    }

    /// The horizontal mirror image: each row's four cells in reverse order.
    ///
    /// An involution: `l.mirror().mirror() == l`.
    pub fn mirror(self) -> Self {
        let mut flipped = 0u64;
        for r in 0..ROWS {
            let row = (self.0 >> (r * COLS * 3)) & 0o7777;
            let reversed = ((row & 0o7) << 9)
                | ((row >> 3 & 0o7) << 6)
                | ((row >> 6 & 0o7) << 3)
                | (row >> 9 & 0o7);
            flipped |= reversed << (r * COLS * 3);
        }
        BoardState(flipped)
    }

    /// The canonical representative of this layout and its mirror image.
    ///
    /// Mirror twins collapse to one visited state, which is sound because
    /// both the move rules and the goal are symmetric about the vertical
    /// axis. Idempotent.
    #[inline]
    pub fn canonical(self) -> Self {
        self.min(self.mirror())
    }

    /// Row and column of the 2x2 piece's top-left cell, or `None` for a
    /// layout without one. Scans cells in row-major order.
    pub fn big_piece_anchor(self) -> Option<(usize, usize)> {
        (0..CELLS)
            .find(|&cell| self.code_at(cell) == CODE_BIG)
            .map(|cell| (cell / COLS, cell % COLS))
    }

    /// Whether the 2x2 piece sits on the goal cells (rows 3-4, columns 1-2).
    ///
    /// Checks the four goal cells' codes directly, no full decode.
    #[inline]
    pub fn is_goal(self) -> bool {
        GOAL_CELLS.iter().all(|&cell| self.code_at(cell) == CODE_BIG)
    }
}

impl fmt::Debug for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardState({:#017o})", self.0)
    }
}

impl fmt::Display for BoardState {
    /// Renders the board as five rows of grid digits, `.` for empty cells
    /// and `?` for undefined codes. Lossy on purpose so it can never fail.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..ROWS {
            if r > 0 {
                f.write_str("\n")?;
            }
            for c in 0..COLS {
                let code = self.code_at(r * COLS + c) as usize;
                let ch = match CODE_TO_GRID.get(code) {
                    Some(&EMPTY) => '.',
                    Some(&v) => char::from(b'0' + v),
                    None => '?',
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Encodes a grid of piece values into a board layout.
///
/// Accepts anything row-shaped (`[[u8; 4]; 5]`, `Vec<Vec<u8>>`, ...) so
/// malformed input from outside callers can be rejected at runtime.
pub fn encode<R: AsRef<[u8]>>(rows: &[R]) -> Result<BoardState, BoardError> {
    if rows.len() != ROWS {
        return Err(BoardError::InvalidDimensions {
            rows: rows.len(),
            row: 0,
            cols: rows.first().map_or(0, |r| r.as_ref().len()),
        });
    }
    let mut raw = 0u64;
    for (r, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != COLS {
            return Err(BoardError::InvalidDimensions {
                rows: rows.len(),
                row: r,
                cols: row.len(),
            });
        }
        for (c, &value) in row.iter().enumerate() {
            if value as usize >= GRID_TO_CODE.len() {
                return Err(BoardError::InvalidPieceCode { row: r, col: c, value });
            }
            raw |= (GRID_TO_CODE[value as usize] as u64) << ((r * COLS + c) * 3);
        }
    }
    Ok(BoardState(raw))
}

/// Decodes a board layout back into a grid of piece values.
///
/// Exact inverse of [`encode`]: `decode(encode(g)) == g` for every valid
/// grid, and `encode(decode(l)) == l` for every layout whose 3-bit groups
/// are all defined codes.
pub fn decode(state: BoardState) -> Result<Grid, BoardError> {
    let mut grid = [[0u8; COLS]; ROWS];
    for cell in 0..CELLS {
        let code = state.code_at(cell);
        let Some(&value) = CODE_TO_GRID.get(code as usize) else {
            return Err(BoardError::InvalidEncoding { cell, code });
        };
        grid[cell / COLS][cell % COLS] = value;
    }
    Ok(grid)
}

/// The 3-bit code for a grid piece value. Callers must pass `0..=4`.
#[inline]
pub(crate) fn code_for(value: u8) -> u8 {
    GRID_TO_CODE[value as usize]
}

/// Parses a board from text: five lines of four characters, digits `0`-`4`
/// with `.` accepted for empty. Blank lines and surrounding whitespace are
/// ignored.
pub fn parse_grid(text: &str) -> Result<Vec<Vec<u8>>, BoardError> {
    let mut rows = Vec::with_capacity(ROWS);
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let r = rows.len();
        let mut row = Vec::with_capacity(COLS);
        for (c, ch) in line.chars().enumerate() {
            let value = match ch {
                '.' => EMPTY,
                '0'..='4' => ch as u8 - b'0',
                _ => return Err(BoardError::InvalidPieceCode { row: r, col: c, value: ch as u8 }),
            };
            row.push(value);
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Formats a grid as five lines of digits with `.` for empty cells.
pub fn format_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(CELLS + ROWS);
    for (r, row) in grid.iter().enumerate() {
        if r > 0 {
            out.push('\n');
        }
        for &value in row {
            out.push(if value == EMPTY { '.' } else { char::from(b'0' + value) });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::{BOXED, CLASSIC, NEARLY_SOLVED, SOLVED};

    #[test]
    fn test_roundtrip_known_layouts() {
        for grid in [&CLASSIC, &BOXED, &NEARLY_SOLVED, &SOLVED] {
            let state = encode(grid).unwrap();
            assert_eq!(decode(state).unwrap(), *grid);
        }
    }

    #[test]
    fn test_roundtrip_from_encoded_side() {
        let state = encode(&CLASSIC).unwrap();
        assert_eq!(encode(&decode(state).unwrap()).unwrap(), state);
    }

    #[test]
    fn test_encode_rejects_wrong_row_count() {
        let rows = vec![vec![0u8; 4]; 4];
        assert_eq!(
            encode(&rows),
            Err(BoardError::InvalidDimensions { rows: 4, row: 0, cols: 4 })
        );
    }

    #[test]
    fn test_encode_rejects_ragged_row() {
        let mut rows = vec![vec![0u8; 4]; 5];
        rows[2] = vec![0u8; 3];
        assert_eq!(
            encode(&rows),
            Err(BoardError::InvalidDimensions { rows: 5, row: 2, cols: 3 })
        );
    }

    #[test]
    fn test_encode_rejects_bad_piece_value() {
        let mut grid = CLASSIC;
        grid[1][2] = 5;
        assert_eq!(
            encode(&grid),
            Err(BoardError::InvalidPieceCode { row: 1, col: 2, value: 5 })
        );
    }

    #[test]
    fn test_decode_rejects_undefined_codes() {
        for code in [0b101u64, 0b110, 0b111] {
            let raw = encode(&CLASSIC).unwrap().raw() & !(0b111 << (7 * 3)) | (code << (7 * 3));
            let err = decode(BoardState::from_raw(raw)).unwrap_err();
            assert_eq!(err, BoardError::InvalidEncoding { cell: 7, code: code as u8 });
        }
    }

    #[test]
    fn test_grid_code_mapping_swaps_two_cell_pieces() {
        // horizontal (grid 2) packs as 0b011, vertical (grid 3) as 0b010
        let grid: Grid = [[2, 2, 0, 0], [3, 0, 0, 0], [3, 0, 0, 0], [0; 4], [0; 4]];
        let state = encode(&grid).unwrap();
        assert_eq!(state.code_at(0), 0b011);
        assert_eq!(state.code_at(4), 0b010);
    }

    #[test]
    fn test_mirror_is_an_involution() {
        for grid in [&CLASSIC, &BOXED, &NEARLY_SOLVED] {
            let state = encode(grid).unwrap();
            assert_eq!(state.mirror().mirror(), state);
        }
    }

    #[test]
    fn test_mirror_reverses_each_row() {
        let state = encode(&BOXED).unwrap();
        let mirrored = decode(state.mirror()).unwrap();
        let expected: Grid = {
            let mut g = BOXED;
            for row in &mut g {
                row.reverse();
            }
            g
        };
        assert_eq!(mirrored, expected);
    }

    #[test]
    fn test_canonical_is_idempotent() {
        for grid in [&CLASSIC, &BOXED, &NEARLY_SOLVED] {
            let canon = encode(grid).unwrap().canonical();
            assert_eq!(canon.canonical(), canon);
        }
    }

    #[test]
    fn test_canonical_collapses_mirror_twins() {
        let state = encode(&BOXED).unwrap();
        assert_eq!(state.canonical(), state.mirror().canonical());
    }

    #[test]
    fn test_goal_holds_for_solved_layout() {
        assert!(encode(&SOLVED).unwrap().is_goal());
    }

    #[test]
    fn test_goal_rejects_shifted_big_piece() {
        // the 2x2 one cell up, left and right of the goal cells
        let up = NEARLY_SOLVED;
        let mut left = SOLVED;
        let mut right = SOLVED;
        for r in 3..5 {
            left[r] = [4, 4, 1, 1];
            right[r] = [1, 1, 4, 4];
        }
        for grid in [&up, &left, &right] {
            assert!(!encode(grid).unwrap().is_goal());
        }
    }

    #[test]
    fn test_parse_grid_accepts_dots_and_digits() {
        let rows = parse_grid("3443\n3443\n3223\n3113\n1..1\n").unwrap();
        assert_eq!(encode(&rows).unwrap(), encode(&CLASSIC).unwrap());
    }

    #[test]
    fn test_parse_grid_rejects_unknown_characters() {
        assert_eq!(
            parse_grid("34x3"),
            Err(BoardError::InvalidPieceCode { row: 0, col: 2, value: b'x' })
        );
    }

    #[test]
    fn test_format_and_display_agree() {
        let state = encode(&CLASSIC).unwrap();
        assert_eq!(state.to_string(), format_grid(&CLASSIC));
        assert_eq!(format_grid(&CLASSIC), "3443\n3443\n3223\n3113\n1..1");
    }
}
