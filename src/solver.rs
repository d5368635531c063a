//! Solver facade: the one entry point the surrounding game talks to.
//!
//! A `Solver` is constructed per puzzle session and owns no cross-call
//! state: every solve builds its own frontier, visited index and node pool
//! and drops them on return. Malformed grids surface as codec errors here;
//! an unsolvable board is a normal `None` path, not an error.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::board::{self, BoardState, CELLS, COLS};
use crate::search;

/// Result of one solve: the optimal path plus observability counters.
pub struct SolveReport {
    /// Start-to-goal state sequence, or `None` for an unsolvable board.
    pub path: Option<Vec<BoardState>>,
    /// States expanded by the engine.
    pub nodes_explored: usize,
    /// Wall-clock time the solve took.
    pub elapsed: Duration,
}

impl SolveReport {
    /// Minimum remaining moves, or `None` for an unsolvable board. A board
    /// that is already won reports zero.
    pub fn min_steps(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len() - 1)
    }
}

/// Which engine a solve should run. BFS and A* return equally long paths;
/// they only trade memory against expansion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engine {
    BreadthFirst,
    BestFirst,
}

/// Session-scoped puzzle solver.
#[derive(Default)]
pub struct Solver;

impl Solver {
    pub fn new() -> Self {
        Solver
    }

    /// Full solve at puzzle load time, via plain BFS.
    ///
    /// The caller logs-and-forgets the detail: the report exists for
    /// startup diagnostics (path length, nodes, timing) and is not cached.
    pub fn solve_initial<R: AsRef<[u8]>>(
        &self,
        grid: &[R],
    ) -> Result<SolveReport, board::BoardError> {
        let report = self.run(grid, Engine::BreadthFirst)?;
        info!(
            "initial solve: {}, {} nodes explored in {:.1?}",
            describe(&report),
            report.nodes_explored,
            report.elapsed,
        );
        Ok(report)
    }

    /// Per-move solve of the live board, via A* to the fixed goal.
    pub fn solve_from<R: AsRef<[u8]>>(
        &self,
        grid: &[R],
    ) -> Result<SolveReport, board::BoardError> {
        let report = self.run(grid, Engine::BestFirst)?;
        debug!(
            "move solve: {}, {} nodes explored in {:.1?}",
            describe(&report),
            report.nodes_explored,
            report.elapsed,
        );
        Ok(report)
    }

    /// Optimal path between two explicit boards, via bidirectional BFS.
    pub fn solve_between<R: AsRef<[u8]>>(
        &self,
        start: &[R],
        target: &[R],
    ) -> Result<Option<Vec<BoardState>>, board::BoardError> {
        let start = board::encode(start)?;
        let target = board::encode(target)?;
        let begun = Instant::now();
        let path = search::bidirectional(start, target);
        debug!(
            "between solve: {} in {:.1?}",
            path.as_ref()
                .map_or_else(|| "no path".to_owned(), |p| format!("{} moves", p.len() - 1)),
            begun.elapsed(),
        );
        Ok(path)
    }

    /// Encodes and solves with the chosen engine, timing the run.
    pub fn run<R: AsRef<[u8]>>(
        &self,
        grid: &[R],
        engine: Engine,
    ) -> Result<SolveReport, board::BoardError> {
        let state = board::encode(grid)?;
        let begun = Instant::now();
        let outcome = match engine {
            Engine::BreadthFirst => search::breadth_first(state),
            Engine::BestFirst => search::best_first(state),
        };
        Ok(SolveReport {
            path: outcome.path,
            nodes_explored: outcome.nodes_explored,
            elapsed: begun.elapsed(),
        })
    }
}

/// The hint for a computed path: the first cell (row-major) that the next
/// piece to move vacates between the first two states.
///
/// `None` when the path has fewer than two states, i.e. the board is
/// already won or there is nothing meaningful to suggest.
pub fn hint_from_path(path: &[BoardState]) -> Option<(usize, usize)> {
    let first = *path.first()?;
    let second = *path.get(1)?;
    (0..CELLS)
        .find(|&cell| first.code_at(cell) != 0 && second.code_at(cell) == 0)
        .map(|cell| (cell / COLS, cell % COLS))
}

fn describe(report: &SolveReport) -> String {
    match report.min_steps() {
        Some(moves) => format!("{moves} moves"),
        None => "no path".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::encode;
    use crate::layouts::{BOXED, CLASSIC, NEARLY_SOLVED, SOLVED};

    #[test]
    fn test_initial_solve_of_classic() {
        let report = Solver::new().solve_initial(&CLASSIC).unwrap();
        assert_eq!(report.min_steps(), Some(116));
        assert!(report.nodes_explored > 0);
    }

    #[test]
    fn test_move_solve_agrees_with_initial_solve() {
        let solver = Solver::new();
        let initial = solver.solve_initial(&NEARLY_SOLVED).unwrap();
        let live = solver.solve_from(&NEARLY_SOLVED).unwrap();
        assert_eq!(initial.min_steps(), live.min_steps());
        assert_eq!(live.min_steps(), Some(1));
    }

    #[test]
    fn test_solved_board_reports_zero_steps_and_no_hint() {
        let report = Solver::new().solve_from(&SOLVED).unwrap();
        assert_eq!(report.min_steps(), Some(0));
        assert_eq!(hint_from_path(&report.path.unwrap()), None);
    }

    #[test]
    fn test_unsolvable_board_is_not_an_error() {
        let solver = Solver::new();
        assert_eq!(solver.solve_initial(&BOXED).unwrap().min_steps(), None);
        assert_eq!(solver.solve_from(&BOXED).unwrap().min_steps(), None);
    }

    #[test]
    fn test_codec_errors_propagate() {
        let ragged = vec![vec![0u8; 4]; 3];
        assert!(Solver::new().solve_from(&ragged).is_err());
    }

    #[test]
    fn test_hint_names_the_vacated_cell() {
        // the only optimal move drops the 2x2 piece into the gap, vacating
        // (2, 1) and (2, 2); the hint is the first in row-major order
        let report = Solver::new().solve_from(&NEARLY_SOLVED).unwrap();
        assert_eq!(hint_from_path(&report.path.unwrap()), Some((2, 1)));
    }

    #[test]
    fn test_hint_on_short_paths() {
        assert_eq!(hint_from_path(&[]), None);
        assert_eq!(hint_from_path(&[encode(&SOLVED).unwrap()]), None);
    }

    #[test]
    fn test_one_move_changes_distance_by_one() {
        // stepping the bottom-left soldier inward happens to lie on an
        // optimal line, so the distance drops from 116 to 115
        let mut grid = CLASSIC;
        grid[4] = [0, 1, 0, 1];
        let report = Solver::new().solve_from(&grid).unwrap();
        assert_eq!(report.min_steps(), Some(115));
    }

    #[test]
    fn test_between_solve_and_its_report() {
        let solver = Solver::new();
        let path = solver.solve_between(&NEARLY_SOLVED, &SOLVED).unwrap().unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(solver.solve_between(&BOXED, &SOLVED).unwrap(), None);
    }
}
