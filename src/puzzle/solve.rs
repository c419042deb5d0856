//! Backtracking solver.
//!
//! Plain depth-first search over the first empty cell. No technique engines
//! and no uniqueness analysis; the extraction pipeline only needs a solved
//! board (or the unsolved input back) for its report.

use super::{Grid, SIZE};

/// Stateless solver; all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle on a working copy. Returns the completed grid, or a
    /// copy of the input when no legal assignment exists (illegal givens
    /// included); the input is never mutated.
    pub fn solve(&self, grid: &Grid) -> Grid {
        let mut working = *grid.cells();
        if givens_are_legal(&working) && fill_first_empty(&mut working) {
            Grid::from_cells(working)
        } else {
            grid.clone()
        }
    }
}

fn fill_first_empty(cells: &mut [[u8; SIZE]; SIZE]) -> bool {
    let Some((row, col)) = first_empty(cells) else {
        return true;
    };
    for digit in 1..=9 {
        if placement_is_legal(cells, row, col, digit) {
            cells[row][col] = digit;
            if fill_first_empty(cells) {
                return true;
            }
            cells[row][col] = 0;
        }
    }
    false
}

fn first_empty(cells: &[[u8; SIZE]; SIZE]) -> Option<(usize, usize)> {
    (0..SIZE)
        .flat_map(|r| (0..SIZE).map(move |c| (r, c)))
        .find(|&(r, c)| cells[r][c] == 0)
}

fn placement_is_legal(cells: &[[u8; SIZE]; SIZE], row: usize, col: usize, digit: u8) -> bool {
    if (0..SIZE).any(|c| cells[row][c] == digit) {
        return false;
    }
    if (0..SIZE).any(|r| cells[r][col] == digit) {
        return false;
    }
    let (box_row, box_col) = (row / 3 * 3, col / 3 * 3);
    !(box_row..box_row + 3)
        .any(|r| (box_col..box_col + 3).any(|c| cells[r][c] == digit))
}

/// A board whose givens already clash can never be completed; detect that up
/// front so the search does not hide the contradiction behind exhaustion.
fn givens_are_legal(cells: &[[u8; SIZE]; SIZE]) -> bool {
    for row in 0..SIZE {
        for col in 0..SIZE {
            let digit = cells[row][col];
            if digit == 0 {
                continue;
            }
            let mut probe = *cells;
            probe[row][col] = 0;
            if !placement_is_legal(&probe, row, col, digit) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: [[u8; SIZE]; SIZE]) -> Grid {
        Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn solves_a_classic_puzzle() {
        let puzzle = grid_from([
            [5, 3, 0, 0, 7, 0, 0, 0, 0],
            [6, 0, 0, 1, 9, 5, 0, 0, 0],
            [0, 9, 8, 0, 0, 0, 0, 6, 0],
            [8, 0, 0, 0, 6, 0, 0, 0, 3],
            [4, 0, 0, 8, 0, 3, 0, 0, 1],
            [7, 0, 0, 0, 2, 0, 0, 0, 6],
            [0, 6, 0, 0, 0, 0, 2, 8, 0],
            [0, 0, 0, 4, 1, 9, 0, 0, 5],
            [0, 0, 0, 0, 8, 0, 0, 7, 9],
        ]);
        let expected = grid_from([
            [5, 3, 4, 6, 7, 8, 9, 1, 2],
            [6, 7, 2, 1, 9, 5, 3, 4, 8],
            [1, 9, 8, 3, 4, 2, 5, 6, 7],
            [8, 5, 9, 7, 6, 1, 4, 2, 3],
            [4, 2, 6, 8, 5, 3, 7, 9, 1],
            [7, 1, 3, 9, 2, 4, 8, 5, 6],
            [9, 6, 1, 5, 3, 7, 2, 8, 4],
            [2, 8, 7, 4, 1, 9, 6, 3, 5],
            [3, 4, 5, 2, 8, 6, 1, 7, 9],
        ]);

        let solved = Solver::new().solve(&puzzle);

        assert!(solved.is_complete());
        assert_eq!(solved, expected);
        // input untouched
        assert_eq!(puzzle.get(0, 2), 0);
    }

    #[test]
    fn empty_board_gets_fully_filled() {
        let solved = Solver::new().solve(&grid_from([[0; SIZE]; SIZE]));
        assert!(solved.is_complete());
    }

    #[test]
    fn clashing_givens_come_back_unchanged() {
        let mut rows = [[0u8; SIZE]; SIZE];
        rows[0][0] = 5;
        rows[0][8] = 5;
        let puzzle = grid_from(rows);

        let result = Solver::new().solve(&puzzle);

        assert_eq!(result, puzzle);
        assert!(!result.is_complete());
    }

    #[test]
    fn solved_input_round_trips() {
        let mut rows = [[0u8; SIZE]; SIZE];
        for r in 0..SIZE {
            for c in 0..SIZE {
                rows[r][c] = ((r * 3 + r / 3 + c) % 9 + 1) as u8;
            }
        }
        let complete = grid_from(rows);
        assert!(complete.is_complete());
        assert_eq!(Solver::new().solve(&complete), complete);
    }
}
