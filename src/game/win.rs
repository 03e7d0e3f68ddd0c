//! Win-condition evaluation.
//!
//! Pure scan of the post-placement grid: a placement wins iff a straight run
//! of `target_run` same-colored cells passes through the piece that just
//! landed. The scan axes are plain `(row_delta, col_delta)` vectors rather
//! than per-direction code paths.

use super::board::Cell;

/// Sliding scan axes, in check order: diagonal sloping down left-to-right,
/// diagonal sloping up left-to-right, horizontal. Vertical is handled
/// separately since gravity means a run can only extend downward from the
/// just-placed piece.
const SLIDING_AXES: [(isize, isize); 3] = [(-1, 1), (1, 1), (0, 1)];

/// Check whether the piece just placed in `last_column` completed a run of
/// `target_run` cells of `color` along any of the four axes.
///
/// Expects the grid to already contain the new piece at row
/// `fill_levels[last_column] - 1`. Pure function of its inputs.
pub(crate) fn evaluate(
    grid: &[Vec<Cell>],
    fill_levels: &[usize],
    last_column: usize,
    color: Cell,
    target_run: usize,
) -> bool {
    let last_row = fill_levels[last_column] - 1;

    if vertical_run(grid, last_row, last_column, color, target_run) {
        return true;
    }
    SLIDING_AXES
        .iter()
        .any(|&(dr, dc)| axis_run(grid, last_row, last_column, dr, dc, color, target_run))
}

/// The single downward window from the placed cell.
fn vertical_run(grid: &[Vec<Cell>], row: usize, col: usize, color: Cell, target_run: usize) -> bool {
    if row + 1 < target_run {
        return false;
    }
    grid[row + 1 - target_run..=row]
        .iter()
        .all(|grid_row| grid_row[col] == color)
}

/// Try every window of length `target_run` along `(dr, dc)` that contains
/// the placed cell: the cell can sit anywhere from the end of a window
/// (offset `target_run - 1` back) to its start (offset 0).
fn axis_run(
    grid: &[Vec<Cell>],
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    color: Cell,
    target_run: usize,
) -> bool {
    (0..target_run).any(|back| {
        let start_row = row as isize - dr * back as isize;
        let start_col = col as isize - dc * back as isize;
        window_matches(grid, start_row, start_col, dr, dc, color, target_run)
    })
}

/// A window wins iff every cell along it is in bounds and matches `color`.
fn window_matches(
    grid: &[Vec<Cell>],
    start_row: isize,
    start_col: isize,
    dr: isize,
    dc: isize,
    color: Cell,
    target_run: usize,
) -> bool {
    (0..target_run).all(|i| {
        let row = start_row + dr * i as isize;
        let col = start_col + dc * i as isize;
        in_bounds(grid, row, col) && grid[row as usize][col as usize] == color
    })
}

fn in_bounds(grid: &[Vec<Cell>], row: isize, col: isize) -> bool {
    row >= 0 && (row as usize) < grid.len() && col >= 0 && (col as usize) < grid[0].len()
}
