//! Run detection (line matching).
//!
//! After a ball lands on a cell, the engine asks whether that cell now
//! sits inside a long enough line of its own color. Lines are scanned
//! along four axes: horizontal, vertical, and the two diagonals. Each
//! axis is a pair of opposite directions walked independently from the
//! origin; the origin itself counts once.

use crate::board::{Board, ColorId, Coord};

/// The four scan axes, each a pair of opposite unit steps (row, col).
const AXIS_PAIRS: [[(isize, isize); 2]; 4] = [
    [(0, -1), (0, 1)],   // left, right
    [(-1, 0), (1, 0)],   // up, down
    [(-1, -1), (1, 1)],  // up-left, down-right
    [(-1, 1), (1, -1)],  // up-right, down-left
];

/// A qualifying line of same-colored balls along one axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    /// The shared color of every cell in the run.
    pub color: ColorId,
    /// The cells forming the run, sorted row-major. Length is always at
    /// least the threshold the scan was invoked with, and the scan
    /// origin is always among them.
    pub cells: Vec<Coord>,
}

impl Run {
    /// Number of cells in the run.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if the run holds no cells. Kept for completeness; runs
    /// returned by [`find_runs`] are never empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Scans outward from `origin` along all four axes and reports every
/// axis whose contiguous same-color line, origin included, reaches
/// `threshold` cells.
///
/// A T- or L-shaped arrangement can qualify on more than one axis in a
/// single call; every qualifying axis is reported separately, and the
/// caller decides what to do with the union. The scan never mutates the
/// board.
///
/// Returns an empty `Vec` when the origin is empty or out of range, or
/// when no axis reaches the threshold.
///
/// # Examples
/// ```
/// use color_lines::board::Coord;
/// use color_lines::lines::find_runs;
/// use color_lines::utils::board_from_str_rows;
///
/// let board = board_from_str_rows(&["BBBBB..."]).unwrap();
/// let runs = find_runs(&board, Coord::new(0, 2), 5);
/// assert_eq!(runs.len(), 1);
/// assert_eq!(runs[0].len(), 5);
/// ```
pub fn find_runs(board: &Board, origin: Coord, threshold: usize) -> Vec<Run> {
    let color = match board.get(origin) {
        Ok(Some(color)) => color,
        // Empty cells and out-of-range origins start no run.
        _ => return Vec::new(),
    };

    let mut runs = Vec::new();

    for pair in AXIS_PAIRS {
        let mut cells = vec![origin];

        // Walk both directions of the axis independently, stopping at
        // the first cell that is off-board, empty, or a different color.
        for (dr, dc) in pair {
            let mut cursor = origin;
            while let Some(next) = cursor.offset(dr, dc) {
                match board.get(next) {
                    Ok(Some(c)) if c == color => {
                        cells.push(next);
                        cursor = next;
                    }
                    _ => break,
                }
            }
        }

        if cells.len() >= threshold {
            cells.sort_unstable();
            runs.push(Run { color, cells });
        }
    }

    runs
}
