//! Board state model for the color lines game.
//!
//! This module defines the data the rest of the engine operates on:
//! - `Coord`: A (row, column) position on the board.
//! - `ColorId`: The palette of ball colors.
//! - `Cell`: The contents of one board position (`Option<ColorId>`).
//! - `Board`: The grid itself, with bounds-checked access and an
//!   occupancy snapshot used by the pathfinding and matching code.
//!
//! The board is pure storage: it never spawns, moves, or clears balls on
//! its own. All mutation goes through the turn controller in `game`.

use std::fmt;

use crate::error::OutOfBounds;

/// A (row, column) position on the board, 0-based from the top-left.
///
/// Ordering is row-major, so sorting a list of coordinates yields
/// reading order. This is relied on for deterministic reporting of
/// cleared and spawned cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate from a row and column index.
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Returns the coordinate displaced by `(dr, dc)`, or `None` if the
    /// displacement would move either index below zero.
    ///
    /// The upper bound is not checked here; callers test the result
    /// against the board or mask they are walking.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Coord> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Coord { row, col })
    }

    /// Manhattan distance to `other` (sum of row and column deltas).
    ///
    /// # Examples
    /// ```
    /// use color_lines::board::Coord;
    /// assert_eq!(Coord::new(0, 0).manhattan(Coord::new(2, 3)), 5);
    /// ```
    pub fn manhattan(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A ball color.
///
/// Seven named colors are available; a game's palette is any non-empty
/// subset of them (the default configuration uses the first five).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorId {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Cyan,
    White,
}

impl ColorId {
    /// All colors in declaration order.
    pub const ALL: [ColorId; 7] = [
        ColorId::Red,
        ColorId::Green,
        ColorId::Blue,
        ColorId::Yellow,
        ColorId::Purple,
        ColorId::Cyan,
        ColorId::White,
    ];

    /// Converts the color to its character representation.
    ///
    /// This is used by the text fixtures in `utils` and for plain-text
    /// display of boards.
    ///
    /// # Examples
    /// ```
    /// use color_lines::board::ColorId;
    /// assert_eq!(ColorId::Red.to_char(), 'R');
    /// assert_eq!(ColorId::White.to_char(), 'W');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            ColorId::Red => 'R',
            ColorId::Green => 'G',
            ColorId::Blue => 'B',
            ColorId::Yellow => 'Y',
            ColorId::Purple => 'P',
            ColorId::Cyan => 'C',
            ColorId::White => 'W',
        }
    }

    /// Parses a character produced by `to_char` back into a color.
    /// Returns `None` for unrecognized characters (including `'.'`,
    /// which denotes an empty cell in board fixtures).
    pub fn from_char(ch: char) -> Option<ColorId> {
        match ch {
            'R' => Some(ColorId::Red),
            'G' => Some(ColorId::Green),
            'B' => Some(ColorId::Blue),
            'Y' => Some(ColorId::Yellow),
            'P' => Some(ColorId::Purple),
            'C' => Some(ColorId::Cyan),
            'W' => Some(ColorId::White),
            _ => None,
        }
    }

    /// Returns the ANSI background color code string for terminal output.
    fn to_ansi_color_code(&self) -> &'static str {
        match self {
            ColorId::Red => "41",
            ColorId::Green => "42",
            ColorId::Yellow => "43",
            ColorId::Blue => "44",
            ColorId::Purple => "45",
            ColorId::Cyan => "46",
            ColorId::White => "47",
        }
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorId::Red => "red",
            ColorId::Green => "green",
            ColorId::Blue => "blue",
            ColorId::Yellow => "yellow",
            ColorId::Purple => "purple",
            ColorId::Cyan => "cyan",
            ColorId::White => "white",
        };
        write!(f, "{}", name)
    }
}

/// The contents of one board cell: `Some(color)` for a ball, `None` for
/// an empty cell. A cell is occupied exactly when it holds a color.
pub type Cell = Option<ColorId>;

/// The game board: a `width` x `height` grid of cells.
///
/// Dimensions are fixed at construction. Access is bounds-checked and
/// fails with [`OutOfBounds`] rather than panicking, since coordinates
/// ultimately come from player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a new empty board with the given dimensions.
    ///
    /// # Examples
    /// ```
    /// use color_lines::board::{Board, Coord};
    /// let board = Board::new(10, 10);
    /// assert_eq!(board.count_empty(), 100);
    /// assert_eq!(board.get(Coord::new(0, 0)), Ok(None));
    /// ```
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Board width (number of columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height (number of rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major flat index for `coord`, or `None` if out of bounds.
    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.height && coord.col < self.width)
            .then(|| coord.row * self.width + coord.col)
    }

    fn out_of_bounds(&self, coord: Coord) -> OutOfBounds {
        OutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        }
    }

    /// Returns `true` if `coord` lies within the board.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Returns the cell at `coord`.
    ///
    /// # Errors
    /// Fails with `OutOfBounds` if `coord` lies outside the board.
    pub fn get(&self, coord: Coord) -> Result<Cell, OutOfBounds> {
        self.index(coord)
            .map(|i| self.cells[i])
            .ok_or_else(|| self.out_of_bounds(coord))
    }

    /// Overwrites the cell at `coord`.
    ///
    /// # Errors
    /// Fails with `OutOfBounds` if `coord` lies outside the board; the
    /// board is left unchanged in that case.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), OutOfBounds> {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = cell;
                Ok(())
            }
            None => Err(self.out_of_bounds(coord)),
        }
    }

    /// Resets the cell at `coord` to empty.
    ///
    /// # Errors
    /// Fails with `OutOfBounds` if `coord` lies outside the board.
    pub fn clear_cell(&mut self, coord: Coord) -> Result<(), OutOfBounds> {
        self.set(coord, None)
    }

    /// Clears every cell on the board.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Returns the cells as a row-major slice, for presentation layers
    /// that want to iterate a snapshot without repeated `get` calls.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Coord { row, col }))
    }

    /// Number of empty cells currently on the board.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Collects the coordinates of all empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.coords()
            .filter(|&coord| self.cells[coord.row * self.width + coord.col].is_none())
            .collect()
    }

    /// Takes a boolean snapshot of which cells are occupied.
    ///
    /// The snapshot carries no color information and does not observe
    /// later board mutation. The pathfinder searches over it.
    pub fn occupancy_mask(&self) -> OccupancyMask {
        OccupancyMask {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(|cell| cell.is_some()).collect(),
        }
    }

    /// Generates a string representation of the board with an optional
    /// highlighted position.
    ///
    /// The output includes row and column numbers and uses ANSI escape
    /// codes for ball colors in a terminal environment. If `pos` is
    /// `Some(coord)`, that cell is marked with `()` so a selected ball
    /// stands out from the rest.
    pub fn to_string_with_highlight(&self, pos: Option<Coord>) -> String {
        let mut output = String::new();

        output.push_str("  ");
        for c_idx in 0..self.width {
            output.push_str(&format!("{:<2}", c_idx));
        }
        output.push('\n');

        for r_idx in 0..self.height {
            output.push_str(&format!("{:<2}", r_idx));

            for c_idx in 0..self.width {
                let coord = Coord::new(r_idx, c_idx);
                let is_highlight = pos == Some(coord);
                let color_code = match self.cells[r_idx * self.width + c_idx] {
                    Some(color) => color.to_ansi_color_code(),
                    None => "40",
                };
                let content = if is_highlight { "()" } else { "  " };
                output.push_str(&format!("\x1b[1;{}m{}\x1b[m", color_code, content));
            }
            if r_idx < self.height - 1 {
                output.push('\n');
            }
        }

        output
    }
}

impl fmt::Display for Board {
    /// Formats the board for display using `to_string_with_highlight(None)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_highlight(None))
    }
}

/// Boolean snapshot of board occupancy, same dimensions as the board it
/// was taken from. `true` means the cell holds a ball.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyMask {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl OccupancyMask {
    /// Mask width (number of columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Mask height (number of rows).
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.height && coord.col < self.width)
            .then(|| coord.row * self.width + coord.col)
    }

    /// Returns `true` if `coord` lies within the mask.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Returns whether the cell at `coord` is occupied, or `None` if
    /// `coord` is out of bounds.
    pub fn occupied(&self, coord: Coord) -> Option<bool> {
        self.index(coord).map(|i| self.cells[i])
    }
}
