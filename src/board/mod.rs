//! Board state for the knight's tour search.

pub mod moves;

pub use moves::{find_moves, KNIGHT_OFFSETS};

use std::fmt;

/// A square on the board, addressed as (x, y) with x growing rightward and
/// y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position reached by moving this one by (dx, dy).
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Visit state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Unvisited,
    Visited,
}

/// Board state: a grid of visit marks, the knight's position, and a move
/// counter.
///
/// Cloning a board deep-copies the grid. Every spawned sub-search works on
/// its own clone, so sibling explorations never observe each other's marks.
#[derive(Debug, Clone)]
pub struct Board {
    cols: i32,
    rows: i32,
    grid: Vec<Vec<Cell>>,
    curr: Position,
    move_count: u32,
}

impl Board {
    /// Create a board with every cell unvisited except the starting square
    /// (0, 0), which holds the knight. The move counter starts at 1 for
    /// that square.
    pub fn new(cols: i32, rows: i32) -> Self {
        debug_assert!(cols > 0 && rows > 0, "degenerate board {cols}x{rows}");
        let mut grid = vec![vec![Cell::Unvisited; cols as usize]; rows as usize];
        grid[0][0] = Cell::Visited;
        Self {
            cols,
            rows,
            grid,
            curr: Position::new(0, 0),
            move_count: 1,
        }
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// The knight's current square.
    pub fn current(&self) -> Position {
        self.curr
    }

    /// Count of squares visited so far, the starting square included.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Total number of squares on the board.
    pub fn total_squares(&self) -> u32 {
        (self.cols * self.rows) as u32
    }

    /// Whether `pos` lies inside the grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        (0..self.cols).contains(&pos.x) && (0..self.rows).contains(&pos.y)
    }

    /// Whether the cell at `pos` has been visited. `pos` must be in bounds.
    pub fn is_visited(&self, pos: Position) -> bool {
        self.grid[pos.y as usize][pos.x as usize] == Cell::Visited
    }

    /// Move the knight to `to`: mark the cell visited, update the current
    /// position, and advance the move counter.
    ///
    /// The move generator only ever produces in-bounds, unvisited targets;
    /// anything else is an invariant violation, checked in debug builds.
    pub fn step(&mut self, to: Position) {
        debug_assert!(self.in_bounds(to), "step target {to} out of bounds");
        debug_assert!(!self.is_visited(to), "step target {to} already visited");
        self.grid[to.y as usize][to.x as usize] = Cell::Visited;
        self.curr = to;
        self.move_count += 1;
    }

    /// Invariant audit for tests: count the visited cells by scanning the
    /// grid. Always equals `move_count` for a board reachable through
    /// `new` and `step`.
    #[cfg(test)]
    pub fn visited_cells(&self) -> u32 {
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Visited)
            .count() as u32
    }
}

impl fmt::Display for Board {
    /// Renders the grid one row per line, `k` for visited cells and `.`
    /// for unvisited ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.grid.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                f.write_str(match cell {
                    Cell::Visited => "k",
                    Cell::Unvisited => ".",
                })?;
            }
        }
        Ok(())
    }
}
