//! Maze module - the wall/floor grid
//!
//! The maze is a square `size x size` grid where each cell is either a wall
//! or open floor. Uses a flat row-major array for cache locality.
//! Coordinates: (x, y) with x ranging 0..size (left to right) and y ranging
//! 0..size (top to bottom). The start cell is (0, 0) and the exit cell is
//! (size-1, size-1); both are open in every generated maze.

use std::fmt;

use arrayvec::ArrayVec;

use tui_maze_types::{Direction, Position, MIN_MAZE_SIZE};

/// Rejected maze side length (size < [`MIN_MAZE_SIZE`])
///
/// The carving algorithm steps two cells at a time from the origin, so
/// degenerate grids have nothing to carve and are refused at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeError {
    pub size: u16,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "maze size must be at least {}, got {}",
            MIN_MAZE_SIZE, self.size
        )
    }
}

impl std::error::Error for SizeError {}

/// The maze grid - a square matrix of wall/floor cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    size: u16,
    /// Flat array of cells, row-major order (y * size + x); true = wall
    walls: Vec<bool>,
}

impl Maze {
    /// Create a grid of the given side length with every cell a wall
    ///
    /// This is the generator's starting canvas; it is also the placeholder
    /// grid the game holds before the first start.
    pub fn all_walls(size: u16) -> Result<Self, SizeError> {
        if size < MIN_MAZE_SIZE {
            return Err(SizeError { size });
        }
        let len = (size as usize) * (size as usize);
        Ok(Self {
            size,
            walls: vec![true; len],
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.size as i32 || y < 0 || y >= self.size as i32 {
            return None;
        }
        Some((y as usize) * (self.size as usize) + (x as usize))
    }

    /// Side length of the grid
    pub fn size(&self) -> u16 {
        self.size
    }

    /// The exit cell (size-1, size-1)
    pub fn exit(&self) -> Position {
        Position::new(self.size - 1, self.size - 1)
    }

    /// Check if (x, y) lies on the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Check if (x, y) is a wall cell; out-of-bounds reads as false
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map(|i| self.walls[i]).unwrap_or(false)
    }

    /// Check if (x, y) is open floor (in bounds and not a wall)
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map(|i| !self.walls[i]).unwrap_or(false)
    }

    /// Turn the cell at (x, y) into open floor
    ///
    /// Out-of-bounds coordinates are ignored.
    pub(crate) fn carve(&mut self, x: u16, y: u16) {
        if let Some(i) = self.index(x as i32, y as i32) {
            self.walls[i] = false;
        }
    }

    /// Open cells orthogonally adjacent to `pos`
    ///
    /// Stack-only; at most four neighbors exist.
    pub fn open_neighbors(&self, pos: Position) -> ArrayVec<Position, 4> {
        let mut out = ArrayVec::new();
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            let nx = pos.x as i32 + dx;
            let ny = pos.y as i32 + dy;
            if self.is_open(nx, ny) {
                out.push(Position::new(nx as u16, ny as u16));
            }
        }
        out
    }

    /// Number of open cells in the grid
    pub fn open_cell_count(&self) -> usize {
        self.walls.iter().filter(|w| !**w).count()
    }

    /// Build a maze from a textual layout
    ///
    /// `'#'` is a wall, any other character is open floor. Rows must be
    /// non-empty, equal length, and as many as they are long (square grid).
    /// Useful for preset layouts and deterministic test fixtures.
    pub fn from_rows(rows: &[&str]) -> Result<Self, SizeError> {
        let size = rows.len();
        let mut maze = Self::all_walls(size as u16)?;
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(
                row.chars().count(),
                size,
                "row {} is not {} cells wide",
                y,
                size
            );
            for (x, ch) in row.chars().enumerate() {
                if ch != '#' {
                    maze.carve(x as u16, y as u16);
                }
            }
        }
        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_calculation() {
        let maze = Maze::all_walls(5).unwrap();
        assert_eq!(maze.index(0, 0), Some(0));
        assert_eq!(maze.index(4, 0), Some(4));
        assert_eq!(maze.index(0, 1), Some(5));
        assert_eq!(maze.index(4, 4), Some(24));
        assert_eq!(maze.index(-1, 0), None);
        assert_eq!(maze.index(5, 0), None);
        assert_eq!(maze.index(0, 5), None);
    }

    #[test]
    fn test_all_walls_rejects_degenerate_sizes() {
        assert_eq!(Maze::all_walls(0), Err(SizeError { size: 0 }));
        assert_eq!(Maze::all_walls(1), Err(SizeError { size: 1 }));
        assert!(Maze::all_walls(2).is_ok());
    }

    #[test]
    fn test_size_error_message_names_bound() {
        let err = Maze::all_walls(1).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("at least 2"), "unexpected message: {}", msg);
    }

    #[test]
    fn test_carve_and_query() {
        let mut maze = Maze::all_walls(3).unwrap();
        assert!(maze.is_wall(1, 1));
        assert!(!maze.is_open(1, 1));

        maze.carve(1, 1);
        assert!(!maze.is_wall(1, 1));
        assert!(maze.is_open(1, 1));
        assert_eq!(maze.open_cell_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_is_neither_wall_nor_open() {
        let maze = Maze::all_walls(3).unwrap();
        assert!(!maze.is_wall(-1, 0));
        assert!(!maze.is_open(-1, 0));
        assert!(!maze.is_wall(3, 0));
        assert!(!maze.is_open(0, 3));
    }

    #[test]
    fn test_open_neighbors() {
        let maze = Maze::from_rows(&[
            ".#.", //
            "...", //
            "#.#",
        ])
        .unwrap();

        let around_center = maze.open_neighbors(Position::new(1, 1));
        assert_eq!(around_center.len(), 3); // up is '#', the rest are open

        let corner = maze.open_neighbors(Position::new(0, 0));
        assert_eq!(corner.as_slice(), [Position::new(0, 1)]);
    }

    #[test]
    fn test_from_rows_layout() {
        let maze = Maze::from_rows(&[
            "..#", //
            "#.#", //
            "#..",
        ])
        .unwrap();
        assert_eq!(maze.size(), 3);
        assert!(maze.is_open(0, 0));
        assert!(maze.is_wall(2, 0));
        assert!(maze.is_open(1, 1));
        assert!(maze.is_open(2, 2));
        assert_eq!(maze.exit(), Position::new(2, 2));
    }

    #[test]
    #[should_panic(expected = "not 2 cells wide")]
    fn test_from_rows_rejects_ragged_rows() {
        let _ = Maze::from_rows(&["..", "."]);
    }
}
