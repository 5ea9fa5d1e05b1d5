//! Maze generation - randomized depth-first carving
//!
//! Starts from an all-wall grid and carves passages with a randomized
//! depth-first walk over the half-resolution lattice: cells at even
//! coordinates are rooms, and each step advances two cells, clearing the
//! wall cell in between. The result is a spanning tree over the reachable
//! rooms: exactly one path connects any two carved cells.
//!
//! The walk is iterative. Each stack frame holds the cell, its shuffled
//! direction order, and how many directions were already tried, which is
//! the recursive formulation made explicit; carving depth is bounded by the
//! heap, not the call stack, so large grids are safe.

use tui_maze_types::Direction;

use crate::maze::{Maze, SizeError};
use crate::rng::SimpleRng;

/// One suspended carving step: a cell and its remaining direction order.
struct Frame {
    x: u16,
    y: u16,
    dirs: [Direction; 4],
    tried: usize,
}

impl Frame {
    fn at(x: u16, y: u16, rng: &mut SimpleRng) -> Self {
        let mut dirs = Direction::ALL;
        rng.shuffle(&mut dirs);
        Self {
            x,
            y,
            dirs,
            tried: 0,
        }
    }
}

/// Generate a `size x size` maze carved from (0, 0)
///
/// Both the start cell (0, 0) and the exit cell (size-1, size-1) are open
/// in the result, and a path connects them. Sizes below the minimum are
/// rejected with [`SizeError`].
///
/// Each call draws fresh randomness from `rng`; callers wanting
/// reproducible mazes pass a freshly seeded [`SimpleRng`].
pub fn generate(size: u16, rng: &mut SimpleRng) -> Result<Maze, SizeError> {
    let mut maze = Maze::all_walls(size)?;

    maze.carve(0, 0);
    let lattice_side = (size as usize + 1) / 2;
    let mut stack: Vec<Frame> = Vec::with_capacity(lattice_side * lattice_side);
    stack.push(Frame::at(0, 0, rng));

    while let Some(top) = stack.last_mut() {
        if top.tried == top.dirs.len() {
            stack.pop();
            continue;
        }

        let dir = top.dirs[top.tried];
        top.tried += 1;
        let (here_x, here_y) = (top.x as i32, top.y as i32);

        let (dx, dy) = dir.delta();
        let cand_x = here_x + 2 * dx;
        let cand_y = here_y + 2 * dy;

        // A candidate two steps away is fresh only while still walled; the
        // wall cell in between becomes the corridor.
        if maze.is_wall(cand_x, cand_y) {
            maze.carve((here_x + dx) as u16, (here_y + dy) as u16);
            maze.carve(cand_x as u16, cand_y as u16);
            stack.push(Frame::at(cand_x as u16, cand_y as u16, rng));
        }
    }

    // The exit is opened unconditionally. On even sizes it sits off the
    // carving lattice and would come out sealed; carving the one cell next
    // to it links it to the room (size-2, size-2), which the walk always
    // reaches.
    let exit = maze.exit();
    maze.carve(exit.x, exit.y);
    if maze.open_neighbors(exit).is_empty() {
        maze.carve(exit.x - 1, exit.y);
    }

    Ok(maze)
}
