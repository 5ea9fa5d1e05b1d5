//! Game state module - owns the maze, the player, and the phase machine
//!
//! This module ties the core together: it holds the grid, validates moves
//! against it, and drives the menu/playing/won transitions. All operations
//! are synchronous total functions over the current state; invalid input is
//! silently rejected rather than raised, so the input layer can forward
//! every event without pre-filtering.

use tui_maze_types::{Direction, GameAction, GamePhase, Position};

use crate::generator;
use crate::maze::{Maze, SizeError};
use crate::rng::SimpleRng;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    maze: Maze,
    position: Position,
    phase: GamePhase,
    size: u16,
    /// RNG carried across restarts so every maze is fresh.
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game in the menu phase
    ///
    /// The side length is validated here, so starting can never fail later.
    /// The grid stays all-wall until [`GameState::start`] generates the
    /// first maze.
    pub fn new(size: u16, seed: u32) -> Result<Self, SizeError> {
        let maze = Maze::all_walls(size)?;
        Ok(Self {
            maze,
            position: Position::ORIGIN,
            phase: GamePhase::Menu,
            size,
            rng: SimpleRng::new(seed),
        })
    }

    /// Create a game over a preset grid, already in the playing phase
    ///
    /// Bypasses generation entirely; used for fixed layouts and for pinning
    /// exact transitions in tests.
    pub fn from_maze(maze: Maze) -> Self {
        Self {
            size: maze.size(),
            maze,
            position: Position::ORIGIN,
            phase: GamePhase::Playing,
            rng: SimpleRng::new(1),
        }
    }

    /// Generate a fresh maze, reset the player to the origin, start playing
    pub fn start(&mut self) {
        self.maze = generator::generate(self.size, &mut self.rng)
            .expect("size validated at construction");
        self.position = Position::ORIGIN;
        self.phase = GamePhase::Playing;
    }

    /// Regenerate and reset; legal in every phase
    pub fn restart(&mut self) {
        self.start();
    }

    /// Attempt to move the player one cell in the given direction
    ///
    /// Moves outside the playing phase, off the grid, or into a wall are
    /// silently rejected. A move onto the exit cell transitions to the won
    /// phase. Returns the (possibly unchanged) position and phase.
    pub fn attempt_move(&mut self, dir: Direction) -> (Position, GamePhase) {
        if self.phase != GamePhase::Playing {
            return (self.position, self.phase);
        }

        let (dx, dy) = dir.delta();
        let cand_x = self.position.x as i32 + dx;
        let cand_y = self.position.y as i32 + dy;

        if self.maze.is_open(cand_x, cand_y) {
            self.position = Position::new(cand_x as u16, cand_y as u16);
            if self.position == self.maze.exit() {
                self.phase = GamePhase::Won;
            }
        }

        (self.position, self.phase)
    }

    /// Apply a game action
    ///
    /// The single dispatch entry point for the input layer. Returns whether
    /// the state changed, which is the caller's signal to re-render.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => {
                if self.phase != GamePhase::Menu {
                    return false;
                }
                self.start();
                true
            }
            GameAction::Move(dir) => {
                let before = (self.position, self.phase);
                self.attempt_move(dir) != before
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn size(&self) -> u16 {
        self.size
    }
}
