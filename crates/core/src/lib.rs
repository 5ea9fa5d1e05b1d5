//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the maze model, the generator, and the game state
//! machine. It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the identical maze
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`maze`]: the square wall/floor grid with bounds-checked access
//! - [`generator`]: randomized depth-first carving over the grid
//! - [`game_state`]: player position, move validation, and the
//!   menu/playing/won phase machine
//! - [`rng`]: seedable LCG with the Fisher-Yates shuffle the carver uses
//!
//! # Game Rules
//!
//! - The maze is a perfect maze: one path between any two carved cells
//!   (the even-size exit bridge being the single deliberate exception)
//! - The player starts at (0, 0); reaching (size-1, size-1) wins
//! - Moves into walls or off the grid are silently rejected
//! - Restart regenerates the maze and is legal in every phase
//!
//! # Example
//!
//! ```
//! use tui_maze_core::GameState;
//! use tui_maze_types::{Direction, GameAction, GamePhase};
//!
//! // Create and start a game
//! let mut game = GameState::new(15, 12345).unwrap();
//! game.start();
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! // Feed it actions; the return value says whether to re-render
//! let _ = game.apply_action(GameAction::Move(Direction::Right));
//! ```

pub mod game_state;
pub mod generator;
pub mod maze;
pub mod rng;

pub use tui_maze_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use generator::generate;
pub use maze::{Maze, SizeError};
pub use rng::SimpleRng;
