//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`tui_maze_types::GameAction`] values, phase
//! aware so each screen only answers to its own keys (the menu to start,
//! the game to movement, the win screen to restart).

pub mod map;

pub use tui_maze_types as types;

pub use map::{direction_for, handle_key_event, should_quit};
