//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the view maps core state into a
//! framebuffer of styled character cells, and the renderer flushes that
//! buffer to a real terminal. The view is pure (no I/O) so every screen can
//! be unit-tested; only the renderer touches stdout.

pub mod fb;
pub mod maze_view;
pub mod renderer;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use maze_view::{MazeView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
