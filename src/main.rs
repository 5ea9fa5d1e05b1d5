//! Terminal maze runner (default binary).
//!
//! This is the gameplay entrypoint. It uses crossterm for input and a small
//! framebuffer-based renderer. The loop is purely event-driven: it blocks on
//! the next key press and redraws only when the game state actually changed,
//! since nothing in the game moves on its own.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_maze::core::GameState;
use tui_maze::input::{handle_key_event, should_quit};
use tui_maze::term::{FrameBuffer, MazeView, TerminalRenderer, Viewport};
use tui_maze::types::DEFAULT_MAZE_SIZE;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    // The core is deterministic; entropy enters only through the seed, so
    // every launch gets a different run of mazes.
    let mut game_state = GameState::new(DEFAULT_MAZE_SIZE, rand::random::<u32>())?;

    let view = MazeView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game_state, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Block until something happens; events are handled to completion
        // one at a time.
        match event::read()? {
            Event::Key(key) => {
                // Terminal auto-repeat counts as input: holding an arrow
                // key walks the player.
                if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = handle_key_event(key, game_state.phase()) else {
                    continue;
                };
                if !game_state.apply_action(action) {
                    // Rejected move or ignored action: state unchanged,
                    // skip the redraw.
                    continue;
                }
            }
            Event::Resize(_, _) => {}
            _ => continue,
        }
    }
}
