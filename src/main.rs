//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for keyboard/mouse input and a custom framebuffer-based
//! renderer. One input event produces one complete move-and-render cycle.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_2048::config::Config;
use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::input::{handle_key_event, handle_mouse_event, should_quit};
use tui_2048::logging::init_logging;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::TICK_MS;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;
    info!("starting {}x{} board, seed {}", config.size, config.size, config.seed);

    let mut game = GameState::new(config.size, config.seed)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(
        "exiting: score {}, best {} on {}x{}",
        game.score(),
        game.high_score(),
        game.size(),
        game.size()
    );
    log::logger().flush();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let frame = Duration::from_millis(TICK_MS as u64);

    let mut hover = false;
    let mut dirty = true;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        if dirty {
            game.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, hover, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if !event::poll(frame)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    game.apply_action(action)?;
                    dirty = true;
                }
            }
            Event::Mouse(mouse) => {
                let layout = view.layout(game.size(), viewport);
                let outcome = handle_mouse_event(mouse, layout.new_game);
                if let Some(over) = outcome.hover {
                    dirty |= over != hover;
                    hover = over;
                }
                if let Some(action) = outcome.action {
                    game.apply_action(action)?;
                    dirty = true;
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
