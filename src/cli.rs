#![cfg(feature = "std")]

//! Terminal front end: builds a board on a [`MemorySurface`] and drives it
//! from standard input or a move list.

use std::io::{self, Write};

use crate::{
    config::GridConfig,
    events::{EventLoop, Outcome, ScriptedSource, SessionSummary, StdinSource},
    grid::GridBuilder,
    palette::Palette,
    position::normalize_label,
    render::render_board,
    session::PlacementSession,
    surface::memory::MemorySurface,
};

/// Build a fresh board and wrap it in an event loop.
pub fn new_board(config: GridConfig, palette: Palette) -> anyhow::Result<EventLoop<MemorySurface>> {
    let mut surface = MemorySurface::new();
    surface.add_container(config.container);
    GridBuilder::new(config).build(&mut surface)?;
    Ok(EventLoop::new(surface, PlacementSession::new(palette)))
}

/// Print the board held by `board`.
pub fn print_board(board: &EventLoop<MemorySurface>, config: &GridConfig) {
    print!(
        "{}",
        render_board(board.surface(), config, board.session().palette())
    );
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Placed { label, style } => println!("{} -> {}", label, style),
        Outcome::Dropped(e) => println!("Error: {}", e),
        Outcome::Unhandled(label) => println!("{}: nothing to do", label),
    }
}

/// Interactive play: one label per line, board redrawn after each.
pub async fn run_interactive(
    config: GridConfig,
    palette: Palette,
) -> anyhow::Result<SessionSummary> {
    let mut board = new_board(config, palette)?;
    print_board(&board, &config);
    println!("Enter a point (e.g. D4), or `quit`.");
    let mut source = StdinSource::new(config);
    board
        .run_with(&mut source, |board, outcome| {
            report(outcome);
            print_board(board, &config);
            print!("Next [{}]: ", board.session().next_style());
            let _ = io::stdout().flush();
        })
        .await
}

/// Apply `moves` in order and print the resulting board.
pub async fn run_replay(
    config: GridConfig,
    palette: Palette,
    moves: &[String],
) -> anyhow::Result<SessionSummary> {
    let mut board = new_board(config, palette)?;
    let mut source = ScriptedSource::new(moves.iter().map(|m| normalize_label(m, &config)));
    let summary = board.run_with(&mut source, |_, outcome| report(outcome)).await?;
    print_board(&board, &config);
    Ok(summary)
}
