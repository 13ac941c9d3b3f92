use std::io;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use torus_snake::config::{GRID, INPUT_POLL_INTERVAL, TICK_INTERVAL};
use torus_snake::game::GameState;
use torus_snake::input::{self, GameInput};
use torus_snake::renderer;
use torus_snake::terminal_runtime::{AppTerminal, TerminalSession};
use torus_snake::theme::{self, Theme};
use torus_snake::timer::Ticker;

#[derive(Debug, Parser)]
#[command(version, about = "Snake on a wrapping 20x20 grid")]
struct Cli {
    /// Seed the session RNG for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Resolve the theme before raw mode so the warning stays readable.
    let theme = match theme::load() {
        Ok(theme) => theme,
        Err(error) => {
            eprintln!("warning: ignoring user theme: {error}");
            Theme::default()
        }
    };

    let mut session = TerminalSession::enter()?;
    run(session.terminal_mut(), cli.seed, &theme)
}

/// The strictly sequential dispatch loop.
///
/// One thread owns the current `GameState` value; ticks from the timer
/// and key events are applied to it one at a time, each replacing the
/// state wholesale. The timer is stopped when the game ends and a fresh
/// one is started on restart, so a tick can never land on a state it was
/// not scheduled against.
fn run(terminal: &mut AppTerminal, seed: Option<u64>, theme: &Theme) -> io::Result<()> {
    let mut state = new_state(seed);
    let mut ticker = Some(Ticker::start(TICK_INTERVAL));

    loop {
        terminal.draw(|frame| renderer::render(frame, &state, theme))?;

        if let Some(active) = &ticker {
            while active.try_tick() {
                state = state.ticked();
            }
        }

        if state.game_over {
            if let Some(active) = ticker.take() {
                active.stop();
            }
        }

        match poll_input()? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Restart) => {
                // Cancel the old timer before starting the new one.
                if let Some(active) = ticker.take() {
                    active.stop();
                }
                state = state.restart();
                ticker = Some(Ticker::start(TICK_INTERVAL));
            }
            Some(GameInput::Direction(direction)) => {
                state = state.with_direction(direction);
            }
            None => {}
        }
    }

    Ok(())
}

fn new_state(seed: Option<u64>) -> GameState {
    match seed {
        Some(seed) => GameState::new_with_seed(GRID, seed),
        None => GameState::new(GRID),
    }
}

fn poll_input() -> io::Result<Option<GameInput>> {
    if !event::poll(INPUT_POLL_INTERVAL)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(input::map_key_event(key)),
        _ => Ok(None),
    }
}
