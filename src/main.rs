mod collision;
mod config;
mod constants;
mod entities;
mod error;
mod game;
mod obstacles;
mod physics;
mod rendering;
mod scenario;
mod scenery;
mod scheduler;
mod sprites;
mod terminal_io;
mod types;

use std::collections::HashMap;
use std::env;
use std::io;

use crossterm::{
    cursor::{Hide, Show},
    event::{Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, size},
};
use log::{error, info, LevelFilter};

use crate::config::{DebugScreen, GameConfig};
use crate::constants::LOG_FILE;
use crate::error::GameError;
use crate::game::Game;
use crate::rendering::{Canvas, OutputTarget};
use crate::terminal_io::{InputSource, SimulatedInput};

/// Key presses replayed in `--debug` runs, by tick.
fn debug_script() -> SimulatedInput {
    let mut events: HashMap<u64, Vec<Event>> = HashMap::new();
    let script = [
        (1, KeyCode::Up),
        (2, KeyCode::Right),
        (3, KeyCode::Char(' ')),
        (4, KeyCode::Left),
        (300, KeyCode::Char('q')),
    ];
    for (tick, code) in script {
        events.entry(tick).or_default().push(Event::Key(code.into()));
    }
    SimulatedInput::new(events)
}

fn run_debug(screen: DebugScreen, config: &GameConfig) -> Result<(), GameError> {
    info!("Debug mode enabled, screen {}x{}.", screen.width, screen.height);
    let canvas = Canvas::in_memory(screen.width, screen.height).with_frame_logging(true);
    let mut game = Game::new(canvas, InputSource::Simulated(debug_script()), config)?;
    game.run()
}

fn run_terminal(config: &GameConfig) -> Result<(), GameError> {
    info!("Attempting to enable raw mode.");
    enable_raw_mode().map_err(|e| { error!("Failed to enable raw mode: {}", e); e })?;

    let result = play(config);

    // Restore the terminal even when the game failed
    if let Err(e) = execute!(io::stdout(), Show) {
        error!("Failed to show cursor on exit: {}", e);
    }
    disable_raw_mode().map_err(|e| { error!("Failed to disable raw mode on exit: {}", e); e })?;
    result
}

fn play(config: &GameConfig) -> Result<(), GameError> {
    let (width, height) = size().map_err(|e| { error!("Failed to get terminal size: {}", e); e })?;
    info!("Terminal size: {}x{}", width, height);

    let mut canvas = Canvas::new(OutputTarget::Stdout(io::stdout()), width, height);
    canvas.target_mut().execute_other_command(Hide).map_err(|e| { error!("Failed to hide cursor: {}", e); e })?;

    let mut game = Game::new(canvas, InputSource::Terminal, config)?;
    game.run()
}

fn main() -> Result<(), GameError> {
    simple_logging::log_to_file(LOG_FILE, LevelFilter::Info)?;
    info!("Starting space-garbage.");

    let args: Vec<String> = env::args().collect();
    let config = GameConfig::from_args(&args).map_err(|e| { error!("Bad arguments: {}", e); e })?;

    let result = match config.debug {
        Some(screen) => run_debug(screen, &config),
        None => run_terminal(&config),
    };
    match &result {
        Ok(()) => info!("Exiting space-garbage."),
        Err(e) => error!("space-garbage stopped: {}", e),
    }
    result
}
