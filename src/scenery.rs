use std::time::Duration;

use log::{info, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::constants::*;
use crate::entities::Garbage;
use crate::error::GameError;
use crate::game::World;
use crate::rendering::Style;
use crate::scenario::{garbage_delay_ticks, phrase_for};
use crate::scheduler::{Actor, Sleep, Step};
use crate::sprites::Frame;
use crate::types::Borders;

/// Whole ticks needed to cover `span`, at least one.
pub fn ticks_for(span: Duration, tick_interval: Duration) -> u32 {
    if tick_interval.is_zero() {
        return 1;
    }
    let ticks = span.as_nanos() / tick_interval.as_nanos();
    ticks.clamp(1, u32::MAX as u128) as u32
}

/// Dim, normal, bold, normal; durations stay stable in real time.
pub fn blinking_phases(tick_interval: Duration) -> [(u32, Style); 4] {
    [
        (ticks_for(Duration::from_millis(2000), tick_interval), Style::Dim),
        (ticks_for(Duration::from_millis(300), tick_interval), Style::Normal),
        (ticks_for(Duration::from_millis(500), tick_interval), Style::Bold),
        (ticks_for(Duration::from_millis(300), tick_interval), Style::Normal),
    ]
}

// --- Stars ---
enum StarState {
    Start,
    Blinking(usize),
}

pub struct Star {
    row: i32,
    column: i32,
    symbol: char,
    offset_ticks: u32,
    phases: [(u32, Style); 4],
    state: StarState,
    sleep: Sleep,
}

impl Star {
    pub fn new(row: i32, column: i32, symbol: char, offset_ticks: u32, tick_interval: Duration) -> Self {
        Star {
            row,
            column,
            symbol,
            offset_ticks,
            phases: blinking_phases(tick_interval),
            state: StarState::Start,
            sleep: Sleep::default(),
        }
    }

    /// A star at a random spot inside the borders, starting at a random phase offset.
    pub fn random(rng: &mut impl Rng, borders: Borders, tick_interval: Duration) -> Self {
        let row = rng.gen_range(borders.row_min..borders.row_max.max(borders.row_min + 1));
        let column = rng.gen_range(borders.column_min..borders.column_max.max(borders.column_min + 1));
        let symbol = STAR_SYMBOLS[rng.gen_range(0..STAR_SYMBOLS.len())];
        let offset = rng.gen_range(0..=MAX_STAR_OFFSET_TICKS);
        Star::new(row, column, symbol, offset, tick_interval)
    }
}

impl Actor for Star {
    fn name(&self) -> &'static str {
        "star"
    }

    fn step(&mut self, world: &mut World) -> Result<Step, GameError> {
        loop {
            if self.sleep.tick() {
                return Ok(Step::Continue);
            }
            match self.state {
                StarState::Start => {
                    let (_, style) = self.phases[0];
                    world.canvas.write_cell(self.row, self.column, self.symbol, style)?;
                    self.sleep.set(self.offset_ticks);
                    self.state = StarState::Blinking(0);
                }
                StarState::Blinking(phase) => {
                    let (ticks, style) = self.phases[phase];
                    world.canvas.write_cell(self.row, self.column, self.symbol, style)?;
                    self.sleep.set(ticks);
                    self.state = StarState::Blinking((phase + 1) % self.phases.len());
                }
            }
        }
    }
}

// --- Year ---
/// Year counter with the story line for the year, top-right corner.
pub struct YearTicker {
    origin_row: i32,
    origin_column: i32,
    started: bool,
    elapsed: u32,
    phrase: Option<&'static str>,
}

impl YearTicker {
    pub fn new(canvas_width: i32) -> Self {
        YearTicker {
            origin_row: BORDER_OFFSET,
            origin_column: canvas_width - YEAR_BLOCK_WIDTH - 2 * BORDER_OFFSET,
            started: false,
            elapsed: 0,
            phrase: None,
        }
    }

    fn phrase_position(&self, phrase: &str) -> (f64, f64) {
        let row = self.origin_row + 2 * BORDER_OFFSET;
        let column = self.origin_column + YEAR_BLOCK_WIDTH - phrase.chars().count() as i32 - BORDER_OFFSET;
        (row as f64, column as f64)
    }

    fn show(&mut self, world: &mut World) -> Result<(), GameError> {
        let year = world.year.to_string();
        let row = self.origin_row + BORDER_OFFSET;
        let column = self.origin_column + YEAR_BLOCK_WIDTH - year.len() as i32 - BORDER_OFFSET;
        world.canvas.draw_frame_styled(row as f64, column as f64, &year, false, Style::Bold)?;

        self.phrase = phrase_for(world.year);
        if let Some(phrase) = self.phrase {
            let (row, column) = self.phrase_position(phrase);
            world.canvas.draw_frame(row, column, phrase, false)?;
        }
        Ok(())
    }

    fn hide_phrase(&mut self, world: &mut World) -> Result<(), GameError> {
        if let Some(phrase) = self.phrase.take() {
            let (row, column) = self.phrase_position(phrase);
            world.canvas.draw_frame(row, column, phrase, true)?;
        }
        Ok(())
    }
}

impl Actor for YearTicker {
    fn name(&self) -> &'static str {
        "year"
    }

    fn step(&mut self, world: &mut World) -> Result<Step, GameError> {
        if !self.started {
            self.started = true;
            self.show(world)?;
        }

        self.elapsed += 1;
        if self.elapsed == YEAR_TICKS {
            self.elapsed = 0;
            self.hide_phrase(world)?;
            world.year += 1;
            info!("Year {} begins.", world.year);
            self.show(world)?;
        }
        Ok(Step::Continue)
    }
}

// --- Garbage spawner ---
/// Drops garbage at the pace the current year dictates.
#[derive(Default)]
pub struct GarbageSpawner {
    sleep: Sleep,
}

impl GarbageSpawner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Actor for GarbageSpawner {
    fn name(&self) -> &'static str {
        "garbage spawner"
    }

    fn step(&mut self, world: &mut World) -> Result<Step, GameError> {
        loop {
            if self.sleep.tick() {
                return Ok(Step::Continue);
            }
            let Some(delay) = garbage_delay_ticks(world.year) else {
                self.sleep.set(1);
                continue;
            };

            let borders = world.canvas.borders();
            // Canvases narrower than the border still get a one-column range
            let column_max = borders.column_max.max(borders.column_min);
            let column = world.rng.gen_range(borders.column_min..=column_max);
            let Some(frame) = world.sprites.garbage.choose(&mut world.rng).copied() else {
                warn!("No garbage frames loaded, spawner stops.");
                return Ok(Step::Done);
            };
            let garbage = Garbage::new(&mut world.obstacles, column, frame);
            world.spawn(garbage);
            self.sleep.set(delay.max(1));
        }
    }
}

// --- Game over ---
/// Static banner redrawn in place every tick.
pub struct GameOverBanner {
    row: f64,
    column: f64,
    frame: Frame,
}

impl GameOverBanner {
    pub fn centered(frame: Frame, canvas_height: i32, canvas_width: i32) -> Self {
        GameOverBanner {
            row: (canvas_height / 2 - frame.rows / 2) as f64,
            column: (canvas_width / 2 - frame.columns / 2) as f64,
            frame,
        }
    }
}

impl Actor for GameOverBanner {
    fn name(&self) -> &'static str {
        "game over"
    }

    fn step(&mut self, world: &mut World) -> Result<Step, GameError> {
        world.canvas.draw_frame(self.row, self.column, self.frame.text, false)?;
        Ok(Step::Continue)
    }
}

// --- Obstacle overlay ---
/// Debug view: a frame around every registered obstacle.
#[derive(Default)]
pub struct ObstacleOverlay {
    drawn: Vec<(i32, i32, String)>,
}

impl ObstacleOverlay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Actor for ObstacleOverlay {
    fn name(&self) -> &'static str {
        "obstacle overlay"
    }

    fn step(&mut self, world: &mut World) -> Result<Step, GameError> {
        for (row, column, frame) in self.drawn.drain(..) {
            world.canvas.draw_frame(row as f64, column as f64, &frame, true)?;
        }
        self.drawn = world.obstacles.iter().map(|obstacle| obstacle.bounding_box_frame()).collect();
        for (row, column, frame) in &self.drawn {
            world.canvas.draw_frame(*row as f64, *column as f64, frame, false)?;
        }
        Ok(Step::Continue)
    }
}
