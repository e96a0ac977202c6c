use std::thread;
use std::time::Duration;

use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::constants::*;
use crate::entities::Spaceship;
use crate::error::GameError;
use crate::obstacles::ObstacleRegistry;
use crate::rendering::Canvas;
use crate::scenery::{GarbageSpawner, ObstacleOverlay, Star, YearTicker};
use crate::scheduler::{Actor, Scheduler};
use crate::sprites::Sprites;
use crate::terminal_io::InputSource;
use crate::types::Controls;

/// Everything actors share: the canvas, the obstacles, the clock and input.
pub struct World {
    pub canvas: Canvas,
    pub obstacles: ObstacleRegistry,
    pub controls: Controls,
    pub year: u32,
    pub rng: StdRng,
    pub sprites: Sprites,
    pub tick_interval: Duration,
    spawned: Vec<Box<dyn Actor>>,
}

impl World {
    pub fn new(canvas: Canvas, sprites: Sprites, rng: StdRng, year: u32, tick_interval: Duration) -> Self {
        World {
            canvas,
            obstacles: ObstacleRegistry::new(),
            controls: Controls::default(),
            year,
            rng,
            sprites,
            tick_interval,
            spawned: Vec::new(),
        }
    }

    /// Queue a new actor; the scheduler runs it within the current tick.
    pub fn spawn(&mut self, actor: impl Actor + 'static) {
        debug!("Spawning {}.", actor.name());
        self.spawned.push(Box::new(actor));
    }

    pub fn take_spawned(&mut self) -> Vec<Box<dyn Actor>> {
        std::mem::take(&mut self.spawned)
    }

    #[cfg(test)]
    pub fn pending_spawns(&self) -> Vec<&'static str> {
        self.spawned.iter().map(|actor| actor.name()).collect()
    }
}

pub struct Game {
    world: World,
    scheduler: Scheduler,
    input: InputSource,
    max_ticks: Option<u64>,
}

impl Game {
    pub fn new(mut canvas: Canvas, input: InputSource, config: &GameConfig) -> Result<Self, GameError> {
        let sprites = Sprites::load().map_err(|e| { error!("Failed to load sprites: {}", e); e })?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        canvas.clear()?;
        canvas.draw_border()?;

        let mut world = World::new(canvas, sprites, rng, config.start_year, config.tick_interval);
        let mut scheduler = Scheduler::new();

        scheduler.add(Box::new(YearTicker::new(world.canvas.width())));

        let row_center = (world.canvas.height() / 2) as f64;
        let column_center = (world.canvas.width() / 2) as f64;
        let spaceship = Spaceship::new(row_center, column_center, world.sprites.rocket.clone())?;
        scheduler.add(Box::new(spaceship));
        scheduler.add(Box::new(GarbageSpawner::new()));

        let borders = world.canvas.borders();
        let stars_count = world.rng.gen_range(MIN_STARS..=MAX_STARS);
        for _ in 0..stars_count {
            scheduler.add(Box::new(Star::random(&mut world.rng, borders, config.tick_interval)));
        }

        if config.show_obstacles {
            scheduler.add(Box::new(ObstacleOverlay::new()));
        }
        info!(
            "Game ready: {}x{} canvas, {} stars, starting in {}.",
            world.canvas.width(),
            world.canvas.height(),
            stars_count,
            world.year
        );

        Ok(Game { world, scheduler, input, max_ticks: config.max_ticks })
    }

    /// Tick until the player quits, the tick limit is hit or an actor fails.
    pub fn run(&mut self) -> Result<(), GameError> {
        loop {
            let tick = self.scheduler.ticks();
            if self.max_ticks.is_some_and(|max| tick >= max) {
                info!("Reached tick limit {}.", tick);
                break;
            }

            let controls = self.input.read_controls(tick)?;
            if controls.quit {
                info!("Stopping on player request at tick {}.", tick);
                break;
            }
            self.world.controls = controls;

            let report = self.scheduler.tick(&mut self.world).map_err(|e| { error!("Game loop stopped: {}", e); e })?;
            if report.spawned > 0 || report.finished > 0 {
                debug!(
                    "Tick {}: {} steps, {} spawned, {} finished.",
                    tick, report.steps, report.spawned, report.finished
                );
            }
            thread::sleep(self.world.tick_interval);
        }
        info!("Game loop ended in {} after {} ticks.", self.world.year, self.scheduler.ticks());
        Ok(())
    }

    #[cfg(test)]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }
}

#[cfg(test)]
pub fn test_world(width: u16, height: u16) -> World {
    World::new(
        Canvas::in_memory(width, height),
        Sprites::load().unwrap(),
        StdRng::seed_from_u64(7),
        START_YEAR,
        TIC_TIMEOUT,
    )
}
