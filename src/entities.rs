use log::{debug, info};

use crate::constants::*;
use crate::error::GameError;
use crate::game::World;
use crate::obstacles::{ObstacleId, ObstacleRegistry};
use crate::physics::Kinematics;
use crate::scenario::gun_available;
use crate::scenery::GameOverBanner;
use crate::scheduler::{Actor, Step};
use crate::sprites::Frame;
use crate::types::{BoundingBox, Position};

// --- Spaceship ---
enum ShipState {
    Flying,
    GameOver(GameOverBanner),
}

/// Player ship: reads controls, moves, fires and dies on contact.
pub struct Spaceship {
    position: Position,
    kinematics: Kinematics,
    frames: Vec<Frame>,
    frame_index: usize,
    drawn: Option<(Position, Frame)>,
    state: ShipState,
}

impl Spaceship {
    pub fn new(row: f64, column: f64, frames: Vec<Frame>) -> Result<Self, GameError> {
        if frames.is_empty() {
            return Err(GameError::EmptyFrame("rocket"));
        }
        Ok(Spaceship {
            position: Position::new(row, column),
            kinematics: Kinematics::new(SHIP_ROW_SPEED_LIMIT, SHIP_COLUMN_SPEED_LIMIT, SHIP_FADING),
            frames,
            frame_index: 0,
            drawn: None,
            state: ShipState::Flying,
        })
    }

    #[cfg(test)]
    pub fn position(&self) -> Position {
        self.position
    }

    #[cfg(test)]
    pub fn is_game_over(&self) -> bool {
        matches!(self.state, ShipState::GameOver(_))
    }

    fn crash(&mut self, world: &mut World, obstacle: ObstacleId) -> Result<Step, GameError> {
        info!("Spaceship crashed into obstacle {:?} in {}. Game over.", obstacle, world.year);
        world.obstacles.mark_hit(obstacle);
        world.spawn(Explosion::new(world.sprites.explosion.clone(), self.position));

        let mut banner = GameOverBanner::centered(world.sprites.game_over, world.canvas.height(), world.canvas.width());
        let step = banner.step(world);
        self.state = ShipState::GameOver(banner);
        step
    }
}

impl Actor for Spaceship {
    fn name(&self) -> &'static str {
        "spaceship"
    }

    fn step(&mut self, world: &mut World) -> Result<Step, GameError> {
        if let ShipState::GameOver(banner) = &mut self.state {
            return banner.step(world);
        }

        if let Some((position, frame)) = self.drawn.take() {
            world.canvas.draw_frame(position.row, position.column, frame.text, true)?;
        }

        let (row, column) = self.position.cell();
        if let Some(obstacle) = world.obstacles.query_hit(&BoundingBox::point(row, column)) {
            let id = obstacle.id;
            return self.crash(world, id);
        }

        let frame = self.frames[self.frame_index];
        self.frame_index = (self.frame_index + 1) % self.frames.len();

        let controls = world.controls;
        let (row_speed, column_speed) = self.kinematics.update(controls.rows_direction, controls.columns_direction)?;

        let borders = world.canvas.borders();
        let moved = self.position.add(row_speed, column_speed);
        let row = moved.row.max(borders.row_min as f64).min((borders.row_max - frame.rows) as f64);
        let column = moved.column.max(borders.column_min as f64).min((borders.column_max - frame.columns) as f64);
        self.position = Position::new(row, column);

        if controls.fire && gun_available(world.year) {
            world.spawn(Projectile::new(self.position.add(0.0, SHIP_GUN_OFFSET)));
        }

        world.canvas.draw_frame(row, column, frame.text, false)?;
        self.drawn = Some((self.position, frame));
        Ok(Step::Continue)
    }
}

// --- Projectile ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireState {
    Flash,
    Glow,
    Launch,
    Rising,
    Exploded,
    Exited,
}

/// Plasma shot flying in a straight line until it hits garbage or leaves the canvas.
pub struct Projectile {
    position: Position,
    row_speed: f64,
    column_speed: f64,
    symbol: char,
    state: FireState,
}

impl Projectile {
    pub fn new(start: Position) -> Self {
        Projectile::with_speed(start, FIRE_ROW_SPEED, FIRE_COLUMN_SPEED)
    }

    pub fn with_speed(start: Position, row_speed: f64, column_speed: f64) -> Self {
        let symbol = if column_speed != 0.0 { '-' } else { '|' };
        Projectile { position: start, row_speed, column_speed, symbol, state: FireState::Flash }
    }

    #[cfg(test)]
    pub fn state(&self) -> FireState {
        self.state
    }

    fn advance(&mut self) {
        self.position = self.position.add(self.row_speed, self.column_speed);
    }

    fn fly(&mut self, world: &mut World) -> Result<Step, GameError> {
        let borders = world.canvas.borders();
        let Position { row, column } = self.position;
        let inside = (borders.row_min as f64) < row
            && row < borders.row_max as f64
            && (borders.column_min as f64) < column
            && column < borders.column_max as f64;
        if !inside {
            self.state = FireState::Exited;
            return Ok(Step::Done);
        }

        let (cell_row, cell_column) = self.position.cell();
        if let Some(obstacle) = world.obstacles.query_hit(&BoundingBox::point(cell_row, cell_column)) {
            let id = obstacle.id;
            debug!("Projectile hit obstacle {:?} at ({}, {}).", id, cell_row, cell_column);
            world.obstacles.mark_hit(id);
            world.spawn(Explosion::new(world.sprites.explosion.clone(), self.position));
            self.state = FireState::Exploded;
            return Ok(Step::Done);
        }

        world.canvas.draw_frame(row, column, &self.symbol.to_string(), false)?;
        Ok(Step::Continue)
    }
}

impl Actor for Projectile {
    fn name(&self) -> &'static str {
        "projectile"
    }

    fn step(&mut self, world: &mut World) -> Result<Step, GameError> {
        let Position { row, column } = self.position;
        match self.state {
            FireState::Flash => {
                world.canvas.draw_frame(row, column, "*", false)?;
                self.state = FireState::Glow;
                return Ok(Step::Continue);
            }
            FireState::Glow => {
                world.canvas.draw_frame(row, column, "0", false)?;
                self.state = FireState::Launch;
                return Ok(Step::Continue);
            }
            FireState::Launch => {
                world.canvas.draw_frame(row, column, "0", true)?;
                world.canvas.beep()?;
                self.advance();
                self.state = FireState::Rising;
            }
            FireState::Rising => {
                world.canvas.draw_frame(row, column, &self.symbol.to_string(), true)?;
                self.advance();
            }
            FireState::Exploded | FireState::Exited => return Ok(Step::Done),
        }
        self.fly(world)
    }
}

// --- Garbage ---
/// A piece of space garbage falling straight down, owning one obstacle.
pub struct Garbage {
    row: f64,
    column: f64,
    speed: f64,
    frame: Frame,
    obstacle: ObstacleId,
    drawn: bool,
    reaped: bool,
}

impl Garbage {
    /// Registers the obstacle right away, so it is live as soon as the actor exists.
    pub fn new(obstacles: &mut ObstacleRegistry, column: i32, frame: Frame) -> Self {
        Garbage::with_speed(obstacles, column, frame, GARBAGE_SPEED)
    }

    pub fn with_speed(obstacles: &mut ObstacleRegistry, column: i32, frame: Frame, speed: f64) -> Self {
        let obstacle = obstacles.register(BoundingBox::new(0, column, frame.rows, frame.columns));
        Garbage {
            row: 0.0,
            column: column as f64,
            speed,
            frame,
            obstacle,
            drawn: false,
            reaped: false,
        }
    }

    #[cfg(test)]
    pub fn obstacle(&self) -> ObstacleId {
        self.obstacle
    }

    #[cfg(test)]
    pub fn row(&self) -> f64 {
        self.row
    }

    fn fall(&mut self, world: &mut World) -> Result<Step, GameError> {
        let was_drawn = self.drawn;
        if was_drawn {
            world.canvas.draw_frame(self.row, self.column, self.frame.text, true)?;
            self.drawn = false;
        }

        // Marked before its first draw counts too
        if world.obstacles.consume_hit_marker(self.obstacle) {
            debug!("Garbage {} shot down at row {}.", self.frame.name, self.row);
            return Ok(Step::Done);
        }

        if was_drawn {
            self.row += self.speed;
            world.obstacles.move_to(self.obstacle, self.row.round() as i32, self.column as i32);
        }

        if self.row >= world.canvas.height() as f64 {
            return Ok(Step::Done);
        }

        world.canvas.draw_frame(self.row, self.column, self.frame.text, false)?;
        self.drawn = true;
        Ok(Step::Continue)
    }
}

impl Actor for Garbage {
    fn name(&self) -> &'static str {
        "garbage"
    }

    fn step(&mut self, world: &mut World) -> Result<Step, GameError> {
        if self.reaped {
            return Ok(Step::Done);
        }
        let result = self.fall(world);
        // Every exit path, errors included, releases the obstacle
        if !matches!(result, Ok(Step::Continue)) {
            world.obstacles.unregister(self.obstacle);
            self.reaped = true;
        }
        result
    }
}

// --- Explosion ---
/// Four-frame burst centered on the impact point.
pub struct Explosion {
    frames: Vec<Frame>,
    corner: Position,
    shown: Option<usize>,
    next: usize,
}

impl Explosion {
    pub fn new(frames: Vec<Frame>, center: Position) -> Self {
        let (rows, columns) = frames.first().map_or((0, 0), |frame| (frame.rows, frame.columns));
        let corner = Position::new(center.row - rows as f64 / 2.0, center.column - columns as f64 / 2.0);
        Explosion { frames, corner, shown: None, next: 0 }
    }
}

impl Actor for Explosion {
    fn name(&self) -> &'static str {
        "explosion"
    }

    fn step(&mut self, world: &mut World) -> Result<Step, GameError> {
        if let Some(index) = self.shown.take() {
            world.canvas.draw_frame(self.corner.row, self.corner.column, self.frames[index].text, true)?;
            self.next = index + 1;
            return Ok(Step::Continue);
        }

        let Some(frame) = self.frames.get(self.next) else {
            return Ok(Step::Done);
        };
        if self.next == 0 {
            world.canvas.beep()?;
        }
        world.canvas.draw_frame(self.corner.row, self.corner.column, frame.text, false)?;
        self.shown = Some(self.next);
        Ok(Step::Continue)
    }
}
