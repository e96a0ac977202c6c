use std::time::Duration;

// --- Timing ---
pub const TIC_TIMEOUT: Duration = Duration::from_millis(100);
pub const YEAR_TICKS: u32 = 15; // Ticks per in-game year

// --- Scenario ---
pub const START_YEAR: u32 = 1957;
pub const GUN_AVAILABLE_YEAR: u32 = 2020;
pub const SCENARIO_END_YEAR: u32 = 2100; // No debris from this year on

// --- Canvas layout ---
pub const BORDER_OFFSET: i32 = 1;
pub const YEAR_BLOCK_WIDTH: i32 = 50;

// --- Ship ---
pub const SHIP_ROW_SPEED_LIMIT: f64 = 2.0;
pub const SHIP_COLUMN_SPEED_LIMIT: f64 = 2.0;
pub const SHIP_FADING: f64 = 0.8;
pub const SHIP_GUN_OFFSET: f64 = 2.0; // Columns right of the ship corner

// --- Physics ---
pub const ACCELERATION_FACTOR: f64 = 0.75;
pub const SPEED_DEAD_ZONE: f64 = 0.1;

// --- Projectile ---
pub const FIRE_ROW_SPEED: f64 = -0.3;
pub const FIRE_COLUMN_SPEED: f64 = 0.0;

// --- Debris ---
pub const GARBAGE_SPEED: f64 = 0.5;

// --- Stars ---
pub const STAR_SYMBOLS: [char; 4] = ['+', '*', '.', ':'];
pub const MIN_STARS: usize = 75;
pub const MAX_STARS: usize = 150;
pub const MAX_STAR_OFFSET_TICKS: u32 = 30;

// --- Debug mode ---
pub const DEBUG_WIDTH: u16 = 80;
pub const DEBUG_HEIGHT: u16 = 24;
pub const LOG_FILE: &str = "space-garbage.log";
