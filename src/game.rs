#![warn(clippy::all, clippy::pedantic)]

use std::time::Duration;

// Game board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Spawn position: fixed column, one row above the visible board
pub const SPAWN_X: i32 = 3;
pub const SPAWN_Y: i32 = -1;

// Horizontal offsets tried in order when a rotation collides
pub const WALL_KICK_OFFSETS: [i32; 5] = [0, -1, 1, -2, 2];

// Line clear scoring (multiplied by the current level)
pub const POINTS_SINGLE: u32 = 100;
pub const POINTS_DOUBLE: u32 = 300;
pub const POINTS_TRIPLE: u32 = 500;
pub const POINTS_TETRIS: u32 = 800;

// Level progression
pub const STARTING_LEVEL: u32 = 1;
pub const POINTS_PER_LEVEL: u32 = 1000;

// Speed setting bounds, only interpreted by the gravity scheduler
pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 9;
pub const DEFAULT_SPEED: u8 = 5;

// Gravity interval bounds in milliseconds
const GRAVITY_BASE_MS: u64 = 1100;
const GRAVITY_STEP_MS: u64 = 100;
const GRAVITY_FLOOR_MS: u64 = 200;

/// Base points for clearing `lines` rows at once. Anything outside 1..=4 scores nothing.
#[must_use]
pub fn line_clear_points(lines: usize) -> u32 {
    match lines {
        1 => POINTS_SINGLE,
        2 => POINTS_DOUBLE,
        3 => POINTS_TRIPLE,
        4 => POINTS_TETRIS,
        _ => 0,
    }
}

#[must_use]
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + STARTING_LEVEL
}

/// Delay between gravity ticks for a speed setting.
///
/// Speed 1 is the slowest (1000ms); speed 9 is the fastest (200ms).
#[must_use]
pub fn gravity_interval(speed: u8) -> Duration {
    let ms = GRAVITY_BASE_MS
        .saturating_sub(u64::from(speed) * GRAVITY_STEP_MS)
        .max(GRAVITY_FLOOR_MS);
    Duration::from_millis(ms)
}
