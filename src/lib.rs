//! Bubble Pop - a single-screen platform arcade game
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (motion, bubbles, enemies, fruit, progression)
//! - `game`: Frame driver, phase handling and the high-score handoff
//! - `highscores` / `persistence`: Top-3 record table and its storage boundary
//! - `audio`: Mapping from simulation events to sound effects
//! - `settings`: Player-facing configuration
//! - `autopilot`: Demo-mode input for unattended runs

pub mod audio;
pub mod autopilot;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use game::{Game, Key};
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
///
/// Units are pixels and simulation ticks (one tick per display frame).
pub mod consts {
    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 512.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Downward acceleration applied to every falling body (pixels/tick²)
    pub const GRAVITY: f32 = 0.5;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 32.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const JUMP_VELOCITY: f32 = -12.0;
    /// Session start and respawn-after-hit position
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 300.0;
    /// Height the player is dropped at after a level clear (x is centered)
    pub const PLAYER_SAFE_Y: f32 = 400.0;
    pub const STARTING_LIVES: u32 = 3;

    /// Bubble defaults
    pub const BUBBLE_SPEED: f32 = 8.0;
    pub const BUBBLE_RADIUS: f32 = 16.0;
    /// Empty bubbles pop after 3 seconds
    pub const BUBBLE_LIFETIME: u32 = 180;
    /// Bubbles holding an enemy last 15 seconds
    pub const BUBBLE_LIFETIME_CAPTURED: u32 = 900;
    /// Ticks of straight flight before the bubble starts to float
    pub const BUBBLE_FLOAT_DELAY: u32 = 30;
    /// Horizontal velocity multiplier per tick while floating
    pub const BUBBLE_DRAG: f32 = 0.95;
    pub const BUBBLE_RISE_SPEED: f32 = 1.5;
    /// Extra reach beyond the bubble radius for catching an enemy
    pub const CAPTURE_TOLERANCE: f32 = 10.0;
    /// Extra reach beyond the bubble radius for the player popping it
    pub const POP_TOLERANCE: f32 = 20.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 28.0;
    pub const ENEMY_HEIGHT: f32 = 28.0;
    pub const ENEMY_BASE_SPEED: f32 = 2.0;
    /// Speed added per level above the first
    pub const ENEMY_SPEED_PER_LEVEL: f32 = 0.3;
    pub const MAX_ENEMIES: usize = 8;
    /// Probability that a spawned enemy carries an extra life
    pub const LIFE_ENEMY_CHANCE: f64 = 0.15;
    /// Score awarded alongside the extra life
    pub const LIFE_BONUS_SCORE: u64 = 500;

    /// Fruit defaults
    pub const FRUIT_SIZE: f32 = 24.0;
    /// Uncollected fruit vanishes after 10 seconds
    pub const FRUIT_LIFETIME: u32 = 600;
    /// Age after which renderers should blink the fruit
    pub const FRUIT_BLINK_AGE: u32 = 480;

    /// Level layout
    pub const PLATFORM_HEIGHT: f32 = 16.0;
    pub const PLATFORM_ROWS: [f32; 6] = [50.0, 120.0, 200.0, 280.0, 360.0, 440.0];
    pub const BASE_PLATFORM_COUNT: u32 = 12;
    pub const MIN_PLATFORMS: usize = 6;
    /// Points per level number awarded on clear
    pub const LEVEL_CLEAR_BONUS: u64 = 100;
}
