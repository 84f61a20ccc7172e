//! Frame-driven simulation module
//!
//! All gameplay logic lives here:
//! - One tick per display frame, no wall-clock time
//! - All randomness from the state's seeded RNG
//! - Entities linked by stable ID, removed explicitly
//! - No rendering, audio or storage dependencies

pub mod bubble;
pub mod collision;
pub mod enemy;
pub mod fruit;
pub mod level;
pub mod motion;
pub mod progression;
pub mod state;
pub mod tick;

pub use collision::{Rect, distance, intersects};
pub use level::{LayoutPattern, generate_level};
pub use progression::{LevelPalette, level_palette};
pub use state::{
    Body, Bubble, Enemy, EnemyState, Fruit, FruitKind, GameEvent, GamePhase, GameState, Platform,
    Player, Session,
};
pub use tick::{TickInput, tick};
