//! Level setup, level-clear detection and per-level presentation data

use super::enemy;
use super::level::generate_level;
use super::state::{GameEvent, GameState, Player};
use crate::consts::LEVEL_CLEAR_BONUS;

/// Color scheme for a level, cycling every eight levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelPalette {
    pub platform: &'static str,
    pub platform_edge: &'static str,
    pub border: &'static str,
}

const PALETTES: [LevelPalette; 8] = [
    LevelPalette { platform: "#00aa00", platform_edge: "#00ff00", border: "#00ff88" },
    LevelPalette { platform: "#0066cc", platform_edge: "#00aaff", border: "#00aaff" },
    LevelPalette { platform: "#aa00aa", platform_edge: "#ff00ff", border: "#ff00ff" },
    LevelPalette { platform: "#cc6600", platform_edge: "#ff9900", border: "#ff9900" },
    LevelPalette { platform: "#aa0000", platform_edge: "#ff4444", border: "#ff4444" },
    LevelPalette { platform: "#006666", platform_edge: "#00cccc", border: "#00cccc" },
    LevelPalette { platform: "#666600", platform_edge: "#cccc00", border: "#ffff00" },
    LevelPalette { platform: "#663399", platform_edge: "#9966ff", border: "#9966ff" },
];

/// Palette for a level (1-based)
pub fn level_palette(level: u32) -> LevelPalette {
    PALETTES[(level.saturating_sub(1) as usize) % PALETTES.len()]
}

/// Bonus for reaching `new_level`
pub fn level_clear_bonus(new_level: u32) -> u64 {
    new_level as u64 * LEVEL_CLEAR_BONUS
}

/// Build platforms and enemies for `level`.
///
/// Bubbles go with the old enemy set; fruit is left alone.
pub fn start_level(state: &mut GameState, level: u32) {
    state.session.level = level;
    state.bubbles.clear();
    state.platforms = generate_level(level, &mut state.rng);
    enemy::spawn_batch(state, level);
}

/// Move to the next level once every enemy is gone.
///
/// Bubbles are cleared; fruit stays behind so it can still be collected.
/// Returns true if a level was cleared.
pub fn check_level_clear(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    if !state.enemies.is_empty() {
        return false;
    }

    let next = state.session.level + 1;
    let bonus = level_clear_bonus(next);
    state.session.score += bonus;
    start_level(state, next);
    state.player.body.place_at(Player::safe_point());

    log::info!("Level {} reached, bonus {}", next, bonus);
    events.push(GameEvent::LevelCleared { level: next, bonus });
    true
}
