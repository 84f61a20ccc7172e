//! Demo-mode player
//!
//! Produces held-button input from the current state so the game can run
//! unattended: pop captured enemies first, then grab fruit, otherwise chase
//! the nearest free enemy and spray bubbles at it.

use glam::Vec2;

use crate::sim::{GameState, TickInput};

/// Horizontal slack before the autopilot bothers to walk
const DEAD_ZONE: f32 = 6.0;
/// Target must be this far above the player before it jumps
const JUMP_THRESHOLD: f32 = 40.0;

/// Pick this tick's input for the demo player
pub fn autopilot_input(state: &GameState) -> TickInput {
    let me = state.player.body.center();
    let occupied_bubble = nearest(me, state.bubbles.iter().filter(|b| b.holds_enemy()).map(|b| b.pos));
    let fruit = nearest(me, state.fruits.iter().map(|f| f.body.center()));
    let enemy = nearest(me, state.enemies.iter().filter(|e| e.is_free()).map(|e| e.body.center()));

    let mut input = TickInput::default();
    let Some(target) = occupied_bubble.or(fruit).or(enemy) else {
        return input;
    };

    let dx = target.x - me.x;
    if dx < -DEAD_ZONE {
        input.move_left = true;
    } else if dx > DEAD_ZONE {
        input.move_right = true;
    }
    input.jump = me.y - target.y > JUMP_THRESHOLD;

    // Tap fire on alternate ticks so every press becomes a new bubble
    if occupied_bubble.is_none() && fruit.is_none() {
        input.fire = state.time_ticks % 2 == 0;
    }
    input
}

fn nearest(from: Vec2, points: impl Iterator<Item = Vec2>) -> Option<Vec2> {
    points.min_by(|a, b| {
        a.distance_squared(from)
            .partial_cmp(&b.distance_squared(from))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}
