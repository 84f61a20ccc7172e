//! Per-frame simulation tick
//!
//! One call advances the world by one display frame. Subsystems run in a
//! fixed order: player, bubbles, enemies, fruit, progression.

use super::motion;
use super::state::{GameEvent, GameState, Player};
use super::{bubble, enemy, fruit, progression};
use crate::consts::*;

/// Held-button state for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub fire: bool,
}

/// Advance the game state by one tick and report what happened.
///
/// Does nothing outside the `Playing` phase. If the player loses their last
/// life, the tick stops right there and the state stays frozen.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.session.phase.is_live() {
        return events;
    }
    state.time_ticks += 1;

    steer_player(&mut state.player, input);
    bubble::handle_fire(state, input.fire);
    move_player(state, input);

    bubble::update_bubbles(state, &mut events);
    if enemy::update_enemies(state, &mut events) {
        return events;
    }
    fruit::update_fruits(state, &mut events);
    progression::check_level_clear(state, &mut events);

    debug_assert!(state.links_consistent(), "bubble/enemy links out of sync");
    events
}

/// Horizontal control; left wins when both are held
fn steer_player(player: &mut Player, input: &TickInput) {
    if input.move_left {
        player.body.vel.x = -PLAYER_SPEED;
        player.facing = -1.0;
    } else if input.move_right {
        player.body.vel.x = PLAYER_SPEED;
        player.facing = 1.0;
    } else {
        player.body.vel.x = 0.0;
    }
}

fn move_player(state: &mut GameState, input: &TickInput) {
    let body = &mut state.player.body;
    if input.jump && body.grounded {
        body.vel.y = JUMP_VELOCITY;
        body.grounded = false;
    }
    motion::fall_step(body, &state.platforms);
    motion::clamp_horizontal(body);
}
