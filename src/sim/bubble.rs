//! Bubble projectiles: firing, flight, capture and expiry

use glam::Vec2;

use super::collision::distance;
use super::state::{EnemyState, GameEvent, GameState};
use crate::consts::*;

/// Fire a bubble if the button is held and the latch is armed.
///
/// The latch re-arms only once the button is released, so holding fire
/// produces a single bubble. Returns the new bubble's ID.
pub fn handle_fire(state: &mut GameState, fire_held: bool) -> Option<u32> {
    let fired = if fire_held && state.fire_ready {
        let origin = state.player.body.center();
        let vel = Vec2::new(BUBBLE_SPEED * state.player.facing, 0.0);
        state.fire_ready = false;
        Some(state.spawn_bubble(origin, vel))
    } else {
        None
    };

    if !fire_held {
        state.fire_ready = true;
    }
    fired
}

/// Advance every bubble by one tick.
///
/// Iterates newest-first so bubbles can be removed in place.
pub fn update_bubbles(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for i in (0..state.bubbles.len()).rev() {
        let bubble = &mut state.bubbles[i];
        bubble.age += 1;

        if bubble.is_floating() {
            bubble.vel.x *= BUBBLE_DRAG;
            bubble.pos.x += bubble.vel.x;
            bubble.pos.y -= BUBBLE_RISE_SPEED;
        } else {
            bubble.pos.x += bubble.vel.x;
        }

        // Side walls
        if bubble.pos.x < BUBBLE_RADIUS {
            bubble.pos.x = BUBBLE_RADIUS;
            bubble.vel.x = -bubble.vel.x;
        }
        if bubble.pos.x > SCREEN_WIDTH - BUBBLE_RADIUS {
            bubble.pos.x = SCREEN_WIDTH - BUBBLE_RADIUS;
            bubble.vel.x = -bubble.vel.x;
        }

        // First free enemy in list order wins
        if !bubble.holds_enemy() {
            let reach = BUBBLE_RADIUS + CAPTURE_TOLERANCE;
            let caught = state
                .enemies
                .iter_mut()
                .filter(|e| e.is_free())
                .find(|e| distance(bubble.pos, e.body.center()) < reach);
            if let Some(enemy) = caught {
                enemy.state = EnemyState::Captured {
                    bubble_id: bubble.id,
                };
                bubble.captured = Some(enemy.id);
                log::debug!("Bubble {} captured enemy {}", bubble.id, enemy.id);
                events.push(GameEvent::EnemyCaptured {
                    enemy_id: enemy.id,
                    bubble_id: bubble.id,
                });
            }
        }

        let expired = bubble.age > bubble.lifetime() || bubble.pos.y < -BUBBLE_RADIUS;
        if expired {
            let bubble = state.bubbles.remove(i);
            if let Some(enemy_id) = bubble.captured
                && let Some(enemy) = state.enemies.iter_mut().find(|e| e.id == enemy_id)
            {
                enemy.release();
                log::debug!("Enemy {} escaped from bubble {}", enemy_id, bubble.id);
                events.push(GameEvent::EnemyEscaped { enemy_id });
            }
        }
    }
}
