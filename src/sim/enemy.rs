//! Enemy behavior: roaming, riding inside bubbles, and being popped

use glam::Vec2;
use rand::Rng;

use super::collision::{distance, intersects};
use super::motion;
use super::state::{EnemyState, FruitKind, GamePhase, GameEvent, GameState};
use crate::consts::*;

/// Regular enemy colors, one per level (cycling)
pub const ENEMY_COLORS: [&str; 5] = ["#ff6666", "#ff66ff", "#66ffff", "#ffff66", "#ff9966"];
/// Color marking an enemy that carries an extra life
pub const LIFE_ENEMY_COLOR: &str = "#ff69b4";

/// Number of enemies in a level's batch
pub fn batch_size(level: u32) -> usize {
    (2 + level as usize).min(MAX_ENEMIES)
}

/// Walking speed for a level, before direction
pub fn walk_speed(level: u32, scale: f32) -> f32 {
    (ENEMY_BASE_SPEED + level.saturating_sub(1) as f32 * ENEMY_SPEED_PER_LEVEL) * scale
}

/// Replace the enemy set with a fresh batch for `level`
pub fn spawn_batch(state: &mut GameState, level: u32) {
    state.enemies.clear();
    let count = batch_size(level);
    let speed = walk_speed(level, state.enemy_speed_scale);
    let level_color = ENEMY_COLORS[(level.saturating_sub(1) as usize) % ENEMY_COLORS.len()];

    for _ in 0..count {
        let x = state.rng.random_range(50.0..SCREEN_WIDTH - 50.0);
        let y = state.rng.random_range(30.0..180.0);
        let direction = if state.rng.random_bool(0.5) { -1.0 } else { 1.0 };
        let grants_life = state.rng.random_bool(LIFE_ENEMY_CHANCE);
        let color = if grants_life { LIFE_ENEMY_COLOR } else { level_color };
        state.spawn_enemy(Vec2::new(x, y), Vec2::new(speed * direction, 0.0), color, grants_life);
    }
    log::info!("Level {} spawned {} enemies", level, count);
}

/// Advance every enemy by one tick.
///
/// Walks the list front to back; popped enemies are removed in place
/// without advancing the index. Returns true if the player lost their last
/// life, in which case the rest of the tick must not run.
pub fn update_enemies(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    let mut i = 0;
    while i < state.enemies.len() {
        match state.enemies[i].state {
            EnemyState::Free => {
                let enemy = &mut state.enemies[i];
                motion::fall_step(&mut enemy.body, &state.platforms);
                motion::bounce_horizontal(&mut enemy.body);

                if intersects(&state.player.body.rect(), &enemy.body.rect()) && hit_player(state, events) {
                    return true;
                }
                i += 1;
            }
            EnemyState::Captured { bubble_id } => {
                let Some(b) = state.bubble_index(bubble_id) else {
                    // Bubble is gone; the link can't stand
                    state.enemies[i].release();
                    i += 1;
                    continue;
                };
                let bubble_pos = state.bubbles[b].pos;
                let enemy = &mut state.enemies[i];
                enemy.body.pos = bubble_pos - enemy.body.size / 2.0;

                let reach = BUBBLE_RADIUS + POP_TOLERANCE;
                if distance(bubble_pos, state.player.body.center()) < reach {
                    state.bubbles.remove(b);
                    let enemy = state.enemies.remove(i);
                    pop(state, enemy.id, enemy.grants_life, bubble_pos, events);
                } else {
                    i += 1;
                }
            }
        }
    }
    false
}

/// Take a life from the player. Returns true if that was the last one.
fn hit_player(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    let session = &mut state.session;
    session.lives = session.lives.saturating_sub(1);
    events.push(GameEvent::PlayerHit {
        lives_left: session.lives,
    });

    if session.lives == 0 {
        session.phase = GamePhase::GameOver;
        log::info!("Game over: score {} on level {}", session.score, session.level);
        events.push(GameEvent::GameOver {
            score: session.score,
        });
        true
    } else {
        state.player.respawn();
        false
    }
}

/// Reward the player for popping a captured enemy
fn pop(state: &mut GameState, enemy_id: u32, grants_life: bool, pos: Vec2, events: &mut Vec<GameEvent>) {
    if grants_life {
        state.session.lives += 1;
        state.session.score += LIFE_BONUS_SCORE;
    } else {
        state.spawn_fruit(pos, FruitKind::for_level(state.session.level));
    }
    log::debug!("Enemy {} popped (extra life: {})", enemy_id, grants_life);
    events.push(GameEvent::EnemyPopped {
        enemy_id,
        grants_life,
        pos,
    });
}
