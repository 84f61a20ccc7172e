//! Fruit rewards: falling, pickup and expiry

use super::collision::intersects;
use super::motion;
use super::state::{GameEvent, GameState};
use crate::consts::FRUIT_LIFETIME;

/// Advance every fruit by one tick, newest first so removal is in place
pub fn update_fruits(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player = state.player.body.rect();

    for i in (0..state.fruits.len()).rev() {
        let fruit = &mut state.fruits[i];
        fruit.age += 1;
        motion::fall_step(&mut fruit.body, &state.platforms);

        if intersects(&player, &fruit.body.rect()) {
            let fruit = state.fruits.remove(i);
            let points = fruit.kind.points();
            state.session.score += points;
            events.push(GameEvent::FruitCollected {
                kind: fruit.kind,
                points,
            });
        } else if fruit.age > FRUIT_LIFETIME {
            state.fruits.remove(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{FruitKind, GamePhase, Platform};
    use glam::Vec2;

    fn state_with_floor() -> GameState {
        let mut state = GameState::new(8);
        state.session.phase = GamePhase::Playing;
        state.enemies.clear();
        state.platforms = vec![Platform::new(0.0, 332.0, 512.0)];
        state
    }

    #[test]
    fn test_fruit_falls_and_lands() {
        let mut state = state_with_floor();
        state.spawn_fruit(Vec2::new(400.0, 200.0), FruitKind::Apple);
        let mut events = Vec::new();
        for _ in 0..120 {
            update_fruits(&mut state, &mut events);
        }
        let fruit = &state.fruits[0];
        assert_eq!(fruit.body.feet(), 332.0);
        assert!(fruit.body.grounded);
        assert_eq!(fruit.body.pos.x, 388.0);
    }

    #[test]
    fn test_pickup_adds_points() {
        let mut state = state_with_floor();
        let center = state.player.body.center();
        state.spawn_fruit(center, FruitKind::Watermelon);
        let mut events = Vec::new();

        update_fruits(&mut state, &mut events);

        assert!(state.fruits.is_empty());
        assert_eq!(state.session.score, 500);
        assert_eq!(
            events,
            vec![GameEvent::FruitCollected {
                kind: FruitKind::Watermelon,
                points: 500
            }]
        );
    }

    #[test]
    fn test_stale_fruit_vanishes_without_points() {
        let mut state = state_with_floor();
        state.spawn_fruit(Vec2::new(400.0, 100.0), FruitKind::Diamond);
        state.fruits[0].age = FRUIT_LIFETIME;
        let mut events = Vec::new();

        update_fruits(&mut state, &mut events);

        assert!(state.fruits.is_empty());
        assert_eq!(state.session.score, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_fruit_at_lifetime_survives_one_more_tick() {
        let mut state = state_with_floor();
        state.spawn_fruit(Vec2::new(400.0, 100.0), FruitKind::Apple);
        state.fruits[0].age = FRUIT_LIFETIME - 1;
        let mut events = Vec::new();

        update_fruits(&mut state, &mut events);
        assert_eq!(state.fruits.len(), 1);
        assert!(state.fruits[0].is_blinking());
    }
}
